use serde_json::Value;
use url::Url;

use crate::api::models::{Contact, ContactDraft, DeleteResponse};
use crate::api::{ApiError, HTTP, endpoint, envelope, expect_success};

const PATH: &str = "/api/contacts";

/// Fetch every contact. Failures are logged and collapse to an empty
/// list, same as the other list endpoints.
pub async fn list(base_url: &str, search: Option<&str>) -> Vec<Contact> {
    match try_list(base_url, search).await {
        Ok(contacts) => contacts,
        Err(err) => {
            log::error!("failed to fetch contacts: {}", err);
            Vec::new()
        }
    }
}

async fn try_list(base_url: &str, search: Option<&str>) -> Result<Vec<Contact>, ApiError> {
    let mut url = Url::parse(&endpoint(base_url, PATH))?;
    if let Some(q) = search.filter(|q| !q.is_empty()) {
        url.query_pairs_mut().append_pair("q", q);
    }
    let resp = expect_success(HTTP.get(url.as_str()).send().await?)?;
    let json: Value = resp.json().await?;
    // "contacs" is what the server actually sends, misspelling included.
    Ok(envelope::list(json, "contacs")?)
}

pub async fn get_by_id(base_url: &str, id: i64) -> Result<Contact, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.get(&url).send().await?)?;
    let json: Value = resp.json().await?;
    Ok(envelope::record(json, "contact")?)
}

/// Create a contact. The form carries `companyId` as the raw select-box
/// string; the server wants an integer, so it gets coerced here.
pub async fn create(base_url: &str, data: &ContactDraft) -> Result<Contact, ApiError> {
    let mut body = serde_json::to_value(data)?;
    if let Some(company_id) = body.get_mut("companyId") {
        if let Some(n) = company_id.as_str().and_then(|s| s.parse::<i64>().ok()) {
            *company_id = n.into();
        }
    }
    let url = endpoint(base_url, PATH);
    let resp = expect_success(HTTP.post(&url).json(&body).send().await?)?;
    let json: Value = resp.json().await?;
    Ok(envelope::record(json, "contact")?)
}

pub async fn update(base_url: &str, id: i64, data: &ContactDraft) -> Result<Contact, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.put(&url).json(data).send().await?)?;
    let json: Value = resp.json().await?;
    Ok(envelope::record(json, "contact")?)
}

pub async fn delete(base_url: &str, id: i64) -> Result<DeleteResponse, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.delete(&url).send().await?)?;
    Ok(resp.json().await?)
}
