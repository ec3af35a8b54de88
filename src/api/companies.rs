use serde_json::Value;
use url::Url;

use crate::api::models::{Company, CompanyDraft, DeleteResponse};
use crate::api::{ApiError, HTTP, endpoint, envelope, expect_success};

const PATH: &str = "/api/companies";

/// Fetch every company. Transport, status and decode failures are logged
/// and collapse to an empty list so callers always have something to
/// render.
pub async fn list(base_url: &str, search: Option<&str>) -> Vec<Company> {
    match try_list(base_url, search).await {
        Ok(companies) => companies,
        Err(err) => {
            log::error!("failed to fetch companies: {}", err);
            Vec::new()
        }
    }
}

async fn try_list(base_url: &str, search: Option<&str>) -> Result<Vec<Company>, ApiError> {
    let mut url = Url::parse(&endpoint(base_url, PATH))?;
    if let Some(q) = search.filter(|q| !q.is_empty()) {
        url.query_pairs_mut().append_pair("q", q);
    }
    let resp = expect_success(HTTP.get(url.as_str()).send().await?)?;
    let json: Value = resp.json().await?;
    Ok(envelope::list(json, "companies")?)
}

pub async fn get_by_id(base_url: &str, id: i64) -> Result<Company, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.get(&url).send().await?)?;
    let json: Value = resp.json().await?;
    Ok(envelope::record(json, "company")?)
}

pub async fn create(base_url: &str, data: &CompanyDraft) -> Result<Company, ApiError> {
    let url = endpoint(base_url, PATH);
    let resp = expect_success(HTTP.post(&url).json(data).send().await?)?;
    let json: Value = resp.json().await?;
    Ok(envelope::record(json, "company")?)
}

pub async fn update(base_url: &str, id: i64, data: &CompanyDraft) -> Result<Company, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.put(&url).json(data).send().await?)?;
    let json: Value = resp.json().await?;
    Ok(envelope::record(json, "company")?)
}

pub async fn delete(base_url: &str, id: i64) -> Result<DeleteResponse, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.delete(&url).send().await?)?;
    Ok(resp.json().await?)
}
