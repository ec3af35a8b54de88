use serde_json::Value;
use url::Url;

use crate::api::models::{DeleteResponse, Template, TemplateDraft, TemplateType};
use crate::api::{ApiError, HTTP, endpoint, expect_success};

const PATH: &str = "/api/templates";

/// Fetch templates. Unlike contacts and companies, search and type
/// filtering happen server-side through query parameters. Failures are
/// logged and collapse to an empty list.
pub async fn list(
    base_url: &str,
    search: Option<&str>,
    type_filter: Option<TemplateType>,
) -> Vec<Template> {
    match try_list(base_url, search, type_filter).await {
        Ok(templates) => templates,
        Err(err) => {
            log::error!("failed to fetch templates: {}", err);
            Vec::new()
        }
    }
}

async fn try_list(
    base_url: &str,
    search: Option<&str>,
    type_filter: Option<TemplateType>,
) -> Result<Vec<Template>, ApiError> {
    let mut url = Url::parse(&endpoint(base_url, PATH))?;
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(q) = search.filter(|q| !q.is_empty()) {
            pairs.append_pair("q", q);
        }
        if let Some(t) = type_filter {
            pairs.append_pair("type", t.as_str());
        }
    }
    // query_pairs_mut leaves a dangling "?" when nothing was appended
    if url.query() == Some("") {
        url.set_query(None);
    }
    let resp = expect_success(HTTP.get(url.as_str()).send().await?)?;
    let json: Value = resp.json().await?;
    // Templates come back as a bare array, no envelope.
    match json {
        Value::Array(_) => Ok(serde_json::from_value(json)?),
        _ => Ok(Vec::new()),
    }
}

pub async fn get_by_id(base_url: &str, id: &str) -> Result<Template, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.get(&url).send().await?)?;
    Ok(resp.json().await?)
}

pub async fn create(base_url: &str, data: &TemplateDraft) -> Result<Template, ApiError> {
    let url = endpoint(base_url, PATH);
    let resp = expect_success(HTTP.post(&url).json(data).send().await?)?;
    Ok(resp.json().await?)
}

pub async fn update(base_url: &str, id: &str, data: &TemplateDraft) -> Result<Template, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.put(&url).json(data).send().await?)?;
    Ok(resp.json().await?)
}

pub async fn delete(base_url: &str, id: &str) -> Result<DeleteResponse, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.delete(&url).send().await?)?;
    Ok(resp.json().await?)
}
