use serde_json::Value;

use crate::api::models::{ContactLog, ContactLogDraft, DeleteResponse};
use crate::api::{ApiError, HTTP, endpoint, expect_success};

const PATH: &str = "/api/contactlogs";

/// Fetch the whole outreach history. Failures are logged and collapse to
/// an empty list.
pub async fn list(base_url: &str) -> Vec<ContactLog> {
    match try_list(&endpoint(base_url, PATH)).await {
        Ok(logs) => logs,
        Err(err) => {
            log::error!("failed to fetch contact logs: {}", err);
            Vec::new()
        }
    }
}

/// Fetch the outreach history of a single contact via
/// `/api/contacts/{id}/logs`. Same swallow-to-empty contract as `list`.
pub async fn list_by_contact(base_url: &str, contact_id: i64) -> Vec<ContactLog> {
    let url = format!("{}/{}/logs", endpoint(base_url, "/api/contacts"), contact_id);
    match try_list(&url).await {
        Ok(logs) => logs,
        Err(err) => {
            log::error!(
                "failed to fetch logs for contact {}: {}",
                contact_id,
                err
            );
            Vec::new()
        }
    }
}

async fn try_list(url: &str) -> Result<Vec<ContactLog>, ApiError> {
    let resp = expect_success(HTTP.get(url).send().await?)?;
    let json: Value = resp.json().await?;
    // Bare array, no envelope.
    match json {
        Value::Array(_) => Ok(serde_json::from_value(json)?),
        _ => Ok(Vec::new()),
    }
}

pub async fn get_by_id(base_url: &str, id: i64) -> Result<ContactLog, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.get(&url).send().await?)?;
    Ok(resp.json().await?)
}

pub async fn create(base_url: &str, data: &ContactLogDraft) -> Result<ContactLog, ApiError> {
    let url = endpoint(base_url, PATH);
    let resp = expect_success(HTTP.post(&url).json(data).send().await?)?;
    Ok(resp.json().await?)
}

pub async fn update(base_url: &str, id: i64, data: &ContactLogDraft) -> Result<ContactLog, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.put(&url).json(data).send().await?)?;
    Ok(resp.json().await?)
}

pub async fn delete(base_url: &str, id: i64) -> Result<DeleteResponse, ApiError> {
    let url = format!("{}/{}", endpoint(base_url, PATH), id);
    let resp = expect_success(HTTP.delete(&url).send().await?)?;
    Ok(resp.json().await?)
}
