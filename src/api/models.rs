use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    #[default]
    Welcome,
    Notificaciones,
    Recordatorios,
    #[serde(other)]
    Otros,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Welcome => "welcome",
            TemplateType::Notificaciones => "notificaciones",
            TemplateType::Recordatorios => "recordatorios",
            TemplateType::Otros => "otros",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "welcome" => Some(TemplateType::Welcome),
            "notificaciones" => Some(TemplateType::Notificaciones),
            "recordatorios" => Some(TemplateType::Recordatorios),
            "otros" => Some(TemplateType::Otros),
            _ => None,
        }
    }
}

/// Labels travel as `{"label": "..."}` objects, not bare strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLabel {
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub template_type: TemplateType,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub labels: Vec<TemplateLabel>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub ruc: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Server-computed, never sent back.
    #[serde(default, skip_serializing)]
    pub contacts: Vec<ContactSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub whatsapp: String,
    #[serde(default)]
    pub company_id: Option<i64>,
    /// Embedded company summary when the server joins it in.
    #[serde(default, skip_serializing)]
    pub company: Option<CompanySummary>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ruc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLog {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub contact_id: i64,
    pub template_used: String,
    #[serde(default)]
    pub notes: String,
    pub date: NaiveDate,
}

// Form output records. These are what actually goes over the wire on
// create/update; server-derived fields stay out.

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub ruc: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub whatsapp: String,
    /// Select-box value; stays a string until the create call coerces it.
    pub company_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDraft {
    #[serde(rename = "_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub content: String,
    pub labels: Vec<TemplateLabel>,
    pub author: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLogDraft {
    pub contact_id: i64,
    pub template_used: String,
    pub notes: String,
    pub date: NaiveDate,
}

/// Delete endpoints answer with a small confirmation body; a 2xx can
/// still carry an `error` field the caller has to look at.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
