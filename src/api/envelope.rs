//! The server is inconsistent about response shapes: company lists come
//! wrapped under `"companies"`, contact lists under `"contacs"` (sic, the
//! server really spells it that way), templates and contact logs as bare
//! arrays. Mutations on companies and contacts wrap the record under a
//! singular key. All of that is normalized here so the resource modules
//! only ever see plain records.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Pull a record list out of `json`, looking under `key` first and
/// accepting a bare array as a fallback. Anything else is an empty list.
pub fn list<T: DeserializeOwned>(json: Value, key: &str) -> Result<Vec<T>, serde_json::Error> {
    let items = match json {
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => Value::Array(items),
            _ => return Ok(Vec::new()),
        },
        Value::Array(items) => Value::Array(items),
        _ => return Ok(Vec::new()),
    };
    serde_json::from_value(items)
}

/// Pull a single record out of `json`, unwrapping the singular `key`
/// envelope when present and falling back to the body itself.
pub fn record<T: DeserializeOwned>(json: Value, key: &str) -> Result<T, serde_json::Error> {
    match json {
        Value::Object(mut map) if map.contains_key(key) => {
            let inner = map.remove(key).unwrap_or(Value::Null);
            serde_json::from_value(inner)
        }
        other => serde_json::from_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Company, Contact};
    use serde_json::json;

    #[test]
    fn list_unwraps_named_key() {
        let body = json!({"companies": [{"id": 1, "name": "Acme", "ruc": "20123456789"}]});
        let companies: Vec<Company> = list(body, "companies").unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "Acme");
    }

    #[test]
    fn list_accepts_misspelled_contacs_key() {
        let body = json!({"contacs": [{"id": 2, "name": "Ana", "whatsapp": "987654321"}]});
        let contacts: Vec<Contact> = list(body, "contacs").unwrap();
        assert_eq!(contacts[0].name, "Ana");
    }

    #[test]
    fn list_falls_back_to_bare_array() {
        let body = json!([{"id": 1, "name": "Acme", "ruc": "20123456789"}]);
        let companies: Vec<Company> = list(body, "companies").unwrap();
        assert_eq!(companies.len(), 1);
    }

    #[test]
    fn list_treats_other_shapes_as_empty() {
        let companies: Vec<Company> = list(json!({"message": "nope"}), "companies").unwrap();
        assert!(companies.is_empty());
        let companies: Vec<Company> = list(json!(null), "companies").unwrap();
        assert!(companies.is_empty());
    }

    #[test]
    fn record_unwraps_singular_envelope() {
        let body = json!({"company": {"id": 7, "name": "Acme", "ruc": "20123456789"}});
        let company: Company = record(body, "company").unwrap();
        assert_eq!(company.id, 7);
    }

    #[test]
    fn record_accepts_bare_object() {
        let body = json!({"id": 7, "name": "Acme", "ruc": "20123456789"});
        let company: Company = record(body, "company").unwrap();
        assert_eq!(company.id, 7);
    }
}
