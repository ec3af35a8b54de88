//! Client-side validation, run on form submit before anything touches
//! the network. Each function returns a field-name → message map; the
//! submit goes through only when the map is empty. Messages are the
//! user-facing Spanish strings shown next to the fields.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub type FieldErrors = BTreeMap<&'static str, String>;

static RUC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{11}$").expect("ruc pattern"));
static WHATSAPP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("whatsapp pattern"));

pub fn company(name: &str, ruc: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.insert("name", "El nombre es obligatorio".into());
    }
    if ruc.trim().is_empty() {
        errors.insert("ruc", "El RUC es obligatorio".into());
    } else if !RUC_RE.is_match(ruc.trim()) {
        errors.insert("ruc", "Ingrese un RUC válido de 11 dígitos".into());
    }
    errors
}

pub fn contact(name: &str, whatsapp: &str, company_id: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.insert("name", "El nombre es obligatorio".into());
    }
    if whatsapp.trim().is_empty() {
        errors.insert("whatsapp", "El número de WhatsApp es obligatorio".into());
    } else if !WHATSAPP_RE.is_match(whatsapp.trim()) {
        errors.insert("whatsapp", "Ingrese un número de WhatsApp válido".into());
    }
    if company_id.is_empty() {
        errors.insert("companyId", "Debe seleccionar una empresa".into());
    }
    errors
}

pub fn template(content: &str, author: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if content.trim().is_empty() {
        errors.insert("content", "El contenido es obligatorio".into());
    }
    if author.trim().is_empty() {
        errors.insert("author", "El autor es obligatorio".into());
    }
    errors
}

pub fn contact_log(template_used: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if template_used.is_empty() {
        errors.insert(
            "templateUsed",
            "Selecciona un tipo de plantilla".into(),
        );
    }
    errors
}
