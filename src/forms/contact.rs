use crate::api::models::{Contact, ContactDraft};
use crate::validate::{self, FieldErrors};

#[derive(Debug, Clone)]
pub enum Field {
    Name(String),
    Whatsapp(String),
    /// Select-box value: a company id as string, or empty for "none".
    CompanyId(String),
}

#[derive(Debug, Default)]
pub struct ContactForm {
    editing: Option<i64>,
    name: String,
    whatsapp: String,
    company_id: String,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(contact: &Contact) -> Self {
        Self {
            editing: Some(contact.id),
            name: contact.name.clone(),
            whatsapp: contact.whatsapp.clone(),
            company_id: contact
                .company_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn apply(&mut self, field: Field) {
        match field {
            Field::Name(value) => {
                self.name = value;
                self.errors.remove("name");
            }
            Field::Whatsapp(value) => {
                self.whatsapp = value;
                self.errors.remove("whatsapp");
            }
            Field::CompanyId(value) => {
                self.company_id = value;
                self.errors.remove("companyId");
            }
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit(&mut self) -> Option<ContactDraft> {
        self.errors = validate::contact(&self.name, &self.whatsapp, &self.company_id);
        if !self.errors.is_empty() {
            return None;
        }
        let draft = ContactDraft {
            id: self.editing,
            name: self.name.clone(),
            whatsapp: self.whatsapp.clone(),
            company_id: self.company_id.clone(),
        };
        if self.editing.is_none() {
            self.name.clear();
            self.whatsapp.clear();
            self.company_id.clear();
        }
        Some(draft)
    }
}
