use chrono::{Local, NaiveDate};

use crate::api::models::{Contact, ContactLogDraft, Template};
use crate::validate::{self, FieldErrors};

#[derive(Debug, Clone)]
pub enum Field {
    /// Template type value from the select box.
    TemplateUsed(String),
    Notes(String),
    Date(NaiveDate),
}

/// Form for registering an outreach event against a contact. Picking a
/// template type copies that template's content into the notes as a
/// starting point; whatever the user types afterwards stays put.
#[derive(Debug)]
pub struct ContactLogForm {
    contact_id: i64,
    template_used: String,
    notes: String,
    date: NaiveDate,
    templates: Vec<Template>,
    errors: FieldErrors,
}

impl ContactLogForm {
    pub fn new(contact: &Contact, templates: Vec<Template>) -> Self {
        Self {
            contact_id: contact.id,
            template_used: String::new(),
            notes: String::new(),
            date: Local::now().date_naive(),
            templates,
            errors: FieldErrors::new(),
        }
    }

    /// Distinct template types, in the order the templates arrived.
    pub fn template_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for template in &self.templates {
            let t = template.template_type.as_str();
            if !types.contains(&t) {
                types.push(t);
            }
        }
        types
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn apply(&mut self, field: Field) {
        match field {
            Field::TemplateUsed(value) => {
                // Pre-fill the notes from the first template of that type,
                // if there is one. Unknown values just set the field.
                if let Some(template) = self
                    .templates
                    .iter()
                    .find(|t| t.template_type.as_str() == value)
                {
                    self.notes = template.content.clone();
                }
                self.template_used = value;
                self.errors.remove("templateUsed");
            }
            Field::Notes(value) => self.notes = value,
            Field::Date(value) => self.date = value,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit(&mut self) -> Option<ContactLogDraft> {
        self.errors = validate::contact_log(&self.template_used);
        if !self.errors.is_empty() {
            return None;
        }
        Some(ContactLogDraft {
            contact_id: self.contact_id,
            template_used: self.template_used.clone(),
            notes: self.notes.clone(),
            date: self.date,
        })
    }
}
