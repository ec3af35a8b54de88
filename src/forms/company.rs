use crate::api::models::{Company, CompanyDraft};
use crate::validate::{self, FieldErrors};

#[derive(Debug, Clone)]
pub enum Field {
    Name(String),
    Ruc(String),
}

#[derive(Debug, Default)]
pub struct CompanyForm {
    editing: Option<i64>,
    name: String,
    ruc: String,
    errors: FieldErrors,
}

impl CompanyForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the form from an existing record for editing.
    pub fn edit(company: &Company) -> Self {
        Self {
            editing: Some(company.id),
            name: company.name.clone(),
            ruc: company.ruc.clone(),
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
            Field::Ruc(value) => {
                self.ruc = value;
                self.errors.remove("ruc");
            }
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validate and produce the draft record, or keep the errors and
    /// return None. A create-mode form resets to blank after a valid
    /// submit; an edit-mode form keeps its values.
    pub fn submit(&mut self) -> Option<CompanyDraft> {
        self.errors = validate::company(&self.name, &self.ruc);
        if !self.errors.is_empty() {
            return None;
        }
        let draft = CompanyDraft {
            id: self.editing,
            name: self.name.clone(),
            ruc: self.ruc.clone(),
        };
        if self.editing.is_none() {
            self.name.clear();
            self.ruc.clear();
        }
        Some(draft)
    }
}
