use crate::api::models::{Template, TemplateDraft, TemplateLabel, TemplateType};
use crate::validate::{self, FieldErrors};

#[derive(Debug, Clone)]
pub enum Field {
    Type(TemplateType),
    Content(String),
    Author(String),
    /// The label being typed, before it is added to the list.
    PendingLabel(String),
}

#[derive(Debug, Default)]
pub struct TemplateForm {
    editing: Option<String>,
    template_type: TemplateType,
    content: String,
    author: String,
    labels: Vec<TemplateLabel>,
    pending_label: String,
    errors: FieldErrors,
}

impl TemplateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(template: &Template) -> Self {
        Self {
            editing: Some(template.id.clone()),
            template_type: template.template_type,
            content: template.content.clone(),
            author: template.author.clone(),
            labels: template.labels.clone(),
            pending_label: String::new(),
            errors: FieldErrors::new(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn apply(&mut self, field: Field) {
        match field {
            Field::Type(value) => self.template_type = value,
            Field::Content(value) => {
                self.content = value;
                self.errors.remove("content");
            }
            Field::Author(value) => {
                self.author = value;
                self.errors.remove("author");
            }
            Field::PendingLabel(value) => self.pending_label = value,
        }
    }

    /// Move the pending label into the list; blank labels are dropped.
    pub fn add_label(&mut self) {
        let label = self.pending_label.trim();
        if !label.is_empty() {
            self.labels.push(TemplateLabel {
                label: label.to_string(),
            });
            self.pending_label.clear();
        }
    }

    pub fn remove_label(&mut self, index: usize) {
        if index < self.labels.len() {
            self.labels.remove(index);
        }
    }

    pub fn labels(&self) -> &[TemplateLabel] {
        &self.labels
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit(&mut self) -> Option<TemplateDraft> {
        self.errors = validate::template(&self.content, &self.author);
        if !self.errors.is_empty() {
            return None;
        }
        let draft = TemplateDraft {
            id: self.editing.clone().unwrap_or_default(),
            template_type: self.template_type,
            content: self.content.clone(),
            labels: self.labels.clone(),
            author: self.author.clone(),
        };
        if self.editing.is_none() {
            self.template_type = TemplateType::Welcome;
            self.content.clear();
            self.author.clear();
            self.labels.clear();
            self.pending_label.clear();
        }
        Some(draft)
    }
}
