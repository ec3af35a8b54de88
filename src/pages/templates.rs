use crate::api;
use crate::api::models::{Template, TemplateDraft, TemplateType};
use crate::pages::Notify;

/// Unlike the contact and company pages, search and type filtering go to
/// the server as query parameters, so every change re-fetches.
pub struct TemplatesPage<N: Notify> {
    base_url: String,
    notifier: N,
    templates: Vec<Template>,
    search_term: String,
    type_filter: Option<TemplateType>,
    loading: bool,
}

impl<N: Notify> TemplatesPage<N> {
    pub fn new(base_url: impl Into<String>, notifier: N) -> Self {
        Self {
            base_url: base_url.into(),
            notifier,
            templates: Vec::new(),
            search_term: String::new(),
            type_filter: None,
            loading: false,
        }
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        let search = if self.search_term.is_empty() {
            None
        } else {
            Some(self.search_term.as_str())
        };
        self.templates = api::templates::list(&self.base_url, search, self.type_filter).await;
        self.loading = false;
    }

    pub async fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.refresh().await;
    }

    pub async fn set_type_filter(&mut self, type_filter: Option<TemplateType>) {
        self.type_filter = type_filter;
        self.refresh().await;
    }

    pub async fn create(&mut self, data: &TemplateDraft) {
        match api::templates::create(&self.base_url, data).await {
            Ok(template) => {
                self.templates.push(template);
                self.notifier.success("Plantilla creada exitosamente");
            }
            Err(err) => {
                log::error!("error creating template: {}", err);
                self.notifier
                    .error("Error al crear la plantilla. Por favor, intenta de nuevo.");
            }
        }
    }

    pub async fn update(&mut self, data: &TemplateDraft) {
        if data.id.is_empty() {
            log::warn!("update called without an id");
            return;
        }
        match api::templates::update(&self.base_url, &data.id, data).await {
            Ok(updated) => {
                for template in &mut self.templates {
                    if template.id == updated.id {
                        *template = updated.clone();
                    }
                }
                self.notifier.success("Plantilla actualizada exitosamente");
            }
            Err(err) => {
                log::error!("error updating template: {}", err);
                self.notifier
                    .error("Error al actualizar la plantilla. Por favor, intenta de nuevo.");
            }
        }
    }

    pub async fn delete(&mut self, id: &str) {
        match api::templates::delete(&self.base_url, id).await {
            Ok(_) => {
                self.templates.retain(|template| template.id != id);
                self.notifier.success("Plantilla eliminada exitosamente");
            }
            Err(err) => {
                log::error!("error deleting template: {}", err);
                self.notifier
                    .error("Error al eliminar la plantilla. Por favor, intenta de nuevo.");
            }
        }
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn type_filter(&self) -> Option<TemplateType> {
        self.type_filter
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
