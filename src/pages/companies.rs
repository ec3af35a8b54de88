use crate::api;
use crate::api::models::{Company, CompanyDraft};
use crate::filter;
use crate::pages::Notify;

pub struct CompaniesPage<N: Notify> {
    base_url: String,
    notifier: N,
    all: Vec<Company>,
    visible: Vec<Company>,
    search_term: String,
    loading: bool,
}

impl<N: Notify> CompaniesPage<N> {
    pub fn new(base_url: impl Into<String>, notifier: N) -> Self {
        Self {
            base_url: base_url.into(),
            notifier,
            all: Vec::new(),
            visible: Vec::new(),
            search_term: String::new(),
            loading: false,
        }
    }

    /// Re-fetch the full list and re-apply the current search term.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.all = api::companies::list(&self.base_url, None).await;
        self.apply_filter();
        self.loading = false;
    }

    fn apply_filter(&mut self) {
        self.visible = filter::companies(&self.all, &self.search_term);
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.apply_filter();
    }

    pub async fn create(&mut self, data: &CompanyDraft) {
        match api::companies::create(&self.base_url, data).await {
            Ok(company) => {
                // Optimistic append: trust the server-returned record
                // instead of re-fetching.
                self.all.push(company);
                self.apply_filter();
                self.notifier.success("Empresa creada exitosamente");
            }
            Err(err) => {
                log::error!("error creating company: {}", err);
                self.notifier
                    .error("Error al crear la empresa. Por favor, intenta de nuevo.");
            }
        }
    }

    pub async fn update(&mut self, data: &CompanyDraft) {
        let Some(id) = data.id else {
            log::warn!("update called without an id");
            return;
        };
        match api::companies::update(&self.base_url, id, data).await {
            Ok(updated) => {
                for company in &mut self.all {
                    if company.id == updated.id {
                        *company = updated.clone();
                    }
                }
                self.apply_filter();
                self.notifier.success("Empresa actualizada exitosamente");
            }
            Err(err) => {
                log::error!("error updating company: {}", err);
                self.notifier
                    .error("Error al actualizar la empresa. Por favor, intenta de nuevo.");
            }
        }
    }

    pub async fn delete(&mut self, id: i64) {
        match api::companies::delete(&self.base_url, id).await {
            Ok(resp) => {
                // The server can refuse with a 2xx that carries an error
                // (e.g. company still has contacts).
                if let Some(message) = resp.error {
                    self.notifier.error(&message);
                    return;
                }
                self.all.retain(|company| company.id != id);
                self.apply_filter();
                self.notifier.success("Empresa eliminada exitosamente");
            }
            Err(err) => {
                log::error!("error deleting company: {}", err);
                self.notifier
                    .error("Error al eliminar la empresa. Por favor, intenta de nuevo.");
            }
        }
    }

    pub fn visible(&self) -> &[Company] {
        &self.visible
    }

    pub fn all(&self) -> &[Company] {
        &self.all
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
