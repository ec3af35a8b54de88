use crate::api;
use crate::api::models::{Contact, ContactDraft};
use crate::filter;
use crate::pages::Notify;

pub struct ContactsPage<N: Notify> {
    base_url: String,
    notifier: N,
    all: Vec<Contact>,
    visible: Vec<Contact>,
    search_term: String,
    loading: bool,
}

impl<N: Notify> ContactsPage<N> {
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

    pub async fn refresh(&mut self) {
        self.loading = true;
        self.all = api::contacts::list(&self.base_url, None).await;
        self.apply_filter();
        self.loading = false;
    }

    fn apply_filter(&mut self) {
        self.visible = filter::contacts(&self.all, &self.search_term);
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.apply_filter();
    }

    pub async fn create(&mut self, data: &ContactDraft) {
        match api::contacts::create(&self.base_url, data).await {
            Ok(contact) => {
                self.all.push(contact);
                self.apply_filter();
                self.notifier.success("Contacto creado exitosamente");
            }
            Err(err) => {
                log::error!("error creating contact: {}", err);
                self.notifier
                    .error("Error al crear el contacto. Por favor, intenta de nuevo.");
            }
        }
    }

    pub async fn update(&mut self, data: &ContactDraft) {
        let Some(id) = data.id else {
            log::warn!("update called without an id");
            return;
        };
        match api::contacts::update(&self.base_url, id, data).await {
            Ok(updated) => {
                for contact in &mut self.all {
                    if contact.id == updated.id {
                        *contact = updated.clone();
                    }
                }
                self.apply_filter();
                self.notifier.success("Contacto actualizado exitosamente");
            }
            Err(err) => {
                log::error!("error updating contact: {}", err);
                self.notifier
                    .error("Error al actualizar el contacto. Por favor, intenta de nuevo.");
            }
        }
    }

    pub async fn delete(&mut self, id: i64) {
        match api::contacts::delete(&self.base_url, id).await {
            Ok(_) => {
                self.all.retain(|contact| contact.id != id);
                self.apply_filter();
                self.notifier.success("Contacto eliminado exitosamente");
            }
            Err(err) => {
                log::error!("error deleting contact: {}", err);
                self.notifier
                    .error("Error al eliminar el contacto. Por favor, intenta de nuevo.");
            }
        }
    }

    pub fn visible(&self) -> &[Contact] {
        &self.visible
    }

    pub fn all(&self) -> &[Contact] {
        &self.all
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
