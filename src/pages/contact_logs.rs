use crate::api;
use crate::api::models::{Contact, ContactLog, ContactLogDraft};
use crate::pages::Notify;

/// Outreach history. Also keeps its own copy of the contact list so log
/// rows can show a name instead of a bare id; that copy can go stale
/// relative to the contacts page until the next refresh.
pub struct ContactLogsPage<N: Notify> {
    base_url: String,
    notifier: N,
    logs: Vec<ContactLog>,
    contacts: Vec<Contact>,
    contact_filter: Option<i64>,
    loading: bool,
}

impl<N: Notify> ContactLogsPage<N> {
    pub fn new(base_url: impl Into<String>, notifier: N) -> Self {
        Self {
            base_url: base_url.into(),
            notifier,
            logs: Vec::new(),
            contacts: Vec::new(),
            contact_filter: None,
            loading: false,
        }
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        self.logs = api::contact_logs::list(&self.base_url).await;
        self.contacts = api::contacts::list(&self.base_url, None).await;
        self.loading = false;
    }

    /// Narrow the view to one contact, by exact id. None shows everything.
    pub fn set_contact_filter(&mut self, contact_id: Option<i64>) {
        self.contact_filter = contact_id;
    }

    pub fn visible(&self) -> Vec<&ContactLog> {
        match self.contact_filter {
            Some(id) => self.logs.iter().filter(|log| log.contact_id == id).collect(),
            None => self.logs.iter().collect(),
        }
    }

    pub fn contact_name(&self, contact_id: i64) -> Option<&str> {
        self.contacts
            .iter()
            .find(|contact| contact.id == contact_id)
            .map(|contact| contact.name.as_str())
    }

    pub async fn create(&mut self, data: &ContactLogDraft) {
        match api::contact_logs::create(&self.base_url, data).await {
            Ok(log_entry) => {
                self.logs.push(log_entry);
                self.notifier.success("Contacto registrado exitosamente");
            }
            Err(err) => {
                log::error!("error creating contact log: {}", err);
                self.notifier.error("Error al registrar el contacto");
            }
        }
    }

    pub async fn delete(&mut self, id: i64) {
        match api::contact_logs::delete(&self.base_url, id).await {
            Ok(_) => {
                self.logs.retain(|log| log.id != id);
                self.notifier.success("Registro eliminado exitosamente");
            }
            Err(err) => {
                log::error!("error deleting contact log: {}", err);
                self.notifier
                    .error("Error al eliminar el registro. Por favor, intenta de nuevo.");
            }
        }
    }

    pub fn logs(&self) -> &[ContactLog] {
        &self.logs
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
