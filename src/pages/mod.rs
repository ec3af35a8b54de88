//! Page controllers: one per resource, each owning its fetched list, the
//! filtered view and the current search term. Every mutation re-applies
//! the filter so the view tracks the latest data, and user-facing
//! messages go through the [`Notify`] seam. Pages never share state;
//! stale cross-references stay stale until a manual refresh.

pub mod companies;
pub mod contact_logs;
pub mod contacts;
pub mod templates;

/// Toast seam. How notifications get rendered is up to the embedder; the
/// default just logs them.
pub trait Notify {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

impl<N: Notify + ?Sized> Notify for &N {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn success(&self, message: &str) {
        log::info!("{}", message);
    }

    fn error(&self, message: &str) {
        log::warn!("{}", message);
    }
}
