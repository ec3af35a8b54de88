//! Page-level scenarios against a mock server: fetch → filter → mutate
//! flows, optimistic list updates and the notifications that come out of
//! them.

use std::sync::Mutex;

use serde_json::json;

use crm_client::api::models::CompanyDraft;
use crm_client::forms::contact::{ContactForm, Field};
use crm_client::pages::Notify;
use crm_client::pages::companies::CompaniesPage;
use crm_client::pages::contacts::ContactsPage;

#[derive(Debug, Default)]
struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl Notify for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

#[tokio::test]
async fn company_create_then_list_then_delete() {
    let mut server = mockito::Server::new_async().await;
    let _list = server
        .mock("GET", "/api/companies")
        .with_status(200)
        .with_body(json!({"companies": []}).to_string())
        .create_async()
        .await;
    let _post = server
        .mock("POST", "/api/companies")
        .with_status(201)
        .with_body(
            json!({"company": {"id": 1, "name": "Acme", "ruc": "20123456789"}}).to_string(),
        )
        .create_async()
        .await;
    let _delete = server
        .mock("DELETE", "/api/companies/1")
        .with_status(200)
        .with_body(json!({"message": "Empresa eliminada"}).to_string())
        .create_async()
        .await;

    let recorder = RecordingNotifier::default();
    let mut page = CompaniesPage::new(server.url(), &recorder);
    page.refresh().await;
    assert!(page.visible().is_empty());

    let draft = CompanyDraft {
        id: None,
        name: "Acme".into(),
        ruc: "20123456789".into(),
    };
    page.create(&draft).await;
    // optimistic append, no re-fetch
    assert_eq!(page.visible().len(), 1);
    assert_eq!(page.visible()[0].name, "Acme");
    assert_eq!(page.visible()[0].ruc, "20123456789");
    assert_eq!(
        recorder.successes.lock().unwrap().as_slice(),
        ["Empresa creada exitosamente"]
    );

    page.delete(1).await;
    assert!(page.visible().is_empty());
    assert!(recorder.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_create_leaves_state_untouched_and_notifies() {
    let mut server = mockito::Server::new_async().await;
    let _list = server
        .mock("GET", "/api/companies")
        .with_status(200)
        .with_body(
            json!({"companies": [{"id": 1, "name": "Acme", "ruc": "20123456789"}]}).to_string(),
        )
        .create_async()
        .await;
    let _post = server
        .mock("POST", "/api/companies")
        .with_status(500)
        .create_async()
        .await;

    let recorder = RecordingNotifier::default();
    let mut page = CompaniesPage::new(server.url(), &recorder);
    page.refresh().await;
    assert_eq!(page.visible().len(), 1);

    let draft = CompanyDraft {
        id: None,
        name: "Globex".into(),
        ruc: "20987654321".into(),
    };
    page.create(&draft).await;
    // no partial mutation on failure
    assert_eq!(page.visible().len(), 1);
    assert_eq!(
        recorder.errors.lock().unwrap().as_slice(),
        ["Error al crear la empresa. Por favor, intenta de nuevo."]
    );
}

#[tokio::test]
async fn update_replaces_the_matching_company_in_place() {
    let mut server = mockito::Server::new_async().await;
    let _list = server
        .mock("GET", "/api/companies")
        .with_status(200)
        .with_body(
            json!({"companies": [
                {"id": 1, "name": "Acme", "ruc": "20123456789"},
                {"id": 2, "name": "Globex", "ruc": "20987654321"}
            ]})
            .to_string(),
        )
        .create_async()
        .await;
    let _put = server
        .mock("PUT", "/api/companies/1")
        .with_status(200)
        .with_body(
            json!({"company": {"id": 1, "name": "Acme SAC", "ruc": "20123456789"}}).to_string(),
        )
        .create_async()
        .await;

    let recorder = RecordingNotifier::default();
    let mut page = CompaniesPage::new(server.url(), &recorder);
    page.refresh().await;

    let draft = CompanyDraft {
        id: Some(1),
        name: "Acme SAC".into(),
        ruc: "20123456789".into(),
    };
    page.update(&draft).await;
    // replaced in place: same position, same length, no re-fetch
    assert_eq!(page.all().len(), 2);
    assert_eq!(page.visible()[0].id, 1);
    assert_eq!(page.visible()[0].name, "Acme SAC");
    assert_eq!(page.visible()[1].name, "Globex");
    assert_eq!(
        recorder.successes.lock().unwrap().as_slice(),
        ["Empresa actualizada exitosamente"]
    );
}

#[tokio::test]
async fn failed_update_keeps_the_old_record_and_notifies() {
    let mut server = mockito::Server::new_async().await;
    let _list = server
        .mock("GET", "/api/companies")
        .with_status(200)
        .with_body(
            json!({"companies": [{"id": 1, "name": "Acme", "ruc": "20123456789"}]}).to_string(),
        )
        .create_async()
        .await;
    let _put = server
        .mock("PUT", "/api/companies/1")
        .with_status(500)
        .create_async()
        .await;

    let recorder = RecordingNotifier::default();
    let mut page = CompaniesPage::new(server.url(), &recorder);
    page.refresh().await;

    let draft = CompanyDraft {
        id: Some(1),
        name: "Acme SAC".into(),
        ruc: "20123456789".into(),
    };
    page.update(&draft).await;
    assert_eq!(page.visible()[0].name, "Acme");
    assert_eq!(
        recorder.errors.lock().unwrap().as_slice(),
        ["Error al actualizar la empresa. Por favor, intenta de nuevo."]
    );
}

#[tokio::test]
async fn delete_refusal_in_a_2xx_body_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let _list = server
        .mock("GET", "/api/companies")
        .with_status(200)
        .with_body(
            json!({"companies": [{"id": 1, "name": "Acme", "ruc": "20123456789"}]}).to_string(),
        )
        .create_async()
        .await;
    let _delete = server
        .mock("DELETE", "/api/companies/1")
        .with_status(200)
        .with_body(json!({"error": "La empresa tiene contactos asociados"}).to_string())
        .create_async()
        .await;

    let recorder = RecordingNotifier::default();
    let mut page = CompaniesPage::new(server.url(), &recorder);
    page.refresh().await;
    page.delete(1).await;
    // the company stays, and the server's message is what the user sees
    assert_eq!(page.visible().len(), 1);
    assert_eq!(
        recorder.errors.lock().unwrap().as_slice(),
        ["La empresa tiene contactos asociados"]
    );
}

#[tokio::test]
async fn search_term_narrows_and_widens_the_view() {
    let mut server = mockito::Server::new_async().await;
    let _list = server
        .mock("GET", "/api/contacts")
        .with_status(200)
        .with_body(
            json!({"contacs": [
                {"id": 1, "name": "Ana Torres", "whatsapp": "987654321"},
                {"id": 2, "name": "Luis Paz", "whatsapp": "912345678"}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let recorder = RecordingNotifier::default();
    let mut page = ContactsPage::new(server.url(), &recorder);
    page.refresh().await;
    assert_eq!(page.visible().len(), 2);

    page.set_search_term("ana");
    assert_eq!(page.visible().len(), 1);
    assert_eq!(page.visible()[0].id, 1);

    page.set_search_term("9123");
    assert_eq!(page.visible().len(), 1);
    assert_eq!(page.visible()[0].id, 2);

    page.set_search_term("");
    assert_eq!(page.visible().len(), 2);
}

#[tokio::test]
async fn blank_whatsapp_never_reaches_the_network() {
    // no mock server at all: an invalid form must not produce a draft,
    // so there is nothing to send
    let mut form = ContactForm::new();
    form.apply(Field::Name("Ana".into()));
    form.apply(Field::CompanyId("1".into()));
    let draft = form.submit();
    assert!(draft.is_none());
    assert_eq!(
        form.errors()["whatsapp"],
        "El número de WhatsApp es obligatorio"
    );
}

#[tokio::test]
async fn create_refilters_under_the_current_term() {
    let mut server = mockito::Server::new_async().await;
    let _list = server
        .mock("GET", "/api/companies")
        .with_status(200)
        .with_body(
            json!({"companies": [{"id": 1, "name": "Acme", "ruc": "20123456789"}]}).to_string(),
        )
        .create_async()
        .await;
    let _post = server
        .mock("POST", "/api/companies")
        .with_status(201)
        .with_body(
            json!({"company": {"id": 2, "name": "Globex", "ruc": "20987654321"}}).to_string(),
        )
        .create_async()
        .await;

    let recorder = RecordingNotifier::default();
    let mut page = CompaniesPage::new(server.url(), &recorder);
    page.refresh().await;
    page.set_search_term("acme");
    assert_eq!(page.visible().len(), 1);

    let draft = CompanyDraft {
        id: None,
        name: "Globex".into(),
        ruc: "20987654321".into(),
    };
    page.create(&draft).await;
    // the new company is in the full list but filtered out of the view
    assert_eq!(page.all().len(), 2);
    assert_eq!(page.visible().len(), 1);

    page.set_search_term("");
    assert_eq!(page.visible().len(), 2);
}
