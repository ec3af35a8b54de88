use std::io::{self, BufRead, Write};

use crm_client::api::models::TemplateType;
use crm_client::app::AppConfig;
use crm_client::forms::{company, contact, contact_log, template};
use crm_client::pages::{
    Notify, companies::CompaniesPage, contact_logs::ContactLogsPage, contacts::ContactsPage,
    templates::TemplatesPage,
};
use crm_client::utils::normalize_url;
use crm_client::validate::FieldErrors;

/// Toasts become console lines here.
struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        println!("ERROR: {}", message);
    }
}

fn prompt(label: &str) -> String {
    print!("{}", label);
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
    line.trim_end_matches(['\n', '\r']).to_string()
}

fn print_errors(errors: &FieldErrors) {
    for (field, message) in errors {
        println!("  {}: {}", field, message);
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = AppConfig::load();
    println!("crm-client (API en {})", config.base_url);
    println!("Escribe 'help' para ver los comandos.");

    let mut companies_page = CompaniesPage::new(config.base_url.clone(), ConsoleNotifier);
    let mut contacts_page = ContactsPage::new(config.base_url.clone(), ConsoleNotifier);
    let mut templates_page = TemplatesPage::new(config.base_url.clone(), ConsoleNotifier);
    let mut logs_page = ContactLogsPage::new(config.base_url.clone(), ConsoleNotifier);

    loop {
        let line = prompt("> ");
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else { continue };
        let rest: Vec<&str> = parts.collect();

        match (command, rest.as_slice()) {
            ("help", _) => print_help(),
            ("quit", _) | ("exit", _) => break,

            ("companies", args) => {
                companies_page.refresh().await;
                companies_page.set_search_term(&args.join(" "));
                for company in companies_page.visible() {
                    println!(
                        "{:>4}  {:<30} RUC {}  ({} contactos)",
                        company.id,
                        company.name,
                        company.ruc,
                        company.contacts.len()
                    );
                }
            }
            ("company", ["add"]) => {
                let mut form = company::CompanyForm::new();
                form.apply(company::Field::Name(prompt("Nombre: ")));
                form.apply(company::Field::Ruc(prompt("RUC: ")));
                match form.submit() {
                    Some(draft) => companies_page.create(&draft).await,
                    None => print_errors(form.errors()),
                }
            }
            ("company", ["edit", id]) => {
                companies_page.refresh().await;
                let Ok(id) = id.parse::<i64>() else {
                    println!("id inválido");
                    continue;
                };
                let Some(existing) = companies_page.all().iter().find(|c| c.id == id).cloned()
                else {
                    println!("empresa {} no encontrada", id);
                    continue;
                };
                let mut form = company::CompanyForm::edit(&existing);
                let name = prompt(&format!("Nombre [{}]: ", existing.name));
                if !name.is_empty() {
                    form.apply(company::Field::Name(name));
                }
                let ruc = prompt(&format!("RUC [{}]: ", existing.ruc));
                if !ruc.is_empty() {
                    form.apply(company::Field::Ruc(ruc));
                }
                match form.submit() {
                    Some(draft) => companies_page.update(&draft).await,
                    None => print_errors(form.errors()),
                }
            }
            ("company", ["rm", id]) => match id.parse::<i64>() {
                Ok(id) => companies_page.delete(id).await,
                Err(_) => println!("id inválido"),
            },

            ("contacts", args) => {
                contacts_page.refresh().await;
                contacts_page.set_search_term(&args.join(" "));
                for contact in contacts_page.visible() {
                    let company = contact
                        .company
                        .as_ref()
                        .map(|c| c.name.as_str())
                        .unwrap_or("Sin empresa");
                    println!(
                        "{:>4}  {:<25} {:<16} {}",
                        contact.id, contact.name, contact.whatsapp, company
                    );
                }
            }
            ("contact", ["add"]) => {
                companies_page.refresh().await;
                for company in companies_page.all() {
                    println!("  {:>4}  {}", company.id, company.name);
                }
                let mut form = contact::ContactForm::new();
                form.apply(contact::Field::Name(prompt("Nombre: ")));
                form.apply(contact::Field::Whatsapp(prompt("WhatsApp: ")));
                form.apply(contact::Field::CompanyId(prompt("Empresa (id): ")));
                match form.submit() {
                    Some(draft) => contacts_page.create(&draft).await,
                    None => print_errors(form.errors()),
                }
            }
            ("contact", ["edit", id]) => {
                contacts_page.refresh().await;
                let Ok(id) = id.parse::<i64>() else {
                    println!("id inválido");
                    continue;
                };
                let Some(existing) = contacts_page.all().iter().find(|c| c.id == id).cloned()
                else {
                    println!("contacto {} no encontrado", id);
                    continue;
                };
                let mut form = contact::ContactForm::edit(&existing);
                let name = prompt(&format!("Nombre [{}]: ", existing.name));
                if !name.is_empty() {
                    form.apply(contact::Field::Name(name));
                }
                let whatsapp = prompt(&format!("WhatsApp [{}]: ", existing.whatsapp));
                if !whatsapp.is_empty() {
                    form.apply(contact::Field::Whatsapp(whatsapp));
                }
                companies_page.refresh().await;
                for company in companies_page.all() {
                    println!("  {:>4}  {}", company.id, company.name);
                }
                let current_company = existing
                    .company_id
                    .map(|id| id.to_string())
                    .unwrap_or_default();
                let company_id = prompt(&format!("Empresa (id) [{}]: ", current_company));
                if !company_id.is_empty() {
                    form.apply(contact::Field::CompanyId(company_id));
                }
                match form.submit() {
                    Some(draft) => contacts_page.update(&draft).await,
                    None => print_errors(form.errors()),
                }
            }
            ("contact", ["rm", id]) => match id.parse::<i64>() {
                Ok(id) => contacts_page.delete(id).await,
                Err(_) => println!("id inválido"),
            },

            ("templates", args) => {
                templates_page.set_search_term(&args.join(" ")).await;
                for template in templates_page.templates() {
                    let labels: Vec<&str> =
                        template.labels.iter().map(|l| l.label.as_str()).collect();
                    println!(
                        "{}  [{}] {}: {} {:?}",
                        template.id,
                        template.template_type.as_str(),
                        template.author,
                        template.content,
                        labels
                    );
                }
            }
            ("template", ["type", value]) => {
                let filter = if *value == "-" {
                    None
                } else {
                    match TemplateType::parse(value) {
                        Some(t) => Some(t),
                        None => {
                            println!("tipo desconocido: {}", value);
                            continue;
                        }
                    }
                };
                templates_page.set_type_filter(filter).await;
                println!("{} plantillas", templates_page.templates().len());
            }
            ("template", ["add"]) => {
                let mut form = template::TemplateForm::new();
                if let Some(t) = TemplateType::parse(&prompt(
                    "Tipo (welcome/notificaciones/recordatorios/otros): ",
                )) {
                    form.apply(template::Field::Type(t));
                }
                form.apply(template::Field::Content(prompt("Contenido: ")));
                form.apply(template::Field::Author(prompt("Autor: ")));
                loop {
                    let label = prompt("Etiqueta (vacío para terminar): ");
                    if label.is_empty() {
                        break;
                    }
                    form.apply(template::Field::PendingLabel(label));
                    form.add_label();
                }
                match form.submit() {
                    Some(draft) => templates_page.create(&draft).await,
                    None => print_errors(form.errors()),
                }
            }
            ("template", ["rm", id]) => templates_page.delete(id).await,

            ("logs", []) => {
                logs_page.refresh().await;
                logs_page.set_contact_filter(None);
                print_logs(&logs_page);
            }
            ("logs", [contact_id]) => match contact_id.parse::<i64>() {
                Ok(id) => {
                    logs_page.refresh().await;
                    logs_page.set_contact_filter(Some(id));
                    print_logs(&logs_page);
                }
                Err(_) => println!("id inválido"),
            },
            ("log", ["add", contact_id]) => {
                let Ok(id) = contact_id.parse::<i64>() else {
                    println!("id inválido");
                    continue;
                };
                contacts_page.refresh().await;
                let Some(contact) = contacts_page.all().iter().find(|c| c.id == id).cloned()
                else {
                    println!("contacto {} no encontrado", id);
                    continue;
                };
                templates_page.refresh().await;
                let mut form =
                    contact_log::ContactLogForm::new(&contact, templates_page.templates().to_vec());
                println!("Tipos disponibles: {}", form.template_types().join(", "));
                form.apply(contact_log::Field::TemplateUsed(prompt("Tipo de plantilla: ")));
                println!("Notas actuales: {}", form.notes());
                let notes = prompt("Notas (vacío para mantener): ");
                if !notes.is_empty() {
                    form.apply(contact_log::Field::Notes(notes));
                }
                match form.submit() {
                    Some(draft) => logs_page.create(&draft).await,
                    None => print_errors(form.errors()),
                }
            }
            ("log", ["rm", id]) => match id.parse::<i64>() {
                Ok(id) => logs_page.delete(id).await,
                Err(_) => println!("id inválido"),
            },

            ("url", [value]) => {
                let config = AppConfig {
                    base_url: normalize_url(value),
                };
                match config.save() {
                    Ok(()) => println!("Guardado. Reinicia para usar {}", config.base_url),
                    Err(err) => println!("ERROR: no se pudo guardar: {}", err),
                }
            }

            _ => println!("comando desconocido, escribe 'help'"),
        }
    }
}

fn print_logs(page: &ContactLogsPage<ConsoleNotifier>) {
    for log in page.visible() {
        let name = page.contact_name(log.contact_id).unwrap_or("?");
        println!(
            "{:>4}  {}  {:<20} [{}] {}",
            log.id, log.date, name, log.template_used, log.notes
        );
    }
}

fn print_help() {
    println!("companies [término]        listar/buscar empresas");
    println!("company add | edit <id> | rm <id>");
    println!("contacts [término]         listar/buscar contactos");
    println!("contact add | edit <id> | rm <id>");
    println!("templates [término]        listar plantillas (búsqueda en servidor)");
    println!("template type <tipo|->     filtrar por tipo en servidor");
    println!("template add | rm <id>");
    println!("logs [contactId]           historial de contactos");
    println!("log add <contactId> | rm <id>");
    println!("url <base>                 configurar la URL de la API");
    println!("quit");
}
