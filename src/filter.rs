//! Local substring filtering over already-fetched lists. The search box
//! on the companies and contacts pages never hits the server; it narrows
//! the in-memory copy and re-runs whenever the term or the list changes.

use crate::api::models::{Company, Contact};

/// Case-insensitive substring match over the fields picked by `fields`.
/// A blank term is the identity. Matches keep their relative order from
/// the input.
pub fn by_term<T, F>(items: &[T], term: &str, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> [&str; 2],
{
    let term = term.trim();
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields(item)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Companies match on name or RUC.
pub fn companies(items: &[Company], term: &str) -> Vec<Company> {
    by_term(items, term, |c| [c.name.as_str(), c.ruc.as_str()])
}

/// Contacts match on name or WhatsApp number.
pub fn contacts(items: &[Contact], term: &str) -> Vec<Contact> {
    by_term(items, term, |c| [c.name.as_str(), c.whatsapp.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: i64, name: &str, ruc: &str) -> Company {
        Company {
            id,
            name: name.into(),
            ruc: ruc.into(),
            created_at: None,
            contacts: Vec::new(),
        }
    }

    fn sample() -> Vec<Company> {
        vec![
            company(1, "Acme", "20123456789"),
            company(2, "Globex", "20987654321"),
            company(3, "Acme Sur", "20111111111"),
        ]
    }

    #[test]
    fn blank_term_is_identity() {
        let all = sample();
        let out = companies(&all, "");
        assert_eq!(out.len(), all.len());
        for (a, b) in all.iter().zip(out.iter()) {
            assert_eq!(a.id, b.id);
        }
        // whitespace-only behaves the same
        assert_eq!(companies(&all, "   ").len(), all.len());
    }

    #[test]
    fn matches_are_case_insensitive() {
        let out = companies(&sample(), "ACME");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn matches_on_either_field() {
        let out = companies(&sample(), "2098");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Globex");
    }

    #[test]
    fn preserves_input_order() {
        let out = companies(&sample(), "acme");
        let ids: Vec<i64> = out.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = companies(&sample(), "acme");
        let twice = companies(&once, "acme");
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn contacts_match_on_whatsapp() {
        let all = vec![
            Contact {
                id: 1,
                name: "Ana".into(),
                whatsapp: "987654321".into(),
                company_id: Some(1),
                company: None,
                created_at: None,
            },
            Contact {
                id: 2,
                name: "Luis".into(),
                whatsapp: "912345678".into(),
                company_id: Some(1),
                company: None,
                created_at: None,
            },
        ];
        let out = contacts(&all, "9876");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Ana");
        let out = contacts(&all, "lui");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);
    }
}
