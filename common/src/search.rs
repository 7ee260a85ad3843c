//! Client-side list filtering for the Clients and Templates pages.

use std::fmt;
use std::str::FromStr;

use crate::model::client::Client;
use crate::model::template::Template;

/// Clients whose name, phone or email contains `query`, ignoring case.
///
/// The phone is matched as the stored string, so `"06"` does not find a
/// client saved as `+2126…`. An empty query keeps every client.
pub fn search_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    if query.is_empty() {
        return clients.iter().collect();
    }
    let needle = query.to_lowercase();
    clients
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.phone.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The closed set of categories offered by the template filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    #[default]
    All,
    Presentation,
    Relance,
    Confirmation,
    Information,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 5] = [
        TemplateCategory::All,
        TemplateCategory::Presentation,
        TemplateCategory::Relance,
        TemplateCategory::Confirmation,
        TemplateCategory::Information,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::All => "all",
            TemplateCategory::Presentation => "presentation",
            TemplateCategory::Relance => "relance",
            TemplateCategory::Confirmation => "confirmation",
            TemplateCategory::Information => "information",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemplateCategory::All => "Tous les modèles",
            TemplateCategory::Presentation => "Présentation",
            TemplateCategory::Relance => "Relance",
            TemplateCategory::Confirmation => "Confirmation",
            TemplateCategory::Information => "Information",
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            TemplateCategory::All => true,
            other => category == Some(other.as_str()),
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown template category: {s}"))
    }
}

/// Templates whose name contains `query` (ignoring case) and whose category
/// is accepted by `category`.
pub fn filter_templates<'a>(
    templates: &'a [Template],
    query: &str,
    category: TemplateCategory,
) -> Vec<&'a Template> {
    let needle = query.to_lowercase();
    templates
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&needle))
        .filter(|t| category.matches(t.category.as_deref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: i64, name: &str, phone: &str, email: &str) -> Client {
        Client {
            id,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            notes: None,
            created_at: None,
        }
    }

    fn template(id: i64, name: &str, category: Option<&str>) -> Template {
        Template {
            id,
            name: name.into(),
            body: None,
            category: category.map(str::to_string),
            variables: vec![],
            global_variables: vec![],
            catch_data: vec![],
        }
    }

    #[test]
    fn client_search_matches_any_field() {
        let clients = vec![
            client(1, "Jean Dupont", "+212612345678", "jean@exemple.ma"),
            client(2, "Marie Martin", "0712345678", "MARIE@EXEMPLE.MA"),
        ];

        let ids = |q: &str| search_clients(&clients, q).iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids("dup"), [1]);
        assert_eq!(ids(""), [1, 2]);
        assert_eq!(ids("marie@"), [2]);
        assert_eq!(ids("+2126"), [1]);
        assert_eq!(ids("0612"), Vec::<i64>::new());
    }

    #[test]
    fn template_filter_by_category_and_name() {
        let templates = vec![
            template(1, "Relance visite", Some("relance")),
            template(2, "Confirmation RDV", Some("confirmation")),
            template(3, "Relance offre", Some("relance")),
            template(4, "Bienvenue", None),
        ];

        let ids = |q: &str, c| {
            filter_templates(&templates, q, c).iter().map(|t| t.id).collect::<Vec<_>>()
        };
        assert_eq!(ids("", TemplateCategory::Relance), [1, 3]);
        assert_eq!(ids("confir", TemplateCategory::All), [2]);
        assert_eq!(ids("", TemplateCategory::All), [1, 2, 3, 4]);
        assert_eq!(ids("offre", TemplateCategory::Confirmation), Vec::<i64>::new());
    }

    #[test]
    fn category_round_trips_through_str() {
        for c in TemplateCategory::ALL {
            assert_eq!(c.as_str().parse::<TemplateCategory>(), Ok(c));
        }
        assert!("urgent".parse::<TemplateCategory>().is_err());
    }
}
