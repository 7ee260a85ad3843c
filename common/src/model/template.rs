use serde::{Deserialize, Serialize};

/// A per-message variable; its `name` is both the key and the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariable {
    pub name: String,
}

/// A global or catch-all variable: `variable` is the key sent to the
/// provider, `name` the human label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedVariable {
    pub variable: String,
    pub name: String,
}

/// A provider message template as listed by `GET /templates`.
///
/// The dashboard never mutates templates. Absent variable lists decode as
/// empty so that downstream code never has to distinguish "missing" from
/// "none declared".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub variables: Vec<TemplateVariable>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub global_variables: Vec<NamedVariable>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub catch_data: Vec<NamedVariable>,
}

impl Template {
    pub fn has_variables(&self) -> bool {
        !(self.variables.is_empty() && self.global_variables.is_empty() && self.catch_data.is_empty())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_lists_decode_empty() {
        let t: Template = serde_json::from_value(json!({
            "id": 3,
            "name": "Relance visite",
            "global_variables": null
        }))
        .unwrap();
        assert!(t.variables.is_empty());
        assert!(t.global_variables.is_empty());
        assert!(t.catch_data.is_empty());
        assert!(!t.has_variables());
    }

    #[test]
    fn keeps_declaration_order() {
        let t: Template = serde_json::from_value(json!({
            "id": 4,
            "name": "Confirmation",
            "category": "confirmation",
            "variables": [{"name": "ville"}, {"name": "date"}],
            "catch_data": [{"variable": "agent", "name": "Agent"}]
        }))
        .unwrap();
        let names: Vec<_> = t.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["ville", "date"]);
        assert_eq!(t.catch_data[0].variable, "agent");
        assert!(t.has_variables());
    }
}
