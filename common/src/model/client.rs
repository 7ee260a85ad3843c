use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{validate_email, validate_min_length, validate_phone, validate_required};

/// A client record as returned by `GET /clients`.
///
/// Records are owned by the API; the dashboard holds them as a read-only
/// snapshot and refetches after every create/update/delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /clients` and `PUT /clients/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub notes: String,
}

/// Which input of the client form a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientField {
    Name,
    Phone,
    Email,
}

impl ClientInput {
    /// Pre-fills the edit form from an existing record.
    pub fn from_client(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            phone: client.phone.clone(),
            email: client.email.clone(),
            notes: client.notes.clone().unwrap_or_default(),
        }
    }

    /// Checks every field and returns all failures, in form order.
    ///
    /// An empty result means the input may be sent to the API.
    pub fn validate(&self) -> Vec<(ClientField, ValidationError)> {
        let mut errors = Vec::new();

        if let Err(e) = validate_required(&self.name, "Le nom")
            .and_then(|_| validate_min_length(&self.name, 2, "Le nom"))
        {
            errors.push((ClientField::Name, e));
        }
        if let Err(e) =
            validate_required(&self.phone, "Le téléphone").and_then(|_| validate_phone(&self.phone))
        {
            errors.push((ClientField::Phone, e));
        }
        if let Err(e) =
            validate_required(&self.email, "L'email").and_then(|_| validate_email(&self.email))
        {
            errors.push((ClientField::Email, e));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, phone: &str, email: &str) -> ClientInput {
        ClientInput {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            notes: String::new(),
        }
    }

    #[test]
    fn valid_input_has_no_errors() {
        assert!(input("Jean Dupont", "+212612345678", "jean@exemple.ma").validate().is_empty());
        assert!(input("Jo", "0712345678", "JO@EXEMPLE.COM").validate().is_empty());
    }

    #[test]
    fn reports_every_invalid_field() {
        let errors = input("J", "0812345678", "jean@").validate();
        let fields: Vec<_> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![ClientField::Name, ClientField::Phone, ClientField::Email]);
        assert_eq!(errors[0].1, ValidationError::TooShort { field: "Le nom", min: 2 });
        assert_eq!(errors[1].1, ValidationError::InvalidPhone);
    }

    #[test]
    fn missing_fields_are_required_errors() {
        let errors = input("", "  ", "").validate();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|(_, e)| matches!(e, ValidationError::Required { .. })));
    }

    #[test]
    fn decodes_api_record() {
        let client: Client = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Jean Dupont",
            "phone": "+212612345678",
            "email": "jean@exemple.ma",
            "createdAt": "2026-03-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(client.notes, None);
        assert_eq!(client.created_at.as_deref(), Some("2026-03-01T10:00:00Z"));
        assert_eq!(ClientInput::from_client(&client).notes, "");
    }
}
