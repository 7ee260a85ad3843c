//! Request bodies and response envelopes of the REST API.

use serde::{Deserialize, Serialize};

use crate::model::user::User;

/// List endpoints answer either with a bare array or with `{ "data": [...] }`.
///
/// Decoding through this type once at the fetch boundary gives the rest of
/// the code a plain `Vec<T>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
    Nested { data: Wrapped<T> },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wrapped<T> {
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Wrapped { data } => data,
            ListResponse::Nested { data } => data.data,
        }
    }
}

/// Single-object endpoints may also wrap their payload in `data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemResponse<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ItemResponse<T> {
    pub fn into_inner(self) -> T {
        match self {
            ItemResponse::Wrapped { data } => data,
            ItemResponse::Bare(item) => item,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub agency_name: String,
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// `POST /auth/register` answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub user: User,
    pub token: String,
}

/// `GET /auth/me` answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveTokenRequest {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectLanguageRequest {
    pub language_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub agency_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::template::Template;
    use serde_json::json;

    #[test]
    fn list_accepts_every_envelope() {
        let item = json!({"id": 1, "name": "Relance"});
        for body in [
            json!([item.clone()]),
            json!({"data": [item.clone()]}),
            json!({"data": {"data": [item.clone()]}}),
        ] {
            let list: ListResponse<Template> = serde_json::from_value(body).unwrap();
            assert_eq!(list.into_vec().len(), 1);
        }
    }

    #[test]
    fn list_rejects_non_arrays() {
        assert!(serde_json::from_value::<ListResponse<Template>>(json!({"data": null})).is_err());
        assert!(serde_json::from_value::<ListResponse<Template>>(json!("oops")).is_err());
    }

    #[test]
    fn item_unwraps_data_envelope() {
        let me: ItemResponse<MeResponse> = serde_json::from_value(json!({
            "data": {"user": {"id": 1, "email": "a@b.ma"}}
        }))
        .unwrap();
        assert_eq!(me.into_inner().user.id, 1);
    }
}
