//! Typed client for the ImmoConnect REST API.
//!
//! Every endpoint goes through [`ApiClient::execute`], which turns transport
//! failures, non-2xx statuses and undecodable bodies into [`ApiError`]. List
//! endpoints are decoded through [`ListResponse`] so callers always get a
//! `Vec`, whatever envelope the server used.

use common::config::ClientConfig;
use common::error::ApiError;
use common::model::client::{Client, ClientInput};
use common::model::credits::{CreditBalance, CreditTransaction};
use common::model::language::Language;
use common::model::message::{Message, SendPayload};
use common::model::template::Template;
use common::model::user::User;
use common::requests::{
    AuthResponse, ItemResponse, ListResponse, LoginRequest, MeResponse, RegisterRequest,
    RegisterResponse, SaveTokenRequest, SelectLanguageRequest, UpdateUserRequest,
};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

const GENERIC_ERROR: &str = "Une erreur est survenue";

/// Cheap to clone; rebuilt by the root component whenever the session token
/// changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: ClientConfig,
    token: Option<String>,
}

/// Loads `/config.json` from the server that delivered the bundle.
///
/// Falls back to [`ClientConfig::default`] when the file is unavailable, so a
/// bundle served by any static host still works against `/api`.
pub async fn load_config() -> ClientConfig {
    let response = match Request::get("/config.json").send().await {
        Ok(resp) if resp.ok() => resp,
        _ => return ClientConfig::default(),
    };
    match response.json::<ClientConfig>().await {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!(format!("config.json illisible: {err}"));
            ClientConfig::default()
        }
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    pub fn country_id(&self) -> i64 {
        self.config.country_id
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(ApiError::from_status(status, &body, GENERIC_ERROR));
        }
        decode_body(&body)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::get(&self.config.endpoint(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::execute(request).await
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        self.get::<ListResponse<T>>(path).await.map(ListResponse::into_vec)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.config.endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Self::execute(request).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::put(&self.config.endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Self::execute(request).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::delete(&self.config.endpoint(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::execute::<IgnoredAny>(request).await.map(|_| ())
    }

    // Authentication

    pub async fn login(&self, body: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post::<_, ItemResponse<AuthResponse>>("/auth/login", body)
            .await
            .map(ItemResponse::into_inner)
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post::<_, ItemResponse<RegisterResponse>>("/auth/register", body)
            .await
            .map(ItemResponse::into_inner)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post::<_, IgnoredAny>("/auth/logout", &serde_json::json!({}))
            .await
            .map(|_| ())
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.get::<ItemResponse<MeResponse>>("/auth/me")
            .await
            .map(|r| r.into_inner().user)
    }

    pub async fn save_confirmed_token(&self, token: &str) -> Result<(), ApiError> {
        let body = SaveTokenRequest {
            token: token.to_string(),
        };
        self.post::<_, IgnoredAny>("/auth/save-token", &body)
            .await
            .map(|_| ())
    }

    // Clients

    pub async fn clients(&self) -> Result<Vec<Client>, ApiError> {
        self.list("/clients").await
    }

    pub async fn create_client(&self, input: &ClientInput) -> Result<(), ApiError> {
        self.post::<_, IgnoredAny>("/clients", input).await.map(|_| ())
    }

    pub async fn update_client(&self, id: i64, input: &ClientInput) -> Result<(), ApiError> {
        self.put::<_, IgnoredAny>(&format!("/clients/{id}"), input)
            .await
            .map(|_| ())
    }

    pub async fn delete_client(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/clients/{id}")).await
    }

    // Templates and messages

    pub async fn templates(&self) -> Result<Vec<Template>, ApiError> {
        self.list("/templates").await
    }

    pub async fn messages(&self) -> Result<Vec<Message>, ApiError> {
        self.list("/messages").await
    }

    pub async fn send_message(&self, payload: &SendPayload) -> Result<(), ApiError> {
        self.post::<_, IgnoredAny>("/messages", payload)
            .await
            .map(|_| ())
    }

    // Credits

    pub async fn credits(&self) -> Result<CreditBalance, ApiError> {
        self.get::<ItemResponse<CreditBalance>>("/credits")
            .await
            .map(ItemResponse::into_inner)
    }

    pub async fn credits_history(&self) -> Result<Vec<CreditTransaction>, ApiError> {
        self.list("/credits/history").await
    }

    // Account

    pub async fn languages(&self) -> Result<Vec<Language>, ApiError> {
        self.list("/languages").await
    }

    pub async fn select_language(&self, language_id: i64) -> Result<(), ApiError> {
        self.put::<_, IgnoredAny>("/languages/select", &SelectLanguageRequest { language_id })
            .await
            .map(|_| ())
    }

    pub async fn update_user(&self, id: i64, body: &UpdateUserRequest) -> Result<User, ApiError> {
        self.post::<_, ItemResponse<User>>(&format!("/users/{id}"), body)
            .await
            .map(ItemResponse::into_inner)
    }
}

/// Decodes a 2xx body; an empty body reads as JSON `null`.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_decodes_as_ignored() {
        assert!(decode_body::<IgnoredAny>("").is_ok());
        assert!(decode_body::<IgnoredAny>("{\"ok\":true}").is_ok());
    }

    #[test]
    fn list_body_is_unwrapped() {
        let list: ListResponse<Language> =
            decode_body(r#"{"data":[{"id":1,"name":"Français","code":"fr"}]}"#).unwrap();
        assert_eq!(list.into_vec()[0].code, "fr");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(
            decode_body::<ListResponse<Language>>("{\"data\":null}"),
            Err(ApiError::Decode(_))
        ));
    }
}
