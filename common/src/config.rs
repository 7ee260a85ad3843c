use serde::{Deserialize, Serialize};

use crate::compose::DEFAULT_COUNTRY_ID;

/// Runtime settings the browser bundle fetches from `/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the REST API, without trailing slash.
    pub api_base_url: String,
    #[serde(default = "default_country_id")]
    pub country_id: i64,
}

fn default_country_id() -> i64 {
    DEFAULT_COUNTRY_ID
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            country_id: DEFAULT_COUNTRY_ID,
        }
    }
}

impl ClientConfig {
    /// Joins an endpoint path such as `/clients` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
