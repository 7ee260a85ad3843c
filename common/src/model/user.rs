use serde::{Deserialize, Serialize};

/// The authenticated agency account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub agency_name: String,
    #[serde(default)]
    pub language_id: Option<i64>,
    #[serde(default)]
    pub confirmed_token: Option<String>,
}

/// Partial profile update merged into the current [`User`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<i64>,
}

impl User {
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(agency_name) = patch.agency_name {
            self.agency_name = agency_name;
        }
        if let Some(language_id) = patch.language_id {
            self.language_id = Some(language_id);
        }
    }
}
