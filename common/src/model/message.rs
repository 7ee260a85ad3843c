use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Delivery state reported by the provider for a sent message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Pending,
    Delivered,
    Failed,
    #[serde(other)]
    Unknown,
}

impl MessageStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MessageStatus::Pending => "En attente",
            MessageStatus::Delivered => "Délivré",
            MessageStatus::Failed => "Échec",
            MessageStatus::Unknown => "Inconnu",
        }
    }
}

/// One entry of the message history (`GET /messages`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub phone: String,
    #[serde(default)]
    pub template_id: Option<i64>,
    #[serde(default = "unknown_status")]
    pub status: MessageStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn unknown_status() -> MessageStatus {
    MessageStatus::Unknown
}

/// Body of `POST /messages`.
///
/// Only a compose session can build one (see
/// [`ComposeSession::submit`](crate::compose::ComposeSession::submit)); once
/// built it is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPayload {
    phone: String,
    template_id: i64,
    country_id: i64,
    data: BTreeMap<String, String>,
    global_data: BTreeMap<String, String>,
    catch_data: BTreeMap<String, String>,
}

impl SendPayload {
    pub(crate) fn new(
        phone: String,
        template_id: i64,
        country_id: i64,
        data: BTreeMap<String, String>,
        global_data: BTreeMap<String, String>,
        catch_data: BTreeMap<String, String>,
    ) -> Self {
        Self {
            phone,
            template_id,
            country_id,
            data,
            global_data,
            catch_data,
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn template_id(&self) -> i64 {
        self.template_id
    }

    pub fn country_id(&self) -> i64 {
        self.country_id
    }

    pub fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    pub fn global_data(&self) -> &BTreeMap<String, String> {
        &self.global_data
    }

    pub fn catch_data(&self) -> &BTreeMap<String, String> {
        &self.catch_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_statuses_are_tolerated() {
        let m: Message = serde_json::from_value(json!({
            "id": 1,
            "phone": "+212612345678",
            "templateId": 3,
            "status": "queued"
        }))
        .unwrap();
        assert_eq!(m.status, MessageStatus::Unknown);

        let m: Message = serde_json::from_value(json!({"id": 2, "phone": "0612345678"})).unwrap();
        assert_eq!(m.status, MessageStatus::Unknown);
        assert_eq!(m.template_id, None);
    }

    #[test]
    fn payload_uses_api_field_names() {
        let mut data = BTreeMap::new();
        data.insert("ville".to_string(), "Rabat".to_string());
        let payload = SendPayload::new(
            "+212612345678".into(),
            3,
            1,
            data,
            BTreeMap::new(),
            BTreeMap::new(),
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "phone": "+212612345678",
                "templateId": 3,
                "countryId": 1,
                "data": {"ville": "Rabat"},
                "globalData": {},
                "catchData": {}
            })
        );
    }
}
