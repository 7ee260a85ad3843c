use thiserror::Error;

use crate::compose::VariableNamespace;

/// A single field-level validation failure.
///
/// The `field` carried by each variant is the French label shown next to the
/// input, so the `Display` output can be rendered inline as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} est requis")]
    Required { field: &'static str },

    #[error("{field} doit contenir au moins {min} caractères")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} ne peut pas dépasser {max} caractères")]
    TooLong { field: &'static str, max: usize },

    #[error("Format invalide (ex: +212612345678 ou 0612345678)")]
    InvalidPhone,

    #[error("Email invalide")]
    InvalidEmail,

    #[error("Doit contenir au moins 1 majuscule, 1 minuscule et 1 chiffre")]
    WeakPassword,

    #[error("Les mots de passe ne correspondent pas")]
    Mismatch,
}

/// Reasons a compose session refuses to produce a send payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Un envoi est déjà en cours")]
    InFlight,

    #[error("Client requis")]
    NoClient,

    #[error("Modèle requis")]
    NoTemplate,

    #[error("Client introuvable: {0}")]
    ClientNotFound(i64),

    #[error("Valeur manquante pour {name} ({namespace})")]
    MissingVariable {
        namespace: VariableNamespace,
        name: String,
    },
}

/// Transport-level failures talking to the REST API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Erreur réseau: {0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Réponse invalide: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds a status error from an HTTP status and the raw response body.
    ///
    /// The API reports failures as `{ "message": "..." }`; when the body has no
    /// usable message the `fallback` text is used instead.
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<crate::requests::ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        ApiError::Status { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}
