//! SSO connector model and filtering
//!
//! Connectors are owned by Cloudflare. cflr only reads them and flips their
//! status, so records are kept as close to the API JSON as possible.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Status of an SSO connector.
///
/// Cloudflare reports statuses as short codes. Codes are matched
/// case-insensitively; anything unrecognised is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectorStatus {
    /// `V` - SSO is enforced for the domain
    Enabled,
    /// `DIS` - SSO is configured but switched off
    Disabled,
    /// `D` - connector was deleted
    Deleted,
    /// Any other code
    Unknown(String),
}

impl ConnectorStatus {
    /// Parse an upstream status code
    pub fn parse(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "V" => Self::Enabled,
            "DIS" => Self::Disabled,
            "D" => Self::Deleted,
            _ => Self::Unknown(code.to_string()),
        }
    }

    /// Upstream code sent to and received from the API
    pub fn code(&self) -> &str {
        match self {
            Self::Enabled => "V",
            Self::Disabled => "DIS",
            Self::Deleted => "D",
            Self::Unknown(raw) => raw,
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Deleted => "deleted",
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether the connector was deleted
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl From<String> for ConnectorStatus {
    fn from(code: String) -> Self {
        Self::parse(&code)
    }
}

impl From<ConnectorStatus> for String {
    fn from(status: ConnectorStatus) -> Self {
        status.code().to_string()
    }
}

impl std::fmt::Display for ConnectorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// An SSO connector record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Opaque connector identifier
    pub connector_id: String,

    /// Email domain the connector applies to
    pub email_domain: String,

    /// Current status
    pub connector_status: ConnectorStatus,

    /// Remaining fields, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Entry in the `errors` or `messages` list of an API envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Numeric error code, when present
    #[serde(default)]
    pub code: Option<i64>,

    /// Message text
    pub message: String,
}

/// Response envelope shared by every Cloudflare v4 endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the call succeeded
    pub success: bool,

    /// Errors reported by the API
    #[serde(default)]
    pub errors: Vec<ApiMessage>,

    /// Informational messages
    #[serde(default)]
    pub messages: Vec<ApiMessage>,

    /// Payload
    #[serde(default)]
    pub result: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// First error message, or a placeholder when the API sent none
    pub fn first_error_message(&self) -> String {
        self.errors
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "unknown error".to_string())
    }

    /// Unwrap the payload, turning `success: false` into [`Error::Api`]
    pub fn into_result(self) -> Result<Option<T>> {
        if !self.success {
            return Err(Error::Api {
                message: self.first_error_message(),
            });
        }
        Ok(self.result)
    }
}

/// Check the `success` flag of a raw JSON response body
pub fn ensure_success(raw: &serde_json::Value) -> Result<()> {
    let envelope = ApiEnvelope::<serde::de::IgnoredAny>::deserialize(raw)?;
    envelope.into_result().map(|_| ())
}

/// Map email domain to connector id for every connector in the given status.
///
/// Domains keep the order in which the API first listed them. When two
/// connectors share a domain the later one wins.
pub fn filter_by_status(
    connectors: &[Connector],
    status: &ConnectorStatus,
) -> IndexMap<String, String> {
    let mut filtered = IndexMap::new();
    for connector in connectors {
        if connector.connector_status == *status {
            filtered.insert(
                connector.email_domain.clone(),
                connector.connector_id.clone(),
            );
        }
    }
    filtered
}
