//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all records the backend serves.

use std::borrow::Cow;
use std::fmt::Display;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Generic message shown when the backend gives no usable error text
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Core trait for all domain entities
pub trait Entity: Sized + Clone + Send + Sync + 'static {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash + Display + Send + Sync + 'static;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Records that can be shown by the list pipeline
pub trait Listable {
    /// Fields matched by the free-text search box
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Whether the record carries a resolved-true inactive flag
    fn is_inactive(&self) -> bool {
        false
    }
}

/// Records with a soft-delete flag that can be toggled from a table row
pub trait Deactivatable: Listable {
    fn set_inactive(&mut self, inactive: bool);
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Backend { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl DomainError {
    /// Text for the error modal: the backend's own message when it sent one
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Backend { message: Some(msg), .. } if !msg.trim().is_empty() => msg.clone(),
            DomainError::NotFound(msg) | DomainError::InvalidInput(msg) | DomainError::Conflict(msg) => {
                msg.clone()
            }
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DomainError::Decode(err.to_string())
        } else {
            DomainError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Decode(err.to_string())
    }
}

/// Serde helper: backend-assigned numeric ids are left out of create payloads
pub(crate) fn is_unassigned(id: &u32) -> bool {
    *id == 0
}

/// Serde helper: the backend sends flags as `true`/`false`, `0`/`1` or `"0"`/`"1"`
pub(crate) mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Option::<RawFlag>::deserialize(deserializer)? {
            None => false,
            Some(RawFlag::Bool(b)) => b,
            Some(RawFlag::Int(i)) => i != 0,
            Some(RawFlag::Text(s)) => matches!(s.trim(), "1" | "true" | "yes"),
        })
    }
}

/// Serde helper: decimal columns may arrive as JSON numbers or numeric strings
pub(crate) mod number {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Float(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Option::<RawNumber>::deserialize(deserializer)? {
            None => Ok(0.0),
            Some(RawNumber::Float(f)) => Ok(f),
            Some(RawNumber::Text(s)) if s.trim().is_empty() => Ok(0.0),
            Some(RawNumber::Text(s)) => s.trim().parse().map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Flagged {
        #[serde(with = "flag", default)]
        inactive: bool,
    }

    #[test]
    fn test_flag_accepts_backend_variants() {
        for (raw, expected) in [
            (r#"{"inactive": true}"#, true),
            (r#"{"inactive": 0}"#, false),
            (r#"{"inactive": 1}"#, true),
            (r#"{"inactive": "1"}"#, true),
            (r#"{"inactive": null}"#, false),
            (r#"{}"#, false),
        ] {
            let parsed: Flagged = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed.inactive, expected, "{}", raw);
        }
    }

    #[derive(Deserialize)]
    struct Priced {
        #[serde(with = "number", default)]
        rate: f64,
    }

    #[test]
    fn test_number_accepts_strings() {
        let parsed: Priced = serde_json::from_str(r#"{"rate": "1.25"}"#).unwrap();
        assert_eq!(parsed.rate, 1.25);
        let parsed: Priced = serde_json::from_str(r#"{"rate": 3}"#).unwrap();
        assert_eq!(parsed.rate, 3.0);
        assert!(serde_json::from_str::<Priced>(r#"{"rate": "abc"}"#).is_err());
    }

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = DomainError::Backend { status: 422, message: Some("Code already used".into()) };
        assert_eq!(err.user_message(), "Code already used");

        let err = DomainError::Backend { status: 500, message: None };
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);

        let err = DomainError::Transport("connection refused".into());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
