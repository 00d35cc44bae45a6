//! Error types for the upstream ERP API client.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Field-level validation errors extracted from a 400 response payload.
///
/// The upstream reports validation failures as a map of field name to a
/// list of messages; non-field errors arrive under `non_field_errors`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FieldErrors(pub HashMap<String, Vec<String>>);

impl FieldErrors {
    /// Messages for a single field, if any.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Whether any field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

/// Errors returned by the upstream ERP API client.
///
/// Mirrors the failure taxonomy the original surface distinguished:
/// connectivity, authorization, validation, and not-found each get their
/// own variant so call sites can map them to distinct user-facing states.
#[derive(Debug, Error)]
pub enum ErpError {
    /// The upstream could not be reached or the request failed in transit.
    #[error("upstream unreachable: {0}")]
    Network(#[from] reqwest::Error),

    /// 401 - the session token is missing or no longer valid.
    #[error("upstream rejected credentials")]
    Unauthorized,

    /// 403 - the authenticated user may not perform this operation.
    #[error("upstream denied access")]
    Forbidden,

    /// 400 - the request payload failed validation.
    #[error("upstream rejected input: {0}")]
    Validation(FieldErrors),

    /// 404 - the resource does not exist.
    #[error("upstream resource not found")]
    NotFound,

    /// The response body could not be decoded as the expected shape.
    #[error("upstream returned malformed data: {0}")]
    Decode(String),

    /// Any other non-success status.
    #[error("upstream returned unexpected status {0}")]
    UnexpectedStatus(u16),
}

impl ErpError {
    /// Whether the failure indicates the session should be re-established.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_lookup() {
        let mut map = HashMap::new();
        map.insert("username".to_owned(), vec!["required".to_owned()]);
        let errors = FieldErrors(map);

        assert_eq!(errors.field("username"), Some(&["required".to_owned()][..]));
        assert_eq!(errors.field("password"), None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_auth_failure_predicate() {
        assert!(ErpError::Unauthorized.is_auth_failure());
        assert!(ErpError::Forbidden.is_auth_failure());
        assert!(!ErpError::NotFound.is_auth_failure());
        assert!(!ErpError::UnexpectedStatus(502).is_auth_failure());
    }

    #[test]
    fn test_validation_display_includes_fields() {
        let mut map = HashMap::new();
        map.insert("amount".to_owned(), vec!["must be positive".to_owned()]);
        let err = ErpError::Validation(FieldErrors(map));
        assert!(err.to_string().contains("amount: must be positive"));
    }
}
