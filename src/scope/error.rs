use thiserror::Error;

use super::types::SecurityLevel;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// The caller requested a security level the context cannot satisfy.
    /// A call-site bug, not a user error: fatal to the request, never
    /// retryable.
    #[error("security level '{level}' requires {field} on the caller context")]
    MissingContext {
        level: SecurityLevel,
        field: &'static str,
    },
}
