// error.rs — Error types for contract construction.
//
// Validation is atomic: a record either constructs with every field checked
// or it does not construct at all. There is no partially-valid state.

use thiserror::Error;

/// Errors raised when a contract record fails validation at construction.
#[derive(Debug, Error)]
pub enum ContractError {
    /// A required string field was empty.
    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    /// A field value failed validation.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// An event type name did not match any known category.
    #[error("unknown audit event type: {0}")]
    UnknownEventType(String),
}
