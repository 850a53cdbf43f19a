// error.rs — Error types for cost calculation.

use thiserror::Error;

/// Errors that can occur during pricing lookups and cost calculation.
#[derive(Debug, Error)]
pub enum CostError {
    /// The model has no entry in the pricing table. There is no fallback
    /// rate: callers must register the model before billing against it.
    #[error("unknown model: {0}")]
    UnknownModel(String),
}
