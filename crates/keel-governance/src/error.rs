// error.rs — Error types for panel rendering.

use thiserror::Error;

/// Errors that can occur while rendering a governance panel.
///
/// Rendering an empty log is not an error — adapters render a placeholder
/// caption instead.
#[derive(Debug, Error)]
pub enum PanelError {
    /// Serializing the panel document failed.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
