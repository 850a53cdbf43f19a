// cost.rs — Cost-tracking record for AI invocations.
//
// One record per model invocation, correlated to an AuditEvent through
// event_id by convention (nothing enforces the link). Records are immutable
// after construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ContractError;
use crate::event::require_non_empty;

/// Token usage and derived cost of a single AI invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostRecord {
    /// Identifier correlating this record to an audit event.
    pub event_id: String,

    /// When the cost was incurred (UTC).
    pub timestamp: DateTime<Utc>,

    /// Model that served the invocation (e.g. "gpt-4o-mini").
    pub model: String,

    /// Input/prompt tokens.
    pub input_tokens: u64,

    /// Output/completion tokens.
    pub output_tokens: u64,

    /// Caller-reported total. Advisory: expected to equal input + output
    /// but a mismatch is logged, not rejected.
    pub total_tokens: u64,

    /// Calculated cost in USD.
    pub cost_usd: f64,

    /// Component that incurred the cost, if known.
    pub component: Option<String>,

    /// Session the cost is allocated to, if any.
    pub session_id: Option<String>,
}

impl CostRecord {
    /// Create a new cost record with the current timestamp.
    ///
    /// Validation is atomic: `event_id` and `model` must be non-empty and
    /// `cost_usd` must be a finite, non-negative number, or no record is
    /// constructed. A `total_tokens` that disagrees with
    /// `input_tokens + output_tokens` is kept as supplied and logged at
    /// warn level.
    pub fn new(
        event_id: impl Into<String>,
        model: impl Into<String>,
        input_tokens: u64,
        output_tokens: u64,
        total_tokens: u64,
        cost_usd: f64,
    ) -> Result<Self, ContractError> {
        let event_id = require_non_empty("event_id", event_id.into())?;
        let model = require_non_empty("model", model.into())?;

        if !cost_usd.is_finite() || cost_usd < 0.0 {
            return Err(ContractError::InvalidValue {
                field: "cost_usd",
                reason: format!("must be a finite non-negative number, got {}", cost_usd),
            });
        }

        let expected = input_tokens.saturating_add(output_tokens);
        if total_tokens != expected {
            warn!(
                event_id = %event_id,
                total_tokens,
                expected,
                "total_tokens does not match input + output; keeping caller value"
            );
        }

        Ok(Self {
            event_id,
            timestamp: Utc::now(),
            model,
            input_tokens,
            output_tokens,
            total_tokens,
            cost_usd,
            component: None,
            session_id: None,
        })
    }

    /// Set the component that incurred the cost and return self.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set the session the cost is allocated to and return self.
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}
