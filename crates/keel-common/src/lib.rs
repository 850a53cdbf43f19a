//! # keel-common
//!
//! Pure helper utilities shared across the Keel workspace and its host
//! applications.
//!
//! Everything in this crate is a stateless function or a plain value type:
//! no I/O, no global state, no suspension points. The one non-deterministic
//! function is [`generate_event_id`], which draws randomness from a v4 UUID.
//!
//! ## Key components
//!
//! - [`generate_event_id`] — prefixed random event identifiers
//! - [`format_timestamp`] / [`format_timestamp_short`] — display timestamps
//! - [`truncate_text`] — character-safe truncation with an ellipsis marker
//! - [`PricingTable`] — data-driven per-model token rates
//! - [`CostCalculator`] / [`calculate_cost`] — token-usage cost in USD

pub mod cost;
pub mod error;
pub mod id;
pub mod pricing;
pub mod text;
pub mod time;

// Re-export the main items at the crate root for convenience.
// Users can write `use keel_common::truncate_text` instead of the full path.
pub use cost::{calculate_cost, CostCalculator};
pub use error::CostError;
pub use id::generate_event_id;
pub use pricing::{ModelRate, PricingTable};
pub use text::truncate_text;
pub use time::{format_timestamp, format_timestamp_short};
