//! # keel-contracts
//!
//! Shared data contracts for the Keel workspace: audit events and
//! cost-tracking records used by the downstream chat applications.
//!
//! Records validate atomically at construction and are immutable afterward —
//! to "update" a record, construct a new one. All contracts serialize with
//! serde; enums use snake_case names on the wire.
//!
//! ## Quick Example
//!
//! ```rust
//! use keel_contracts::{AuditEvent, AuditEventType};
//!
//! let event = AuditEvent::new("EVT_1A2B3C", AuditEventType::AuthLogin, "Auth", "User login")
//!     .unwrap()
//!     .with_user("user_001");
//! assert_eq!(event.event_type.as_str(), "auth_login");
//! ```

pub mod cost;
pub mod error;
pub mod event;

// Re-export the main types at the crate root for convenience.
// Users can write `use keel_contracts::AuditEvent` instead of the full path.
pub use cost::CostRecord;
pub use error::ContractError;
pub use event::{AuditEvent, AuditEventType, DetailValue};
