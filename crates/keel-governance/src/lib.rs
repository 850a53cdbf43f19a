//! # keel-governance
//!
//! Session-scoped governance log and panel rendering for Keel.
//!
//! Host applications record UI-observable actions as [`LogEntry`] records in
//! a per-session [`GovernanceLog`], then project the log into a sidebar
//! panel through a [`adapters::PanelAdapter`]. The log is an in-session
//! audit trail for human inspection, not a durable compliance record.
//!
//! ## Quick Example
//!
//! ```rust
//! use keel_governance::{GovernanceStore, RenderContext, PanelFormat, get_adapter};
//!
//! let mut store = GovernanceStore::new();
//! store.append("sess_1", "Auth", "User login", true, None);
//!
//! let log = store.log("sess_1").unwrap();
//! let panel = get_adapter(PanelFormat::Terminal)
//!     .render(&RenderContext::new(log, "Governance Log"))
//!     .unwrap();
//! assert!(panel.contains("User login"));
//! ```

pub mod adapters;
pub mod entry;
pub mod error;
pub mod log;

// Re-export the main types at the crate root for convenience.
// Users can write `use keel_governance::GovernanceLog` instead of the full path.
pub use adapters::{get_adapter, DisplayOrder, PanelAdapter, PanelFormat, RenderContext};
pub use entry::LogEntry;
pub use error::PanelError;
pub use log::{GovernanceLog, GovernanceStore};
