// entry.rs — Governance log entry.
//
// A LogEntry is a lightweight display record, deliberately simpler than the
// full AuditEvent contract: the two shapes agree by convention only. The
// timestamp is captured as a short display string at append time; entries
// are never mutated after insertion.

use serde::{Deserialize, Serialize};

use keel_common::format_timestamp_short;

/// One governance event, as displayed in the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Short display timestamp (`HH:MM:SS`), captured at creation.
    pub timestamp: String,

    /// Component that generated the entry.
    pub component: String,

    /// Action that was performed.
    pub action: String,

    /// Whether the action was successful.
    pub success: bool,

    /// Human-readable details, if any.
    pub details: Option<String>,
}

impl LogEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        component: impl Into<String>,
        action: impl Into<String>,
        success: bool,
        details: Option<String>,
    ) -> Self {
        Self {
            timestamp: format_timestamp_short(None),
            component: component.into(),
            action: action.into(),
            success,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_captures_short_timestamp() {
        let entry = LogEntry::new("Auth", "User login", true, None);
        let parts: Vec<&str> = entry.timestamp.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.len() == 2));
    }

    #[test]
    fn entry_keeps_supplied_values() {
        let entry = LogEntry::new(
            "PolicyEngine",
            "Compliance check",
            false,
            Some("Policy violation: PII detected".to_string()),
        );
        assert_eq!(entry.component, "PolicyEngine");
        assert_eq!(entry.action, "Compliance check");
        assert!(!entry.success);
        assert_eq!(
            entry.details.as_deref(),
            Some("Policy violation: PII detected")
        );
    }

    #[test]
    fn entry_serializes_to_json() {
        let entry = LogEntry::new("Test", "Serialize", true, None);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"component\":\"Test\""));
        assert!(json.contains("\"timestamp\""));
    }
}
