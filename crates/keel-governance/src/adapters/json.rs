//! json.rs — JSON panel adapter for machine-readable output.

use serde::Serialize;

use crate::adapters::{PanelAdapter, RenderContext};
use crate::entry::LogEntry;
use crate::error::PanelError;

/// The serialized panel document.
///
/// Entries appear in the context's display order; consumers that need a
/// different order can re-sort client-side.
#[derive(Serialize)]
struct PanelDocument<'a> {
    title: &'a str,
    event_count: usize,
    entries: Vec<&'a LogEntry>,
}

#[derive(Default)]
pub struct JsonAdapter {}

impl JsonAdapter {
    pub fn new() -> Self {
        Self {}
    }
}

impl PanelAdapter for JsonAdapter {
    fn render(&self, ctx: &RenderContext) -> Result<String, PanelError> {
        let document = PanelDocument {
            title: ctx.title,
            event_count: ctx.log.len(),
            entries: ctx.ordered_entries(),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::GovernanceLog;

    #[test]
    fn renders_valid_json_with_entries() {
        let mut log = GovernanceLog::new();
        log.append("Auth", "User login", true, None);
        log.append("ChatUI", "Query submitted", false, Some("timeout".to_string()));

        let adapter = JsonAdapter::new();
        let output = adapter.render(&RenderContext::new(&log, "Governance Log")).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["title"], "Governance Log");
        assert_eq!(parsed["event_count"], 2);
        assert_eq!(parsed["entries"].as_array().unwrap().len(), 2);
        // Newest first by default.
        assert_eq!(parsed["entries"][0]["component"], "ChatUI");
        assert_eq!(parsed["entries"][0]["success"], false);
        assert_eq!(parsed["entries"][0]["details"], "timeout");
    }

    #[test]
    fn empty_log_renders_empty_entry_array() {
        let log = GovernanceLog::new();
        let adapter = JsonAdapter::new();
        let output = adapter.render(&RenderContext::new(&log, "Panel")).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event_count"], 0);
        assert!(parsed["entries"].as_array().unwrap().is_empty());
    }
}
