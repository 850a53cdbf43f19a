//! terminal.rs — Terminal panel adapter with colored status icons.

use crate::adapters::{PanelAdapter, RenderContext, EMPTY_PANEL_CAPTION};
use crate::entry::LogEntry;
use crate::error::PanelError;

use keel_common::truncate_text;

/// Longest detail string shown inline before truncation.
const DETAIL_DISPLAY_WIDTH: usize = 80;

#[derive(Default)]
pub struct TerminalAdapter {}

impl TerminalAdapter {
    pub fn new() -> Self {
        Self {}
    }

    fn render_entry(&self, entry: &LogEntry) -> String {
        let status_icon = if entry.success {
            "\x1b[32m✓\x1b[0m" // Green
        } else {
            "\x1b[31m✗\x1b[0m" // Red
        };

        let mut output = format!(
            "  {} \x1b[2m{}\x1b[0m \x1b[1m{}\x1b[0m · {}\n",
            status_icon, entry.timestamp, entry.component, entry.action
        );

        if let Some(details) = &entry.details {
            output.push_str(&format!(
                "      \x1b[2m↳ {}\x1b[0m\n",
                truncate_text(details, DETAIL_DISPLAY_WIDTH)
            ));
        }

        output
    }
}

impl PanelAdapter for TerminalAdapter {
    fn render(&self, ctx: &RenderContext) -> Result<String, PanelError> {
        let mut output = format!("\x1b[1m{}\x1b[0m\n", ctx.title);

        if ctx.log.is_empty() {
            output.push_str(&format!("\x1b[2m{}\x1b[0m\n", EMPTY_PANEL_CAPTION));
            return Ok(output);
        }

        output.push_str(&format!("\x1b[2m{} event(s)\x1b[0m\n\n", ctx.log.len()));

        for entry in ctx.ordered_entries() {
            output.push_str(&self.render_entry(entry));
        }

        Ok(output)
    }

    fn name(&self) -> &str {
        "terminal"
    }
}
