//! markdown.rs — Markdown panel adapter for docs and chat surfaces.

use crate::adapters::{PanelAdapter, RenderContext, EMPTY_PANEL_CAPTION};
use crate::error::PanelError;

#[derive(Default)]
pub struct MarkdownAdapter {}

impl MarkdownAdapter {
    pub fn new() -> Self {
        Self {}
    }
}

impl PanelAdapter for MarkdownAdapter {
    fn render(&self, ctx: &RenderContext) -> Result<String, PanelError> {
        let mut output = format!("## {}\n\n", ctx.title);

        if ctx.log.is_empty() {
            output.push_str(&format!("_{}_\n", EMPTY_PANEL_CAPTION));
            return Ok(output);
        }

        output.push_str(&format!("_{} event(s)_\n\n", ctx.log.len()));

        for entry in ctx.ordered_entries() {
            let status = if entry.success { "✅" } else { "❌" };
            output.push_str(&format!(
                "- {} `{}` **{}** · {}\n",
                status, entry.timestamp, entry.component, entry.action
            ));
            if let Some(details) = &entry.details {
                output.push_str(&format!("  - ↳ {}\n", details));
            }
        }

        Ok(output)
    }

    fn name(&self) -> &str {
        "markdown"
    }
}
