//! adapters — Pluggable renderers for the governance panel.
//!
//! Adapters project a [`GovernanceLog`] into different display formats:
//! - **Terminal**: Colored inline list with status icons (default)
//! - **Markdown**: GitHub-ready list for docs and chat surfaces
//! - **JSON**: Machine-readable structured output
//!
//! Rendering is a pure projection: no adapter mutates the log, and an empty
//! log renders a placeholder caption rather than an error.

use crate::error::PanelError;
use crate::log::GovernanceLog;

pub mod json;
pub mod markdown;
pub mod terminal;

/// Caption shown when a panel has no entries to display.
pub const EMPTY_PANEL_CAPTION: &str = "No governance events recorded yet.";

/// Output format for panel rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFormat {
    Terminal,
    Markdown,
    Json,
}

impl std::str::FromStr for PanelFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(PanelFormat::Terminal),
            "markdown" | "md" => Ok(PanelFormat::Markdown),
            "json" => Ok(PanelFormat::Json),
            _ => Err(format!(
                "Invalid panel format: '{}'. Valid formats: terminal, markdown, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for PanelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelFormat::Terminal => write!(f, "terminal"),
            PanelFormat::Markdown => write!(f, "markdown"),
            PanelFormat::Json => write!(f, "json"),
        }
    }
}

/// Ordering of entries in the rendered panel.
///
/// Newest-first is the default: the panel is a live audit trail and the most
/// recent event is the one a reviewer looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayOrder {
    /// Most recent entry first.
    #[default]
    NewestFirst,
    /// Insertion (chronological) order.
    Chronological,
}

/// Context for rendering a governance panel.
pub struct RenderContext<'a> {
    pub log: &'a GovernanceLog,
    pub title: &'a str,
    pub order: DisplayOrder,
}

impl<'a> RenderContext<'a> {
    /// Context with the default newest-first ordering.
    pub fn new(log: &'a GovernanceLog, title: &'a str) -> Self {
        Self {
            log,
            title,
            order: DisplayOrder::default(),
        }
    }

    /// Entries in display order.
    pub(crate) fn ordered_entries(&self) -> Vec<&'a crate::entry::LogEntry> {
        match self.order {
            DisplayOrder::NewestFirst => self.log.newest_first().collect(),
            DisplayOrder::Chronological => self.log.entries().collect(),
        }
    }
}

/// Panel adapter trait — renders a governance log in different formats.
pub trait PanelAdapter {
    /// Render the panel to a string.
    fn render(&self, ctx: &RenderContext) -> Result<String, PanelError>;

    /// Adapter name (for logging/debugging).
    fn name(&self) -> &str;
}

/// Get an adapter instance for the given format.
pub fn get_adapter(format: PanelFormat) -> Box<dyn PanelAdapter> {
    match format {
        PanelFormat::Terminal => Box::new(terminal::TerminalAdapter::new()),
        PanelFormat::Markdown => Box::new(markdown::MarkdownAdapter::new()),
        PanelFormat::Json => Box::new(json::JsonAdapter::new()),
    }
}
