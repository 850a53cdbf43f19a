// log.rs — In-memory governance log and per-session store.
//
// A GovernanceLog is an append-only ordered sequence of LogEntry records:
// insertion order is chronological order. Logs are unbounded by default; an
// optional capacity evicts the oldest entry first.
//
// The GovernanceStore maps session IDs to independent logs. It is the
// explicit context object hosts own — there is no ambient global state.
// Everything here is single-threaded: one session's log has one writer.
// A host that shares a store across threads must wrap it in a mutex so each
// append stays a single exclusive region.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::entry::LogEntry;

/// Append-only ordered sequence of governance log entries.
#[derive(Debug, Clone, Default)]
pub struct GovernanceLog {
    entries: VecDeque<LogEntry>,
    capacity: Option<usize>,
}

impl GovernanceLog {
    /// Create an unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that holds at most `capacity` entries, evicting the
    /// oldest entry when full. A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: Some(capacity.max(1)),
        }
    }

    /// Append an entry stamped with the current time, returning a copy of
    /// the stored entry.
    pub fn append(
        &mut self,
        component: impl Into<String>,
        action: impl Into<String>,
        success: bool,
        details: Option<String>,
    ) -> LogEntry {
        if let Some(capacity) = self.capacity {
            while self.entries.len() >= capacity {
                self.entries.pop_front();
            }
        }

        let entry = LogEntry::new(component, action, success, details);
        debug!(
            component = %entry.component,
            action = %entry.action,
            success = entry.success,
            "appended governance log entry"
        );
        self.entries.push_back(entry.clone());
        entry
    }

    /// Iterate entries in chronological order (oldest first).
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Iterate entries newest first — the default panel display order.
    pub fn newest_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured capacity, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

/// Per-session registry of governance logs.
///
/// Each session ID owns an independent log; nothing is shared between
/// sessions. The store lives for the lifetime of the hosting application
/// and its logs for the lifetime of their sessions.
#[derive(Debug, Default)]
pub struct GovernanceStore {
    sessions: HashMap<String, GovernanceLog>,
    log_capacity: Option<usize>,
}

impl GovernanceStore {
    /// Create a store whose logs are unbounded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose logs each hold at most `capacity` entries.
    pub fn with_log_capacity(capacity: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            log_capacity: Some(capacity.max(1)),
        }
    }

    /// Idempotently ensure a log exists for `session_id`.
    ///
    /// An existing log — and its entries — is left untouched.
    pub fn init(&mut self, session_id: &str) {
        let capacity = self.log_capacity;
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| new_log(capacity));
    }

    /// Append an entry to the session's log, initializing the log first if
    /// this session has not been seen before.
    pub fn append(
        &mut self,
        session_id: &str,
        component: impl Into<String>,
        action: impl Into<String>,
        success: bool,
        details: Option<String>,
    ) -> LogEntry {
        let capacity = self.log_capacity;
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| new_log(capacity))
            .append(component, action, success, details)
    }

    /// The log for a session, if it has been initialized.
    pub fn log(&self, session_id: &str) -> Option<&GovernanceLog> {
        self.sessions.get(session_id)
    }

    /// Number of sessions with an initialized log.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

fn new_log(capacity: Option<usize>) -> GovernanceLog {
    match capacity {
        Some(capacity) => GovernanceLog::with_capacity(capacity),
        None => GovernanceLog::new(),
    }
}
