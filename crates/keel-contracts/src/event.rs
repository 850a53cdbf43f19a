// event.rs — Audit event data model.
//
// Every audit-worthy occurrence in a host application (a user query, an AI
// response, a policy check, a login) is recorded as an AuditEvent. Events
// are immutable once constructed: to "update" one, callers build a new
// record. Uniqueness of event_id is expected within a session's lifetime
// but is not enforced across processes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Category of an audit event.
///
/// This is a closed set: adding a category is a source-level change, and
/// every `match` over it is exhaustive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    /// A user submitted a query.
    UserQuery,
    /// A user submitted feedback on a response.
    UserFeedback,
    /// The AI produced a response.
    AiResponse,
    /// The AI escalated to a human.
    AiEscalation,
    /// A system-level error occurred.
    SystemError,
    /// The host application started.
    SystemStartup,
    /// The host application shut down.
    SystemShutdown,
    /// A policy rule was evaluated.
    PolicyCheck,
    /// A policy rule was violated.
    PolicyViolation,
    /// A human overrode an automated decision.
    HumanOverride,
    /// Data was read on a user's behalf.
    DataAccess,
    /// Data left the system boundary.
    DataExport,
    /// A user logged in.
    AuthLogin,
    /// A user logged out.
    AuthLogout,
    /// An authentication attempt failed.
    AuthFailure,
}

impl AuditEventType {
    /// The snake_case name of this category, matching its serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEventType::UserQuery => "user_query",
            AuditEventType::UserFeedback => "user_feedback",
            AuditEventType::AiResponse => "ai_response",
            AuditEventType::AiEscalation => "ai_escalation",
            AuditEventType::SystemError => "system_error",
            AuditEventType::SystemStartup => "system_startup",
            AuditEventType::SystemShutdown => "system_shutdown",
            AuditEventType::PolicyCheck => "policy_check",
            AuditEventType::PolicyViolation => "policy_violation",
            AuditEventType::HumanOverride => "human_override",
            AuditEventType::DataAccess => "data_access",
            AuditEventType::DataExport => "data_export",
            AuditEventType::AuthLogin => "auth_login",
            AuditEventType::AuthLogout => "auth_logout",
            AuditEventType::AuthFailure => "auth_failure",
        }
    }
}

impl std::fmt::Display for AuditEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AuditEventType {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user_query" => Ok(AuditEventType::UserQuery),
            "user_feedback" => Ok(AuditEventType::UserFeedback),
            "ai_response" => Ok(AuditEventType::AiResponse),
            "ai_escalation" => Ok(AuditEventType::AiEscalation),
            "system_error" => Ok(AuditEventType::SystemError),
            "system_startup" => Ok(AuditEventType::SystemStartup),
            "system_shutdown" => Ok(AuditEventType::SystemShutdown),
            "policy_check" => Ok(AuditEventType::PolicyCheck),
            "policy_violation" => Ok(AuditEventType::PolicyViolation),
            "human_override" => Ok(AuditEventType::HumanOverride),
            "data_access" => Ok(AuditEventType::DataAccess),
            "data_export" => Ok(AuditEventType::DataExport),
            "auth_login" => Ok(AuditEventType::AuthLogin),
            "auth_logout" => Ok(AuditEventType::AuthLogout),
            "auth_failure" => Ok(AuditEventType::AuthFailure),
            other => Err(ContractError::UnknownEventType(other.to_string())),
        }
    }
}

/// A single value in an event's detail or metadata map.
///
/// Constrains what detail maps can carry instead of accepting arbitrary
/// JSON: booleans, integers, floats, and text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for DetailValue {
    fn from(v: bool) -> Self {
        DetailValue::Bool(v)
    }
}

impl From<i64> for DetailValue {
    fn from(v: i64) -> Self {
        DetailValue::Int(v)
    }
}

impl From<f64> for DetailValue {
    fn from(v: f64) -> Self {
        DetailValue::Float(v)
    }
}

impl From<&str> for DetailValue {
    fn from(v: &str) -> Self {
        DetailValue::Text(v.to_string())
    }
}

impl From<String> for DetailValue {
    fn from(v: String) -> Self {
        DetailValue::Text(v)
    }
}

/// A single audit event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Identifier for this event, expected unique within a session.
    pub event_id: String,

    /// Category of the event.
    pub event_type: AuditEventType,

    /// When the event occurred (UTC).
    pub timestamp: DateTime<Utc>,

    /// Component or module that generated the event.
    pub component: String,

    /// Human description of the action that was performed.
    pub action: String,

    /// User associated with the event, if any.
    pub user_id: Option<String>,

    /// Session the event belongs to, if any.
    pub session_id: Option<String>,

    /// Whether the action completed successfully.
    pub success: bool,

    /// Event-specific details.
    #[serde(default)]
    pub details: BTreeMap<String, DetailValue>,

    /// Extended tracking metadata.
    #[serde(default)]
    pub metadata: BTreeMap<String, DetailValue>,
}

impl AuditEvent {
    /// Create a new audit event with the current timestamp.
    ///
    /// Validation is atomic: `event_id`, `component`, and `action` must be
    /// non-empty or no record is constructed. Optional fields start empty —
    /// set them with the `with_*` builders:
    ///
    /// ```
    /// use keel_contracts::{AuditEvent, AuditEventType};
    ///
    /// let event = AuditEvent::new("EVT_123ABC", AuditEventType::UserQuery, "ChatUI", "User submitted query")
    ///     .unwrap()
    ///     .with_user("user_001")
    ///     .with_detail("tokens", 150_i64);
    /// assert!(event.success);
    /// ```
    pub fn new(
        event_id: impl Into<String>,
        event_type: AuditEventType,
        component: impl Into<String>,
        action: impl Into<String>,
    ) -> Result<Self, ContractError> {
        Ok(Self {
            event_id: require_non_empty("event_id", event_id.into())?,
            event_type,
            timestamp: Utc::now(),
            component: require_non_empty("component", component.into())?,
            action: require_non_empty("action", action.into())?,
            user_id: None,
            session_id: None,
            success: true,
            details: BTreeMap::new(),
            metadata: BTreeMap::new(),
        })
    }

    /// Set the associated user and return self (builder pattern).
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the owning session and return self.
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Set the success flag and return self.
    pub fn with_success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    /// Add one detail entry and return self.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<DetailValue>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Add one metadata entry and return self.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<DetailValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Reject empty (or whitespace-only) required string fields.
pub(crate) fn require_non_empty(
    field: &'static str,
    value: String,
) -> Result<String, ContractError> {
    if value.trim().is_empty() {
        return Err(ContractError::EmptyField { field });
    }
    Ok(value)
}
