// id.rs — Event identifier generation.
//
// Event IDs look like "AUDIT_3F2A91C04B7D": a caller-chosen prefix, an
// underscore, and a fixed-length uppercase hex suffix. The suffix is drawn
// from a v4 UUID, so uniqueness is probabilistic — collisions are negligible
// but not impossible, and no registry enforces them.

use uuid::Uuid;

/// Length of the random hex suffix in a generated event ID.
pub const ID_SUFFIX_LEN: usize = 12;

/// Generate an event identifier in the form `"{prefix}_{suffix}"`.
///
/// The suffix is a 12-character uppercase hexadecimal string. Two
/// consecutive calls return different suffixes with overwhelming
/// probability.
///
/// # Example
///
/// ```
/// let id = keel_common::generate_event_id("AUDIT");
/// assert!(id.starts_with("AUDIT_"));
/// assert_eq!(id.len(), "AUDIT_".len() + 12);
/// ```
pub fn generate_event_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, hex[..ID_SUFFIX_LEN].to_uppercase())
}
