//! Closed-set catalogs and input validation.
//!
//! Defines the valid milestone kinds plus the required-field checks applied
//! by the API layer before records reach the store.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Milestone kinds
// ---------------------------------------------------------------------------

/// The project kickoff meeting. At most one per client is expected.
pub const MILESTONE_KICKOFF: &str = "kickoff";
/// An interim review checkpoint.
pub const MILESTONE_REVIEW: &str = "review";
/// A deliverable hand-off.
pub const MILESTONE_DELIVERY: &str = "delivery";
/// Anything outside the standard three.
pub const MILESTONE_CUSTOM: &str = "custom";

/// All valid milestone kinds.
pub const VALID_MILESTONE_KINDS: &[&str] = &[
    MILESTONE_KICKOFF,
    MILESTONE_REVIEW,
    MILESTONE_DELIVERY,
    MILESTONE_CUSTOM,
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a value is present in a known list, returning a
/// descriptive error if not.
fn validate_known_key(value: &str, valid: &[&str], label: &str) -> Result<(), CoreError> {
    if valid.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {label} '{value}'. Must be one of: {valid:?}"
        )))
    }
}

/// Validate that a milestone kind is one of the known kinds.
pub fn validate_milestone_kind(kind: &str) -> Result<(), CoreError> {
    validate_known_key(kind, VALID_MILESTONE_KINDS, "milestone kind")
}

/// Validate that a required field holds a non-empty string.
pub fn validate_required(label: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{label} must be a non-empty string"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
