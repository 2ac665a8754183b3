//! Onboarding progression state machine.
//!
//! A client's progress through onboarding is captured by four completion
//! flags in a fixed prefix order: contract signed, system details complete,
//! kickoff scheduled, resources accessed. The current state is always
//! derived from the flags; no separate state value is stored, so the two
//! can never drift. Flags never revert to false.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// States
// ---------------------------------------------------------------------------

/// The linear onboarding states, in progression order.
///
/// `ResourcesAccessed` is terminal; `AwaitingContract` is initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OnboardingState {
    AwaitingContract,
    ContractSigned,
    SystemDetailsComplete,
    KickoffScheduled,
    ResourcesAccessed,
}

/// Number of onboarding steps a client performs (the terminal state has no
/// step of its own).
pub const STEP_COUNT: u8 = 4;

// ---------------------------------------------------------------------------
// Progress flags
// ---------------------------------------------------------------------------

/// The four completion flags, in prefix order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressFlags {
    pub contract_signed: bool,
    pub system_details_complete: bool,
    pub kickoff_scheduled: bool,
    pub resources_accessed: bool,
}

impl ProgressFlags {
    fn ordered(self) -> [bool; 4] {
        [
            self.contract_signed,
            self.system_details_complete,
            self.kickoff_scheduled,
            self.resources_accessed,
        ]
    }

    /// Derive the current state from the flags: the most advanced true flag
    /// wins, falling back to `AwaitingContract` when none are set.
    pub fn derived_state(self) -> OnboardingState {
        if self.resources_accessed {
            OnboardingState::ResourcesAccessed
        } else if self.kickoff_scheduled {
            OnboardingState::KickoffScheduled
        } else if self.system_details_complete {
            OnboardingState::SystemDetailsComplete
        } else if self.contract_signed {
            OnboardingState::ContractSigned
        } else {
            OnboardingState::AwaitingContract
        }
    }

    /// Status label for summary views, evaluated in reverse priority so the
    /// most advanced true flag always wins regardless of how the flags were
    /// set. The summary badge only distinguishes four labels; a client with
    /// resources accessed still reads "Kickoff Scheduled".
    pub fn status_label(self) -> &'static str {
        if self.kickoff_scheduled {
            "Kickoff Scheduled"
        } else if self.system_details_complete {
            "System Details Complete"
        } else if self.contract_signed {
            "Contract Signed"
        } else {
            "Awaiting Contract"
        }
    }

    /// The next step to perform (1-4): one past the number of flags already
    /// true in prefix order, clamped to the final step once everything is
    /// done.
    pub fn current_step(self) -> u8 {
        let prefix = self.ordered().iter().take_while(|f| **f).count() as u8;
        (prefix + 1).min(STEP_COUNT)
    }

    /// True when the set of true flags forms a prefix of the step order,
    /// i.e. no flag is set while an earlier one is still false.
    pub fn is_prefix_consistent(self) -> bool {
        let flags = self.ordered();
        let first_false = flags.iter().position(|f| !*f).unwrap_or(flags.len());
        flags[first_false..].iter().all(|f| !*f)
    }
}

// ---------------------------------------------------------------------------
// Transition preconditions
// ---------------------------------------------------------------------------

/// Signing requires an unsigned contract. Re-issuing against a signed
/// client is a hard rejection, so of two racing calls exactly one succeeds.
pub fn check_sign_contract(flags: ProgressFlags) -> Result<(), CoreError> {
    if flags.contract_signed {
        return Err(CoreError::Precondition(
            "Contract is already signed".to_string(),
        ));
    }
    Ok(())
}

/// The system survey requires a signed contract and an incomplete survey.
pub fn check_complete_survey(flags: ProgressFlags) -> Result<(), CoreError> {
    if !flags.contract_signed {
        return Err(CoreError::Precondition(
            "Contract must be signed before the system survey".to_string(),
        ));
    }
    if flags.system_details_complete {
        return Err(CoreError::Precondition(
            "System survey is already complete".to_string(),
        ));
    }
    Ok(())
}

/// Scheduling kickoff requires a completed survey, an unscheduled kickoff,
/// and a meeting URL on the client record.
pub fn check_schedule_kickoff(
    flags: ProgressFlags,
    has_meeting_url: bool,
) -> Result<(), CoreError> {
    if !flags.system_details_complete {
        return Err(CoreError::Precondition(
            "System details must be complete before scheduling kickoff".to_string(),
        ));
    }
    if flags.kickoff_scheduled {
        return Err(CoreError::Precondition(
            "Kickoff is already scheduled".to_string(),
        ));
    }
    if !has_meeting_url {
        return Err(CoreError::Precondition(
            "A meeting URL must be set before scheduling kickoff".to_string(),
        ));
    }
    Ok(())
}

/// Accessing resources requires a scheduled kickoff.
pub fn check_mark_resources_accessed(flags: ProgressFlags) -> Result<(), CoreError> {
    if !flags.kickoff_scheduled {
        return Err(CoreError::Precondition(
            "Kickoff must be scheduled before accessing resources".to_string(),
        ));
    }
    if flags.resources_accessed {
        return Err(CoreError::Precondition(
            "Resources are already marked accessed".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
