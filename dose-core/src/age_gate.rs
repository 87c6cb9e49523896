//! Age verification gate.
//!
//! A small state machine that blocks the calculator until the user has
//! affirmed being of age. The affirmative answer is persisted (see
//! [`crate::db::repository::DoseRepository::set_age_verified`]) so later
//! sessions skip the gate entirely; a denial is never persisted, so the
//! next session asks again.

use tracing::debug;

/// Event fed to the gate: the user's answer to the age prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// "I am 21 or older."
    Confirm,
    /// "I am not 21."
    Deny,
}

/// Gate state for one session.
///
/// `Verified` and `Denied` are terminal: once reached, every further event
/// maps the state to itself. `Denied` holds only for the current session
/// since nothing is persisted on denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeGate {
    #[default]
    Unverified,
    Verified,
    Denied,
}

impl AgeGate {
    /// Initial state for a session, given the persisted verification flag.
    ///
    /// A true flag means some earlier session confirmed; the gate starts
    /// directly in `Verified` and is never shown.
    pub fn from_flag(verified: bool) -> Self {
        if verified {
            AgeGate::Verified
        } else {
            AgeGate::Unverified
        }
    }

    /// Applies one event and returns the next state.
    ///
    /// On a fresh `Unverified -> Verified` transition the caller is
    /// responsible for persisting the verification flag.
    pub fn apply(
        self,
        event: GateEvent,
    ) -> Self {
        let next = match (self, event) {
            (AgeGate::Unverified, GateEvent::Confirm) => AgeGate::Verified,
            (AgeGate::Unverified, GateEvent::Deny) => AgeGate::Denied,
            // Terminal states absorb everything.
            (state, _) => state,
        };
        if next != self {
            debug!(from = ?self, to = ?next, "age gate transition");
        }
        next
    }

    /// True only when the calculator may be used.
    pub fn allows_entry(&self) -> bool {
        matches!(self, AgeGate::Verified)
    }

    /// True once no further prompt makes sense this session.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AgeGate::Unverified)
    }
}
