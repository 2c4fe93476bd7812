use std::fmt;

use serde::Serialize;

/// States of the repair loop.
///
/// `Generating → Validating → {Accepted | NeedsRepair | Exhausted}`, with
/// `NeedsRepair → Generating` on the next attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairState {
    Generating,
    Validating,
    NeedsRepair,
    Accepted,
    Exhausted,
}

impl RepairState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Accepted | Self::Exhausted)
    }

    /// State after validating attempt `attempt` of `max_attempts`.
    pub fn after_validation(accepted: bool, attempt: u32, max_attempts: u32) -> Self {
        if accepted {
            Self::Accepted
        } else if attempt < max_attempts {
            Self::NeedsRepair
        } else {
            Self::Exhausted
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generating => "generating",
            Self::Validating => "validating",
            Self::NeedsRepair => "needs_repair",
            Self::Accepted => "accepted",
            Self::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for RepairState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_outcomes() {
        assert_eq!(RepairState::after_validation(true, 3, 3), RepairState::Accepted);
        assert_eq!(RepairState::after_validation(false, 1, 3), RepairState::NeedsRepair);
        assert_eq!(RepairState::after_validation(false, 3, 3), RepairState::Exhausted);
        assert!(RepairState::Exhausted.is_terminal());
        assert!(!RepairState::NeedsRepair.is_terminal());
    }
}
