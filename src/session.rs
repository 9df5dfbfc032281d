//! Input field state, rebuilt wholesale on every input event.

use chrono::NaiveDate;
use tracing::debug;

use crate::age::AgeBreakdown;
use crate::calculator::{AgeError, CalendarPolicy, calculate_age};
use crate::mask::{MaskedDate, format_input};

/// What the field currently shows beneath the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Input is incomplete, or nothing has been typed yet.
    #[default]
    Pending,
    Age(AgeBreakdown),
    Invalid(AgeError),
}

/// Immutable view of the date-of-birth field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    input: MaskedDate,
    outcome: Outcome,
    focused: bool,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces the state after the field content became `raw`.
    ///
    /// Any previous age or error is discarded. The calculator only runs
    /// once the masked input is complete.
    pub fn apply(&self, raw: &str, today: NaiveDate, policy: CalendarPolicy) -> Self {
        let input = format_input(&self.input, raw);

        let outcome = if input.is_complete() {
            match calculate_age(input.as_str(), today, policy) {
                Ok(age) => Outcome::Age(age),
                Err(err) => Outcome::Invalid(err),
            }
        } else {
            Outcome::Pending
        };
        debug!(input = %input, ?outcome, "input applied");

        Self {
            input,
            outcome,
            focused: self.focused,
        }
    }

    pub fn focus(&self) -> Self {
        Self {
            focused: true,
            ..self.clone()
        }
    }

    pub fn blur(&self) -> Self {
        Self {
            focused: false,
            ..self.clone()
        }
    }

    pub fn input(&self) -> &MaskedDate {
        &self.input
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn result(&self) -> Option<AgeBreakdown> {
        match self.outcome {
            Outcome::Age(age) => Some(age),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<AgeError> {
        match self.outcome {
            Outcome::Invalid(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}
