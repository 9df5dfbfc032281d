//! Date-of-birth field logic: `DD/MM/YYYY` input masking, validation and a
//! years/months/days age breakdown.

pub mod age;
pub mod calculator;
pub mod config;
pub mod mask;
pub mod render;
pub mod session;

pub use age::AgeBreakdown;
pub use calculator::{AgeError, CalendarPolicy, calculate_age};
pub use mask::{MaskedDate, format_input};
pub use session::{Outcome, Snapshot};
