//! Inbound commands to the monitor.
//!
//! Debounced button presses are mapped to commands per variant by
//! [`command_for`]; the [`Monitor`](super::service::Monitor) interprets them.

use crate::config::Variant;
use crate::drivers::button::ButtonId;
use crate::mood::Mood;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Append a mood event with the current snapshot and show the overlay.
    RecordMood(Mood),

    /// Dashboard: go to the next page (wraps).
    NextPage,

    /// Dashboard: go to the previous page (wraps).
    PreviousPage,
}

/// Button mapping.  Button 2 has no function on the dashboard.
pub fn command_for(variant: Variant, button: ButtonId) -> Option<AppCommand> {
    match (variant, button) {
        (Variant::Mandala, ButtonId::One) => Some(AppCommand::RecordMood(Mood::Good)),
        (Variant::Mandala, ButtonId::Two) => Some(AppCommand::RecordMood(Mood::Neutral)),
        (Variant::Mandala, ButtonId::Three) => Some(AppCommand::RecordMood(Mood::Bad)),
        (Variant::Dashboard, ButtonId::One) => Some(AppCommand::PreviousPage),
        (Variant::Dashboard, ButtonId::Two) => None,
        (Variant::Dashboard, ButtonId::Three) => Some(AppCommand::NextPage),
    }
}
