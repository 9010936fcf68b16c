//! Seat selection
//!
//! [`SelectionState`] is the single owned record of what the user has
//! picked; [`SeatSelectionEngine`] holds the fixed facts of the chosen
//! screening (layout + occupancy) and mutates the state through
//! validated operations. Failed operations leave the state untouched.

mod engine;
mod state;

pub use engine::{SeatSelectionEngine, SeatStatus, ToggleOutcome};
pub use state::SelectionState;

#[cfg(test)]
mod tests;
