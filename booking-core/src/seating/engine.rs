//! Validated seat-selection operations

use super::SelectionState;
use shared::{BookingError, BookingResult, Screen, SeatId, TicketType};
use std::collections::HashSet;
use tracing::debug;

/// Display status of a single seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    /// Sold before this session started
    Occupied,
    /// Part of the current selection
    Selected,
    Available,
}

/// Result of clicking a seat on the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Seat was selected and is now released
    Deselected,
    /// Seat is available; the caller must prompt for a ticket type and
    /// then call `select_seat`. Nothing is staged, so abandoning the
    /// prompt needs no cleanup.
    TicketTypeRequired,
}

/// Seat operations against one screening's fixed layout and occupancy
#[derive(Debug, Clone)]
pub struct SeatSelectionEngine {
    screen: Screen,
    occupied: HashSet<SeatId>,
}

impl SeatSelectionEngine {
    pub fn new(screen: &Screen, occupied_seats: &[SeatId]) -> Self {
        Self {
            screen: screen.clone(),
            occupied: occupied_seats.iter().cloned().collect(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Whether the seat sits in a premium row of this screen
    pub fn is_premium(&self, seat: &SeatId) -> bool {
        self.screen.is_premium(seat)
    }

    pub fn seat_status(&self, state: &SelectionState, seat: &SeatId) -> SeatStatus {
        if self.occupied.contains(seat) {
            SeatStatus::Occupied
        } else if state.seat_ticket_types.contains_key(seat) {
            SeatStatus::Selected
        } else {
            SeatStatus::Available
        }
    }

    fn check_selectable(&self, state: &SelectionState, seat: &SeatId) -> BookingResult<()> {
        if !self.screen.contains(seat) {
            return Err(BookingError::InvalidSeat(seat.clone()));
        }
        if self.occupied.contains(seat) {
            return Err(BookingError::SeatOccupied(seat.clone()));
        }
        if state.seat_ticket_types.contains_key(seat) {
            return Err(BookingError::AlreadySelected(seat.clone()));
        }
        Ok(())
    }

    /// Add a seat to the selection under the given ticket type
    pub fn select_seat(
        &self,
        state: &mut SelectionState,
        seat: SeatId,
        ticket_type: TicketType,
    ) -> BookingResult<()> {
        self.check_selectable(state, &seat)?;

        state.selected_seats.push(seat.clone());
        state.seat_ticket_types.insert(seat.clone(), ticket_type);
        *state.ticket_counts.entry(ticket_type).or_insert(0) += 1;

        debug!(seat = %seat, ticket_type = %ticket_type, "Seat selected");
        debug_assert!({
            state.assert_consistent();
            true
        });
        Ok(())
    }

    /// Release a seat; no-op when the seat is not selected
    pub fn deselect_seat(&self, state: &mut SelectionState, seat: &SeatId) {
        let Some(ticket_type) = state.seat_ticket_types.remove(seat) else {
            return;
        };
        state.selected_seats.retain(|s| s != seat);
        if let Some(count) = state.ticket_counts.get_mut(&ticket_type) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                state.ticket_counts.remove(&ticket_type);
            }
        }

        debug!(seat = %seat, ticket_type = %ticket_type, "Seat deselected");
        debug_assert!({
            state.assert_consistent();
            true
        });
    }

    /// Release the earliest-selected seat of a type (the ticket
    /// counter's minus button). Returns which seat went away.
    pub fn remove_one_by_type(
        &self,
        state: &mut SelectionState,
        ticket_type: TicketType,
    ) -> Option<SeatId> {
        let seat = state.seats_of_type(ticket_type).next().cloned()?;
        self.deselect_seat(state, &seat);
        Some(seat)
    }

    /// Handle a click on the seat map
    ///
    /// A selected seat is released immediately; an available one needs
    /// a ticket type first, so the caller gets `TicketTypeRequired`
    /// and follows up with [`select_seat`](Self::select_seat).
    pub fn toggle_seat(
        &self,
        state: &mut SelectionState,
        seat: &SeatId,
    ) -> BookingResult<ToggleOutcome> {
        if state.seat_ticket_types.contains_key(seat) {
            self.deselect_seat(state, seat);
            return Ok(ToggleOutcome::Deselected);
        }
        if !self.screen.contains(seat) {
            return Err(BookingError::InvalidSeat(seat.clone()));
        }
        if self.occupied.contains(seat) {
            return Err(BookingError::SeatOccupied(seat.clone()));
        }
        Ok(ToggleOutcome::TicketTypeRequired)
    }
}
