//! Owned selection state

use shared::{AddonId, SeatId, TicketType};
use std::collections::HashMap;

/// Everything the user has picked so far
///
/// `selected_seats` keeps insertion order (the "minus button" removes
/// the earliest seat of a type); `ticket_counts` is a derived cache
/// kept in lock-step with `seat_ticket_types` so the summary and the
/// step guards never have to re-count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selected seat ids in the order they were picked
    pub selected_seats: Vec<SeatId>,
    /// Ticket type assigned to each selected seat
    pub seat_ticket_types: HashMap<SeatId, TicketType>,
    /// Seats per ticket type, derived from `seat_ticket_types`
    pub ticket_counts: HashMap<TicketType, u32>,
    /// Add-on quantities keyed by item id
    pub addon_counts: HashMap<AddonId, u32>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of the per-type ticket counts
    pub fn counted_tickets(&self) -> u32 {
        self.ticket_counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_seats.is_empty()
    }

    /// Seats of a given type, in selection order
    pub fn seats_of_type(&self, ticket_type: TicketType) -> impl Iterator<Item = &SeatId> {
        self.selected_seats
            .iter()
            .filter(move |seat| self.seat_ticket_types.get(*seat) == Some(&ticket_type))
    }

    pub fn ticket_count(&self, ticket_type: TicketType) -> u32 {
        self.ticket_counts.get(&ticket_type).copied().unwrap_or(0)
    }

    pub fn addon_quantity(&self, id: &AddonId) -> u32 {
        self.addon_counts.get(id).copied().unwrap_or(0)
    }

    /// Check the cross-field invariants
    ///
    /// Panics on violation; called from tests and `debug_assert!`
    /// sites after each mutation.
    pub fn assert_consistent(&self) {
        assert_eq!(
            self.selected_seats.len(),
            self.seat_ticket_types.len(),
            "selection list and type map out of sync"
        );
        for seat in &self.selected_seats {
            assert!(
                self.seat_ticket_types.contains_key(seat),
                "seat {seat} selected without a ticket type"
            );
        }
        assert_eq!(
            self.selected_seats.len() as u32,
            self.counted_tickets(),
            "ticket counts disagree with selection size"
        );
        for (ticket_type, count) in &self.ticket_counts {
            let actual = self
                .seat_ticket_types
                .values()
                .filter(|t| *t == ticket_type)
                .count() as u32;
            assert_eq!(*count, actual, "count cache stale for {ticket_type}");
        }
    }
}
