//! Venue and schedule data: screens, showtimes, theaters
//!
//! The `showtimes` section of the data file is a nested
//! movie -> date -> theater -> screen -> [Showtime] mapping. The
//! engine resolves that composite key exactly once at load time (see
//! `booking-core::catalog`); these models only describe the raw shape.

use crate::types::{Format, SeatId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Screen layout - rows of equally sized seat banks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub name: String,
    /// Row labels, front to back ("A".."J")
    pub rows: Vec<String>,
    pub seats_per_row: u32,
    /// Rows whose seats carry the premium surcharge
    #[serde(default)]
    pub premium_rows: Vec<String>,
    /// Individual handicap-accessible seats
    #[serde(default)]
    pub handicap_seats: Vec<SeatId>,
}

impl Screen {
    /// Whether the seat id names a real position in this layout
    pub fn contains(&self, seat: &SeatId) -> bool {
        let Some(number) = seat.number() else {
            return false;
        };
        number >= 1
            && number <= self.seats_per_row
            && self.rows.iter().any(|row| row == seat.row())
    }

    /// Whether the seat sits in a premium row
    pub fn is_premium(&self, seat: &SeatId) -> bool {
        self.premium_rows.iter().any(|row| row == seat.row())
    }

    /// Whether the seat is handicap accessible
    pub fn is_handicap_accessible(&self, seat: &SeatId) -> bool {
        self.handicap_seats.contains(seat)
    }

    /// All seat ids in row-major display order
    pub fn seat_ids(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.rows
            .iter()
            .flat_map(|row| (1..=self.seats_per_row).map(move |n| SeatId::new(row, n)))
    }

    /// Total seat count
    pub fn capacity(&self) -> u32 {
        self.rows.len() as u32 * self.seats_per_row
    }
}

/// One scheduled screening with its own occupancy list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Showtime {
    /// Display time ("19:30")
    pub time: String,
    pub format: Format,
    /// Seats sold before this session started - fixed at load time
    #[serde(default)]
    pub occupied_seats: Vec<SeatId>,
}

/// Theater with its screens, keyed by screen id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theater {
    pub id: String,
    pub name: String,
    pub screens: HashMap<String, Screen>,
}

/// Raw shape of the booking data file
///
/// `showtimes` nesting: movie id -> show date -> theater name ->
/// screen id -> showtimes for that screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingData {
    pub pricing: super::PricingCatalog,
    pub theaters: HashMap<String, Theater>,
    pub showtimes: HashMap<String, HashMap<String, HashMap<String, HashMap<String, Vec<Showtime>>>>>,
    pub addons: super::AddonCatalog,
}
