//! Derived order-summary and confirmation snapshots
//!
//! These are complete recomputations, never incremental patches: the
//! calculator rebuilds the whole summary from selection state and the
//! pricing catalog after every mutation, so the snapshot can never
//! drift from the state that produced it.

use crate::types::{AddonId, Format, SeatId, TicketType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One ticket line of the order summary
///
/// Seats of the same ticket type split into premium and regular lines
/// because their unit prices differ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketLine {
    pub ticket_type: TicketType,
    /// Whether this line covers premium-row seats
    pub premium: bool,
    pub quantity: u32,
    /// Per-seat price: base + premium surcharge + format surcharge
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

impl TicketLine {
    /// Display label, e.g. "2x Adult (Premium)"
    pub fn label(&self) -> String {
        if self.premium {
            format!("{}x {} (Premium)", self.quantity, self.ticket_type.display_name())
        } else {
            format!("{}x {}", self.quantity, self.ticket_type.display_name())
        }
    }
}

/// One add-on line of the order summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddonLine {
    pub addon_id: AddonId,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

impl AddonLine {
    /// Display label, e.g. "2x Large Popcorn"
    pub fn label(&self) -> String {
        format!("{}x {}", self.quantity, self.name)
    }
}

/// Itemized pricing breakdown for the current selection
///
/// All figures are rounded to two decimals exactly once, at emission;
/// accumulation happens in full Decimal precision inside the
/// calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub ticket_lines: Vec<TicketLine>,
    pub addon_lines: Vec<AddonLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Waived (zero) on an empty cart
    #[serde(with = "rust_decimal::serde::float")]
    pub service_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub taxes: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl OrderSummary {
    /// Empty summary - everything zero, no fee
    pub fn empty() -> Self {
        Self {
            ticket_lines: Vec::new(),
            addon_lines: Vec::new(),
            subtotal: Decimal::ZERO,
            service_fee: Decimal::ZERO,
            taxes: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Whether any ticket line exists ("no tickets selected" otherwise)
    pub fn has_tickets(&self) -> bool {
        !self.ticket_lines.is_empty()
    }

    pub fn has_addons(&self) -> bool {
        !self.addon_lines.is_empty()
    }
}

impl Default for OrderSummary {
    fn default() -> Self {
        Self::empty()
    }
}

/// Finalized booking record produced on entering the confirmation step
///
/// A frozen copy of everything the confirmation view shows; the live
/// selection state is locked once this exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    /// Opaque booking reference ("SIN-2026-A1B2C3")
    pub booking_id: String,
    pub movie_id: String,
    /// Show date as given in the schedule ("2024-01-15")
    pub show_date: String,
    pub show_time: String,
    pub theater: String,
    pub screen: String,
    pub format: Format,
    /// Booked seats, sorted for display
    pub seats: Vec<SeatId>,
    pub summary: OrderSummary,
    pub created_at: DateTime<Utc>,
}
