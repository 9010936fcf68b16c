//! Core identifier types for the booking domain
//!
//! Typed identifiers replace the stringly-keyed lookups of the data
//! files: a `SeatId` is always "row letters + column number" ("C7"),
//! and `TicketType` is a closed set tied to the pricing catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Seat Identifier
// ============================================================================

/// Seat identifier within a screen's row/column grid, e.g. "C7".
///
/// The row prefix is one or more letters, the column suffix a 1-based
/// number. Ordering is lexicographic on the raw label, which matches
/// how the confirmation view sorts seats for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    /// Build a seat id from a row label and 1-based column number
    pub fn new(row: impl AsRef<str>, number: u32) -> Self {
        Self(format!("{}{}", row.as_ref(), number))
    }

    /// The raw label ("C7")
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The row letters ("C" for "C7")
    pub fn row(&self) -> &str {
        let split = self
            .0
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(self.0.len());
        &self.0[..split]
    }

    /// The 1-based column number, if the label carries one
    pub fn number(&self) -> Option<u32> {
        let split = self.0.find(|c: char| c.is_ascii_digit())?;
        self.0[split..].parse().ok()
    }
}

impl From<&str> for SeatId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SeatId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Ticket Type
// ============================================================================

/// Ticket type - closed set, each maps to a base price in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Adult,
    Child,
    Senior,
    Student,
}

impl TicketType {
    /// All ticket types, in display order
    pub const ALL: [TicketType; 4] = [
        TicketType::Adult,
        TicketType::Child,
        TicketType::Senior,
        TicketType::Student,
    ];

    /// Lowercase catalog key ("adult")
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "adult",
            TicketType::Child => "child",
            TicketType::Senior => "senior",
            TicketType::Student => "student",
        }
    }

    /// Capitalized display name ("Adult")
    pub fn display_name(&self) -> &'static str {
        match self {
            TicketType::Adult => "Adult",
            TicketType::Child => "Child",
            TicketType::Senior => "Senior",
            TicketType::Student => "Student",
        }
    }

    /// Eligibility blurb shown next to the ticket type
    pub fn description(&self) -> &'static str {
        match self {
            TicketType::Adult => "Ages 18+",
            TicketType::Child => "Ages 3-17",
            TicketType::Senior => "Ages 65+",
            TicketType::Student => "Valid student ID required",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Presentation Format
// ============================================================================

/// Presentation format of a showtime ("Standard", "IMAX", "3D", ...)
///
/// Open set: the surcharge table in the pricing catalog decides what a
/// non-standard format costs; formats absent from the table cost 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Format(String);

impl Format {
    /// The baseline format carrying no surcharge
    pub const STANDARD: &'static str = "Standard";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_standard(&self) -> bool {
        self.0 == Self::STANDARD
    }
}

impl From<&str> for Format {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Add-on Identifiers
// ============================================================================

/// Add-on (concession) item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddonId(String);

impl AddonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AddonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for AddonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Add-on category identifier ("snacks", "drinks", "combos")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddonCategoryId(String);

impl AddonCategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AddonCategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for AddonCategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
