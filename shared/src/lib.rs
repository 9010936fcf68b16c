//! Shared types for the cinema booking core
//!
//! Common types used by both the booking engine and any view layer:
//! seat/ticket identifiers, catalog data models, order-summary
//! snapshots, and the unified error type.

pub mod booking;
pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use booking::{
    AddonLine, CardDetails, Confirmation, ContactInfo, OrderSummary, PaymentInfo, PaymentMethod,
    TicketLine,
};
pub use error::{BookingError, BookingResult, ErrorCode};
pub use models::{
    AddonCatalog, AddonCategory, AddonItem, BookingData, PricingCatalog, Screen, Showtime, Theater,
};
pub use types::{AddonCategoryId, AddonId, Format, SeatId, TicketType};
