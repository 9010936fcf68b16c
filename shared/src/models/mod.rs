//! Catalog data models
//!
//! Immutable configuration loaded once from the booking data file.
//! Field names mirror the external JSON (camelCase); monetary fields
//! arrive as plain floats and are lifted to `Decimal` by accessor
//! methods at the calculation boundary.

mod addons;
mod pricing;
mod venue;

pub use addons::{AddonCatalog, AddonCategory, AddonItem};
pub use pricing::PricingCatalog;
pub use venue::{BookingData, Screen, Showtime, Theater};
