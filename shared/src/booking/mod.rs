//! Booking flow records and derived snapshots

mod snapshot;
mod types;

pub use snapshot::{AddonLine, Confirmation, OrderSummary, TicketLine};
pub use types::{CardDetails, ContactInfo, PaymentInfo, PaymentMethod};
