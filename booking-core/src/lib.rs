//! Cinema booking core - seat selection, pricing, and order flow
//!
//! # Architecture
//!
//! One direction of data flow per user action: a command mutates the
//! selection state, the pure price calculator recomputes the order
//! summary from scratch, and subscribers are notified. Nothing is
//! patched incrementally, so the summary can never drift from the
//! state that produced it.
//!
//! # Module structure
//!
//! ```text
//! booking-core/src/
//! ├── catalog/       # Data file loading, showtime resolution
//! ├── seating/       # Selection state + seat-selection engine
//! ├── pricing/       # Decimal money helpers, pure summary calculator
//! ├── flow/          # 4-step booking flow, validation, input masks
//! ├── session/       # BookingSession facade + finalization
//! └── utils/         # Logging, shared validation limits
//! ```
//!
//! The session is single-threaded and synchronous: every mutation
//! completes (including summary recomputation) before the next user
//! action is processed. A session can only be constructed from
//! successfully loaded data, so no action can arrive before the
//! catalogs are ready.

pub mod catalog;
pub mod config;
pub mod flow;
pub mod pricing;
pub mod seating;
pub mod session;
pub mod utils;

// Re-export public surface
pub use catalog::{load_booking_data, resolve_showtime, ShowtimeContext};
pub use config::Config;
pub use flow::{BackOutcome, BookingStep, BookingStepFlow};
pub use pricing::compute_summary;
pub use seating::{SeatSelectionEngine, SeatStatus, SelectionState, ToggleOutcome};
pub use session::{BookingEvent, BookingSession};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
