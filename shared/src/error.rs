//! Unified error system for the booking core
//!
//! Every failure surfaced to a caller carries a stable [`ErrorCode`]
//! so the view layer can map it to a user-facing message without
//! string matching. Code ranges:
//!
//! - 1xxx: data loading (fatal to the session)
//! - 2xxx: seat selection (recoverable user-action misuse)
//! - 3xxx: step-transition validation (recoverable, reported one at
//!   a time)

use crate::types::SeatId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// Represented as u16 values for efficient serialization and
/// cross-language compatibility with a frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Data loading ====================
    /// Catalog/screen/showtime data missing or malformed
    DataLoad = 1001,

    // ==================== 2xxx: Seat selection ====================
    /// Seat does not exist in the screen layout
    InvalidSeat = 2001,
    /// Seat is occupied for this showtime
    SeatOccupied = 2002,
    /// Seat is already part of the current selection
    AlreadySelected = 2003,
    /// Ticket type has no base price in the catalog
    InvalidTicketType = 2004,

    // ==================== 3xxx: Step validation ====================
    /// No seats selected when leaving the seats step
    NoSeatsSelected = 3001,
    /// Selection and ticket counts disagree
    SelectionMismatch = 3002,
    /// Email or phone missing or malformed
    ContactInfoInvalid = 3003,
    /// Terms and conditions not accepted
    TermsNotAccepted = 3004,
    /// No payment method chosen
    PaymentMethodMissing = 3005,
    /// Card payment chosen but card details incomplete
    CardDetailsIncomplete = 3006,
    /// Transition not allowed from the current step
    StepOrderViolation = 3007,
    /// Booking already finalized, state is frozen
    BookingFinalized = 3008,
}

impl ErrorCode {
    /// Default human-readable message for the code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::DataLoad => "Failed to load booking data",
            ErrorCode::InvalidSeat => "Seat does not exist",
            ErrorCode::SeatOccupied => "Seat is occupied",
            ErrorCode::AlreadySelected => "Seat is already selected",
            ErrorCode::InvalidTicketType => "Unknown ticket type",
            ErrorCode::NoSeatsSelected => {
                "Please select at least one ticket by clicking on available seats"
            }
            ErrorCode::SelectionMismatch => {
                "Selected seats do not match the ticket counts, re-select seats"
            }
            ErrorCode::ContactInfoInvalid => "Please fill in a valid email and phone",
            ErrorCode::TermsNotAccepted => "Please agree to the terms and conditions",
            ErrorCode::PaymentMethodMissing => "Please select a payment method",
            ErrorCode::CardDetailsIncomplete => "Please fill in all card details",
            ErrorCode::StepOrderViolation => "This step transition is not allowed",
            ErrorCode::BookingFinalized => "Booking is already confirmed",
        }
    }

    /// Whether the session can continue after this error
    ///
    /// Only data-load failures are fatal; everything else blocks a
    /// single action and leaves the session usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ErrorCode::DataLoad)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

/// Error returned when deserializing an unknown error code value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, InvalidErrorCode> {
        match value {
            1001 => Ok(ErrorCode::DataLoad),
            2001 => Ok(ErrorCode::InvalidSeat),
            2002 => Ok(ErrorCode::SeatOccupied),
            2003 => Ok(ErrorCode::AlreadySelected),
            2004 => Ok(ErrorCode::InvalidTicketType),
            3001 => Ok(ErrorCode::NoSeatsSelected),
            3002 => Ok(ErrorCode::SelectionMismatch),
            3003 => Ok(ErrorCode::ContactInfoInvalid),
            3004 => Ok(ErrorCode::TermsNotAccepted),
            3005 => Ok(ErrorCode::PaymentMethodMissing),
            3006 => Ok(ErrorCode::CardDetailsIncomplete),
            3007 => Ok(ErrorCode::StepOrderViolation),
            3008 => Ok(ErrorCode::BookingFinalized),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

/// Unified error type for the booking core
///
/// Validation failures never corrupt state: the failed command leaves
/// the session exactly as it was.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    /// Catalog/screen/showtime data missing or malformed - fatal,
    /// the booking flow cannot proceed and there is no retry
    #[error("failed to load booking data: {0}")]
    DataLoad(String),

    /// Seat does not exist in the screen layout
    #[error("seat {0} does not exist in this screen")]
    InvalidSeat(SeatId),

    /// Seat is on the showtime's occupied list
    #[error("seat {0} is occupied")]
    SeatOccupied(SeatId),

    /// Seat is already part of the current selection
    #[error("seat {0} is already selected")]
    AlreadySelected(SeatId),

    /// Ticket type has no base price in the pricing catalog
    #[error("ticket type {0} has no price in the catalog")]
    InvalidTicketType(String),

    /// Step-1 guard: nothing selected
    #[error("no seats selected")]
    NoSeatsSelected,

    /// Step-1 guard: selection list and ticket counts disagree
    #[error("{selected} selected seats but ticket counts sum to {counted}")]
    SelectionMismatch { selected: usize, counted: u32 },

    /// Step-3 guard: email/phone missing or malformed
    #[error("invalid contact info: {0}")]
    ContactInfoInvalid(String),

    /// Step-3 guard: terms checkbox not ticked
    #[error("terms and conditions not accepted")]
    TermsNotAccepted,

    /// Step-3 guard: no payment method chosen
    #[error("no payment method selected")]
    PaymentMethodMissing,

    /// Step-3 guard: card payment chosen with incomplete details
    #[error("card details incomplete: {0}")]
    CardDetailsIncomplete(String),

    /// Transition not allowed from the current step
    #[error("step transition not allowed: {0}")]
    StepOrderViolation(String),

    /// Mutation attempted after the booking was finalized
    #[error("booking is finalized, no further changes are permitted")]
    BookingFinalized,
}

impl BookingError {
    /// The stable machine-readable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::DataLoad(_) => ErrorCode::DataLoad,
            BookingError::InvalidSeat(_) => ErrorCode::InvalidSeat,
            BookingError::SeatOccupied(_) => ErrorCode::SeatOccupied,
            BookingError::AlreadySelected(_) => ErrorCode::AlreadySelected,
            BookingError::InvalidTicketType(_) => ErrorCode::InvalidTicketType,
            BookingError::NoSeatsSelected => ErrorCode::NoSeatsSelected,
            BookingError::SelectionMismatch { .. } => ErrorCode::SelectionMismatch,
            BookingError::ContactInfoInvalid(_) => ErrorCode::ContactInfoInvalid,
            BookingError::TermsNotAccepted => ErrorCode::TermsNotAccepted,
            BookingError::PaymentMethodMissing => ErrorCode::PaymentMethodMissing,
            BookingError::CardDetailsIncomplete(_) => ErrorCode::CardDetailsIncomplete,
            BookingError::StepOrderViolation(_) => ErrorCode::StepOrderViolation,
            BookingError::BookingFinalized => ErrorCode::BookingFinalized,
        }
    }

    /// User-facing message for the view layer (one alert at a time)
    pub fn user_message(&self) -> String {
        match self {
            // Validation errors carry context worth surfacing
            BookingError::SelectionMismatch { selected, counted } => format!(
                "Please ensure the number of selected seats ({selected}) matches the total tickets ({counted}). Re-select seats if necessary."
            ),
            other => other.code().message().to_string(),
        }
    }
}

/// Result alias for booking operations
pub type BookingResult<T> = Result<T, BookingError>;
