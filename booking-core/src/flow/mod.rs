//! Four-step booking flow
//!
//! Seats -> Extras -> Payment -> Confirmation, strictly linear. Each
//! forward transition runs the guard for the step being left; the
//! first failed check is the whole answer (one alert at a time), and
//! a failed guard leaves the current step untouched.

pub mod formatting;
pub mod validation;

use crate::seating::SelectionState;
use shared::{BookingError, BookingResult, CardDetails, ContactInfo, PaymentInfo, PaymentMethod};
use std::fmt;
use tracing::info;

/// The four steps of the booking flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingStep {
    Seats,
    Extras,
    Payment,
    Confirmation,
}

impl BookingStep {
    /// 1-based step number as shown in the progress bar
    pub fn number(&self) -> u8 {
        match self {
            BookingStep::Seats => 1,
            BookingStep::Extras => 2,
            BookingStep::Payment => 3,
            BookingStep::Confirmation => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BookingStep::Seats => "Select Seats",
            BookingStep::Extras => "Add Extras",
            BookingStep::Payment => "Payment",
            BookingStep::Confirmation => "Confirmation",
        }
    }

    fn next(&self) -> Option<BookingStep> {
        match self {
            BookingStep::Seats => Some(BookingStep::Extras),
            BookingStep::Extras => Some(BookingStep::Payment),
            BookingStep::Payment => Some(BookingStep::Confirmation),
            BookingStep::Confirmation => None,
        }
    }

    fn previous(&self) -> Option<BookingStep> {
        match self {
            BookingStep::Seats => None,
            BookingStep::Extras => Some(BookingStep::Seats),
            BookingStep::Payment => Some(BookingStep::Extras),
            BookingStep::Confirmation => None,
        }
    }
}

impl Default for BookingStep {
    fn default() -> Self {
        BookingStep::Seats
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.number())
    }
}

/// Result of the back button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Moved to the previous step
    MovedTo(BookingStep),
    /// Already at the first step, nowhere to go
    AtStart,
    /// Confirmation is terminal; backing out means leaving the flow
    /// entirely (the view navigates away)
    ExitFlow,
}

/// Linear step machine plus the form state the payment guard checks
#[derive(Debug, Clone, Default)]
pub struct BookingStepFlow {
    current: BookingStep,
    pub contact: ContactInfo,
    pub payment: PaymentInfo,
    pub terms_accepted: bool,
}

impl BookingStepFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> BookingStep {
        self.current
    }

    /// Advance to the next step after validating the current one
    ///
    /// Returns the first failed check only; the step does not move on
    /// failure.
    pub fn advance(&mut self, state: &SelectionState) -> BookingResult<BookingStep> {
        let next = self.current.next().ok_or_else(|| {
            BookingError::StepOrderViolation("confirmation is the final step".to_string())
        })?;

        match self.current {
            BookingStep::Seats => validation::validate_selection(state)?,
            BookingStep::Extras => {} // extras are optional, always passes
            BookingStep::Payment => {
                validation::validate_contact(&self.contact)?;
                if !self.terms_accepted {
                    return Err(BookingError::TermsNotAccepted);
                }
                validation::validate_payment(&self.payment)?;
            }
            BookingStep::Confirmation => unreachable!("next() returned None above"),
        }

        info!(from = %self.current, to = %next, "Booking step advanced");
        self.current = next;
        Ok(next)
    }

    /// Move back one step; never validates
    pub fn back(&mut self) -> BackOutcome {
        if self.current == BookingStep::Confirmation {
            return BackOutcome::ExitFlow;
        }
        match self.current.previous() {
            Some(previous) => {
                info!(from = %self.current, to = %previous, "Booking step moved back");
                self.current = previous;
                BackOutcome::MovedTo(previous)
            }
            None => BackOutcome::AtStart,
        }
    }

    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = contact;
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment.method = Some(method);
    }

    pub fn set_card_details(&mut self, card: CardDetails) {
        self.payment.card = Some(card);
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }
}

#[cfg(test)]
mod tests;
