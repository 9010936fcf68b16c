//! Step-guard validation helpers
//!
//! Each guard reports the first failure only, matching the
//! one-alert-at-a-time behavior of the booking form.

use crate::seating::SelectionState;
use crate::utils::validation::MAX_EMAIL_LEN;
use shared::{BookingError, BookingResult, ContactInfo, PaymentInfo};

/// Seats-step guard: something selected, counts consistent
pub fn validate_selection(state: &SelectionState) -> BookingResult<()> {
    if state.is_empty() && state.counted_tickets() == 0 {
        return Err(BookingError::NoSeatsSelected);
    }
    let selected = state.selected_seats.len();
    let counted = state.counted_tickets();
    if selected as u32 != counted {
        return Err(BookingError::SelectionMismatch { selected, counted });
    }
    Ok(())
}

/// Minimal structural email check
///
/// Exactly one rule set: an `@` that is neither first nor last, and a
/// `.` strictly after the `@` that is not the last character. This is
/// a form-level sanity check, not RFC validation.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some(at) = email.find('@') else {
        return false;
    };
    if at == 0 || at == email.len() - 1 {
        return false;
    }
    let domain = &email[at + 1..];
    match domain.find('.') {
        // Dot must exist past the @ and must not end the address
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

/// Payment-step contact guard
pub fn validate_contact(contact: &ContactInfo) -> BookingResult<()> {
    if contact.email.trim().is_empty() || contact.phone.trim().is_empty() {
        return Err(BookingError::ContactInfoInvalid(
            "email and phone are required".to_string(),
        ));
    }
    if !validate_email(contact.email.trim()) {
        return Err(BookingError::ContactInfoInvalid(format!(
            "malformed email address: {}",
            contact.email
        )));
    }
    Ok(())
}

/// Payment-step method guard: a method is chosen, and card payments
/// carry all four card fields
pub fn validate_payment(payment: &PaymentInfo) -> BookingResult<()> {
    let Some(method) = payment.method else {
        return Err(BookingError::PaymentMethodMissing);
    };
    if !method.requires_card_details() {
        return Ok(());
    }
    let Some(card) = &payment.card else {
        return Err(BookingError::CardDetailsIncomplete(
            "no card details entered".to_string(),
        ));
    };
    for (value, field) in [
        (&card.number, "card number"),
        (&card.expiry, "expiry date"),
        (&card.cvv, "cvv"),
        (&card.cardholder, "cardholder name"),
    ] {
        if value.trim().is_empty() {
            return Err(BookingError::CardDetailsIncomplete(format!(
                "{field} is required"
            )));
        }
    }
    Ok(())
}
