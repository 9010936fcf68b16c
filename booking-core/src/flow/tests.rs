use super::*;
use crate::flow::validation::validate_email;
use crate::seating::{SeatSelectionEngine, SelectionState};
use shared::{CardDetails, ContactInfo, PaymentMethod, Screen, SeatId, TicketType};

fn screen() -> Screen {
    Screen {
        name: "Screen 1".to_string(),
        rows: vec!["A".into(), "B".into()],
        seats_per_row: 6,
        premium_rows: vec![],
        handicap_seats: vec![],
    }
}

fn state_with_seats(n: u32) -> SelectionState {
    let engine = SeatSelectionEngine::new(&screen(), &[]);
    let mut state = SelectionState::new();
    for i in 1..=n {
        engine
            .select_seat(&mut state, SeatId::new("A", i), TicketType::Adult)
            .unwrap();
    }
    state
}

fn contact() -> ContactInfo {
    ContactInfo {
        email: "guest@example.com".to_string(),
        phone: "555-0100".to_string(),
    }
}

fn card() -> CardDetails {
    CardDetails {
        number: "4242 4242 4242 4242".to_string(),
        expiry: "12/26".to_string(),
        cvv: "123".to_string(),
        cardholder: "A Guest".to_string(),
    }
}

fn flow_at_payment() -> (BookingStepFlow, SelectionState) {
    let state = state_with_seats(2);
    let mut flow = BookingStepFlow::new();
    flow.advance(&state).unwrap();
    flow.advance(&state).unwrap();
    assert_eq!(flow.current(), BookingStep::Payment);
    (flow, state)
}

#[test]
fn advance_requires_seats() {
    let mut flow = BookingStepFlow::new();
    let err = flow.advance(&SelectionState::new()).unwrap_err();
    assert_eq!(err, BookingError::NoSeatsSelected);
    assert_eq!(flow.current(), BookingStep::Seats);
}

#[test]
fn advance_detects_count_mismatch() {
    let mut flow = BookingStepFlow::new();
    let mut state = state_with_seats(2);
    // Corrupt the cache the way a buggy caller would
    state.ticket_counts.insert(TicketType::Adult, 5);

    let err = flow.advance(&state).unwrap_err();
    assert_eq!(
        err,
        BookingError::SelectionMismatch {
            selected: 2,
            counted: 5
        }
    );
    assert_eq!(flow.current(), BookingStep::Seats);
}

#[test]
fn extras_step_always_passes() {
    let state = state_with_seats(1);
    let mut flow = BookingStepFlow::new();
    flow.advance(&state).unwrap();
    assert_eq!(flow.advance(&state).unwrap(), BookingStep::Payment);
}

#[test]
fn payment_guard_short_circuits_in_form_order() {
    let (mut flow, state) = flow_at_payment();

    // Empty contact reported first
    let err = flow.advance(&state).unwrap_err();
    assert!(matches!(err, BookingError::ContactInfoInvalid(_)));

    // Bad email next
    flow.set_contact(ContactInfo {
        email: "not-an-email".to_string(),
        phone: "555-0100".to_string(),
    });
    let err = flow.advance(&state).unwrap_err();
    assert!(matches!(err, BookingError::ContactInfoInvalid(_)));

    // Then terms
    flow.set_contact(contact());
    let err = flow.advance(&state).unwrap_err();
    assert_eq!(err, BookingError::TermsNotAccepted);

    // Then payment method
    flow.set_terms_accepted(true);
    let err = flow.advance(&state).unwrap_err();
    assert_eq!(err, BookingError::PaymentMethodMissing);

    // Then card details
    flow.set_payment_method(PaymentMethod::Card);
    let err = flow.advance(&state).unwrap_err();
    assert!(matches!(err, BookingError::CardDetailsIncomplete(_)));

    flow.set_card_details(card());
    assert_eq!(flow.advance(&state).unwrap(), BookingStep::Confirmation);
}

#[test]
fn non_card_methods_skip_card_details() {
    let (mut flow, state) = flow_at_payment();
    flow.set_contact(contact());
    flow.set_terms_accepted(true);
    flow.set_payment_method(PaymentMethod::Paypal);
    assert_eq!(flow.advance(&state).unwrap(), BookingStep::Confirmation);
}

#[test]
fn missing_card_field_is_reported() {
    let (mut flow, state) = flow_at_payment();
    flow.set_contact(contact());
    flow.set_terms_accepted(true);
    flow.set_payment_method(PaymentMethod::Card);
    let mut incomplete = card();
    incomplete.cvv = "  ".to_string();
    flow.set_card_details(incomplete);

    let err = flow.advance(&state).unwrap_err();
    assert!(matches!(err, BookingError::CardDetailsIncomplete(_)));
    assert_eq!(flow.current(), BookingStep::Payment);
}

#[test]
fn confirmation_is_terminal() {
    let (mut flow, state) = flow_at_payment();
    flow.set_contact(contact());
    flow.set_terms_accepted(true);
    flow.set_payment_method(PaymentMethod::Apple);
    flow.advance(&state).unwrap();

    let err = flow.advance(&state).unwrap_err();
    assert!(matches!(err, BookingError::StepOrderViolation(_)));
    assert_eq!(flow.back(), BackOutcome::ExitFlow);
    assert_eq!(flow.current(), BookingStep::Confirmation);
}

#[test]
fn back_walks_toward_start() {
    let (mut flow, _) = flow_at_payment();
    assert_eq!(flow.back(), BackOutcome::MovedTo(BookingStep::Extras));
    assert_eq!(flow.back(), BackOutcome::MovedTo(BookingStep::Seats));
    assert_eq!(flow.back(), BackOutcome::AtStart);
    assert_eq!(flow.current(), BookingStep::Seats);
}

#[test]
fn email_rules() {
    assert!(validate_email("a@b.c"));
    assert!(validate_email("guest@example.com"));
    assert!(!validate_email("a@b"));
    assert!(!validate_email("@b.c"));
    assert!(!validate_email("a@b."));
    assert!(!validate_email("a.b@c"));
    assert!(!validate_email("a@.c"));
    assert!(!validate_email(""));
}
