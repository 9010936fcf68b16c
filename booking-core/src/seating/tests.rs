use super::*;
use shared::{BookingError, Screen, SeatId, TicketType};

fn screen() -> Screen {
    Screen {
        name: "Screen 1".to_string(),
        rows: vec!["A".into(), "B".into(), "C".into(), "D".into()],
        seats_per_row: 8,
        premium_rows: vec!["D".into()],
        handicap_seats: vec![SeatId::from("A1")],
    }
}

fn engine() -> SeatSelectionEngine {
    SeatSelectionEngine::new(&screen(), &[SeatId::from("B3"), SeatId::from("B4")])
}

#[test]
fn select_records_seat_and_count() {
    let engine = engine();
    let mut state = SelectionState::new();

    engine
        .select_seat(&mut state, SeatId::from("A2"), TicketType::Adult)
        .unwrap();
    engine
        .select_seat(&mut state, SeatId::from("A3"), TicketType::Child)
        .unwrap();

    state.assert_consistent();
    assert_eq!(state.selected_seats.len(), 2);
    assert_eq!(state.ticket_count(TicketType::Adult), 1);
    assert_eq!(state.ticket_count(TicketType::Child), 1);
    assert_eq!(state.counted_tickets(), 2);
}

#[test]
fn select_rejects_unknown_seat() {
    let engine = engine();
    let mut state = SelectionState::new();
    let err = engine
        .select_seat(&mut state, SeatId::from("Z9"), TicketType::Adult)
        .unwrap_err();
    assert_eq!(err, BookingError::InvalidSeat(SeatId::from("Z9")));
    assert!(state.is_empty());
}

#[test]
fn select_rejects_occupied_seat() {
    let engine = engine();
    let mut state = SelectionState::new();
    let err = engine
        .select_seat(&mut state, SeatId::from("B3"), TicketType::Adult)
        .unwrap_err();
    assert_eq!(err, BookingError::SeatOccupied(SeatId::from("B3")));
    assert!(state.is_empty());
}

#[test]
fn select_rejects_double_select() {
    let engine = engine();
    let mut state = SelectionState::new();
    engine
        .select_seat(&mut state, SeatId::from("A2"), TicketType::Adult)
        .unwrap();
    let err = engine
        .select_seat(&mut state, SeatId::from("A2"), TicketType::Senior)
        .unwrap_err();
    assert_eq!(err, BookingError::AlreadySelected(SeatId::from("A2")));
    // Original type and count survive
    assert_eq!(
        state.seat_ticket_types[&SeatId::from("A2")],
        TicketType::Adult
    );
    assert_eq!(state.counted_tickets(), 1);
}

#[test]
fn deselect_restores_prior_state() {
    let engine = engine();
    let mut state = SelectionState::new();
    let before = state.clone();

    engine
        .select_seat(&mut state, SeatId::from("C5"), TicketType::Senior)
        .unwrap();
    engine.deselect_seat(&mut state, &SeatId::from("C5"));

    state.assert_consistent();
    assert_eq!(state, before);
}

#[test]
fn deselect_unselected_is_noop() {
    let engine = engine();
    let mut state = SelectionState::new();
    engine
        .select_seat(&mut state, SeatId::from("A2"), TicketType::Adult)
        .unwrap();
    let before = state.clone();

    engine.deselect_seat(&mut state, &SeatId::from("A5"));
    assert_eq!(state, before);
}

#[test]
fn remove_one_by_type_takes_earliest_selected() {
    let engine = engine();
    let mut state = SelectionState::new();
    engine
        .select_seat(&mut state, SeatId::from("A4"), TicketType::Child)
        .unwrap();
    engine
        .select_seat(&mut state, SeatId::from("A2"), TicketType::Child)
        .unwrap();

    let removed = engine.remove_one_by_type(&mut state, TicketType::Child);
    assert_eq!(removed, Some(SeatId::from("A4")));
    assert_eq!(state.selected_seats, vec![SeatId::from("A2")]);
    state.assert_consistent();
}

#[test]
fn remove_one_by_type_noop_at_zero() {
    let engine = engine();
    let mut state = SelectionState::new();
    assert_eq!(engine.remove_one_by_type(&mut state, TicketType::Adult), None);
    assert!(state.is_empty());
}

#[test]
fn toggle_deselects_selected_seat() {
    let engine = engine();
    let mut state = SelectionState::new();
    engine
        .select_seat(&mut state, SeatId::from("A2"), TicketType::Adult)
        .unwrap();

    let outcome = engine.toggle_seat(&mut state, &SeatId::from("A2")).unwrap();
    assert_eq!(outcome, ToggleOutcome::Deselected);
    assert!(state.is_empty());
}

#[test]
fn toggle_available_seat_needs_ticket_type() {
    let engine = engine();
    let mut state = SelectionState::new();

    let outcome = engine.toggle_seat(&mut state, &SeatId::from("A2")).unwrap();
    assert_eq!(outcome, ToggleOutcome::TicketTypeRequired);
    // Two-phase: nothing is staged by the prompt
    assert!(state.is_empty());
}

#[test]
fn toggle_occupied_seat_errors() {
    let engine = engine();
    let mut state = SelectionState::new();
    let err = engine.toggle_seat(&mut state, &SeatId::from("B4")).unwrap_err();
    assert_eq!(err, BookingError::SeatOccupied(SeatId::from("B4")));
}

#[test]
fn seat_status_reflects_occupancy_and_selection() {
    let engine = engine();
    let mut state = SelectionState::new();
    engine
        .select_seat(&mut state, SeatId::from("D1"), TicketType::Adult)
        .unwrap();

    assert_eq!(
        engine.seat_status(&state, &SeatId::from("B3")),
        SeatStatus::Occupied
    );
    assert_eq!(
        engine.seat_status(&state, &SeatId::from("D1")),
        SeatStatus::Selected
    );
    assert_eq!(
        engine.seat_status(&state, &SeatId::from("A8")),
        SeatStatus::Available
    );
    assert!(engine.is_premium(&SeatId::from("D1")));
    assert!(!engine.is_premium(&SeatId::from("A1")));
}
