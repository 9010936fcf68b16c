use anyhow::Context;
use booking_core::{init_logger_with_file, load_booking_data, BookingSession, Config};
use shared::{AddonId, ContactInfo, PaymentMethod, SeatId, TicketType};

/// Scripted walk through the whole booking flow against the sample
/// data file. Exercises every step the way the booking page does.
fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(data = %config.data_path, "Cinema booking demo starting");

    let data = load_booking_data(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path))?;

    let mut session = BookingSession::from_data(&data, "interstellar", "2024-01-15", 1)
        .context("resolving showtime")?;

    session.subscribe(|event| tracing::debug!(?event, "Session event"));

    if let Some((format, surcharge)) = session.format_surcharge_banner() {
        tracing::info!(%format, %surcharge, "Format surcharge applies");
    }

    // Step 1: pick seats
    session.select_seat(SeatId::from("D4"), TicketType::Adult)?;
    session.select_seat(SeatId::from("D5"), TicketType::Adult)?;
    session.select_seat(SeatId::from("B6"), TicketType::Child)?;
    tracing::info!(
        seats = ?session.selected_seat_labels(),
        subtotal = %session.summary().subtotal,
        "Seats selected"
    );
    session.advance_step()?;

    // Step 2: add extras
    session.increment_addon(&AddonId::from("popcorn-large"))?;
    session.increment_addon(&AddonId::from("soda-large"))?;
    session.increment_addon(&AddonId::from("soda-large"))?;
    tracing::info!(subtotal = %session.summary().subtotal, "Extras added");
    session.advance_step()?;

    // Step 3: contact + payment
    session.set_contact(ContactInfo {
        email: "guest@example.com".to_string(),
        phone: "555-0100".to_string(),
    })?;
    session.set_terms_accepted(true)?;
    session.set_payment_method(PaymentMethod::Paypal)?;
    session.advance_step()?;

    // Step 4: confirmed
    let confirmation = session
        .confirmation()
        .context("advancing into confirmation finalizes the booking")?;
    tracing::info!(
        booking_id = %confirmation.booking_id,
        theater = %confirmation.theater,
        time = %confirmation.show_time,
        seats = ?confirmation.seats,
        total = %confirmation.summary.total,
        "Booking complete"
    );

    for line in &confirmation.summary.ticket_lines {
        tracing::info!(line = %line.label(), total = %line.line_total, "Ticket");
    }
    for line in &confirmation.summary.addon_lines {
        tracing::info!(line = %line.label(), total = %line.line_total, "Add-on");
    }

    Ok(())
}
