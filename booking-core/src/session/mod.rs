//! Booking session facade
//!
//! [`BookingSession`] ties the engine together for a single screening:
//! it owns the selection state, the step flow, and the latest order
//! summary, and exposes explicit commands that either fully apply or
//! fully fail. Every successful mutation recomputes the summary
//! before returning and then notifies subscribers, so an observer
//! never sees a summary older than the state.
//!
//! A session can only be built from loaded catalogs and a resolved
//! [`ShowtimeContext`], so no command can run before the data is
//! ready. Once the flow reaches the confirmation step the booking is
//! frozen: reads keep working, mutations fail with
//! `BookingFinalized`.

use crate::catalog::{resolve_showtime, ShowtimeContext};
use crate::flow::{BackOutcome, BookingStep, BookingStepFlow};
use crate::pricing::compute_summary;
use crate::seating::{SeatSelectionEngine, SeatStatus, SelectionState, ToggleOutcome};
use chrono::{Datelike, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use shared::{
    AddonCatalog, AddonId, BookingData, BookingError, BookingResult, CardDetails, Confirmation,
    ContactInfo, Format, OrderSummary, PaymentMethod, PricingCatalog, SeatId, TicketType,
};
use tracing::{info, warn};

/// Notifications emitted after a successful mutation
#[derive(Debug, Clone, PartialEq)]
pub enum BookingEvent {
    /// Seats or add-on quantities changed
    SelectionChanged,
    /// A fresh order summary is available
    SummaryUpdated,
    /// The flow moved to another step
    StepChanged { step: BookingStep },
    /// The booking was confirmed and is now frozen
    Finalized,
}

type Subscriber = Box<dyn Fn(&BookingEvent)>;

/// One user's booking of one screening
pub struct BookingSession {
    ctx: ShowtimeContext,
    pricing: PricingCatalog,
    addons: AddonCatalog,
    engine: SeatSelectionEngine,
    state: SelectionState,
    flow: BookingStepFlow,
    summary: OrderSummary,
    confirmation: Option<Confirmation>,
    subscribers: Vec<Subscriber>,
}

impl BookingSession {
    /// Build a session for an already resolved screening
    pub fn new(ctx: ShowtimeContext, pricing: PricingCatalog, addons: AddonCatalog) -> Self {
        let engine = SeatSelectionEngine::new(&ctx.screen, &ctx.showtime.occupied_seats);
        info!(
            movie_id = %ctx.movie_id,
            theater = %ctx.theater_name,
            screen = %ctx.screen.name,
            time = %ctx.showtime.time,
            "Booking session started"
        );
        Self {
            ctx,
            pricing,
            addons,
            engine,
            state: SelectionState::new(),
            flow: BookingStepFlow::new(),
            summary: OrderSummary::empty(),
            confirmation: None,
            subscribers: Vec::new(),
        }
    }

    /// Resolve a screening out of loaded data and start a session
    pub fn from_data(
        data: &BookingData,
        movie_id: &str,
        show_date: &str,
        showtime_index: usize,
    ) -> BookingResult<Self> {
        let ctx = resolve_showtime(data, movie_id, show_date, showtime_index)?;
        Ok(Self::new(ctx, data.pricing.clone(), data.addons.clone()))
    }

    /// Register an observer for mutation events
    pub fn subscribe(&mut self, subscriber: impl Fn(&BookingEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&self, event: BookingEvent) {
        for subscriber in &self.subscribers {
            subscriber(&event);
        }
    }

    fn ensure_mutable(&self) -> BookingResult<()> {
        if self.confirmation.is_some() {
            return Err(BookingError::BookingFinalized);
        }
        Ok(())
    }

    /// Recompute the summary and emit the change events, in order
    fn selection_changed(&mut self) {
        self.summary = compute_summary(
            &self.state,
            &self.pricing,
            &self.addons,
            self.engine.screen(),
            &self.ctx.showtime.format,
        );
        self.notify(BookingEvent::SelectionChanged);
        self.notify(BookingEvent::SummaryUpdated);
    }

    // ==================== Seat commands ====================

    /// Select a seat under a ticket type
    pub fn select_seat(&mut self, seat: SeatId, ticket_type: TicketType) -> BookingResult<()> {
        self.ensure_mutable()?;
        if self.pricing.base_price(ticket_type).is_none() {
            return Err(BookingError::InvalidTicketType(
                ticket_type.as_str().to_string(),
            ));
        }
        self.engine.select_seat(&mut self.state, seat, ticket_type)?;
        self.selection_changed();
        Ok(())
    }

    /// Release a seat; succeeds quietly when the seat is not selected
    pub fn deselect_seat(&mut self, seat: &SeatId) -> BookingResult<()> {
        self.ensure_mutable()?;
        if !self.state.seat_ticket_types.contains_key(seat) {
            return Ok(());
        }
        self.engine.deselect_seat(&mut self.state, seat);
        self.selection_changed();
        Ok(())
    }

    /// Handle a seat-map click
    ///
    /// `TicketTypeRequired` stages nothing: the caller prompts for a
    /// type and follows up with [`select_seat`](Self::select_seat), or
    /// simply does nothing to cancel.
    pub fn toggle_seat(&mut self, seat: &SeatId) -> BookingResult<ToggleOutcome> {
        self.ensure_mutable()?;
        let outcome = self.engine.toggle_seat(&mut self.state, seat)?;
        if outcome == ToggleOutcome::Deselected {
            self.selection_changed();
        }
        Ok(outcome)
    }

    /// The ticket counter's minus button: drop the earliest seat of a
    /// type. Returns which seat was released, if any.
    pub fn remove_one_by_type(&mut self, ticket_type: TicketType) -> BookingResult<Option<SeatId>> {
        self.ensure_mutable()?;
        let removed = self.engine.remove_one_by_type(&mut self.state, ticket_type);
        if removed.is_some() {
            self.selection_changed();
        }
        Ok(removed)
    }

    // ==================== Add-on commands ====================

    /// Set an add-on quantity outright (0 clears the line)
    pub fn set_addon_quantity(&mut self, id: AddonId, quantity: u32) -> BookingResult<()> {
        self.ensure_mutable()?;
        if self.addons.item(&id).is_none() {
            warn!(addon_id = %id, "Ignoring quantity for unknown add-on");
            return Ok(());
        }
        if quantity == 0 {
            if self.state.addon_counts.remove(&id).is_none() {
                return Ok(());
            }
        } else if self.state.addon_counts.insert(id, quantity) == Some(quantity) {
            return Ok(());
        }
        self.selection_changed();
        Ok(())
    }

    pub fn increment_addon(&mut self, id: &AddonId) -> BookingResult<()> {
        let current = self.state.addon_quantity(id);
        self.set_addon_quantity(id.clone(), current + 1)
    }

    pub fn decrement_addon(&mut self, id: &AddonId) -> BookingResult<()> {
        let current = self.state.addon_quantity(id);
        self.set_addon_quantity(id.clone(), current.saturating_sub(1))
    }

    // ==================== Form commands ====================

    pub fn set_contact(&mut self, contact: ContactInfo) -> BookingResult<()> {
        self.ensure_mutable()?;
        self.flow.set_contact(contact);
        Ok(())
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) -> BookingResult<()> {
        self.ensure_mutable()?;
        self.flow.set_payment_method(method);
        Ok(())
    }

    pub fn set_card_details(&mut self, card: CardDetails) -> BookingResult<()> {
        self.ensure_mutable()?;
        self.flow.set_card_details(card);
        Ok(())
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) -> BookingResult<()> {
        self.ensure_mutable()?;
        self.flow.set_terms_accepted(accepted);
        Ok(())
    }

    // ==================== Flow commands ====================

    /// Validate the current step and move forward
    ///
    /// Reaching the confirmation step finalizes the booking: the
    /// summary and sorted seat list are frozen into a
    /// [`Confirmation`] and every further mutation fails.
    pub fn advance_step(&mut self) -> BookingResult<BookingStep> {
        self.ensure_mutable()?;
        let step = self.flow.advance(&self.state)?;
        self.notify(BookingEvent::StepChanged { step });
        if step == BookingStep::Confirmation {
            self.finalize();
        }
        Ok(step)
    }

    /// Move back one step; confirmation is terminal and only exits
    pub fn back(&mut self) -> BackOutcome {
        let outcome = self.flow.back();
        if let BackOutcome::MovedTo(step) = outcome {
            self.notify(BookingEvent::StepChanged { step });
        }
        outcome
    }

    fn finalize(&mut self) {
        let mut seats = self.state.selected_seats.clone();
        seats.sort();

        let booking_id = generate_booking_id();
        info!(booking_id = %booking_id, seats = seats.len(), total = %self.summary.total, "Booking confirmed");

        self.confirmation = Some(Confirmation {
            booking_id,
            movie_id: self.ctx.movie_id.clone(),
            show_date: self.ctx.show_date.clone(),
            show_time: self.ctx.showtime.time.clone(),
            theater: self.ctx.theater_name.clone(),
            screen: self.ctx.screen.name.clone(),
            format: self.ctx.showtime.format.clone(),
            seats,
            summary: self.summary.clone(),
            created_at: Utc::now(),
        });
        self.notify(BookingEvent::Finalized);
    }

    // ==================== Read surface ====================

    pub fn context(&self) -> &ShowtimeContext {
        &self.ctx
    }

    pub fn summary(&self) -> &OrderSummary {
        &self.summary
    }

    pub fn current_step(&self) -> BookingStep {
        self.flow.current()
    }

    pub fn seat_status(&self, seat: &SeatId) -> SeatStatus {
        self.engine.seat_status(&self.state, seat)
    }

    pub fn is_premium_seat(&self, seat: &SeatId) -> bool {
        self.engine.is_premium(seat)
    }

    /// Selected seat labels, sorted for display
    pub fn selected_seat_labels(&self) -> Vec<String> {
        let mut seats = self.state.selected_seats.clone();
        seats.sort();
        seats.into_iter().map(|s| s.as_str().to_string()).collect()
    }

    pub fn ticket_count(&self, ticket_type: TicketType) -> u32 {
        self.state.ticket_count(ticket_type)
    }

    pub fn addon_quantity(&self, id: &AddonId) -> u32 {
        self.state.addon_quantity(id)
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Format surcharge banner data: the format and its per-ticket
    /// surcharge, when the screening costs extra
    pub fn format_surcharge_banner(&self) -> Option<(Format, Decimal)> {
        let format = &self.ctx.showtime.format;
        let surcharge = self.pricing.format_surcharge(format);
        if surcharge > Decimal::ZERO {
            Some((format.clone(), surcharge))
        } else {
            None
        }
    }
}

/// Booking reference in the `SIN-<year>-<6 alnum>` shape
fn generate_booking_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..6)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("SIN-{}-{}", Utc::now().year(), suffix)
}
