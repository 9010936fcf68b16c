//! Order summary calculation
//!
//! `compute_summary` is a pure function of the selection state and the
//! catalogs: no side effects, no stored intermediate state, and two
//! calls with the same input produce identical summaries down to the
//! line ordering. The session recomputes it after every mutation.

use super::money::round_money;
use crate::seating::SelectionState;
use shared::{AddonCatalog, AddonLine, Format, OrderSummary, PricingCatalog, Screen, TicketLine, TicketType};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Build the full order summary for the current selection
///
/// Ticket lines are emitted in `TicketType::ALL` order, regular before
/// premium within a type; add-on lines sorted by item id. Premium
/// status comes from the seat's row, the format surcharge from the
/// screening's format (Standard and unlisted formats cost nothing).
pub fn compute_summary(
    state: &SelectionState,
    pricing: &PricingCatalog,
    addons: &AddonCatalog,
    screen: &Screen,
    format: &Format,
) -> OrderSummary {
    let premium_surcharge = pricing.premium_surcharge();
    let format_surcharge = pricing.format_surcharge(format);

    let mut ticket_lines = Vec::new();
    let mut subtotal = Decimal::ZERO;

    for ticket_type in TicketType::ALL {
        let Some(base) = pricing.base_price(ticket_type) else {
            if state.ticket_count(ticket_type) > 0 {
                warn!(ticket_type = %ticket_type, "Ticket type missing from pricing catalog, skipped");
            }
            continue;
        };

        let premium_count = state
            .seats_of_type(ticket_type)
            .filter(|seat| screen.is_premium(seat))
            .count() as u32;
        let regular_count = state.ticket_count(ticket_type) - premium_count;

        // Regular before premium within a type
        for (premium, quantity) in [(false, regular_count), (true, premium_count)] {
            if quantity == 0 {
                continue;
            }
            let mut unit_price = base + format_surcharge;
            if premium {
                unit_price += premium_surcharge;
            }
            let line_total = unit_price * Decimal::from(quantity);
            subtotal += line_total;
            ticket_lines.push(TicketLine {
                ticket_type,
                premium,
                quantity,
                unit_price: round_money(unit_price),
                line_total: round_money(line_total),
            });
        }
    }

    let mut addon_ids: Vec<_> = state
        .addon_counts
        .iter()
        .filter(|(_, quantity)| **quantity > 0)
        .map(|(id, quantity)| (id.clone(), *quantity))
        .collect();
    addon_ids.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut addon_lines = Vec::new();
    for (addon_id, quantity) in addon_ids {
        // The catalog is authoritative; stray ids never price
        let Some(item) = addons.item(&addon_id) else {
            warn!(addon_id = %addon_id, "Unknown add-on id in selection, skipped");
            continue;
        };
        let unit_price = item.unit_price();
        let line_total = unit_price * Decimal::from(quantity);
        subtotal += line_total;
        addon_lines.push(AddonLine {
            addon_id,
            name: item.name.clone(),
            quantity,
            unit_price: round_money(unit_price),
            line_total: round_money(line_total),
        });
    }

    // Fee is waived on an empty cart; taxes apply on subtotal + fee
    let service_fee = if subtotal > Decimal::ZERO {
        pricing.service_fee()
    } else {
        Decimal::ZERO
    };
    let taxes = (subtotal + service_fee) * pricing.tax_rate();
    let total = subtotal + service_fee + taxes;

    let summary = OrderSummary {
        ticket_lines,
        addon_lines,
        subtotal: round_money(subtotal),
        service_fee: round_money(service_fee),
        taxes: round_money(taxes),
        total: round_money(total),
    };

    debug!(
        subtotal = %summary.subtotal,
        service_fee = %summary.service_fee,
        taxes = %summary.taxes,
        total = %summary.total,
        "Summary recomputed"
    );
    summary
}
