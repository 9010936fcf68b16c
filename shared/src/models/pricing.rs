//! Pricing configuration

use crate::types::{Format, TicketType};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Convert a catalog float to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Pricing configuration - immutable, loaded once per session
///
/// Raw shape of the `pricing` section of the booking data file. All
/// amounts are in the site currency with two-decimal precision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingCatalog {
    /// Ticket base price per ticket type
    pub tickets: HashMap<TicketType, f64>,
    /// Flat surcharge for premium-row seats
    #[serde(default)]
    pub premium_seating: f64,
    /// Flat surcharge per non-standard presentation format
    #[serde(default)]
    pub format_pricing: HashMap<String, f64>,
    /// Flat per-order service fee (waived on an empty cart)
    #[serde(default)]
    pub service_fee: f64,
    /// Tax rate as a fraction (0.08 = 8%), applied on subtotal + fee
    #[serde(default)]
    pub tax_rate: f64,
}

impl PricingCatalog {
    /// Base price for a ticket type, `None` when the catalog does not
    /// list the type (the caller turns this into InvalidTicketType)
    pub fn base_price(&self, ticket_type: TicketType) -> Option<Decimal> {
        self.tickets.get(&ticket_type).copied().map(to_decimal)
    }

    /// Surcharge for a premium-row seat
    pub fn premium_surcharge(&self) -> Decimal {
        to_decimal(self.premium_seating)
    }

    /// Surcharge for the given format
    ///
    /// Standard carries no surcharge; non-standard formats absent
    /// from the table cost 0 as well.
    pub fn format_surcharge(&self, format: &Format) -> Decimal {
        if format.is_standard() {
            return Decimal::ZERO;
        }
        self.format_pricing
            .get(format.as_str())
            .copied()
            .map(to_decimal)
            .unwrap_or(Decimal::ZERO)
    }

    /// Per-order service fee
    pub fn service_fee(&self) -> Decimal {
        to_decimal(self.service_fee)
    }

    /// Tax rate fraction
    pub fn tax_rate(&self) -> Decimal {
        to_decimal(self.tax_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PricingCatalog {
        PricingCatalog {
            tickets: HashMap::from([(TicketType::Adult, 12.0), (TicketType::Child, 8.5)]),
            premium_seating: 3.0,
            format_pricing: HashMap::from([("IMAX".to_string(), 2.0)]),
            service_fee: 1.5,
            tax_rate: 0.08,
        }
    }

    #[test]
    fn base_price_lookup() {
        let c = catalog();
        assert_eq!(c.base_price(TicketType::Adult), Some(Decimal::new(12, 0)));
        assert_eq!(c.base_price(TicketType::Senior), None);
    }

    #[test]
    fn format_surcharge_rules() {
        let c = catalog();
        assert_eq!(c.format_surcharge(&Format::from("Standard")), Decimal::ZERO);
        assert_eq!(c.format_surcharge(&Format::from("IMAX")), Decimal::new(2, 0));
        // Non-standard format missing from the table costs nothing
        assert_eq!(c.format_surcharge(&Format::from("4DX")), Decimal::ZERO);
    }

    #[test]
    fn parses_camel_case_json() {
        let json = r#"{
            "tickets": {"adult": 12.0, "child": 8.5, "senior": 9.5, "student": 10.0},
            "premiumSeating": 3.0,
            "formatPricing": {"IMAX": 2.0, "3D": 1.5},
            "serviceFee": 1.5,
            "taxRate": 0.08
        }"#;
        let c: PricingCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(c.tickets.len(), 4);
        assert_eq!(c.premium_seating, 3.0);
        assert_eq!(c.format_pricing["3D"], 1.5);
    }
}
