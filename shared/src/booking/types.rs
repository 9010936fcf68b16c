//! Contact and payment records captured at the payment step

use serde::{Deserialize, Serialize};

/// Contact details entered at step 3
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

/// Payment method - the radio options of the payment form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Paypal,
    Apple,
}

impl PaymentMethod {
    /// Whether this method requires card details to be filled in
    pub fn requires_card_details(&self) -> bool {
        matches!(self, PaymentMethod::Card)
    }
}

/// Card form fields - kept as entered, masking is a view concern
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
    pub cardholder: String,
}

/// Payment selection captured at step 3
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentInfo {
    /// Chosen method, `None` until the user picks one
    pub method: Option<PaymentMethod>,
    /// Card details, only meaningful when method is Card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
}
