//! Card input masking
//!
//! Stateless text transforms for the payment form. No validation
//! happens here; the step guard only cares that the fields are
//! non-empty.

/// Mask a card number: digits only, capped at 16, a space per group
/// of four ("4242424242424242" -> "4242 4242 4242 4242")
pub fn format_card_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(16).collect();
    let mut out = String::with_capacity(digits.len() + 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Mask an expiry date: digits only, capped at 4, slash after the
/// month ("1226" -> "12/26")
pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
    if digits.len() <= 2 {
        return digits;
    }
    format!("{}/{}", &digits[..2], &digits[2..])
}
