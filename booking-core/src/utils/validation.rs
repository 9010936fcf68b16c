//! Shared text limits for form input

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Phone numbers as entered, punctuation included
pub const MAX_PHONE_LEN: usize = 32;

/// Cardholder name
pub const MAX_NAME_LEN: usize = 200;
