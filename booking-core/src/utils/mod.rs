//! Cross-cutting utilities

pub mod logger;
pub mod validation;
