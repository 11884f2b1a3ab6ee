//! Static per-locale string tables.
//!
//! Each table is a flat slice of `(dotted key, text)` pairs sorted by key;
//! [`crate::i18n::lookup`] binary-searches them. English is complete, other
//! locales may be partial and fall back to English per key.

pub mod en;
pub mod zh_hans;
