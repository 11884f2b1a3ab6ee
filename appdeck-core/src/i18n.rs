//! Locale-aware string catalog.
//!
//! User-facing strings live in flat, dot-addressed tables (one per locale,
//! see [`crate::lang`]) and are resolved through [`t`] / [`t_with`].
//! Lookup falls back to English for keys a locale has not translated yet,
//! and to the key itself as a last resort so a missing entry is visible in
//! the UI instead of rendering blank.

use serde::{Deserialize, Serialize};
use std::cell::Cell;

use crate::lang;

/// Supported UI locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// English (default and fallback).
    #[default]
    #[serde(rename = "en")]
    En,
    /// Simplified Chinese.
    #[serde(rename = "zh-Hans")]
    ZhHans,
}

impl Locale {
    /// Canonical locale label, also used as the persisted form.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhHans => "zh-Hans",
        }
    }

    /// Parse a locale label. Case-insensitive, tolerant of region tags
    /// and either separator ("zh-hans", "zh_Hans", "en-US" all work).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang_tag = normalized.split(['-', '_']).next().unwrap_or("");
        match lang_tag {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::ZhHans),
            _ => None,
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => lang::en::TABLE,
            Locale::ZhHans => lang::zh_hans::TABLE,
        }
    }
}

thread_local! {
    // wasm runs single-threaded; a Cell is all the synchronization needed.
    static ACTIVE_LOCALE: Cell<Locale> = const { Cell::new(Locale::En) };
}

/// Set the active locale for all subsequent lookups.
pub fn set_locale(locale: Locale) {
    ACTIVE_LOCALE.with(|cell| cell.set(locale));
}

/// The currently active locale.
pub fn current_locale() -> Locale {
    ACTIVE_LOCALE.with(|cell| cell.get())
}

/// Exact table lookup for one locale, no fallback.
///
/// Tables are sorted by key so this is a binary search.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let table = locale.table();
    table
        .binary_search_by_key(&key, |&(k, _)| k)
        .ok()
        .map(|idx| table[idx].1)
}

/// Resolve `key` in the active locale.
///
/// Fallback chain: active locale, then English, then the key itself.
pub fn t(key: &str) -> String {
    let locale = current_locale();
    lookup(locale, key)
        .or_else(|| lookup(Locale::En, key))
        .map(str::to_owned)
        .unwrap_or_else(|| key.to_owned())
}

/// Resolve `key` like [`t`], then substitute `{{name}}` placeholders from
/// `args`. Placeholders without a matching arg are left intact.
pub fn t_with(key: &str, args: &[(&str, &str)]) -> String {
    substitute(&t(key), args)
}

fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            // Unterminated placeholder, emit verbatim
            out.push_str(&rest[start..]);
            return out;
        };
        let name = after_open[..end].trim();
        match args.iter().find(|&&(k, _)| k == name) {
            Some(&(_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(&after_open[..end]);
                out.push_str("}}");
            }
        }
        rest = &after_open[end + 2..];
    }
    out.push_str(rest);
    out
}
