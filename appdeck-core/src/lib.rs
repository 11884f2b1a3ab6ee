pub mod i18n;
pub mod lang;

pub use i18n::{current_locale, lookup, set_locale, t, t_with, Locale};
