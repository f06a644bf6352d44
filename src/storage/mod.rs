//! Durable client-side storage for the site preferences
//!
//! - `backend`: key/value stores (in-memory, JSON file, unavailable)
//! - `preference`: typed, validated preference values with default recovery

mod backend;
mod preference;

pub use backend::*;
pub use preference::*;

/// Storage key for the locale preference
pub const LOCALE_KEY: &str = "scalenty-locale";

/// Storage key for the theme preference
pub const THEME_KEY: &str = "scalenty-theme";

/// Storage key for the cookie consent record
pub const CONSENT_KEY: &str = "cookie-consent";
