//! State management module for the Scalenty site
//!
//! This module contains the application-wide preference state organized by concern:
//! - `locale`: current UI language
//! - `theme`: stored appearance intent and the resolved light/dark value
//! - `consent`: cookie consent gate
//! - `root`: the root-composed state object and its hooks

mod consent;
mod locale;
mod root;
mod theme;

pub use consent::*;
pub use locale::*;
pub use root::*;
pub use theme::*;
