//! Scalenty site state
//!
//! Locale, theme and cookie-consent state for the Scalenty marketing site,
//! plus the message catalog and FAQ filtering every page consumes.
//!
//! The root [`state::SiteState`] is composed once and handed to views. Its
//! contexts persist through a [`storage::Storage`] and push document side
//! effects through a [`platform::PresentationSink`], so everything here runs
//! without a browser.

pub mod analytics;
pub mod config;
pub mod error;
pub mod faq;
pub mod i18n;
pub mod platform;
pub mod state;
pub mod storage;
pub mod submission;

pub use error::{AppError, AppResult};
