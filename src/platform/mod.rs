//! Host platform seams
//!
//! The state layer never touches a real document or OS directly:
//! - `document`: root-element side effects (language attribute, theme marker)
//! - `appearance`: the OS light/dark preference and its change notifications

mod appearance;
mod document;

pub use appearance::*;
pub use document::*;
