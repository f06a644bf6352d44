//! Theme context
//!
//! The user's stored intent may be `system`; the resolved theme is always a
//! concrete light or dark value. While the intent is `system`, OS appearance
//! changes re-resolve and re-apply the marker synchronously.

use crate::error::ValueError;
use crate::platform::{AppearanceSource, PresentationSink, Subscription};
use crate::storage::{Preference, PreferenceValue, Storage, THEME_KEY};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

/// Appearance the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Always light
    Light,
    /// Always dark
    Dark,
    /// Follow the OS preference
    #[default]
    System,
}

impl Theme {
    /// Every theme intent
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    /// Stored name
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Resolve against the OS preference
    pub fn resolve(self, os: ResolvedTheme) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System => os,
        }
    }
}

impl FromStr for Theme {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ValueError::UnknownTheme(other.to_string())),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PreferenceValue for Theme {
    fn decode(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn encode(&self) -> String {
        self.as_str().to_string()
    }
}

impl From<ResolvedTheme> for Theme {
    fn from(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Theme::Light,
            ResolvedTheme::Dark => Theme::Dark,
        }
    }
}

/// Appearance actually applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Marker name on the document root
    pub fn as_str(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }

    /// The other concrete theme
    pub fn opposite(self) -> Self {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }
}

impl FromStr for ResolvedTheme {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ResolvedTheme::Light),
            "dark" => Ok(ResolvedTheme::Dark),
            other => Err(ValueError::UnknownTheme(other.to_string())),
        }
    }
}

impl std::fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validator for stored themes
pub fn is_valid_theme(theme: &Theme) -> bool {
    Theme::ALL.contains(theme)
}

#[derive(Debug, Clone, Copy)]
struct ThemeInner {
    theme: Theme,
    resolved: ResolvedTheme,
    os: ResolvedTheme,
}

/// Application-wide appearance state
pub struct ThemeContext {
    inner: Rc<RefCell<ThemeInner>>,
    preference: Preference<Theme>,
    sink: Rc<dyn PresentationSink>,
    _subscription: Subscription,
}

impl ThemeContext {
    /// Load the stored intent, resolve it, apply it, and start observing the OS
    pub fn mount(
        storage: Rc<dyn Storage>,
        sink: Rc<dyn PresentationSink>,
        appearance: &dyn AppearanceSource,
    ) -> Self {
        let preference = Preference::new(THEME_KEY, storage);
        let theme = preference.load(is_valid_theme, Theme::default);
        let os = appearance.current();
        let resolved = theme.resolve(os);
        sink.set_theme_marker(resolved);

        let inner = Rc::new(RefCell::new(ThemeInner { theme, resolved, os }));
        let subscription = appearance.subscribe(Box::new({
            let inner = Rc::clone(&inner);
            let sink = Rc::clone(&sink);
            move |os| on_appearance_change(&inner, sink.as_ref(), os)
        }));
        log::debug!("Theme context ready: {} ({})", theme, resolved);

        Self {
            inner,
            preference,
            sink,
            _subscription: subscription,
        }
    }

    /// Stored intent
    pub fn theme(&self) -> Theme {
        self.inner.borrow().theme
    }

    /// Concrete theme currently applied
    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.inner.borrow().resolved
    }

    /// Persist a new intent and apply its resolution immediately
    pub fn set_theme(&mut self, theme: Theme) {
        let resolved = {
            let mut inner = self.inner.borrow_mut();
            inner.theme = theme;
            inner.resolved = theme.resolve(inner.os);
            inner.resolved
        };
        self.preference.save(&theme);
        self.sink.set_theme_marker(resolved);
        log::debug!("Theme set to {} ({})", theme, resolved);
    }

    /// Flip between light and dark based on what is currently shown
    pub fn toggle_theme(&mut self) {
        let next = self.resolved_theme().opposite();
        self.set_theme(next.into());
    }

    /// Forget the stored intent and recover the default, following the OS again
    pub fn reset(&mut self) {
        self.preference.reset();
        let theme = self.preference.load(is_valid_theme, Theme::default);
        let resolved = {
            let mut inner = self.inner.borrow_mut();
            inner.theme = theme;
            inner.resolved = theme.resolve(inner.os);
            inner.resolved
        };
        self.sink.set_theme_marker(resolved);
        log::debug!("Theme reset to {} ({})", theme, resolved);
    }
}

fn on_appearance_change(inner: &RefCell<ThemeInner>, sink: &dyn PresentationSink, os: ResolvedTheme) {
    let resolved = {
        let mut state = inner.borrow_mut();
        state.os = os;
        if state.theme != Theme::System {
            return;
        }
        state.resolved = os;
        os
    };
    sink.set_theme_marker(resolved);
    log::debug!("Following OS appearance: {}", resolved);
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ThemeContext")
            .field("theme", &inner.theme)
            .field("resolved", &inner.resolved)
            .finish()
    }
}
