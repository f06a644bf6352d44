//! OS appearance preference and change notifications
//!
//! Mirrors the `prefers-color-scheme` media query: a current light/dark value
//! plus synchronous notifications whenever it changes. Listeners stay
//! registered exactly as long as their [`Subscription`] guard lives.

use crate::state::ResolvedTheme;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Environment variable consulted first by [`SystemAppearance::detect`]
pub const COLOR_SCHEME_ENV: &str = "SCALENTY_COLOR_SCHEME";

type Listener = Rc<dyn Fn(ResolvedTheme)>;

/// Source of the OS light/dark preference
pub trait AppearanceSource {
    /// Current OS preference
    fn current(&self) -> ResolvedTheme;

    /// Register a change listener; it is removed when the guard drops
    fn subscribe(&self, listener: Box<dyn Fn(ResolvedTheme)>) -> Subscription;
}

/// Guard for a registered listener
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a guard that runs `cancel` when dropped
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unregister now instead of at drop
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

struct AppearanceInner {
    current: ResolvedTheme,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Settable OS appearance with synchronous listeners
///
/// Cloning shares the same underlying preference.
#[derive(Clone)]
pub struct SystemAppearance {
    inner: Rc<RefCell<AppearanceInner>>,
}

impl SystemAppearance {
    /// Create a source reporting `initial`
    pub fn new(initial: ResolvedTheme) -> Self {
        Self {
            inner: Rc::new(RefCell::new(AppearanceInner {
                current: initial,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Detect the preference from the environment, defaulting to light
    pub fn detect() -> Self {
        Self::new(detect_from_env(
            std::env::var(COLOR_SCHEME_ENV).ok().as_deref(),
            std::env::var("GTK_THEME").ok().as_deref(),
        ))
    }

    /// Change the OS preference and notify listeners if it differs
    pub fn set(&self, theme: ResolvedTheme) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.current == theme {
                return;
            }
            inner.current = theme;
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };

        log::debug!("OS appearance changed to {}", theme);
        for listener in listeners {
            (*listener)(theme);
        }
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl AppearanceSource for SystemAppearance {
    fn current(&self) -> ResolvedTheme {
        self.inner.borrow().current
    }

    fn subscribe(&self, listener: Box<dyn Fn(ResolvedTheme)>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::from(listener)));
            id
        };

        let weak: Weak<RefCell<AppearanceInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(i, _)| *i != id);
            }
        })
    }
}

impl std::fmt::Debug for SystemAppearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SystemAppearance")
            .field("current", &inner.current)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

fn detect_from_env(scheme: Option<&str>, gtk_theme: Option<&str>) -> ResolvedTheme {
    if let Some(theme) = scheme.and_then(|s| s.trim().to_lowercase().parse::<ResolvedTheme>().ok()) {
        return theme;
    }

    match gtk_theme {
        Some(name) if name.to_lowercase().ends_with(":dark") => ResolvedTheme::Dark,
        _ => ResolvedTheme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_detect_from_env() {
        assert_eq!(detect_from_env(Some("dark"), None), ResolvedTheme::Dark);
        assert_eq!(detect_from_env(Some("LIGHT"), Some("Adwaita:dark")), ResolvedTheme::Light);
        assert_eq!(detect_from_env(Some("blue"), Some("Adwaita:dark")), ResolvedTheme::Dark);
        assert_eq!(detect_from_env(None, Some("Adwaita")), ResolvedTheme::Light);
        assert_eq!(detect_from_env(None, None), ResolvedTheme::Light);
    }

    #[test]
    fn test_listener_notified_on_change_only() {
        let source = SystemAppearance::new(ResolvedTheme::Light);
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let _sub = source.subscribe(Box::new(move |_| seen.set(seen.get() + 1)));

        source.set(ResolvedTheme::Light);
        assert_eq!(calls.get(), 0);

        source.set(ResolvedTheme::Dark);
        assert_eq!(calls.get(), 1);
        assert_eq!(source.current(), ResolvedTheme::Dark);
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let source = SystemAppearance::new(ResolvedTheme::Light);
        let sub = source.subscribe(Box::new(|_| {}));
        let other = source.subscribe(Box::new(|_| {}));
        assert_eq!(source.listener_count(), 2);

        drop(sub);
        assert_eq!(source.listener_count(), 1);

        other.cancel();
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_source() {
        let source = SystemAppearance::new(ResolvedTheme::Dark);
        let sub = source.subscribe(Box::new(|_| {}));
        drop(source);
        drop(sub);
    }
}
