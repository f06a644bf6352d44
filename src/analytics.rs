//! Consent-gated analytics events
//!
//! Views report interactions through a [`Tracker`]; events only reach the
//! sink when analytics is enabled and the visitor accepted cookies.

use crate::state::SiteState;
use std::collections::BTreeMap;

/// A named interaction with optional parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub params: BTreeMap<String, String>,
}

impl AnalyticsEvent {
    /// Create an event without parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    /// Attach a parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Destination for dispatched events
pub trait EventSink {
    fn send(&mut self, event: &AnalyticsEvent);
}

/// Sink that writes events to the log
#[derive(Debug, Default)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn send(&mut self, event: &AnalyticsEvent) {
        log::info!("analytics event {} {:?}", event.name, event.params);
    }
}

/// Sink that keeps events in memory
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    pub events: Vec<AnalyticsEvent>,
}

impl EventSink for MemoryEventSink {
    fn send(&mut self, event: &AnalyticsEvent) {
        self.events.push(event.clone());
    }
}

/// Consent-aware event dispatcher
#[derive(Debug)]
pub struct Tracker<S> {
    sink: S,
    dropped: usize,
}

impl<S: EventSink> Tracker<S> {
    /// Wrap a sink
    pub fn new(sink: S) -> Self {
        Self { sink, dropped: 0 }
    }

    /// Dispatch `event` if the site state allows analytics
    ///
    /// Returns whether the event was sent. Without a consent provider the
    /// event is dropped.
    pub fn track(&mut self, state: &SiteState, event: AnalyticsEvent) -> bool {
        match state.analytics_allowed() {
            Ok(true) => {
                self.sink.send(&event);
                true
            }
            Ok(false) => {
                self.dropped += 1;
                false
            }
            Err(e) => {
                log::warn!("Dropping analytics event {}: {}", event.name, e);
                self.dropped += 1;
                false
            }
        }
    }

    /// Events withheld so far
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::state::Host;

    #[test]
    fn test_events_withheld_until_consent() {
        let mut state = SiteState::mounted(Host::headless(), SiteConfig::default());
        let mut tracker = Tracker::new(MemoryEventSink::default());

        assert!(!tracker.track(&state, AnalyticsEvent::new("page_view")));
        assert_eq!(tracker.dropped(), 1);

        state.use_consent_mut().unwrap().give_consent();
        let event = AnalyticsEvent::new("cta_click").with_param("location", "hero");
        assert!(tracker.track(&state, event.clone()));
        assert_eq!(tracker.sink().events, vec![event]);
    }

    #[test]
    fn test_declined_consent_drops_events() {
        let mut state = SiteState::mounted(Host::headless(), SiteConfig::default());
        state.use_consent_mut().unwrap().deny_consent();

        let mut tracker = Tracker::new(MemoryEventSink::default());
        assert!(!tracker.track(&state, AnalyticsEvent::new("page_view")));
        assert!(tracker.sink().events.is_empty());
    }

    #[test]
    fn test_disabled_analytics_ignores_consent() {
        let config = SiteConfig {
            analytics_enabled: false,
            ..SiteConfig::default()
        };
        let mut state = SiteState::mounted(Host::headless(), config);
        state.use_consent_mut().unwrap().give_consent();

        let mut tracker = Tracker::new(MemoryEventSink::default());
        assert!(!tracker.track(&state, AnalyticsEvent::new("page_view")));
    }

    #[test]
    fn test_missing_consent_provider_drops() {
        let mut state = SiteState::builder(Host::headless()).with_locale().build();
        state.mount();

        let mut tracker = Tracker::new(MemoryEventSink::default());
        assert!(!tracker.track(&state, AnalyticsEvent::new("page_view")));
        assert_eq!(tracker.dropped(), 1);
    }
}
