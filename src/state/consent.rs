//! Cookie consent gate
//!
//! Tri-state consent persisted under `cookie-consent` as
//! `{"status": "...", "timestamp": "..."}`. An absent record is a
//! meaningful state (not asked yet), so nothing is written on load.

use crate::error::ValueError;
use crate::storage::{Preference, PreferenceValue, Storage, CONSENT_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::str::FromStr;

/// Whether the visitor answered the cookie banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl ConsentStatus {
    /// Stored name
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentStatus::Pending => "pending",
            ConsentStatus::Accepted => "accepted",
            ConsentStatus::Declined => "declined",
        }
    }
}

impl FromStr for ConsentStatus {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ConsentStatus::Pending),
            "accepted" | "accept" => Ok(ConsentStatus::Accepted),
            "declined" | "decline" => Ok(ConsentStatus::Declined),
            other => Err(ValueError::UnknownConsentStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for ConsentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted consent record
///
/// `timestamp` is present exactly when `status` is not pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConsentState {
    status: ConsentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
}

impl ConsentState {
    /// Not asked yet
    pub fn pending() -> Self {
        Self::default()
    }

    /// A terminal answer recorded at `at`
    pub fn answered(accepted: bool, at: DateTime<Utc>) -> Self {
        Self {
            status: if accepted {
                ConsentStatus::Accepted
            } else {
                ConsentStatus::Declined
            },
            timestamp: Some(at),
        }
    }

    /// Recorded answer
    pub fn status(&self) -> ConsentStatus {
        self.status
    }

    /// When the answer was recorded; `None` while pending
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }
}

impl PreferenceValue for ConsentState {
    fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Validator for stored consent records
pub fn is_valid_consent(state: &ConsentState) -> bool {
    (state.status == ConsentStatus::Pending) == state.timestamp.is_none()
}

/// Clock used for consent timestamps
pub type Clock = fn() -> DateTime<Utc>;

/// Consent state plus the operations that answer it
pub struct ConsentGate {
    state: ConsentState,
    preference: Preference<ConsentState>,
    clock: Clock,
}

impl ConsentGate {
    /// Load any stored answer; absent or invalid records mean pending
    pub fn mount(storage: Rc<dyn Storage>) -> Self {
        Self::mount_with_clock(storage, Utc::now)
    }

    /// Same as [`ConsentGate::mount`] with an injected clock
    pub fn mount_with_clock(storage: Rc<dyn Storage>, clock: Clock) -> Self {
        let preference = Preference::new(CONSENT_KEY, storage);
        let state = preference
            .load_existing(is_valid_consent)
            .unwrap_or_else(ConsentState::pending);
        log::debug!("Consent gate ready: {}", state.status);

        Self {
            state,
            preference,
            clock,
        }
    }

    /// Full consent record
    pub fn state(&self) -> ConsentState {
        self.state
    }

    /// Current status
    pub fn status(&self) -> ConsentStatus {
        self.state.status
    }

    /// Visitor accepted cookies
    pub fn has_consent(&self) -> bool {
        self.state.status == ConsentStatus::Accepted
    }

    /// Visitor answered the banner either way
    pub fn has_responded(&self) -> bool {
        self.state.status != ConsentStatus::Pending
    }

    /// Whether the banner should be shown, given the site's feature flag
    pub fn banner_visible(&self, banner_enabled: bool) -> bool {
        banner_enabled && !self.has_responded()
    }

    /// Record acceptance
    pub fn give_consent(&mut self) {
        self.answer(true);
    }

    /// Record refusal
    pub fn deny_consent(&mut self) {
        self.answer(false);
    }

    /// Answers are terminal: a later call only refreshes the timestamp
    fn answer(&mut self, accepted: bool) {
        let now = (self.clock)();
        if self.has_responded() {
            if self.has_consent() != accepted {
                log::debug!("Ignoring consent change, already {}", self.state.status);
            }
            self.state.timestamp = Some(now);
        } else {
            self.state = ConsentState::answered(accepted, now);
            log::info!("Cookie consent {}", self.state.status);
        }
        self.preference.save(&self.state);
    }
}

impl std::fmt::Debug for ConsentGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsentGate")
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_absent_record_is_pending_without_write() {
        let storage = Rc::new(MemoryStorage::new());
        let gate = ConsentGate::mount(storage.clone());

        assert_eq!(gate.status(), ConsentStatus::Pending);
        assert!(!gate.has_responded());
        assert!(!gate.has_consent());
        assert_eq!(storage.raw(CONSENT_KEY), None);
    }

    #[test]
    fn test_give_consent_persists_json() {
        let storage = Rc::new(MemoryStorage::new());
        let mut gate = ConsentGate::mount_with_clock(storage.clone(), fixed_clock);
        gate.give_consent();

        let raw = storage.raw(CONSENT_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["status"], "accepted");
        assert_eq!(json["timestamp"], "2025-03-14T09:30:00Z");
    }

    #[test]
    fn test_give_consent_twice_stays_accepted() {
        let mut gate = ConsentGate::mount(Rc::new(MemoryStorage::new()));
        gate.give_consent();
        assert_eq!(gate.status(), ConsentStatus::Accepted);
        assert!(gate.has_responded());

        gate.give_consent();
        assert_eq!(gate.status(), ConsentStatus::Accepted);
        assert!(gate.has_consent());
    }

    fn later_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_answer_is_terminal() {
        let storage = Rc::new(MemoryStorage::new());
        let mut gate = ConsentGate::mount(storage.clone());
        gate.give_consent();
        gate.deny_consent();
        assert_eq!(gate.status(), ConsentStatus::Accepted);
        assert!(gate.has_consent());
        assert_eq!(
            ConsentGate::mount(storage).status(),
            ConsentStatus::Accepted
        );

        let storage = Rc::new(MemoryStorage::new());
        let mut gate = ConsentGate::mount(storage.clone());
        gate.deny_consent();
        gate.give_consent();
        assert_eq!(gate.status(), ConsentStatus::Declined);
        assert!(!gate.has_consent());
        assert_eq!(
            ConsentGate::mount(storage).status(),
            ConsentStatus::Declined
        );
    }

    #[test]
    fn test_stored_refusal_stays_declined() {
        let storage = Rc::new(MemoryStorage::new());
        ConsentGate::mount_with_clock(storage.clone(), fixed_clock).deny_consent();

        let mut gate = ConsentGate::mount_with_clock(storage.clone(), later_clock);
        assert_eq!(gate.status(), ConsentStatus::Declined);
        gate.give_consent();

        assert_eq!(gate.status(), ConsentStatus::Declined);
        assert_eq!(gate.state().timestamp(), Some(later_clock()));
        let json: serde_json::Value =
            serde_json::from_str(&storage.raw(CONSENT_KEY).unwrap()).unwrap();
        assert_eq!(json["status"], "declined");
        assert_eq!(json["timestamp"], "2025-06-01T12:00:00Z");
    }

    #[test]
    fn test_deny_consent() {
        let mut gate = ConsentGate::mount(Rc::new(MemoryStorage::new()));
        gate.deny_consent();
        assert!(gate.has_responded());
        assert!(!gate.has_consent());
        assert!(gate.state().timestamp().is_some());
    }

    #[test]
    fn test_stored_answer_survives_remount() {
        let storage = Rc::new(MemoryStorage::new());
        ConsentGate::mount_with_clock(storage.clone(), fixed_clock).deny_consent();

        let gate = ConsentGate::mount(storage);
        assert_eq!(gate.status(), ConsentStatus::Declined);
        assert_eq!(gate.state().timestamp(), Some(fixed_clock()));
    }

    #[test]
    fn test_invalid_records_read_as_pending() {
        for raw in [
            "not json",
            r#"{"status":"accepted"}"#,
            r#"{"status":"pending","timestamp":"2025-03-14T09:30:00Z"}"#,
            r#"{"status":"maybe","timestamp":"2025-03-14T09:30:00Z"}"#,
        ] {
            let storage = Rc::new(MemoryStorage::with_entries([(CONSENT_KEY, raw)]));
            let gate = ConsentGate::mount(storage.clone());
            assert_eq!(gate.status(), ConsentStatus::Pending, "record {raw}");
            assert_eq!(storage.raw(CONSENT_KEY), Some(raw.to_string()));
        }
    }

    #[test]
    fn test_banner_visibility() {
        let mut gate = ConsentGate::mount(Rc::new(MemoryStorage::new()));
        assert!(gate.banner_visible(true));
        assert!(!gate.banner_visible(false));

        gate.give_consent();
        assert!(!gate.banner_visible(true));
    }
}
