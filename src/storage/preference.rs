//! Typed preferences with validation and default recovery
//!
//! A [`Preference`] round-trips one value to a [`Storage`] under a fixed key.
//! Storage failures never reach the caller: they are logged and the
//! in-memory value stays authoritative for the session.

use super::Storage;
use std::marker::PhantomData;
use std::rc::Rc;

/// A value that can be persisted as a raw string
pub trait PreferenceValue: Sized {
    /// Parse a raw stored value; `None` means corrupt or foreign
    fn decode(raw: &str) -> Option<Self>;

    /// Serialize for storage
    fn encode(&self) -> String;
}

/// A named, validated, persisted setting
pub struct Preference<T> {
    key: &'static str,
    storage: Rc<dyn Storage>,
    _value: PhantomData<T>,
}

impl<T: PreferenceValue> Preference<T> {
    /// Bind a preference to a storage key
    pub fn new(key: &'static str, storage: Rc<dyn Storage>) -> Self {
        Self {
            key,
            storage,
            _value: PhantomData,
        }
    }

    /// Storage key this preference lives under
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Load the stored value, recovering with `compute_default` when needed
    ///
    /// An absent, undecodable or rejected value is replaced by the computed
    /// default, which is written back so it is not re-derived on the next
    /// load. Without storage the default is returned and nothing is written.
    pub fn load<V, D>(&self, validator: V, compute_default: D) -> T
    where
        V: Fn(&T) -> bool,
        D: FnOnce() -> T,
    {
        if !self.storage.is_available() {
            log::debug!("Storage unavailable, using default for {}", self.key);
            return compute_default();
        }

        if let Some(value) = self.load_existing(validator) {
            return value;
        }

        let value = compute_default();
        log::info!("Recovered default for {}", self.key);
        self.save(&value);
        value
    }

    /// Load the stored value if present and valid, without any write
    pub fn load_existing<V>(&self, validator: V) -> Option<T>
    where
        V: Fn(&T) -> bool,
    {
        let raw = match self.storage.get(self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("Could not read {}: {}", self.key, e);
                return None;
            }
        };

        match T::decode(&raw) {
            Some(value) if validator(&value) => Some(value),
            _ => {
                log::debug!("Ignoring invalid stored value for {}: {:?}", self.key, raw);
                None
            }
        }
    }

    /// Overwrite the stored value; failures are logged and dropped
    pub fn save(&self, value: &T) {
        if !self.storage.is_available() {
            return;
        }

        if let Err(e) = self.storage.set(self.key, &value.encode()) {
            log::warn!("Could not save {}: {}", self.key, e);
        }
    }

    /// Remove the stored value so the next load recomputes the default
    pub fn reset(&self) {
        if !self.storage.is_available() {
            return;
        }

        if let Err(e) = self.storage.remove(self.key) {
            log::warn!("Could not reset {}: {}", self.key, e);
        }
    }
}

impl<T> std::fmt::Debug for Preference<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preference").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StorageError, StorageResult};
    use crate::storage::{MemoryStorage, UnavailableStorage};
    use std::cell::Cell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Level(u8);

    impl PreferenceValue for Level {
        fn decode(raw: &str) -> Option<Self> {
            raw.parse().ok().map(Level)
        }

        fn encode(&self) -> String {
            self.0.to_string()
        }
    }

    fn in_range(level: &Level) -> bool {
        level.0 <= 10
    }

    /// Store that reads fine but refuses every write
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(Some("3".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable)
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_load_absent_persists_default() {
        let storage = Rc::new(MemoryStorage::new());
        let pref = Preference::<Level>::new("level", storage.clone());

        assert_eq!(pref.load(in_range, || Level(5)), Level(5));
        assert_eq!(storage.raw("level"), Some("5".to_string()));
    }

    #[test]
    fn test_load_rejected_value_is_replaced() {
        let storage = Rc::new(MemoryStorage::with_entries([("level", "42")]));
        let pref = Preference::<Level>::new("level", storage.clone());

        assert_eq!(pref.load(in_range, || Level(1)), Level(1));
        assert_eq!(storage.raw("level"), Some("1".to_string()));
    }

    #[test]
    fn test_load_garbage_is_replaced() {
        let storage = Rc::new(MemoryStorage::with_entries([("level", "loud")]));
        let pref = Preference::<Level>::new("level", storage.clone());

        assert_eq!(pref.load(in_range, || Level(2)), Level(2));
        assert_eq!(storage.raw("level"), Some("2".to_string()));
    }

    #[test]
    fn test_load_valid_skips_default() {
        let storage = Rc::new(MemoryStorage::with_entries([("level", "7")]));
        let pref = Preference::<Level>::new("level", storage);
        let called = Cell::new(false);

        let value = pref.load(in_range, || {
            called.set(true);
            Level(0)
        });
        assert_eq!(value, Level(7));
        assert!(!called.get());
    }

    #[test]
    fn test_unavailable_storage_returns_default() {
        let pref = Preference::<Level>::new("level", Rc::new(UnavailableStorage));
        assert_eq!(pref.load(in_range, || Level(9)), Level(9));
        pref.save(&Level(3));
        pref.reset();
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let pref = Preference::<Level>::new("level", Rc::new(ReadOnlyStorage));
        pref.save(&Level(4));
        assert_eq!(pref.load_existing(in_range), Some(Level(3)));
    }

    #[test]
    fn test_reset_removes_value() {
        let storage = Rc::new(MemoryStorage::with_entries([("level", "7")]));
        let pref = Preference::<Level>::new("level", storage.clone());
        pref.reset();
        assert_eq!(storage.raw("level"), None);
        assert_eq!(pref.load_existing(in_range), None);
    }
}
