//! Trainer settings and the persisted strike-mode preference.
//!
//! Only the strike-mode flag survives a reload. It is kept in a key-value
//! [`PreferenceStore`], which is LocalStorage in the browser and an in-memory
//! map in tests.

use crate::config::{COMBO_SECONDS_OPTIONS, DEFAULT_COMBO_SECONDS, STRIKE_MODE_STORAGE_KEY};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// Time between two combinations, restricted to the values offered in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComboDuration(u32);

impl ComboDuration {
    pub fn all() -> impl Iterator<Item = ComboDuration> {
        COMBO_SECONDS_OPTIONS.into_iter().map(ComboDuration)
    }

    pub fn seconds(self) -> u32 {
        self.0
    }

    pub fn millis(self) -> u32 {
        self.0 * 1_000
    }
}

impl Default for ComboDuration {
    fn default() -> Self {
        ComboDuration(DEFAULT_COMBO_SECONDS)
    }
}

impl TryFrom<u32> for ComboDuration {
    type Error = DurationError;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        if COMBO_SECONDS_OPTIONS.contains(&seconds) {
            Ok(ComboDuration(seconds))
        } else {
            Err(DurationError::NotOffered(seconds))
        }
    }
}

impl fmt::Display for ComboDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} seconds", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DurationError {
    NotOffered(u32),
    Invalid(String),
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationError::NotOffered(s) => write!(
                f,
                "{} seconds is not an offered interval (choose one of {:?})",
                s, COMBO_SECONDS_OPTIONS
            ),
            DurationError::Invalid(msg) => write!(f, "Invalid interval: {}", msg),
        }
    }
}

impl std::error::Error for DurationError {}

/// Everything that shapes how combinations are produced and rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainerSettings {
    pub include_strikes: bool,
    pub interval: ComboDuration,
}

impl TrainerSettings {
    pub fn new(include_strikes: bool, interval: ComboDuration) -> Self {
        Self {
            include_strikes,
            interval,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No storage backend could be reached (no window, storage disabled).
    Unavailable,
    /// The backend refused the read or write.
    Access(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Preference storage is unavailable"),
            StorageError::Access(msg) => write!(f, "Preference storage access failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// String key-value store backing user preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser LocalStorage. Only usable when running inside a page.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// In-memory store, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the strike-mode flag.
///
/// The flag is stored as JSON text (`true` / `false`). Anything missing,
/// unreadable or unparsable counts as `false`; storage failures are logged
/// and never surface to the trainee.
pub struct StrikeModePreference<S> {
    store: S,
}

impl<S: PreferenceStore> StrikeModePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> bool {
        match self.store.read(STRIKE_MODE_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(enabled) => {
                    info!("Loaded strike mode preference: {}", enabled);
                    enabled
                }
                Err(e) => {
                    warn!("Ignoring unparsable strike mode preference {:?}: {}", raw, e);
                    false
                }
            },
            Ok(None) => {
                debug!("No strike mode preference stored, using default");
                false
            }
            Err(e) => {
                warn!("{}, using default strike mode", e);
                false
            }
        }
    }

    pub fn save(&self, enabled: bool) {
        let raw = match serde_json::to_string(&enabled) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not encode strike mode preference: {}", e);
                return;
            }
        };
        match self.store.write(STRIKE_MODE_STORAGE_KEY, &raw) {
            Ok(()) => debug!("Strike mode preference saved ({})", enabled),
            Err(e) => warn!("{}, strike mode not saved", e),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Access("quota exceeded".into()))
        }
    }

    #[test]
    fn duration_accepts_only_offered_values() {
        assert_eq!(ComboDuration::try_from(30).map(|d| d.seconds()), Ok(30));
        assert_eq!(
            ComboDuration::try_from(25),
            Err(DurationError::NotOffered(25))
        );
        assert_eq!(ComboDuration::try_from(0), Err(DurationError::NotOffered(0)));
        assert_eq!(ComboDuration::default().seconds(), 20);
        assert_eq!(ComboDuration::default().millis(), 20_000);
        let all: Vec<u32> = ComboDuration::all().map(ComboDuration::seconds).collect();
        assert_eq!(all, vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn duration_display_matches_select_option() {
        assert_eq!(ComboDuration::default().to_string(), "20 seconds");
    }

    #[test]
    fn preference_defaults_to_off() {
        let pref = StrikeModePreference::new(MemoryStore::new());
        assert!(!pref.load());
    }

    #[test]
    fn preference_round_trips_through_store() {
        let pref = StrikeModePreference::new(MemoryStore::new());
        pref.save(true);
        assert!(pref.load());
        assert_eq!(
            pref.store().read(STRIKE_MODE_STORAGE_KEY).unwrap().as_deref(),
            Some("true")
        );
        pref.save(false);
        assert!(!pref.load());
    }

    #[test]
    fn garbage_preference_falls_back_to_off() {
        let store = MemoryStore::new();
        store.write(STRIKE_MODE_STORAGE_KEY, "yes please").unwrap();
        let pref = StrikeModePreference::new(store);
        assert!(!pref.load());
    }

    #[test]
    fn storage_failures_are_not_fatal() {
        let pref = StrikeModePreference::new(BrokenStore);
        assert!(!pref.load());
        pref.save(true);
    }

    #[test]
    fn toggling_strikes_leaves_interval_alone() {
        let pref = StrikeModePreference::new(MemoryStore::new());
        let interval = ComboDuration::try_from(50).unwrap();
        let mut settings = TrainerSettings::new(true, interval);

        settings.include_strikes = false;
        pref.save(settings.include_strikes);
        settings.include_strikes = true;
        pref.save(settings.include_strikes);

        assert_eq!(settings.interval, interval);
        assert!(pref.load());
        // only the strike flag is ever persisted
        assert_eq!(pref.store().len(), 1);
    }
}
