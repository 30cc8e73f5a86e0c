#[cfg(feature = "hydrate")]
pub mod browser;

use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Arc, Mutex},
};

use log::{debug, warn};
use thiserror::Error;

/// Storage key the user's choice is persisted under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ThemeError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme mode: {0:?}")]
    UnknownMode(String),
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    #[error("couldn't write preference: {0}")]
    WriteFailed(String),
}

/// Key-value storage that survives across sessions.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The platform's "prefers dark" signal. `None` when the platform can't tell.
pub trait PlatformTheme: Send + Sync {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Applies a visual mode to whatever is being rendered.
pub trait ModeApplier: Send + Sync {
    fn apply(&self, mode: ThemeMode);
}

/// A fixed answer, used where there is no platform to ask.
impl PlatformTheme for Option<bool> {
    fn prefers_dark(&self) -> Option<bool> {
        *self
    }
}

/// Store backed by a shared map. Clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ThemeError::StorageUnavailable)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopApplier;

impl ModeApplier for NoopApplier {
    fn apply(&self, _mode: ThemeMode) {}
}

/// The dark-mode flag together with the places it is persisted and shown.
///
/// The flag starts out dark until [`ThemePreference::initialize`] runs. After
/// every [`ThemePreference::set_enabled`] the stored value and the applied
/// mode match the flag.
pub struct ThemePreference {
    store: Box<dyn PreferenceStore>,
    platform: Box<dyn PlatformTheme>,
    applier: Box<dyn ModeApplier>,
    is_dark: bool,
}

impl ThemePreference {
    pub fn new(
        store: impl PreferenceStore + 'static,
        platform: impl PlatformTheme + 'static,
        applier: impl ModeApplier + 'static,
    ) -> Self {
        Self {
            store: Box::new(store),
            platform: Box::new(platform),
            applier: Box::new(applier),
            is_dark: true,
        }
    }

    /// Preference with nothing persisted and no platform signal, as used
    /// while rendering on the server.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default(), None::<bool>, NoopApplier)
    }

    /// Resolve the flag from the persisted choice, then the platform signal,
    /// then dark. A persisted value other than `"dark"` or `"light"` counts
    /// as light. Applies the resolved mode but leaves storage untouched.
    pub fn initialize(&mut self) -> bool {
        let stored = self
            .store
            .get(THEME_KEY)
            .map(|value| {
                value.parse::<ThemeMode>().unwrap_or_else(|e| {
                    warn!("treating persisted theme as light: {e}");
                    ThemeMode::Light
                })
            });
        let mode = stored
            .or_else(|| self.platform.prefers_dark().map(ThemeMode::from_dark))
            .unwrap_or(ThemeMode::Dark);
        debug!("theme initialized to {mode} (persisted: {})", stored.is_some());

        self.is_dark = mode.is_dark();
        self.applier.apply(mode);
        self.is_dark
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        let mode = ThemeMode::from_dark(enabled);
        self.is_dark = enabled;
        if let Err(e) = self.store.set(THEME_KEY, mode.as_str()) {
            warn!("couldn't persist theme preference: {e}");
        }
        self.applier.apply(mode);
        debug!("theme set to {mode}");
    }

    /// Flip the flag, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.is_dark);
        self.is_dark
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark)
    }
}

impl fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreference")
            .field("is_dark", &self.is_dark)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct RecordingApplier {
        applied: Arc<Mutex<Vec<ThemeMode>>>,
    }

    impl RecordingApplier {
        fn last(&self) -> Option<ThemeMode> {
            self.applied.lock().unwrap().last().copied()
        }
    }

    impl ModeApplier for RecordingApplier {
        fn apply(&self, mode: ThemeMode) {
            self.applied.lock().unwrap().push(mode);
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
            Err(ThemeError::StorageUnavailable)
        }
    }

    fn store_with(value: &str) -> MemoryStore {
        let store = MemoryStore::default();
        store.set(THEME_KEY, value).unwrap();
        store
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(
            "Dark".parse::<ThemeMode>(),
            Err(ThemeError::UnknownMode("Dark".to_string()))
        );
        assert_eq!(ThemeMode::Light.to_string(), "light");
    }

    #[test]
    fn test_persisted_dark_wins_over_platform() {
        let mut pref = ThemePreference::new(store_with("dark"), Some(false), NoopApplier);
        assert!(pref.initialize());
    }

    #[test]
    fn test_persisted_light_wins_over_platform() {
        let mut pref = ThemePreference::new(store_with("light"), Some(true), NoopApplier);
        assert!(!pref.initialize());
    }

    #[test]
    fn test_platform_used_when_nothing_persisted() {
        let mut pref = ThemePreference::new(MemoryStore::default(), Some(false), NoopApplier);
        assert!(!pref.initialize());

        let mut pref = ThemePreference::new(MemoryStore::default(), Some(true), NoopApplier);
        assert!(pref.initialize());
    }

    #[test]
    fn test_defaults_to_dark() {
        let mut pref = ThemePreference::new(MemoryStore::default(), None::<bool>, NoopApplier);
        assert!(pref.initialize());
        assert!(ThemePreference::in_memory().initialize());
    }

    #[test]
    fn test_unknown_persisted_value_resolves_to_light() {
        let applier = RecordingApplier::default();
        let mut pref = ThemePreference::new(store_with("sepia"), Some(true), applier.clone());
        assert!(!pref.initialize());
        assert_eq!(applier.last(), Some(ThemeMode::Light));

        let mut pref = ThemePreference::new(store_with("sepia"), None::<bool>, NoopApplier);
        assert!(!pref.initialize());

        let mut pref = ThemePreference::new(store_with(""), Some(true), NoopApplier);
        assert!(!pref.initialize());
    }

    #[test]
    fn test_initialize_applies_without_persisting() {
        let store = MemoryStore::default();
        let applier = RecordingApplier::default();
        let mut pref = ThemePreference::new(store.clone(), Some(false), applier.clone());

        pref.initialize();
        assert_eq!(applier.last(), Some(ThemeMode::Light));
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn test_set_enabled_keeps_store_and_view_consistent() {
        let store = MemoryStore::default();
        let applier = RecordingApplier::default();
        let mut pref = ThemePreference::new(store.clone(), None::<bool>, applier.clone());
        pref.initialize();

        pref.set_enabled(false);
        assert!(!pref.is_dark());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(applier.last(), Some(ThemeMode::Light));

        pref.set_enabled(true);
        assert!(pref.is_dark());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(applier.last(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_choice_survives_new_session() {
        let store = MemoryStore::default();
        let mut first = ThemePreference::new(store.clone(), Some(true), NoopApplier);
        first.initialize();
        first.set_enabled(false);

        let mut second = ThemePreference::new(store, Some(true), NoopApplier);
        assert!(!second.initialize());
    }

    #[test]
    fn test_toggle() {
        let store = MemoryStore::default();
        let mut pref = ThemePreference::new(store.clone(), None::<bool>, NoopApplier);
        pref.initialize();

        assert!(!pref.toggle());
        assert_eq!(pref.mode(), ThemeMode::Light);
        assert!(pref.toggle());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_storage_failure_still_applies() {
        let applier = RecordingApplier::default();
        let mut pref = ThemePreference::new(BrokenStore, Some(true), applier.clone());
        assert!(pref.initialize());

        pref.set_enabled(false);
        assert!(!pref.is_dark());
        assert_eq!(applier.last(), Some(ThemeMode::Light));
    }
}
