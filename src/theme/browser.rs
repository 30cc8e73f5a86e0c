//! Browser-backed collaborators for [`ThemePreference`](super::ThemePreference).

use log::warn;
use web_sys::Storage;

use super::{ModeApplier, PlatformTheme, PreferenceStore, ThemeError, ThemeMode};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const DARK_CLASS: &str = "dark";

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferenceStore;

impl LocalPreferenceStore {
    fn storage() -> Result<Storage, ThemeError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(ThemeError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::WriteFailed(format!("{e:?}")))
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryPlatform;

impl PlatformTheme for MediaQueryPlatform {
    fn prefers_dark(&self) -> Option<bool> {
        web_sys::window()?
            .match_media(DARK_QUERY)
            .ok()
            .flatten()
            .map(|list| list.matches())
    }
}

/// Toggles the `dark` class on `<html>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentClassApplier;

impl ModeApplier for DocumentClassApplier {
    fn apply(&self, mode: ThemeMode) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        let Some(root) = root else {
            warn!("no document root to apply {mode} mode to");
            return;
        };
        if let Err(e) = root
            .class_list()
            .toggle_with_force(DARK_CLASS, mode.is_dark())
        {
            warn!("couldn't apply {mode} mode: {e:?}");
        }
    }
}
