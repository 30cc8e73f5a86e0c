use leptos::prelude::*;

use crate::theme::ThemePreference;

/// Shared handle to the page's [`ThemePreference`] plus a signal views can track.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    preference: StoredValue<ThemePreference>,
    is_dark: RwSignal<bool>,
}

impl ThemeContext {
    fn new(preference: ThemePreference) -> Self {
        let is_dark = RwSignal::new(preference.is_dark());
        Self {
            preference: StoredValue::new(preference),
            is_dark,
        }
    }

    fn initialize(&self) {
        let is_dark = self
            .preference
            .try_update_value(|p| p.initialize())
            .unwrap_or(true);
        self.is_dark.set(is_dark);
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.preference.update_value(|p| p.set_enabled(enabled));
        self.is_dark.set(enabled);
    }

    pub fn toggle(&self) {
        self.set_enabled(!self.is_dark.get_untracked());
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// The server has no way to see the visitor's preference, so it renders dark
/// and the client resolves the real value once hydrated.
pub(super) fn provide_theme() {
    #[cfg(feature = "hydrate")]
    let preference = {
        use crate::theme::browser::{DocumentClassApplier, LocalPreferenceStore, MediaQueryPlatform};
        ThemePreference::new(LocalPreferenceStore, MediaQueryPlatform, DocumentClassApplier)
    };
    #[cfg(not(feature = "hydrate"))]
    let preference = ThemePreference::in_memory();

    let ctx = ThemeContext::new(preference);
    provide_context(ctx);

    // effects only run in the browser
    Effect::new(move |_| ctx.initialize());
}
