use crate::shared::i18n::Locale;
use web_sys::window;

const LOCALE_KEY: &str = "app_locale";

/// Frontend runtime settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Port of the admin API on the same host
    pub api_port: u16,
    pub locale: Locale,
    /// How long a toast stays on screen
    pub toast_timeout_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_port: 3000,
            locale: Locale::Ru,
            toast_timeout_ms: 4000,
        }
    }
}

impl FrontendConfig {
    /// Defaults overridden by values persisted in localStorage
    pub fn current() -> Self {
        Self::default().with_stored_locale(stored_locale())
    }

    fn with_stored_locale(mut self, code: Option<String>) -> Self {
        if let Some(locale) = code.as_deref().and_then(Locale::from_code) {
            self.locale = locale;
        }
        self
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn stored_locale() -> Option<String> {
    get_local_storage()?.get_item(LOCALE_KEY).ok()?
}

/// Persist the interface language
pub fn save_locale(locale: Locale) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(LOCALE_KEY, locale.code());
    }
}
