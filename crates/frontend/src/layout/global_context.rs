use crate::shared::config::{save_locale, FrontendConfig};
use crate::shared::i18n::Locale;
use contracts::shared::item_status::ItemStatusCatalog;
use leptos::prelude::*;

/// App-wide settings shared by the admin pages.
///
/// Pages read it and hand values down to dialogs as explicit props.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub locale: RwSignal<Locale>,
    pub item_status: RwSignal<Vec<String>>,
}

impl AppGlobalContext {
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            locale: RwSignal::new(config.locale),
            item_status: RwSignal::new(ItemStatusCatalog::default().item_status),
        }
    }

    pub fn set_locale(&self, locale: Locale) {
        log::info!("locale -> {}", locale.code());
        save_locale(locale);
        self.locale.set(locale);
    }
}
