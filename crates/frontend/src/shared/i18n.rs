//! Interface translations (Turkmen / Russian / English)
//!
//! Components receive an [`I18n`] value explicitly instead of reading a
//! translation function from context.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    Tm,
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "tm" => Some(Locale::Tm),
            "ru" => Some(Locale::Ru),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Tm => "tm",
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }
}

// (key, tm, ru, en)
const ENTRIES: &[(&str, &str, &str, &str)] = &[
    ("edit", "Üýtget", "Редактировать", "Edit"),
    (
        "editCarTransmition",
        "Transmissiýany üýtget",
        "Редактирование трансмиссии",
        "Edit car transmission",
    ),
    ("nameTm", "Ady (tm)", "Название (tm)", "Name (tm)"),
    ("nameRu", "Ady (ru)", "Название (ru)", "Name (ru)"),
    ("status", "Ýagdaýy", "Статус", "Status"),
    ("desc", "Düşündiriş", "Описание", "Description"),
    ("clear", "Arassala", "Очистить", "Clear"),
    ("save", "Ýatda sakla", "Сохранить", "Save"),
    ("close", "Ýap", "Закрыть", "Close"),
    ("refresh", "Täzele", "Обновить", "Refresh"),
    ("loading", "Ýüklenýär...", "Загрузка...", "Loading..."),
    (
        "carTransmitions",
        "Awtoulag transmissiýalary",
        "Трансмиссии автомобилей",
        "Car transmissions",
    ),
    ("empty", "Maglumat ýok", "Нет данных", "No data"),
];

static TABLE: Lazy<HashMap<(Locale, &'static str), &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(ENTRIES.len() * 3);
    for (key, tm, ru, en) in ENTRIES {
        map.insert((Locale::Tm, *key), *tm);
        map.insert((Locale::Ru, *key), *ru);
        map.insert((Locale::En, *key), *en);
    }
    map
});

/// Translator bound to one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I18n {
    pub locale: Locale,
}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Unknown keys are returned as-is
    pub fn t(&self, key: &str) -> String {
        TABLE
            .get(&(self.locale, key))
            .map(|s| s.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}
