use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::Locale;
use leptos::prelude::*;

const LOCALES: [(Locale, &str); 3] = [
    (Locale::Tm, "Türkmençe"),
    (Locale::Ru, "Русский"),
    (Locale::En, "English"),
];

/// Interface language switcher in the top header
#[component]
pub fn LocaleSelect() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <select
            class="form__select locale-select"
            prop:value=move || ctx.locale.get().code()
            on:change=move |ev| {
                if let Some(locale) = Locale::from_code(&event_target_value(&ev)) {
                    ctx.set_locale(locale);
                }
            }
        >
            {LOCALES
                .iter()
                .map(|(locale, label)| view! { <option value=locale.code()>{*label}</option> })
                .collect_view()}
        </select>
    }
}
