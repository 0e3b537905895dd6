use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::FrontendConfig;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = FrontendConfig::current();

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(&config));

    // Toasts for every page
    provide_context(NotificationService::new(&config));

    view! {
        <AppRoutes />
    }
}
