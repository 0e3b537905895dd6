use crate::domain::a030_car_transmission::ui::list::CarTransmissionList;
use crate::layout::locale_select::LocaleSelect;
use crate::shared::notifications::NotificationHost;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="top-header">
                <LocaleSelect />
            </div>
            <div class="app-main">
                <CarTransmissionList />
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <MainLayout />
        <NotificationHost />
    }
}
