pub mod state;

use self::state::create_state;
use crate::domain::a030_car_transmission::ui::edit::UpdateTransmissionModal;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::api_url;
use crate::shared::i18n::I18n;
use crate::shared::icons::icon;
use contracts::domain::a030_car_transmission::aggregate::{list_path, CarTransmission};
use contracts::shared::api_response::ApiResponse;
use gloo_net::http::Request;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CarTransmissionList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let state = create_state();
    let (items, set_items) = signal::<Vec<CarTransmission>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_transmissions().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("car transmissions load failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };
    let get_data = Callback::new(move |_| fetch());

    let i18n = Signal::derive(move || I18n::new(ctx.locale.get()));
    let status_options = Signal::derive(move || ctx.item_status.get());

    let toggle_sort = move |field: &'static str| move |_| state.update(|s| s.toggle(field));

    let sorted_items = move || {
        let mut rows = items.get();
        state.with(|s| s.sort(&mut rows));
        rows
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{move || i18n.get().t("carTransmitions")}</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {move || i18n.get().t("refresh")}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || loading.get()>
                <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-xl);">
                    <Spinner size=SpinnerSize::Small />
                    {move || i18n.get().t("loading")}
                </Flex>
            </Show>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("id")>"ID"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name_tm")>
                                {move || i18n.get().t("nameTm")}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name_ru")>
                                {move || i18n.get().t("nameRu")}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("status")>
                                {move || i18n.get().t("status")}
                            </th>
                            <th class="table__header-cell">{move || i18n.get().t("desc")}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = sorted_items();
                            if rows.is_empty() && !loading.get() {
                                return view! {
                                    <tr><td class="table__cell" colspan="6">{i18n.get().t("empty")}</td></tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|row| {
                                    let record = row.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.id.value()}</td>
                                            <td class="table__cell">{row.name_tm}</td>
                                            <td class="table__cell">{row.name_ru}</td>
                                            <td class="table__cell">{row.status}</td>
                                            <td class="table__cell">{row.description}</td>
                                            <td class="table__cell">
                                                <UpdateTransmissionModal
                                                    item=Signal::stored(record)
                                                    get_data=get_data
                                                    status_options=status_options
                                                    i18n=i18n.get()
                                                />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

async fn fetch_transmissions() -> Result<Vec<CarTransmission>, String> {
    let url = api_url(&list_path());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: ApiResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if envelope.is_error() {
        return Err(envelope
            .message
            .unwrap_or_else(|| "Car transmissions load error".to_string()));
    }

    envelope.data_as()
}
