use super::state::EditField;
use super::view_model::UpdateTransmissionVm;
use crate::shared::i18n::I18n;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notifications::NotificationService;
use contracts::domain::a030_car_transmission::aggregate::CarTransmission;
use leptos::prelude::*;
use thaw::*;

/// Edit icon + modal form for one transmission record.
///
/// The form is re-seeded from `item` each time the icon is clicked.
#[component]
pub fn UpdateTransmissionModal(
    /// Record to edit (owned by the list)
    #[prop(into)]
    item: Signal<CarTransmission>,
    /// Refresh of the parent list, called after a successful update
    get_data: Callback<()>,
    /// Allowed status values, in display order
    #[prop(into)]
    status_options: Signal<Vec<String>>,
    i18n: I18n,
) -> impl IntoView {
    let notifications = use_context::<NotificationService>()
        .expect("NotificationService not provided in context");
    let vm = UpdateTransmissionVm::new();
    let is_open = vm.is_open();
    let is_loading = vm.is_loading();
    let name_tm = vm.field(EditField::NameTm);
    let name_ru = vm.field(EditField::NameRu);
    let description = vm.field(EditField::Description);
    let status = vm.field(EditField::Status);

    let handle_open = move |_| vm.open(&item.get_untracked());
    let handle_close = Callback::new(move |_| vm.close());

    view! {
        <button
            class="button button--icon"
            title=i18n.t("edit")
            on:click=handle_open
        >
            {icon("edit")}
        </button>

        <Show when=move || is_open.get()>
            <ModalFrame
                on_close=handle_close
                modal_style="max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()
            >
                <div class="details-container car-transmission-details">
                    <div class="details-header" style="display: flex; justify-content: space-between; align-items: center;">
                        <h3>{i18n.t("editCarTransmition")}</h3>
                        <button
                            class="button button--icon modal__close"
                            title=i18n.t("close")
                            on:click=move |_| vm.close()
                        >
                            {icon("x")}
                        </button>
                    </div>

                    <div class="details-grid--2col" style="padding-top: 24px;">
                        <div class="form__group">
                            <label class="form__label" for="name_tm">{i18n.t("nameTm")}</label>
                            <input
                                type="text"
                                id="name_tm"
                                class="form__input"
                                prop:value=move || name_tm.get()
                                on:input=move |ev| vm.set_field(EditField::NameTm, event_target_value(&ev))
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="name_ru">{i18n.t("nameRu")}</label>
                            <input
                                type="text"
                                id="name_ru"
                                class="form__input"
                                prop:value=move || name_ru.get()
                                on:input=move |ev| vm.set_field(EditField::NameRu, event_target_value(&ev))
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="status">{i18n.t("status")}</label>
                            <select
                                id="status"
                                class="form__select"
                                prop:value=move || status.get()
                                on:change=move |ev| vm.set_field(EditField::Status, event_target_value(&ev))
                            >
                                {move || {
                                    let current = status.get();
                                    status_options
                                        .get()
                                        .into_iter()
                                        .map(|s| {
                                            let selected = s == current;
                                            let label = s.clone();
                                            view! { <option value=s selected=selected>{label}</option> }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="description">{i18n.t("desc")}</label>
                            <textarea
                                id="description"
                                class="form__textarea"
                                rows="5"
                                prop:value=move || description.get()
                                on:input=move |ev| vm.set_field(EditField::Description, event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="details-actions" style="display: flex; justify-content: flex-end; gap: 16px; margin-top: 24px;">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.clear()>
                            {icon("x")}
                            {i18n.t("clear")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save_command(notifications, get_data)
                            disabled=move || is_loading.get()
                            loading=move || is_loading.get()
                        >
                            {icon("save")}
                            {i18n.t("save")}
                        </Button>
                    </div>
                </div>
            </ModalFrame>
        </Show>
    }
}
