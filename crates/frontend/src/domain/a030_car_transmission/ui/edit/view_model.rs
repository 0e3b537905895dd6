//! ViewModel for the transmission edit dialog
//!
//! All transitions go through `TransmissionEditState`; this type only wires
//! them to signals, the HTTP call and the toast service.

use super::model;
use super::state::{EditField, SaveOutcome, TransmissionEditState};
use crate::shared::notifications::NotificationService;
use contracts::domain::a030_car_transmission::aggregate::CarTransmission;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UpdateTransmissionVm {
    pub state: RwSignal<TransmissionEditState>,
}

impl UpdateTransmissionVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(TransmissionEditState::default()),
        }
    }

    // === Derived signals ===

    pub fn is_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.open))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn field(&self, field: EditField) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.field(field).to_string()))
    }

    // === Commands ===

    pub fn open(&self, record: &CarTransmission) {
        log::info!("edit car transmission {}", record.id.value());
        self.state.update(|s| s.open_from(record));
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn set_field(&self, field: EditField, value: String) {
        self.state.update(|s| s.set_field(field, value));
    }

    pub fn clear(&self) {
        self.state.update(|s| s.clear());
    }

    /// Send the PATCH unless one is already in flight.
    /// `on_saved` runs once after a successful update.
    pub fn save_command(&self, notifications: NotificationService, on_saved: Callback<()>) {
        let request = self.state.try_update(|s| s.begin_submit()).flatten();
        let Some(request) = request else {
            return;
        };

        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::update_transmission(request.id, &request.body).await;
            let outcome = SaveOutcome::from_response(result);

            // The row may have been re-rendered while the request was in flight.
            let _ = state.try_update(|s| s.finish_submit(&outcome));

            match &outcome {
                SaveOutcome::Saved => {
                    log::info!("car transmission {} updated", request.id.value());
                }
                SaveOutcome::Rejected => {
                    log::warn!("car transmission {} update rejected", request.id.value());
                }
                SaveOutcome::Failed(e) => {
                    log::error!("car transmission {} update failed: {}", request.id.value(), e);
                }
            }

            let effects = outcome.effects();
            notifications.notify(effects.toast, effects.message);
            if effects.refresh {
                on_saved.try_run(());
            }
        });
    }
}

impl Default for UpdateTransmissionVm {
    fn default() -> Self {
        Self::new()
    }
}
