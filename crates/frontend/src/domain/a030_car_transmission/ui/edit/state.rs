//! Local state of the transmission edit dialog
//!
//! Plain data with no reactive types; the view model keeps it in one signal.

use crate::shared::notifications::NotificationKind;
use contracts::domain::a030_car_transmission::aggregate::{
    CarTransmission, CarTransmissionId, CarTransmissionUpdateDto,
};
use contracts::shared::api_response::ApiResponse;

pub const MSG_UPDATED: &str = "Car Option Successfully Updated!";
pub const MSG_UPDATE_ERROR: &str = "Car Option Update Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    NameTm,
    NameRu,
    Description,
    Status,
}

/// A request the caller has to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub id: CarTransmissionId,
    pub body: CarTransmissionUpdateDto,
}

/// Terminal result of one save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Server answered with `error: true`
    Rejected,
    /// Request failed or the response could not be read
    Failed(String),
}

/// What the dialog does after a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveEffects {
    pub toast: NotificationKind,
    pub message: String,
    /// Call the parent list refresh
    pub refresh: bool,
}

impl SaveOutcome {
    /// Text of the toast shown for this outcome
    pub fn message(&self) -> String {
        match self {
            SaveOutcome::Saved => MSG_UPDATED.to_string(),
            SaveOutcome::Rejected => MSG_UPDATE_ERROR.to_string(),
            SaveOutcome::Failed(e) => e.clone(),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }

    pub fn from_response(result: Result<ApiResponse, String>) -> Self {
        match result {
            Ok(resp) if !resp.is_error() => SaveOutcome::Saved,
            Ok(_) => SaveOutcome::Rejected,
            Err(e) => SaveOutcome::Failed(e),
        }
    }

    pub fn effects(&self) -> SaveEffects {
        let toast = if self.is_saved() {
            NotificationKind::Success
        } else {
            NotificationKind::Error
        };
        SaveEffects {
            toast,
            message: self.message(),
            refresh: self.is_saved(),
        }
    }
}

/// Status is checked before the body: a non-2xx answer is never a success,
/// even when it carries JSON without an `error` flag.
pub fn read_update_response(status: u16, body: &str) -> Result<ApiResponse, String> {
    if !(200..300).contains(&status) {
        return Err(format!("HTTP error: {}", status));
    }
    serde_json::from_str(body).map_err(|e| format!("Failed to parse response: {}", e))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransmissionEditState {
    pub id: CarTransmissionId,
    pub form: CarTransmissionUpdateDto,
    pub open: bool,
    /// A PATCH is in flight; the save button is disabled
    pub loading: bool,
}

impl TransmissionEditState {
    /// Show the dialog and take a fresh snapshot of `record`.
    /// `loading` is left alone so a request still in flight keeps the guard.
    pub fn open_from(&mut self, record: &CarTransmission) {
        self.id = record.id;
        self.form = CarTransmissionUpdateDto::from(record);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Raw value, no trimming
    pub fn set_field(&mut self, field: EditField, value: String) {
        match field {
            EditField::NameTm => self.form.name_tm = value,
            EditField::NameRu => self.form.name_ru = value,
            EditField::Description => self.form.description = value,
            EditField::Status => self.form.status = value,
        }
    }

    pub fn field(&self, field: EditField) -> &str {
        match field {
            EditField::NameTm => &self.form.name_tm,
            EditField::NameRu => &self.form.name_ru,
            EditField::Description => &self.form.description,
            EditField::Status => &self.form.status,
        }
    }

    /// Empties every field, not back to the record
    pub fn clear(&mut self) {
        self.form = CarTransmissionUpdateDto::default();
    }

    /// Returns the request to send, or `None` while one is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(SubmitRequest {
            id: self.id,
            body: self.form.clone(),
        })
    }

    /// Every outcome releases the `loading` guard; only a success closes the dialog.
    pub fn finish_submit(&mut self, outcome: &SaveOutcome) {
        self.loading = false;
        if outcome.is_saved() {
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual() -> CarTransmission {
        CarTransmission {
            id: CarTransmissionId::new(7),
            name_tm: "Manual".to_string(),
            name_ru: "Механика".to_string(),
            description: String::new(),
            status: "active".to_string(),
        }
    }

    fn finish(
        state: &mut TransmissionEditState,
        result: Result<ApiResponse, String>,
    ) -> SaveOutcome {
        let outcome = SaveOutcome::from_response(result);
        state.finish_submit(&outcome);
        outcome
    }

    fn opened() -> TransmissionEditState {
        let mut state = TransmissionEditState::default();
        state.open_from(&manual());
        state
    }

    #[test]
    fn test_open_seeds_all_fields() {
        let state = opened();
        assert!(state.open && !state.loading);
        assert_eq!(state.field(EditField::NameTm), "Manual");
        assert_eq!(state.field(EditField::NameRu), "Механика");
        assert_eq!(state.field(EditField::Description), "");
        assert_eq!(state.field(EditField::Status), "active");
    }

    #[test]
    fn test_reopen_discards_local_edits() {
        let mut state = opened();
        state.set_field(EditField::NameTm, "Awtomat".to_string());
        state.set_field(EditField::Status, "inactive".to_string());
        state.close();
        assert!(!state.open);

        state.open_from(&manual());
        assert_eq!(state.form, CarTransmissionUpdateDto::from(&manual()));
    }

    #[test]
    fn test_open_uses_current_record() {
        let mut state = opened();
        state.close();
        let mut updated = manual();
        updated.name_ru = "Автомат".to_string();
        state.open_from(&updated);
        assert_eq!(state.field(EditField::NameRu), "Автомат");
    }

    #[test]
    fn test_set_field_keeps_raw_value() {
        let mut state = opened();
        state.set_field(EditField::Description, "  six gears \n".to_string());
        assert_eq!(state.field(EditField::Description), "  six gears \n");
    }

    #[test]
    fn test_clear_empties_fields_and_keeps_dialog_open() {
        let mut state = opened();
        state.set_field(EditField::Description, "text".to_string());
        state.clear();
        for field in [
            EditField::NameTm,
            EditField::NameRu,
            EditField::Description,
            EditField::Status,
        ] {
            assert_eq!(state.field(field), "");
        }
        assert!(state.open);
        assert!(!state.loading);
    }

    #[test]
    fn test_clear_does_not_touch_loading() {
        let mut state = opened();
        state.begin_submit();
        state.clear();
        assert!(state.loading);
    }

    #[test]
    fn test_submit_without_edits_sends_record_values() {
        let mut state = opened();
        let request = state.begin_submit().expect("request");
        assert_eq!(request.id, CarTransmissionId::new(7));
        assert_eq!(
            serde_json::to_value(&request.body).unwrap(),
            serde_json::json!({
                "name_tm": "Manual",
                "name_ru": "Механика",
                "description": "",
                "status": "active"
            })
        );
        assert!(state.open && state.loading);
    }

    #[test]
    fn test_submit_sends_current_edits() {
        let mut state = opened();
        state.set_field(EditField::NameTm, "Robot".to_string());
        let request = state.begin_submit().expect("request");
        assert_eq!(request.body.name_tm, "Robot");
        assert_eq!(request.body.name_ru, "Механика");
    }

    #[test]
    fn test_no_second_request_while_loading() {
        let mut state = opened();
        let mut sent = 0;
        for _ in 0..3 {
            if state.begin_submit().is_some() {
                sent += 1;
            }
        }
        assert_eq!(sent, 1);
    }

    #[test]
    fn test_success_closes_and_releases_guard() {
        let mut state = opened();
        state.begin_submit();
        let outcome = finish(&mut state, Ok(ApiResponse::ok()));
        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(outcome.message(), MSG_UPDATED);
        assert!(!state.open);
        assert!(!state.loading);
    }

    #[test]
    fn test_rejected_keeps_dialog_open_and_releases_guard() {
        let mut state = opened();
        state.begin_submit();
        let outcome = finish(&mut state, Ok(ApiResponse::failed("duplicate")));
        assert_eq!(outcome, SaveOutcome::Rejected);
        assert_eq!(outcome.message(), MSG_UPDATE_ERROR);
        assert!(state.open && !state.loading);
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn test_transport_failure_carries_error_text() {
        let mut state = opened();
        state.begin_submit();
        let outcome = finish(&mut state, Err("Request failed: NetworkError".to_string()));
        assert_eq!(
            outcome,
            SaveOutcome::Failed("Request failed: NetworkError".to_string())
        );
        assert_eq!(outcome.message(), "Request failed: NetworkError");
        assert!(state.open);
        assert!(!state.loading);
    }

    #[test]
    fn test_server_error_status_with_json_body_is_failure() {
        for (status, body) in [
            (500, r#"{"statusCode":500,"message":"Internal server error"}"#),
            (401, r#"{"statusCode":401,"message":"Unauthorized"}"#),
        ] {
            let mut state = opened();
            state.begin_submit();
            let outcome = finish(&mut state, read_update_response(status, body));
            assert_eq!(outcome, SaveOutcome::Failed(format!("HTTP error: {}", status)));
            assert!(state.open);
            assert!(!state.loading);
            assert!(!outcome.effects().refresh);
        }
    }

    #[test]
    fn test_error_status_with_error_false_is_still_failure() {
        let result = read_update_response(404, r#"{"error":false}"#);
        assert_eq!(result, Err("HTTP error: 404".to_string()));
    }

    #[test]
    fn test_ok_status_reads_envelope() {
        let outcome = SaveOutcome::from_response(read_update_response(200, r#"{"error":false}"#));
        assert_eq!(outcome, SaveOutcome::Saved);

        let outcome = SaveOutcome::from_response(read_update_response(
            200,
            r#"{"error":true,"message":"duplicate"}"#,
        ));
        assert_eq!(outcome, SaveOutcome::Rejected);
    }

    #[test]
    fn test_ok_status_with_unreadable_body_is_failure() {
        let outcome = SaveOutcome::from_response(read_update_response(200, "<html>"));
        match outcome {
            SaveOutcome::Failed(e) => assert!(e.starts_with("Failed to parse response")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_saved_effects_refresh_once() {
        let effects = SaveOutcome::Saved.effects();
        assert_eq!(
            effects,
            SaveEffects {
                toast: NotificationKind::Success,
                message: MSG_UPDATED.to_string(),
                refresh: true,
            }
        );
    }

    #[test]
    fn test_rejected_effects_error_toast_without_refresh() {
        let effects = SaveOutcome::Rejected.effects();
        assert_eq!(effects.toast, NotificationKind::Error);
        assert_eq!(effects.message, MSG_UPDATE_ERROR);
        assert!(!effects.refresh);
    }

    #[test]
    fn test_failed_effects_show_error_text_without_refresh() {
        let effects = SaveOutcome::Failed("Request failed: timeout".to_string()).effects();
        assert_eq!(effects.toast, NotificationKind::Error);
        assert_eq!(effects.message, "Request failed: timeout");
        assert!(!effects.refresh);
    }

    #[test]
    fn test_reopen_while_in_flight_keeps_guard() {
        let mut state = opened();
        state.begin_submit();
        state.close();
        state.open_from(&manual());
        assert!(state.open && state.loading);
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn test_late_success_after_close() {
        let mut state = opened();
        state.begin_submit();
        state.close();
        let outcome = finish(&mut state, Ok(ApiResponse::ok()));
        assert!(outcome.is_saved());
        assert!(!state.open);
        assert!(!state.loading);
    }
}
