use contracts::domain::a030_car_transmission::aggregate::CarTransmission;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct TransmissionListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for TransmissionListState {
    fn default() -> Self {
        Self {
            sort_field: "name_tm".to_string(),
            sort_ascending: true,
        }
    }
}

impl TransmissionListState {
    pub fn toggle(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn sort(&self, rows: &mut [CarTransmission]) {
        rows.sort_by(|a, b| {
            let ord = compare_by_field(a, b, &self.sort_field);
            if self.sort_ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }
}

fn compare_by_field(a: &CarTransmission, b: &CarTransmission, field: &str) -> Ordering {
    match field {
        "id" => a.id.value().cmp(&b.id.value()),
        "name_tm" => a.name_tm.to_lowercase().cmp(&b.name_tm.to_lowercase()),
        "name_ru" => a.name_ru.to_lowercase().cmp(&b.name_ru.to_lowercase()),
        "status" => a.status.cmp(&b.status),
        _ => Ordering::Equal,
    }
}

pub fn create_state() -> RwSignal<TransmissionListState> {
    RwSignal::new(TransmissionListState::default())
}
