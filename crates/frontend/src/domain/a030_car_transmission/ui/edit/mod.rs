//! Transmission edit dialog
//!
//! - state.rs: plain dialog state and its transitions
//! - model.rs: API call (PATCH)
//! - view_model.rs: signals, commands, notifications
//! - view.rs: Leptos component

mod model;
pub mod state;
mod view;
mod view_model;

pub use view::UpdateTransmissionModal;
pub use view_model::UpdateTransmissionVm;
