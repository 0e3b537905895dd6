pub mod api_utils;
pub mod config;
pub mod i18n;
pub mod icons;
pub mod modal_frame;
pub mod notifications;
