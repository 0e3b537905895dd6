pub mod global_context;
pub mod locale_select;
