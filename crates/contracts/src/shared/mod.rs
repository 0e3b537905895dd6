pub mod api_response;
pub mod item_status;
