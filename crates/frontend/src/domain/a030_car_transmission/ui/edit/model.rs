use super::state::read_update_response;
use crate::shared::api_utils::api_url;
use contracts::domain::a030_car_transmission::aggregate::{
    update_path, CarTransmissionId, CarTransmissionUpdateDto,
};
use contracts::shared::api_response::ApiResponse;
use gloo_net::http::Request;

/// PATCH /car-transmition/update/{id}
///
/// Any non-2xx status is an error whatever the body holds.
/// On 2xx the envelope is returned as-is; its `error` flag is left to the caller.
pub async fn update_transmission(
    id: CarTransmissionId,
    body: &CarTransmissionUpdateDto,
) -> Result<ApiResponse, String> {
    let url = api_url(&update_path(id));

    let response = Request::patch(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    read_update_response(response.status(), &text)
}
