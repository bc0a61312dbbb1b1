use contracts::usecases::u501_bulk_upload_leads::{BulkUploadRequest, BulkUploadResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// POSTs parsed leads to the bulk upload endpoint
pub async fn submit_leads(
    request: &BulkUploadRequest,
    endpoint: &str,
) -> Result<BulkUploadResponse, String> {
    let response = Request::post(&api_url(endpoint))
        .json(request)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<BulkUploadResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
