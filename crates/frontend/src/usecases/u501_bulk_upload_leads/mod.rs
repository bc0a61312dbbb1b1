pub mod api;

use contracts::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use contracts::usecases::u501_bulk_upload_leads::{
    BulkUploadLeads, BulkUploadRequest, BulkUploadResponse,
};

use crate::shared::config::load_config;
use crate::shared::file_reader::read_file_text;

/// Reads the selected CSV file, parses it and submits the rows.
///
/// Files without data rows are refused before anything is sent.
pub async fn bulk_upload_leads(file: &web_sys::File) -> UseCaseResult<BulkUploadResponse> {
    let config = load_config()?;

    let text = read_file_text(file)
        .await
        .map_err(|e| UseCaseError::internal(e).with_details(file.name()))?;

    let request = prepare_request(&text).map_err(|e| e.with_details(file.name()))?;
    log::info!(
        "{}: submitting {} rows from {}",
        BulkUploadLeads::full_name(),
        request.leads.len(),
        file.name()
    );

    let response = api::submit_leads(&request, &config.bulk_upload.endpoint)
        .await
        .map_err(UseCaseError::external)?;

    if response.failed() > 0 {
        log::warn!(
            "{}: {} of {} rows rejected",
            BulkUploadLeads::full_name(),
            response.failed(),
            response.results.len()
        );
    }

    Ok(response)
}

fn prepare_request(text: &str) -> UseCaseResult<BulkUploadRequest> {
    let request = BulkUploadRequest::from_csv(text);
    if request.is_empty() {
        return Err(UseCaseError::validation(
            "The file has no data rows (expected a header row and at least one lead)",
        ));
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;

    #[test]
    fn test_header_only_file_is_refused() {
        let err = prepare_request("Client Name,Email\n").unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_invalid_config_becomes_internal_error() {
        let err: UseCaseError = Config::from_toml("[bulk_upload\nendpoint = ")
            .unwrap_err()
            .into();
        assert_eq!(err.code, "INTERNAL_ERROR");
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_rows_are_mapped() {
        let request = prepare_request("Client Name,Random Column\nAcme,x\n").unwrap();
        assert_eq!(request.leads.len(), 1);
        assert_eq!(request.leads[0]["clientName"], "Acme");
        assert!(request.leads[0].get("Random Column").is_none());
    }
}
