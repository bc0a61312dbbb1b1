pub mod request;
pub mod response;

pub use request::BulkUploadRequest;
pub use response::{BulkUploadResponse, RowResult};

use crate::usecases::common::UseCaseMetadata;

pub struct BulkUploadLeads;

impl UseCaseMetadata for BulkUploadLeads {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "bulk_upload_leads"
    }

    fn display_name() -> &'static str {
        "Bulk lead upload"
    }

    fn description() -> &'static str {
        "Import leads from a CSV file; the server validates and stores each row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(BulkUploadLeads::full_name(), "u501_bulk_upload_leads");
    }
}
