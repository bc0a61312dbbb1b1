use serde::{Deserialize, Serialize};

use crate::shared::csv::{parse_lead_rows, Record};

/// Parsed lead rows sent to the server for validation and storage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkUploadRequest {
    /// Records keyed by internal field names, in file order
    pub leads: Vec<Record>,
}

impl BulkUploadRequest {
    /// Parses an uploaded CSV file into a request
    pub fn from_csv(text: &str) -> Self {
        Self {
            leads: parse_lead_rows(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}
