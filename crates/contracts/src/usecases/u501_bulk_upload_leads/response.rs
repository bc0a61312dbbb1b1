use serde::{Deserialize, Serialize};

/// Outcome of one uploaded row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowResult {
    /// 1-based data row number, header excluded
    pub row: usize,
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Per-row results returned by the server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkUploadResponse {
    pub results: Vec<RowResult>,
}

impl BulkUploadResponse {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &RowResult> {
        self.results.iter().filter(|r| !r.success)
    }
}
