//! Fixed vocabulary of CSV column headers and the internal field keys they map to.
//!
//! The labels are part of the import/export contract: exported files must
//! re-import through this table, so a label never changes once shipped.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// (header label, field key) pairs in vocabulary order
pub const HEADER_FIELD_MAP: &[(&str, &str)] = &[
    ("Employee Name", "employeeName"),
    ("Source", "source"),
    ("Other Source", "otherSource"),
    ("Lead Created Date", "leadCreatedDate"),
    ("Expected Close Date", "expectedCloseDate"),
    ("Last Contacted", "lastContacted"),
    ("Stage", "stage"),
    ("Comment", "comment"),
    ("Remarks", "remarks"),
    ("Client Name", "clientName"),
    ("Client Company Name", "clientCompanyName"),
    ("Product Name", "productName"),
    ("Assign Team Member", "assignTeamMember"),
    ("Email", "email"),
    ("Phone", "phone"),
    ("Order ID", "orderId"),
    ("Order Date", "orderDate"),
    ("Client Address", "clientAddress"),
    ("Client KYC ID", "clientKycId"),
    ("KYC PIN", "kycPin"),
    ("Download Status", "downloadStatus"),
    ("Processed By", "processedBy"),
    ("Processed At", "processedAt"),
    ("Aadhaar PDF URL", "aadhaarPdfUrl"),
    ("PAN PDF URL", "panPdfUrl"),
    ("Optional PDF URL", "optionalPdfUrl"),
    ("Client Image URL", "clientImageUrl"),
    ("Quoted Price", "quotedPrice"),
    ("Company Name", "companyName"),
    ("Company Name & Address", "companyNameAndAddress"),
    ("Reference By", "referenceBy"),
    ("Payment Status", "paymentStatus"),
    ("Payment Status Note", "paymentStatusNote"),
    ("Invoice Number", "invoiceNumber"),
    ("Invoice Date", "invoiceDate"),
    ("Billing Sent Status", "billingSentStatus"),
    ("Billing Date", "billingDate"),
    ("Bill Document URL", "billDocumentUrl"),
];

static BY_HEADER: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HEADER_FIELD_MAP.iter().copied().collect());

static BY_FIELD: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HEADER_FIELD_MAP
        .iter()
        .map(|&(header, field)| (field, header))
        .collect()
});

/// Field key for a CSV header, `None` for headers outside the vocabulary.
/// Matching is exact (case and spacing included).
pub fn field_for_header(header: &str) -> Option<&'static str> {
    BY_HEADER.get(header).copied()
}

/// Header label for an internal field key
pub fn header_for_field(field: &str) -> Option<&'static str> {
    BY_FIELD.get(field).copied()
}
