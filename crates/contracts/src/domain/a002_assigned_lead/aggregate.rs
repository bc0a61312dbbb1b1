use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{optional, optional_date, optional_number, required, RecordError};
use crate::shared::csv::Record;

/// A won lead handed to the operations team: order, KYC documents and billing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedLead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub order_id: String,
    pub order_date: Option<NaiveDate>,
    pub client_name: String,
    pub client_company_name: Option<String>,
    pub client_address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub product_name: Option<String>,
    pub assign_team_member: Option<String>,
    pub stage: Option<String>,
    pub remarks: Option<String>,

    // KYC processing
    pub client_kyc_id: Option<String>,
    pub kyc_pin: Option<String>,
    pub download_status: Option<String>,
    pub processed_by: Option<String>,
    /// Free-form timestamp as reported by the backend
    pub processed_at: Option<String>,
    pub aadhaar_pdf_url: Option<String>,
    pub pan_pdf_url: Option<String>,
    pub optional_pdf_url: Option<String>,
    pub client_image_url: Option<String>,

    // Billing
    pub quoted_price: Option<f64>,
    pub company_name: Option<String>,
    pub company_name_and_address: Option<String>,
    pub payment_status: Option<String>,
    pub payment_status_note: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub billing_sent_status: Option<String>,
    pub billing_date: Option<NaiveDate>,
    pub bill_document_url: Option<String>,
}

impl TryFrom<&Record> for AssignedLead {
    type Error = RecordError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(Self {
            id: optional(record, "id"),
            order_id: required(record, "orderId")?,
            order_date: optional_date(record, "orderDate")?,
            client_name: required(record, "clientName")?,
            client_company_name: optional(record, "clientCompanyName"),
            client_address: optional(record, "clientAddress"),
            email: optional(record, "email"),
            phone: optional(record, "phone"),
            product_name: optional(record, "productName"),
            assign_team_member: optional(record, "assignTeamMember"),
            stage: optional(record, "stage"),
            remarks: optional(record, "remarks"),
            client_kyc_id: optional(record, "clientKycId"),
            kyc_pin: optional(record, "kycPin"),
            download_status: optional(record, "downloadStatus"),
            processed_by: optional(record, "processedBy"),
            processed_at: optional(record, "processedAt"),
            aadhaar_pdf_url: optional(record, "aadhaarPdfUrl"),
            pan_pdf_url: optional(record, "panPdfUrl"),
            optional_pdf_url: optional(record, "optionalPdfUrl"),
            client_image_url: optional(record, "clientImageUrl"),
            quoted_price: optional_number(record, "quotedPrice")?,
            company_name: optional(record, "companyName"),
            company_name_and_address: optional(record, "companyNameAndAddress"),
            payment_status: optional(record, "paymentStatus"),
            payment_status_note: optional(record, "paymentStatusNote"),
            invoice_number: optional(record, "invoiceNumber"),
            invoice_date: optional_date(record, "invoiceDate")?,
            billing_sent_status: optional(record, "billingSentStatus"),
            billing_date: optional_date(record, "billingDate")?,
            bill_document_url: optional(record, "billDocumentUrl"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_is_required() {
        let record: Record = [("clientName".to_string(), "Acme".to_string())]
            .into_iter()
            .collect();
        assert_eq!(
            AssignedLead::try_from(&record),
            Err(RecordError::MissingField("orderId"))
        );
    }

    #[test]
    fn test_invalid_invoice_date_is_reported() {
        let record: Record = [
            ("orderId", "ORD-1"),
            ("clientName", "Acme"),
            ("invoiceDate", "31/02/2024"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert_eq!(
            AssignedLead::try_from(&record),
            Err(RecordError::InvalidDate {
                field: "invoiceDate",
                value: "31/02/2024".to_string()
            })
        );
    }
}
