use super::AssignedLead;
use crate::domain::common::{date_text, export_record, text};
use crate::shared::csv::Record;

pub const ASSIGNED_LEADS_EXPORT_STEM: &str = "assigned_leads";
pub const BILLING_EXPORT_STEM: &str = "billing";

/// Order processing view: order, client and KYC document columns
pub fn format_assigned_leads_for_export(leads: &[AssignedLead]) -> Vec<Record> {
    leads
        .iter()
        .map(|lead| {
            export_record([
                ("Order ID", lead.order_id.clone()),
                ("Order Date", date_text(&lead.order_date)),
                ("Client Name", lead.client_name.clone()),
                ("Client Company Name", text(&lead.client_company_name)),
                ("Client Address", text(&lead.client_address)),
                ("Email", text(&lead.email)),
                ("Phone", text(&lead.phone)),
                ("Product Name", text(&lead.product_name)),
                ("Client KYC ID", text(&lead.client_kyc_id)),
                ("KYC PIN", text(&lead.kyc_pin)),
                ("Download Status", text(&lead.download_status)),
                ("Processed By", text(&lead.processed_by)),
                ("Processed At", text(&lead.processed_at)),
                ("Aadhaar PDF URL", text(&lead.aadhaar_pdf_url)),
                ("PAN PDF URL", text(&lead.pan_pdf_url)),
                ("Optional PDF URL", text(&lead.optional_pdf_url)),
                ("Client Image URL", text(&lead.client_image_url)),
                ("Quoted Price", text(&lead.quoted_price)),
                ("Company Name & Address", text(&lead.company_name_and_address)),
                ("Assign Team Member", text(&lead.assign_team_member)),
                ("Stage", text(&lead.stage)),
                ("Remarks", text(&lead.remarks)),
            ])
        })
        .collect()
}

/// Billing view: payment and invoice columns
pub fn format_billing_for_export(leads: &[AssignedLead]) -> Vec<Record> {
    leads
        .iter()
        .map(|lead| {
            export_record([
                ("Order ID", lead.order_id.clone()),
                ("Client Name", lead.client_name.clone()),
                ("Company Name", text(&lead.company_name)),
                ("Quoted Price", text(&lead.quoted_price)),
                ("Payment Status", text(&lead.payment_status)),
                ("Payment Status Note", text(&lead.payment_status_note)),
                ("Invoice Number", text(&lead.invoice_number)),
                ("Invoice Date", date_text(&lead.invoice_date)),
                ("Billing Sent Status", text(&lead.billing_sent_status)),
                ("Billing Date", date_text(&lead.billing_date)),
                ("Bill Document URL", text(&lead.bill_document_url)),
            ])
        })
        .collect()
}
