use super::Lead;
use crate::domain::common::{date_text, export_record, text};
use crate::shared::csv::Record;

/// File name stem for lead exports
pub const LEADS_EXPORT_STEM: &str = "leads";

/// Flattens leads into export records under the import header labels
pub fn format_leads_for_export(leads: &[Lead]) -> Vec<Record> {
    leads
        .iter()
        .map(|lead| {
            export_record([
                ("Employee Name", lead.employee_name.clone()),
                ("Source", text(&lead.source)),
                ("Other Source", text(&lead.other_source)),
                ("Lead Created Date", date_text(&lead.lead_created_date)),
                ("Expected Close Date", date_text(&lead.expected_close_date)),
                ("Last Contacted", date_text(&lead.last_contacted)),
                ("Stage", text(&lead.stage)),
                ("Comment", text(&lead.comment)),
                ("Remarks", text(&lead.remarks)),
                ("Client Name", lead.client_name.clone()),
                ("Client Company Name", text(&lead.client_company_name)),
                ("Product Name", text(&lead.product_name)),
                ("Assign Team Member", text(&lead.assign_team_member)),
                ("Email", text(&lead.email)),
                ("Phone", text(&lead.phone)),
                ("Quoted Price", text(&lead.quoted_price)),
                ("Company Name", text(&lead.company_name)),
                ("Reference By", text(&lead.reference_by)),
            ])
        })
        .collect()
}
