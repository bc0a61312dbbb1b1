use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{optional, optional_date, optional_number, required, RecordError};
use crate::shared::csv::Record;

/// Sales lead as tracked by an employee, from first contact to close
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Backend identifier, absent for leads that were never saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Employee who owns the lead
    pub employee_name: String,
    pub source: Option<String>,
    /// Free text when `source` is "Other"
    pub other_source: Option<String>,
    pub lead_created_date: Option<NaiveDate>,
    pub expected_close_date: Option<NaiveDate>,
    pub last_contacted: Option<NaiveDate>,
    pub stage: Option<String>,
    pub comment: Option<String>,
    pub remarks: Option<String>,

    pub client_name: String,
    pub client_company_name: Option<String>,
    pub product_name: Option<String>,
    pub assign_team_member: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub quoted_price: Option<f64>,
    pub company_name: Option<String>,
    pub reference_by: Option<String>,
}

impl TryFrom<&Record> for Lead {
    type Error = RecordError;

    /// Builds a lead from an imported record keyed by field names.
    /// Employee and client names are required; blank cells become `None`.
    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(Self {
            id: optional(record, "id"),
            employee_name: required(record, "employeeName")?,
            source: optional(record, "source"),
            other_source: optional(record, "otherSource"),
            lead_created_date: optional_date(record, "leadCreatedDate")?,
            expected_close_date: optional_date(record, "expectedCloseDate")?,
            last_contacted: optional_date(record, "lastContacted")?,
            stage: optional(record, "stage"),
            comment: optional(record, "comment"),
            remarks: optional(record, "remarks"),
            client_name: required(record, "clientName")?,
            client_company_name: optional(record, "clientCompanyName"),
            product_name: optional(record, "productName"),
            assign_team_member: optional(record, "assignTeamMember"),
            email: optional(record, "email"),
            phone: optional(record, "phone"),
            quoted_price: optional_number(record, "quotedPrice")?,
            company_name: optional(record, "companyName"),
            reference_by: optional(record, "referenceBy"),
        })
    }
}
