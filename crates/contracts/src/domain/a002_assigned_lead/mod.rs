pub mod aggregate;
pub mod export;

pub use aggregate::AssignedLead;
pub use export::{
    format_assigned_leads_for_export, format_billing_for_export, ASSIGNED_LEADS_EXPORT_STEM,
    BILLING_EXPORT_STEM,
};
