pub mod aggregate;
pub mod export;

pub use aggregate::Lead;
pub use export::{format_leads_for_export, LEADS_EXPORT_STEM};
