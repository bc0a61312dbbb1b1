//! Common types shared by all CRM entities

pub mod entity;
pub mod fields;
pub mod record_error;

// Re-exports
pub use entity::CrmEntity;
pub use fields::{date_text, export_record, optional, optional_date, optional_number, required, text};
pub use record_error::RecordError;
