pub mod a001_lead;
pub mod a002_assigned_lead;
pub mod a003_catalog;
pub mod common;
