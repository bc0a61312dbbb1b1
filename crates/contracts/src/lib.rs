//! Types and logic shared by every CRM client: the CSV record codec,
//! typed entities, export formatters and use case DTOs.

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
