//! CSV record codec used by bulk lead import and export.
//!
//! Import: [`parse_lead_rows`] turns uploaded text into records keyed by
//! internal field names. Export: [`to_csv`] turns records into text whose
//! header labels come from the same vocabulary, so exported files re-import.

pub mod header_map;
pub mod parser;
pub mod template;
pub mod tokenizer;
pub mod writer;

use indexmap::IndexMap;

/// One CSV row or exported entity, in column order
pub type Record = IndexMap<String, String>;

pub use header_map::{field_for_header, header_for_field, HEADER_FIELD_MAP};
pub use parser::{map_record, parse_lead_rows, parse_rows};
pub use template::{lead_upload_template, LEAD_TEMPLATE_HEADERS, LEAD_TEMPLATE_STEM};
pub use tokenizer::split_fields;
pub use writer::{collect_headers, escape_cell, export_filename, to_csv, CsvCell, CSV_MIME_TYPE};
