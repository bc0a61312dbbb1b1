//! Helpers for reading typed values out of imported records and
//! writing entities back into flat export records.

use chrono::NaiveDate;

use super::RecordError;
use crate::shared::csv::Record;

/// Date formats accepted on import. Exports always use the first one.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Non-empty value of a field, `None` when absent or blank
pub fn optional(record: &Record, field: &'static str) -> Option<String> {
    record
        .get(field)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn required(record: &Record, field: &'static str) -> Result<String, RecordError> {
    optional(record, field).ok_or(RecordError::MissingField(field))
}

pub fn optional_date(
    record: &Record,
    field: &'static str,
) -> Result<Option<NaiveDate>, RecordError> {
    let Some(value) = optional(record, field) else {
        return Ok(None);
    };

    // Timestamps like "2024-03-15T10:00:00Z" keep only the date part
    let date_part = value.split('T').next().unwrap_or(&value);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
        .map(Some)
        .ok_or(RecordError::InvalidDate { field, value })
}

pub fn optional_number(record: &Record, field: &'static str) -> Result<Option<f64>, RecordError> {
    let Some(value) = optional(record, field) else {
        return Ok(None);
    };

    value
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Some)
        .ok_or(RecordError::InvalidNumber { field, value })
}

/// Cell text for an optional value, empty when absent
pub fn text<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Cell text for an optional date in export format
pub fn date_text(value: &Option<NaiveDate>) -> String {
    value
        .map(|d| d.format(DATE_FORMATS[0]).to_string())
        .unwrap_or_default()
}

/// Builds an export record from (header label, value) pairs
pub fn export_record<const N: usize>(pairs: [(&str, String); N]) -> Record {
    pairs
        .into_iter()
        .map(|(header, value)| (header.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_optional_treats_blank_as_absent() {
        let r = record(&[("email", "  "), ("phone", " 123 ")]);
        assert_eq!(optional(&r, "email"), None);
        assert_eq!(optional(&r, "phone"), Some("123".to_string()));
        assert_eq!(optional(&r, "missing"), None);
    }

    #[test]
    fn test_required() {
        let r = record(&[("clientName", "")]);
        assert_eq!(
            required(&r, "clientName"),
            Err(RecordError::MissingField("clientName"))
        );
    }

    #[test]
    fn test_dates_in_accepted_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        for value in ["2024-03-15", "15-03-2024", "15/03/2024", "2024-03-15T10:00:00Z"] {
            let r = record(&[("orderDate", value)]);
            assert_eq!(optional_date(&r, "orderDate"), Ok(expected), "{}", value);
        }
    }

    #[test]
    fn test_invalid_date() {
        let r = record(&[("orderDate", "next tuesday")]);
        assert_eq!(
            optional_date(&r, "orderDate"),
            Err(RecordError::InvalidDate {
                field: "orderDate",
                value: "next tuesday".to_string()
            })
        );
    }

    #[test]
    fn test_numbers() {
        let r = record(&[("a", "1,500.50"), ("b", "abc"), ("c", "NaN")]);
        assert_eq!(optional_number(&r, "a"), Ok(Some(1500.5)));
        assert!(optional_number(&r, "b").is_err());
        assert!(optional_number(&r, "c").is_err());
        assert_eq!(optional_number(&r, "d"), Ok(None));
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(text::<String>(&None), "");
        assert_eq!(text(&Some(1500.0_f64)), "1500");
        assert_eq!(date_text(&NaiveDate::from_ymd_opt(2024, 1, 2)), "2024-01-02");
    }
}
