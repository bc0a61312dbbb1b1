use super::header_map::field_for_header;
use super::tokenizer::split_fields;
use super::Record;

/// Non-blank lines of the input, with a leading BOM and trailing `\r` removed.
///
/// Splitting happens before tokenizing, so a quoted value containing a line
/// break ends up split across two lines.
fn data_lines(text: &str) -> Vec<&str> {
    text.trim_start_matches('\u{FEFF}')
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Parses CSV text into records keyed by the raw header names.
///
/// The first non-blank line is the header row. Returns an empty vector when
/// there is no data row. Values missing at the end of a short row become
/// empty strings; values beyond the last header are dropped.
pub fn parse_rows(text: &str) -> Vec<Record> {
    let lines = data_lines(text);
    if lines.len() < 2 {
        return Vec::new();
    }

    let headers = split_fields(lines[0]);
    let rows: Vec<Record> = lines[1..]
        .iter()
        .map(|line| {
            let values = split_fields(line);
            headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    let value = values.get(idx).cloned().unwrap_or_default();
                    (header.clone(), value)
                })
                .collect()
        })
        .collect();

    log::debug!("csv: parsed {} rows with {} columns", rows.len(), headers.len());
    rows
}

/// Re-keys a header-keyed record through the header vocabulary.
/// Headers outside the vocabulary are dropped.
pub fn map_record(record: &Record) -> Record {
    record
        .iter()
        .filter_map(|(header, value)| {
            field_for_header(header).map(|field| (field.to_string(), value.clone()))
        })
        .collect()
}

/// Parses a lead upload file into records keyed by internal field names.
pub fn parse_lead_rows(text: &str) -> Vec<Record> {
    let rows = parse_rows(text);

    if let Some(first) = rows.first() {
        let unknown: Vec<&str> = first
            .keys()
            .map(String::as_str)
            .filter(|header| field_for_header(header).is_none())
            .collect();
        if !unknown.is_empty() {
            log::debug!("csv: ignoring unknown headers {:?}", unknown);
        }
    }

    rows.iter().map(map_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_scenario() {
        let text = "Client Name,Order ID\n\"Doe, Jane\",100";

        let raw = parse_rows(text);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0]["Client Name"], "Doe, Jane");
        assert_eq!(raw[0]["Order ID"], "100");

        let leads = parse_lead_rows(text);
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].len(), 2);
        assert_eq!(leads[0]["clientName"], "Doe, Jane");
        assert_eq!(leads[0]["orderId"], "100");
    }

    #[test]
    fn test_unknown_header_contributes_no_key() {
        let leads = parse_lead_rows("Client Name,Random Column\nAcme,whatever\n");
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].get("clientName").map(String::as_str), Some("Acme"));
        assert_eq!(leads[0].len(), 1);
        assert!(!leads[0].values().any(|v| v == "whatever"));
    }

    #[test]
    fn test_header_only_and_empty_input() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("\n\n  \n").is_empty());
        assert!(parse_rows("Client Name,Order ID").is_empty());
        assert!(parse_rows("Client Name,Order ID\n   \n").is_empty());
        assert!(parse_lead_rows("Client Name,Order ID\n").is_empty());
    }

    #[test]
    fn test_short_row_fills_empty_strings() {
        let leads = parse_lead_rows("Client Name,Email,Phone\nAcme\n");
        assert_eq!(leads[0]["clientName"], "Acme");
        assert_eq!(leads[0]["email"], "");
        assert_eq!(leads[0]["phone"], "");
    }

    #[test]
    fn test_extra_values_are_dropped() {
        let rows = parse_rows("A,B\n1,2,3,4\n");
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0]["B"], "2");
    }

    #[test]
    fn test_blank_lines_and_crlf_are_skipped() {
        let rows = parse_lead_rows("Client Name,Phone\r\n\r\nAcme,123\r\n\r\nGlobex,456\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["phone"], "123");
        assert_eq!(rows[1]["clientName"], "Globex");
    }

    #[test]
    fn test_leading_bom_is_ignored() {
        let rows = parse_lead_rows("\u{FEFF}Client Name\nAcme\n");
        assert_eq!(rows[0]["clientName"], "Acme");
    }

    #[test]
    fn test_header_order_is_preserved() {
        let rows = parse_lead_rows("Phone,Client Name,Email\n1,Acme,a@b.c\n");
        let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["phone", "clientName", "email"]);
    }

    #[test]
    fn test_escaped_quote_value() {
        let rows = parse_rows("Comment\n\"He said \"\"hi\"\".\"\n");
        assert_eq!(rows[0]["Comment"], "He said \"hi\".");
    }

    #[test]
    fn test_quoted_newline_is_split_across_rows() {
        // Lines are split before tokenizing, so the quoted line break does
        // not survive: the value is cut and its tail becomes its own row.
        let text = "Client Name,Remarks\nAcme,\"first line\nsecond line\"\n";
        let rows = parse_rows(text);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Client Name"], "Acme");
        assert_eq!(rows[0]["Remarks"], "first line");
        assert_eq!(rows[1]["Client Name"], "second line");
        assert_eq!(rows[1]["Remarks"], "");
    }
}
