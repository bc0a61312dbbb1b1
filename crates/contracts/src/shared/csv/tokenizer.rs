/// Splits one CSV line into trimmed field values.
///
/// Quotes toggle a quoted section, `""` inside a quoted section is a literal
/// quote, and commas only separate fields outside quotes. Malformed input
/// never fails: an unbalanced quote swallows the rest of the line into the
/// current field.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(split_fields("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(split_fields("  a , b  ,c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_comma_stays_in_field() {
        assert_eq!(split_fields(r#""Doe, Jane",100"#), vec!["Doe, Jane", "100"]);
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(
            split_fields(r#""He said ""hi"".""#),
            vec![r#"He said "hi"."#]
        );
    }

    #[test]
    fn test_empty_fields_are_kept() {
        assert_eq!(split_fields(",,"), vec!["", "", ""]);
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn test_unbalanced_quote_consumes_rest_of_line() {
        assert_eq!(split_fields(r#"a,"b,c,d"#), vec!["a", "b,c,d"]);
    }

    #[test]
    fn test_quote_in_middle_of_unquoted_field_toggles() {
        // Quotes are not required to start a field
        assert_eq!(split_fields(r#"ab"c,d"e,f"#), vec!["abc,de", "f"]);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(split_fields("Ünïcødé,\"日本, 語\""), vec!["Ünïcødé", "日本, 語"]);
    }
}
