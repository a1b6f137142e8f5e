//! Line-level CSV splitting for the offerings dataset
//!
//! The dataset quotes free-text fields that may contain literal commas, so a
//! data line is split on commas *outside* double-quote pairs. Quote
//! characters themselves stay in the field; the record constructor strips
//! them from the columns that carry them.

/// Split one data line on commas that are not inside double-quote pairs.
///
/// Empty fields (including trailing ones) are preserved so that positional
/// field counting stays honest.
#[must_use]
pub fn split_data_line(line: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(crate::core::models::CourseRecord::FIELD_COUNT);
    let mut in_quotes = false;
    let mut field_start = 0;

    for (idx, byte) in line.bytes().enumerate() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b',' if !in_quotes => {
                fields.push(&line[field_start..idx]);
                field_start = idx + 1;
            }
            _ => {}
        }
    }
    fields.push(&line[field_start..]);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        let fields = split_data_line("MITx,6.002x,9/5/2012");
        assert_eq!(fields, vec!["MITx", "6.002x", "9/5/2012"]);
    }

    #[test]
    fn keeps_commas_inside_quotes() {
        let fields = split_data_line("a,\"one, two, three\",b");
        assert_eq!(fields, vec!["a", "\"one, two, three\"", "b"]);
    }

    #[test]
    fn preserves_empty_fields() {
        let fields = split_data_line("a,,b,");
        assert_eq!(fields, vec!["a", "", "b", ""]);
    }

    #[test]
    fn handles_adjacent_quoted_fields() {
        let fields = split_data_line("\"x, y\",\"z\"");
        assert_eq!(fields, vec!["\"x, y\"", "\"z\""]);
    }

    #[test]
    fn single_field_line() {
        assert_eq!(split_data_line("alone"), vec!["alone"]);
        assert_eq!(split_data_line(""), vec![""]);
    }
}
