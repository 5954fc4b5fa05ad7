//! Header normalization.

/// Normalizes a header value: strips a leading BOM and surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  patient_id  "), "patient_id");
        assert_eq!(normalize_header("\u{feff}patient_id"), "patient_id");
        assert_eq!(normalize_header("gender\r"), "gender");
    }
}
