use chrono::{DateTime, NaiveDateTime};

/// Normalized and human-readable forms of a post's publish timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDate {
    pub normalized: String,
    pub display: String,
}

/// Parse the export's ISO-ish timestamps into `YYYY-MM-DD` and
/// `Month DD, YYYY` forms.
///
/// Unparsable input degrades to passing the raw string through for both
/// forms; date trouble never fails a conversion.
pub fn resolve_date(raw: &str) -> ResolvedDate {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return ResolvedDate {
            normalized: parsed.format("%Y-%m-%d").to_string(),
            display: parsed.format("%B %d, %Y").to_string(),
        };
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ResolvedDate {
            normalized: parsed.format("%Y-%m-%d").to_string(),
            display: parsed.format("%B %d, %Y").to_string(),
        };
    }
    ResolvedDate {
        normalized: raw.to_string(),
        display: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_date;

    #[test]
    fn rfc3339_with_millis_and_zulu_parses() {
        let date = resolve_date("2024-03-05T10:00:00.000Z");
        assert_eq!(date.normalized, "2024-03-05");
        assert_eq!(date.display, "March 05, 2024");
    }

    #[test]
    fn naive_timestamp_without_offset_parses() {
        let date = resolve_date("2023-11-30T23:59:59");
        assert_eq!(date.normalized, "2023-11-30");
        assert_eq!(date.display, "November 30, 2023");
    }

    #[test]
    fn malformed_input_passes_through_unchanged() {
        let date = resolve_date("sometime in june");
        assert_eq!(date.normalized, "sometime in june");
        assert_eq!(date.display, "sometime in june");
    }

    #[test]
    fn empty_input_passes_through() {
        let date = resolve_date("");
        assert_eq!(date.normalized, "");
        assert_eq!(date.display, "");
    }
}
