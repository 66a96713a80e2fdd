//! Normalization of US-locale sheet dates.
//!
//! Sheets store dates like `2/13/25` or `12/1/2025`. Everything downstream
//! uses `YYYY-MM-DD`, which sorts lexically.

/// Convert `M/D/Y` into `YYYY-MM-DD`
///
/// Month and day are zero-padded to two digits and two-character years
/// are placed in the 2000s. Values without exactly three `/`-separated
/// parts come back unchanged. No calendar validation happens here.
///
/// # Example
/// ```
/// use sound_tracker::parser::normalize_date;
///
/// assert_eq!(normalize_date("2/13/25"), "2025-02-13");
/// assert_eq!(normalize_date("bad-date"), "bad-date");
/// ```
pub fn normalize_date(value: &str) -> String {
    let parts: Vec<&str> = value.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return value.to_string();
    };

    let year = if year.chars().count() == 2 {
        format!("20{}", year)
    } else {
        year.to_string()
    };

    format!("{}-{:0>2}-{:0>2}", year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_year() {
        assert_eq!(normalize_date("2/13/25"), "2025-02-13");
    }

    #[test]
    fn test_long_year_padding() {
        assert_eq!(normalize_date("12/1/2025"), "2025-12-01");
        assert_eq!(normalize_date("01/09/2024"), "2024-01-09");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize_date("bad-date"), "bad-date");
        assert_eq!(normalize_date("2025-02-13"), "2025-02-13");
        assert_eq!(normalize_date("1/2/3/4"), "1/2/3/4");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(normalize_date("13/40/25"), "2025-13-40");
        assert_eq!(normalize_date("1/1/5"), "5-01-01");
    }
}
