use anyhow::{anyhow, Result};

/// Smallest year accepted from clients
pub const MIN_YEAR: i64 = 1;
/// Largest year accepted from clients
pub const MAX_YEAR: i64 = 9999;

/// Parses the raw `year` form value.
///
/// Accepts a plain decimal integer with an optional sign, surrounded by any
/// of space, `\t`, `\n`, `\r`, `\v` or NUL. Other whitespace (NBSP and the
/// like) is not stripped. Leading zeros, decimals, exponents and hex are
/// rejected.
pub fn validate_year(raw: Option<&str>) -> Result<i64> {
    let value = raw.map(trim_filter_whitespace).unwrap_or_default();

    if value.is_empty() {
        return Err(anyhow!("Введите год."));
    }

    let year = parse_strict_integer(value)
        .ok_or_else(|| anyhow!("Введите корректный год (целое число)."))?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(anyhow!(
            "Год должен быть в диапазоне от {} до {}.",
            MIN_YEAR,
            MAX_YEAR
        ));
    }

    Ok(year)
}

fn trim_filter_whitespace(value: &str) -> &str {
    value.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\0'))
}

fn parse_strict_integer(value: &str) -> Option<i64> {
    let digits = value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // "0" is fine, "007" is not
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }

    // i64 parsing accepts a single leading sign, which is all that is left
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_year_valid() {
        assert_eq!(validate_year(Some("2021")).unwrap(), 2021);
        assert_eq!(validate_year(Some("1")).unwrap(), 1);
        assert_eq!(validate_year(Some("9999")).unwrap(), 9999);
        assert_eq!(validate_year(Some("+2024")).unwrap(), 2024);
        assert_eq!(validate_year(Some("  2025\n")).unwrap(), 2025);
    }

    #[test]
    fn test_validate_year_missing() {
        let err = validate_year(None).unwrap_err();
        assert_eq!(err.to_string(), "Введите год.");
        assert!(validate_year(Some("")).is_err());
        assert!(validate_year(Some("   ")).is_err());
        assert!(validate_year(Some("\0\x0B")).is_err());
    }

    #[test]
    fn test_validate_year_not_a_number() {
        for raw in ["abc", "20.5", "1e3", "0x10", "2o21", "--5", "+-5", "+", "-", "12 34"] {
            let err = validate_year(Some(raw)).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Введите корректный год (целое число).",
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_validate_year_trims_only_filter_whitespace() {
        assert_eq!(validate_year(Some("2021\0")).unwrap(), 2021);
        assert_eq!(validate_year(Some("\x0B\t2021\r\n")).unwrap(), 2021);

        // Unicode spaces are part of the value, not padding
        assert!(validate_year(Some("\u{a0}2021")).is_err());
        assert!(validate_year(Some("2021\u{2003}")).is_err());
        assert!(validate_year(Some("\u{3000}2021")).is_err());
    }

    #[test]
    fn test_validate_year_leading_zeros() {
        assert!(validate_year(Some("02021")).is_err());
        assert!(validate_year(Some("-0")).is_err());
    }

    #[test]
    fn test_validate_year_out_of_range() {
        for raw in ["0", "10000", "-1", "-2021"] {
            let err = validate_year(Some(raw)).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Год должен быть в диапазоне от 1 до 9999.",
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_validate_year_overflow() {
        assert!(validate_year(Some("99999999999999999999999")).is_err());
    }
}
