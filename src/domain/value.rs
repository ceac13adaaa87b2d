//! Loosely-typed cell values and the value normalizer
//!
//! Input rows arrive with unknown per-cell types (free text, numbers,
//! date-like strings, or nothing at all). `RawValue` makes that explicit as
//! a tagged union instead of passing untyped strings around, and the
//! normalizer maps blank and missing cells to a single absent state.

use chrono::NaiveDateTime;
use std::fmt;

/// A single cell value from an input row
///
/// # Examples
///
/// ```
/// use loadsend::domain::RawValue;
///
/// let value = RawValue::Text("  100 Main St  ".to_string());
/// assert_eq!(value.cleaned_text().as_deref(), Some("100 Main St"));
///
/// let blank = RawValue::Text("   ".to_string());
/// assert!(blank.cleaned_text().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Free text
    Text(String),
    /// Numeric cell (integer sources are widened to f64)
    Number(f64),
    /// Date-like cell, parsed from common timestamp layouts
    DateTime(NaiveDateTime),
    /// Missing, blank, or explicit missing-data sentinel
    Absent,
}

impl RawValue {
    /// Returns true if the value is absent or cleans to nothing
    pub fn is_absent(&self) -> bool {
        match self {
            RawValue::Absent => true,
            RawValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// The value normalizer: absence for blank/missing cells, the value
    /// itself otherwise. Total and side-effect free.
    pub fn cleaned(&self) -> Option<&RawValue> {
        if self.is_absent() {
            None
        } else {
            Some(self)
        }
    }

    /// Cleaned value rendered as a string
    ///
    /// Numbers with no fractional part render without a decimal point so a
    /// postal code stored as `12345.0` comes back as `"12345"`. Date-likes
    /// render in ISO 8601 (`YYYY-MM-DDTHH:MM:SS`).
    pub fn cleaned_text(&self) -> Option<String> {
        match self.cleaned()? {
            RawValue::Text(s) => Some(s.trim().to_string()),
            RawValue::Number(n) => Some(render_number(*n)),
            RawValue::DateTime(dt) => Some(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            RawValue::Absent => None,
        }
    }

    /// Parse a raw cell string into the most specific variant
    ///
    /// Blank cells and the `NaN` sentinel become `Absent`. Purely numeric
    /// cells become `Number`, common timestamp layouts become `DateTime`,
    /// everything else stays `Text`.
    pub fn infer(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
            return RawValue::Absent;
        }

        if looks_numeric(trimmed) {
            if let Ok(n) = trimmed.parse::<f64>() {
                if n.is_finite() {
                    return RawValue::Number(n);
                }
            }
        }

        for layout in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, layout) {
                return RawValue::DateTime(dt);
            }
        }

        RawValue::Text(cell.to_string())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cleaned_text() {
            Some(s) => write!(f, "{s}"),
            None => Ok(()),
        }
    }
}

fn render_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

fn looks_numeric(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && s.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    #[test_case("", RawValue::Absent; "empty cell")]
    #[test_case("   ", RawValue::Absent; "whitespace cell")]
    #[test_case("NaN", RawValue::Absent; "missing data sentinel")]
    #[test_case("500", RawValue::Number(500.0); "integer")]
    #[test_case("12.5", RawValue::Number(12.5); "float")]
    #[test_case("-3", RawValue::Number(-3.0); "negative")]
    #[test_case("100 Main St", RawValue::Text("100 Main St".to_string()); "address text")]
    #[test_case("PICKUP", RawValue::Text("PICKUP".to_string()); "enum text")]
    fn test_infer(cell: &str, expected: RawValue) {
        assert_eq!(RawValue::infer(cell), expected);
    }

    #[test]
    fn test_infer_datetime() {
        let value = RawValue::infer("2024-05-01T08:30:00");
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(value, RawValue::DateTime(expected));

        // Space-separated layout normalizes to the T-separated rendering
        let value = RawValue::infer("2024-05-01 08:30:00");
        assert_eq!(
            value.cleaned_text().as_deref(),
            Some("2024-05-01T08:30:00")
        );
    }

    #[test]
    fn test_cleaned_maps_blank_to_absent() {
        assert!(RawValue::Text("  ".to_string()).cleaned().is_none());
        assert!(RawValue::Absent.cleaned().is_none());
        assert!(RawValue::Number(0.0).cleaned().is_some());
    }

    #[test]
    fn test_cleaned_text_trims() {
        let value = RawValue::Text("  hello  ".to_string());
        assert_eq!(value.cleaned_text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_cleaned_text_stringifies_whole_numbers() {
        assert_eq!(
            RawValue::Number(12345.0).cleaned_text().as_deref(),
            Some("12345")
        );
        assert_eq!(
            RawValue::Number(12.5).cleaned_text().as_deref(),
            Some("12.5")
        );
    }

    #[test]
    fn test_normalizer_is_total() {
        // Every variant cleans without panicking
        for value in [
            RawValue::Text(String::new()),
            RawValue::Number(f64::MAX),
            RawValue::Absent,
        ] {
            let _ = value.cleaned();
            let _ = value.cleaned_text();
        }
    }
}
