//! Typed cell values and their ordering.

use std::cmp::Ordering;

/// A typed cell value produced by a column accessor.
///
/// Carries just enough structure for ordering and default display; the
/// engine never reflects over record shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent value. Orders after all present values.
    Null,
    Text(String),
    Number(f64),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
}

impl CellValue {
    /// Create a text value.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a numeric value. NaN is treated as absent.
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Self::Null
        } else {
            Self::Number(value)
        }
    }

    /// Create a timestamp value.
    pub fn timestamp(millis: i64) -> Self {
        Self::Timestamp(millis)
    }

    /// Create a value from an optional, mapping `None` to `Null`.
    pub fn opt<V>(value: Option<V>, f: impl FnOnce(V) -> CellValue) -> Self {
        value.map(f).unwrap_or(CellValue::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Display form used by the default cell rendering.
    pub fn display(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Self::Timestamp(t) => t.to_string(),
        }
    }

    /// Compare two values for ascending order.
    ///
    /// Same-type operands compare natively; mixed types fall back to the
    /// text comparison of their display forms. Null handling (always last)
    /// is the sort resolver's concern, not encoded here.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Null, _) => Ordering::Greater,
            (_, Self::Null) => Ordering::Less,
            (Self::Text(a), Self::Text(b)) => compare_text(a, b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            (a, b) => compare_text(&a.display(), &b.display()),
        }
    }
}

/// Case-insensitive text ordering with a case-sensitive tie break, so the
/// order is total. Covers the common locale expectation without pulling in
/// full collation tables.
pub(crate) fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    folded.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_comparison_ignores_case_first() {
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_text("apple", "APPLE"), Ordering::Greater); // tie break
        assert_eq!(compare_text("a", "a"), Ordering::Equal);
    }

    #[test]
    fn mixed_types_fall_back_to_text() {
        let n = CellValue::Number(2.0);
        let t = CellValue::text("10");
        // "2" vs "10" as text: "1" < "2"
        assert_eq!(n.compare(&t), Ordering::Greater);
    }

    #[test]
    fn nan_becomes_null() {
        assert!(CellValue::number(f64::NAN).is_null());
        assert_eq!(CellValue::number(3.5), CellValue::Number(3.5));
    }

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(CellValue::Number(42.0).display(), "42");
        assert_eq!(CellValue::Number(2.5).display(), "2.5");
        assert_eq!(CellValue::Null.display(), "");
    }
}
