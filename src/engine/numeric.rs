//! Small numeric guards shared by the scoring pipeline.
//!
//! Raw catalog data and learner input can carry missing or junk numbers, so
//! every value entering a comparator goes through one of these helpers first.

/// Returns `value` when it is a finite number, else the fallback.
pub(crate) fn finite_or(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(number) if number.is_finite() => number,
        _ => fallback,
    }
}

/// Clamps a value into `[min, max]`; non-finite input collapses to `min`.
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.max(min).min(max)
}

/// Canonical token form used for skill and keyword comparisons.
pub(crate) fn normalize_token(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_or_rejects_nan_and_infinity() {
        assert_eq!(finite_or(Some(f64::NAN), 4.0), 4.0);
        assert_eq!(finite_or(Some(f64::INFINITY), 4.0), 4.0);
        assert_eq!(finite_or(None, 4.0), 4.0);
        assert_eq!(finite_or(Some(12.5), 4.0), 12.5);
    }

    #[test]
    fn clamp_collapses_non_finite_to_minimum() {
        assert_eq!(clamp(f64::NAN, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-2.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn tokens_compare_case_insensitively() {
        assert_eq!(normalize_token("  Basic Math "), "basic math");
    }
}
