/// Parses user-entered text as a decimal number, substituting zero for
/// anything outside the grammar (empty string, "abc", "1.2.3"). Non-finite
/// spellings such as "inf" or "NaN" also read as zero: a stored reading is
/// either a finite number or absent.
pub fn lenient_f64(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parses a declared count. Integers read as-is, plain decimals truncate
/// toward zero, and everything else collapses to zero: there is no
/// exponent form that could declare millions of slots from one keystroke.
pub fn lenient_count(raw: &str) -> usize {
    let trimmed = raw.trim();
    if let Ok(count) = trimmed.parse::<i64>() {
        return count.max(0) as usize;
    }
    if trimmed.contains(['e', 'E']) {
        return 0;
    }
    let parsed = lenient_f64(trimmed).trunc();
    if parsed <= 0.0 {
        0
    } else {
        parsed as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_f64_reads_decimal_grammar() {
        assert_eq!(lenient_f64("3.5"), 3.5);
        assert_eq!(lenient_f64(" 2 "), 2.0);
        assert_eq!(lenient_f64("-4"), -4.0);
        assert_eq!(lenient_f64("1e2"), 100.0);
    }

    #[test]
    fn lenient_f64_substitutes_zero_for_garbage() {
        assert_eq!(lenient_f64(""), 0.0);
        assert_eq!(lenient_f64("abc"), 0.0);
        assert_eq!(lenient_f64("1.2.3"), 0.0);
    }

    #[test]
    fn lenient_f64_rejects_non_finite_spellings() {
        assert_eq!(lenient_f64("inf"), 0.0);
        assert_eq!(lenient_f64("NaN"), 0.0);
    }

    #[test]
    fn lenient_count_truncates_and_clamps() {
        assert_eq!(lenient_count("3"), 3);
        assert_eq!(lenient_count("2.5"), 2);
        assert_eq!(lenient_count("-2"), 0);
        assert_eq!(lenient_count("five"), 0);
        assert_eq!(lenient_count(""), 0);
    }

    #[test]
    fn lenient_count_rejects_exponent_forms() {
        assert_eq!(lenient_count("1e9"), 0);
        assert_eq!(lenient_count("1E3"), 0);
        assert_eq!(lenient_count("2.5e3"), 0);
    }
}
