/// Arithmetic mean with the bench's empty-set policy: a zero-length slice
/// reports zero rather than NaN (the divisor is `max(len, 1)`).
pub fn mean(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    sum / values.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_slice_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_handles_single_value() {
        assert_eq!(mean(&[4.0]), 4.0);
    }

    #[test]
    fn mean_averages_a_series() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }
}
