pub struct SseLoss;

impl SseLoss {
    /// Scalar SSE: sum((predicted - expected)²).
    ///
    /// No mean normalization — per-sample values accumulate directly into
    /// the grid total.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_prediction_costs_nothing() {
        assert_eq!(SseLoss::loss(&[0.25, 0.75], &[0.25, 0.75]), 0.0);
    }

    #[test]
    fn errors_add_without_averaging() {
        assert_eq!(SseLoss::loss(&[1.0, 0.0], &[0.0, 1.0]), 2.0);
        assert_eq!(SseLoss::loss(&[0.5, 0.5], &[0.0, 1.0]), 0.5);
    }
}
