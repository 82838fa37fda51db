/// Mean-squared error between output activations and a target vector.
pub struct MseLoss;

impl MseLoss {
    /// mean((target - output)²); 0 for empty vectors.
    pub fn loss(outputs: &[f64], targets: &[f64]) -> f64 {
        if outputs.is_empty() {
            return 0.0;
        }
        outputs.iter().zip(targets.iter())
            .map(|(o, t)| (t - o).powi(2))
            .sum::<f64>() / outputs.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn averages_squared_errors() {
        assert_abs_diff_eq!(MseLoss::loss(&[0.5, 0.0], &[1.0, 1.0]), 0.625, epsilon = 1e-12);
        assert_eq!(MseLoss::loss(&[], &[]), 0.0);
    }
}
