/// Exponentially weighted moving average in the adjusted (normalized-weight)
/// convention: the i-th most recent observation carries weight `(1 - α)^i`,
/// and the weights are normalized over all observations seen so far rather
/// than a fixed trailing window. `α = 2 / (span + 1)`.
///
/// Only the final value is returned; the model summarizes current form, not
/// the full smoothing curve.
pub fn ewma_last(values: &[f64], span: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let alpha = 2.0 / (span + 1.0);
    let decay = 1.0 - alpha;

    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for (age, value) in values.iter().rev().enumerate() {
        let weight = decay.powi(age as i32);
        weighted_sum += weight * value;
        weight_sum += weight;
    }

    Some(weighted_sum / weight_sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_observation_is_identity() {
        assert_eq!(ewma_last(&[2.0], 10.0), Some(2.0));
        assert_eq!(ewma_last(&[0.0], 10.0), Some(0.0));
    }

    #[test]
    fn empty_input_has_no_value() {
        assert_eq!(ewma_last(&[], 10.0), None);
    }

    #[test]
    fn two_point_sequence_matches_hand_computation() {
        // span 10 → α = 2/11, decay = 9/11.
        // Weights: newest 1, older 9/11.
        // mean = (1·1 + (9/11)·2) / (1 + 9/11) = 29/20.
        let value = ewma_last(&[2.0, 1.0], 10.0).unwrap();
        assert!((value - 29.0 / 20.0).abs() < 1e-12, "got {value}");
    }

    #[test]
    fn five_point_sequence_matches_hand_computation() {
        // With decay 9/11 the weights over [1, 0, 2, 3, 1] reduce to the
        // exact fraction 76741/51001 (≈ 1.504696).
        let value = ewma_last(&[1.0, 0.0, 2.0, 3.0, 1.0], 10.0).unwrap();
        assert!((value - 76741.0 / 51001.0).abs() < 1e-12, "got {value}");
    }

    #[test]
    fn recent_observations_dominate() {
        let rising = ewma_last(&[0.0, 0.0, 3.0, 3.0], 10.0).unwrap();
        let falling = ewma_last(&[3.0, 3.0, 0.0, 0.0], 10.0).unwrap();
        assert!(rising > falling);
    }
}
