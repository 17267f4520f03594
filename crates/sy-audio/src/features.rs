use sy_core::error::CoreError;
use sy_core::mood::FeatureVector;

/// Réduit un buffer d'échantillons mono aux deux statistiques du pipeline.
///
/// `energy` est l'amplitude absolue moyenne, `zero_crossing_rate` la
/// fraction de paires adjacentes dont le signe diffère. Les deux sont
/// normalisées par la longueur totale du buffer, donc comparables
/// uniquement entre buffers de même taux d'échantillonnage.
///
/// Un échantillon à exactement 0.0 compte comme non-négatif, pour
/// qu'une traversée par zéro exact ne soit pas comptée deux fois.
///
/// # Errors
/// Returns [`CoreError::EmptyBuffer`] if `samples` is empty.
///
/// # Example
/// ```
/// use sy_audio::features::extract_features;
/// let samples = vec![0.5f32; 100];
/// let f = extract_features(&samples).unwrap();
/// assert!((f.energy - 0.5).abs() < 1e-6);
/// assert!(f.zero_crossing_rate.abs() < f32::EPSILON);
/// ```
pub fn extract_features(samples: &[f32]) -> Result<FeatureVector, CoreError> {
    if samples.is_empty() {
        return Err(CoreError::EmptyBuffer);
    }

    // f64 accumulator: a full-track sum exceeds f32 precision.
    let mut abs_sum = 0.0f64;
    let mut crossings: usize = 0;

    for (i, &s) in samples.iter().enumerate() {
        abs_sum += f64::from(s.abs());
        if i > 0 && (s >= 0.0) != (samples[i - 1] >= 0.0) {
            crossings += 1;
        }
    }

    let len = samples.len();
    Ok(FeatureVector {
        energy: (abs_sum / len as f64) as f32,
        zero_crossing_rate: crossings as f32 / len as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_rejected() {
        assert!(matches!(extract_features(&[]), Err(CoreError::EmptyBuffer)));
    }

    #[test]
    fn single_sample_has_no_crossings() {
        let f = extract_features(&[-0.7]).expect("non-empty");
        assert!((f.energy - 0.7).abs() < 1e-6);
        assert!(f.zero_crossing_rate.abs() < f32::EPSILON);
    }

    #[test]
    fn constant_positive_buffer() {
        let samples = vec![0.5f32; 100];
        let f = extract_features(&samples).expect("non-empty");
        assert!((f.energy - 0.5).abs() < 1e-6);
        assert!(f.zero_crossing_rate.abs() < f32::EPSILON);
    }

    #[test]
    fn alternating_buffer_crosses_every_pair() {
        // +0.05, -0.05, ... : 99 crossings over 100 samples.
        let samples: Vec<f32> = (0..100)
            .map(|i| if i % 2 == 0 { 0.05 } else { -0.05 })
            .collect();
        let f = extract_features(&samples).expect("non-empty");
        assert!((f.energy - 0.05).abs() < 1e-6);
        assert!((f.zero_crossing_rate - 0.99).abs() < 1e-6);
    }

    #[test]
    fn exact_zero_counts_as_non_negative() {
        // -1 → 0 is a crossing, 0 → 1 is not.
        let f = extract_features(&[-1.0, 0.0, 1.0]).expect("non-empty");
        assert!((f.zero_crossing_rate - 1.0 / 3.0).abs() < 1e-6);
    }
}
