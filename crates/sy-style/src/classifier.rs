use sy_core::config::MoodConfig;
use sy_core::mood::{FeatureVector, StyleLabel};

/// Classe un vecteur de features en une séquence de labels d'humeur.
///
/// Deux seuils fixes décident des labels : l'énergie choisit la paire
/// Passionate/Sunny ou Soothing/Warm, le zero-crossing rate ajoute
/// Happy ou Melancholy. L'ordre d'insertion est stable (labels dérivés
/// de l'énergie avant ceux du ZCR), fonction totale et déterministe.
///
/// Invariant : Warm et Melancholy ne coexistent jamais — si les deux
/// seuils les produisent, Melancholy est retiré (Warm prime). Le
/// résultat contient donc 2 ou 3 labels, jamais 4.
///
/// # Example
/// ```
/// use sy_core::config::MoodConfig;
/// use sy_core::mood::{FeatureVector, StyleLabel};
/// use sy_style::classifier::classify;
///
/// let f = FeatureVector { energy: 0.5, zero_crossing_rate: 0.0 };
/// let labels = classify(&f, &MoodConfig::default());
/// assert_eq!(
///     labels,
///     [StyleLabel::Passionate, StyleLabel::Sunny, StyleLabel::Melancholy]
/// );
/// ```
#[must_use]
pub fn classify(features: &FeatureVector, config: &MoodConfig) -> Vec<StyleLabel> {
    let mut labels = Vec::with_capacity(3);

    if features.energy > config.energy_threshold {
        labels.push(StyleLabel::Passionate);
        labels.push(StyleLabel::Sunny);
    } else {
        labels.push(StyleLabel::Soothing);
        labels.push(StyleLabel::Warm);
    }

    if features.zero_crossing_rate > config.zcr_threshold {
        labels.push(StyleLabel::Happy);
    } else {
        labels.push(StyleLabel::Melancholy);
    }

    resolve_conflicts(&mut labels);
    labels
}

/// Labels substitués quand le décodage ou l'analyse échoue.
///
/// Le contrat de fallback garantit qu'une visualisation est toujours
/// rendue : ces labels traversent le mapper d'affect et le générateur
/// de champ comme un résultat d'analyse normal.
///
/// # Example
/// ```
/// use sy_core::mood::StyleLabel;
/// use sy_style::classifier::fallback_labels;
/// assert_eq!(fallback_labels(), [StyleLabel::Warm, StyleLabel::Soothing]);
/// ```
#[must_use]
pub fn fallback_labels() -> Vec<StyleLabel> {
    vec![StyleLabel::Warm, StyleLabel::Soothing]
}

/// Warm et Melancholy sont mutuellement exclusifs ; Warm prime.
fn resolve_conflicts(labels: &mut Vec<StyleLabel>) {
    if labels.contains(&StyleLabel::Warm) {
        labels.retain(|&l| l != StyleLabel::Melancholy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(energy: f32, zcr: f32) -> FeatureVector {
        FeatureVector {
            energy,
            zero_crossing_rate: zcr,
        }
    }

    #[test]
    fn loud_flat_signal_keeps_melancholy() {
        // Scenario: constant 0.5 → energy 0.5, zcr 0.
        let labels = classify(&features(0.5, 0.0), &MoodConfig::default());
        assert_eq!(
            labels,
            [
                StyleLabel::Passionate,
                StyleLabel::Sunny,
                StyleLabel::Melancholy
            ]
        );
    }

    #[test]
    fn quiet_busy_signal_appends_happy() {
        // Scenario: alternating ±0.05 → energy 0.05, zcr 0.99.
        let labels = classify(&features(0.05, 0.99), &MoodConfig::default());
        assert_eq!(
            labels,
            [StyleLabel::Soothing, StyleLabel::Warm, StyleLabel::Happy]
        );
    }

    #[test]
    fn warm_suppresses_melancholy() {
        // Low energy AND low zcr would produce both; Warm wins.
        let labels = classify(&features(0.02, 0.02), &MoodConfig::default());
        assert_eq!(labels, [StyleLabel::Soothing, StyleLabel::Warm]);
        assert!(!labels.contains(&StyleLabel::Melancholy));
    }

    #[test]
    fn threshold_boundary_is_exclusive() {
        // energy == threshold falls on the calm side.
        let labels = classify(&features(0.1, 0.1), &MoodConfig::default());
        assert_eq!(labels, [StyleLabel::Soothing, StyleLabel::Warm]);
    }

    #[test]
    fn classification_is_deterministic() {
        let config = MoodConfig::default();
        for &(e, z) in &[(0.0, 0.0), (0.05, 0.99), (0.5, 0.0), (0.9, 0.9)] {
            let a = classify(&features(e, z), &config);
            let b = classify(&features(e, z), &config);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn forbidden_pair_never_cooccurs() {
        let config = MoodConfig::default();
        for e in 0..=20 {
            for z in 0..=20 {
                let labels = classify(&features(e as f32 / 20.0, z as f32 / 20.0), &config);
                assert!(
                    !(labels.contains(&StyleLabel::Warm)
                        && labels.contains(&StyleLabel::Melancholy)),
                    "Warm+Melancholy at energy={e}, zcr={z}"
                );
                assert!(labels.len() == 2 || labels.len() == 3);
            }
        }
    }
}
