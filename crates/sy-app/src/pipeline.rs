use std::path::Path;

use rand::Rng;
use serde::Serialize;

use sy_audio::decode::decode_file;
use sy_audio::features::extract_features;
use sy_core::config::MoodConfig;
use sy_core::error::CoreError;
use sy_core::field::VisualizationField;
use sy_core::mood::{AffectClass, StyleLabel};
use sy_core::palette::Rgba;
use sy_field::generate_field;
use sy_style::affect::map_affect;
use sy_style::classifier::{classify, fallback_labels};

/// Résultat complet d'une analyse, prêt pour la couche de présentation.
///
/// `fallback` indique que le décodage ou l'extraction a échoué et que
/// les labels par défaut ont été substitués ; la visualisation est
/// générée dans tous les cas.
#[derive(Debug, Serialize)]
pub struct Analysis {
    /// Mood labels, insertion order.
    pub labels: Vec<StyleLabel>,
    /// Resolved affect class.
    pub affect: AffectClass,
    /// Overlay color shared by the whole field.
    pub color: Rgba,
    /// Generated shape field.
    pub field: VisualizationField,
    /// True when the default label set was substituted.
    pub fallback: bool,
}

/// Exécute le cœur du pipeline sur un buffer déjà décodé.
///
/// Pur vis-à-vis de tout état sauf la source aléatoire ; chaque appel
/// produit des instances fraîches, rien n'est partagé entre analyses.
///
/// # Errors
/// Returns [`CoreError::EmptyBuffer`] on an empty buffer. Callers that
/// need the fallback behavior use [`analyze_file`].
pub fn analyze_samples<R: Rng>(
    samples: &[f32],
    config: &MoodConfig,
    rng: &mut R,
) -> Result<Analysis, CoreError> {
    let features = extract_features(samples)?;
    let labels = classify(&features, config);
    Ok(finish(labels, false, config, rng))
}

/// Décode un fichier audio et exécute le pipeline complet.
///
/// L'échec du décodage est un événement terminal pour la requête en
/// cours : les labels par défaut `[Warm, Soothing]` sont substitués et
/// le pipeline continue normalement, de sorte que la visualisation
/// n'est jamais absente.
pub fn analyze_file<R: Rng>(path: &Path, config: &MoodConfig, rng: &mut R) -> Analysis {
    let labels = match decode_file(path) {
        Ok((samples, _sample_rate)) => match extract_features(&samples) {
            Ok(features) => Some(classify(&features, config)),
            Err(e) => {
                log::warn!("Analyse impossible ({e}), humeur par défaut");
                None
            }
        },
        Err(e) => {
            log::warn!("Décodage impossible ({e:#}), humeur par défaut");
            None
        }
    };

    match labels {
        Some(labels) => finish(labels, false, config, rng),
        None => finish(fallback_labels(), true, config, rng),
    }
}

fn finish<R: Rng>(
    labels: Vec<StyleLabel>,
    fallback: bool,
    config: &MoodConfig,
    rng: &mut R,
) -> Analysis {
    let (affect, color) = map_affect(&labels, rng);
    let field = generate_field(color, config, rng);
    Analysis {
        labels,
        affect,
        color,
        field,
        fallback,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn loud_flat_buffer_end_to_end() {
        let samples = vec![0.5f32; 100];
        let mut rng = StdRng::seed_from_u64(5);
        let analysis = analyze_samples(&samples, &MoodConfig::default(), &mut rng)
            .expect("non-empty buffer");

        assert_eq!(
            analysis.labels,
            [
                StyleLabel::Passionate,
                StyleLabel::Sunny,
                StyleLabel::Melancholy
            ]
        );
        assert_eq!(analysis.affect, AffectClass::Positive);
        assert!(!analysis.fallback);
        assert_eq!(analysis.field.len(), 30);
    }

    #[test]
    fn quiet_alternating_buffer_end_to_end() {
        let samples: Vec<f32> = (0..100)
            .map(|i| if i % 2 == 0 { 0.05 } else { -0.05 })
            .collect();
        let mut rng = StdRng::seed_from_u64(5);
        let analysis = analyze_samples(&samples, &MoodConfig::default(), &mut rng)
            .expect("non-empty buffer");

        assert_eq!(
            analysis.labels,
            [StyleLabel::Soothing, StyleLabel::Warm, StyleLabel::Happy]
        );
        assert_eq!(analysis.affect, AffectClass::Positive);
    }

    #[test]
    fn decode_failure_substitutes_the_default_mood() {
        let mut rng = StdRng::seed_from_u64(5);
        let analysis = analyze_file(
            Path::new("/nonexistent/track.mp3"),
            &MoodConfig::default(),
            &mut rng,
        );

        assert!(analysis.fallback);
        assert_eq!(analysis.labels, [StyleLabel::Warm, StyleLabel::Soothing]);
        assert_eq!(analysis.affect, AffectClass::Positive);
        // The visualization still renders in full.
        assert_eq!(analysis.field.len(), 30);
        for shape in &analysis.field.shapes {
            assert_eq!(shape.color, analysis.color);
        }
    }

    #[test]
    fn empty_buffer_is_a_hard_error_for_the_pure_entry_point() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(analyze_samples(&[], &MoodConfig::default(), &mut rng).is_err());
    }

    #[test]
    fn payload_serializes_to_json() {
        let mut rng = StdRng::seed_from_u64(5);
        let analysis = analyze_samples(&[0.5; 10], &MoodConfig::default(), &mut rng)
            .expect("non-empty buffer");
        let json = serde_json::to_string(&analysis).expect("serializable");
        assert!(json.contains("\"Passionate\""));
        assert!(json.contains("\"shapes\""));
    }
}
