use rand::Rng;

use sy_core::config::MoodConfig;
use sy_core::field::{ShapeDescriptor, VisualizationField};
use sy_core::palette::Rgba;

/// Génère un champ de formes animées, toutes de la couleur d'affect.
///
/// Chaque descripteur est échantillonné indépendamment : taille dans
/// `[size_min_px, size_max_px)`, position dans `[0, 100)` pourcent du
/// viewport, période d'animation dans `[period_min_s, period_max_s)`,
/// le tout uniforme. Le champ retourné remplace intégralement le
/// précédent ; aucune mise à jour incrémentale.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sy_core::config::MoodConfig;
/// use sy_core::palette::Rgba;
/// use sy_field::generate_field;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let color = Rgba::new(255, 165, 0, 0.2);
/// let field = generate_field(color, &MoodConfig::default(), &mut rng);
/// assert_eq!(field.len(), 30);
/// ```
#[must_use]
pub fn generate_field<R: Rng>(
    color: Rgba,
    config: &MoodConfig,
    rng: &mut R,
) -> VisualizationField {
    let shapes = (0..config.shape_count)
        .map(|_| ShapeDescriptor {
            size_px: rng.gen_range(config.size_min_px..config.size_max_px),
            x_percent: rng.gen_range(0.0..100.0),
            y_percent: rng.gen_range(0.0..100.0),
            animation_period_s: rng.gen_range(config.period_min_s..config.period_max_s),
            color,
        })
        .collect();

    VisualizationField { shapes }
}
