use serde::{Deserialize, Serialize};

use crate::palette::Rgba;

/// Descripteur d'une forme animée dans le champ de visualisation.
///
/// Positions en pourcentage du viewport, la période d'animation pilote
/// le cycle flottant de la forme côté présentation.
///
/// # Example
/// ```
/// use sy_core::field::ShapeDescriptor;
/// use sy_core::palette::Rgba;
/// let s = ShapeDescriptor {
///     size_px: 42.0,
///     x_percent: 10.0,
///     y_percent: 90.0,
///     animation_period_s: 2.0,
///     color: Rgba::new(255, 0, 0, 0.2),
/// };
/// assert!(s.size_px >= 30.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ShapeDescriptor {
    /// Diameter in pixels.
    pub size_px: f32,
    /// Horizontal position, percent of viewport width.
    pub x_percent: f32,
    /// Vertical position, percent of viewport height.
    pub y_percent: f32,
    /// Animation cycle duration in seconds.
    pub animation_period_s: f32,
    /// Fill color, shared by every shape of one field.
    pub color: Rgba,
}

/// Le champ complet de formes générées pour une analyse.
///
/// Recréé intégralement à chaque analyse, jamais mis à jour
/// incrémentalement. L'ordre des formes est l'ordre de génération et
/// ne porte aucune sémantique.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct VisualizationField {
    /// Generated shapes, in generation order.
    pub shapes: Vec<ShapeDescriptor>,
}

impl VisualizationField {
    /// Nombre de formes du champ.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Vrai si le champ ne contient aucune forme.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
