use serde::{Deserialize, Serialize};

use crate::mood::AffectClass;

/// Couleur RGBA. Canaux entiers [0,255], alpha flottant [0.0,1.0]
/// (le rendu applique la couleur en surimpression translucide).
///
/// # Example
/// ```
/// use sy_core::palette::Rgba;
/// let red = Rgba::new(255, 0, 0, 0.2);
/// assert_eq!(red.r, 255);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha, in [0.0, 1.0].
    pub a: f32,
}

impl Rgba {
    /// Construit une couleur RGBA.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Palette positive : rouge, orange, jaune (alpha 0.2).
pub const POSITIVE_PALETTE: [Rgba; 3] = [
    Rgba::new(255, 0, 0, 0.2),
    Rgba::new(255, 165, 0, 0.2),
    Rgba::new(255, 255, 0, 0.2),
];

/// Palette négative : bleu, gris, noir (alpha 0.2).
pub const NEGATIVE_PALETTE: [Rgba; 3] = [
    Rgba::new(0, 0, 255, 0.2),
    Rgba::new(128, 128, 128, 0.2),
    Rgba::new(0, 0, 0, 0.2),
];

/// La palette 3 entrées associée à une classe d'affect.
///
/// # Example
/// ```
/// use sy_core::mood::AffectClass;
/// use sy_core::palette::palette_for;
/// assert_eq!(palette_for(AffectClass::Positive).len(), 3);
/// ```
#[must_use]
pub fn palette_for(affect: AffectClass) -> &'static [Rgba; 3] {
    match affect {
        AffectClass::Positive => &POSITIVE_PALETTE,
        AffectClass::Negative => &NEGATIVE_PALETTE,
    }
}
