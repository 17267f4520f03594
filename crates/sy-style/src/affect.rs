use rand::Rng;

use sy_core::mood::{AffectClass, POSITIVE_VOCABULARY, StyleLabel};
use sy_core::palette::{Rgba, palette_for};

/// Résout la classe d'affect d'un jeu de labels et tire sa couleur.
///
/// Un label du vocabulaire positif suffit pour Positive ; le positif
/// prime sur tout recouvrement avec le vocabulaire négatif. La couleur
/// est tirée uniformément parmi les 3 entrées de la palette de la
/// classe résolue — un seul tirage aléatoire par appel.
///
/// Conséquence structurelle du classifieur : chaque jeu de labels
/// atteignable contient au moins un de Soothing/Warm/Passionate, donc
/// la branche Negative est inatteignable sous les seuils par défaut.
/// C'est un comportement préservé délibérément, pas corrigé ici.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sy_core::mood::{AffectClass, StyleLabel};
/// use sy_style::affect::map_affect;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let (affect, _color) = map_affect(&[StyleLabel::Warm], &mut rng);
/// assert_eq!(affect, AffectClass::Positive);
/// ```
pub fn map_affect<R: Rng>(labels: &[StyleLabel], rng: &mut R) -> (AffectClass, Rgba) {
    let affect = resolve_class(labels);
    let palette = palette_for(affect);
    let color = palette[rng.gen_range(0..palette.len())];
    (affect, color)
}

/// Positive ssi les labels recoupent le vocabulaire positif.
#[must_use]
pub fn resolve_class(labels: &[StyleLabel]) -> AffectClass {
    if labels.iter().any(|l| POSITIVE_VOCABULARY.contains(l)) {
        AffectClass::Positive
    } else {
        AffectClass::Negative
    }
}
