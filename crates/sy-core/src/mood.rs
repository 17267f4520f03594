use std::fmt;

use serde::{Deserialize, Serialize};

/// Statistiques scalaires extraites d'un buffer audio mono.
///
/// `energy` est l'amplitude absolue moyenne (proxy grossier de loudness),
/// `zero_crossing_rate` la fraction de paires adjacentes changeant de signe
/// (proxy grossier de brillance spectrale). Créé une fois par analyse,
/// consommé par le classifieur de style.
///
/// # Example
/// ```
/// use sy_core::mood::FeatureVector;
/// let f = FeatureVector { energy: 0.5, zero_crossing_rate: 0.0 };
/// assert!(f.energy >= 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct FeatureVector {
    /// Mean absolute amplitude, >= 0.
    pub energy: f32,
    /// Fraction of adjacent-sample sign changes, in [0, 1].
    pub zero_crossing_rate: f32,
}

/// Un tag d'humeur discret assigné par les règles de seuillage.
///
/// The threshold classifier only ever emits the first six variants.
/// `Joyful` and `Sad` exist so the affect vocabularies below are typed
/// rather than stringly; no reachable label set contains them.
///
/// # Example
/// ```
/// use sy_core::mood::StyleLabel;
/// assert_eq!(StyleLabel::Warm.as_str(), "Warm");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum StyleLabel {
    /// High energy, driving.
    Passionate,
    /// High energy, bright.
    Sunny,
    /// Low energy, calm.
    Soothing,
    /// Low energy, comforting.
    Warm,
    /// High zero-crossing rate.
    Happy,
    /// Low zero-crossing rate.
    Melancholy,
    /// Vocabulary-only, never emitted by the classifier.
    Joyful,
    /// Vocabulary-only, never emitted by the classifier.
    Sad,
}

impl StyleLabel {
    /// English display string. Localized rendering belongs to the
    /// presentation layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passionate => "Passionate",
            Self::Sunny => "Sunny",
            Self::Soothing => "Soothing",
            Self::Warm => "Warm",
            Self::Happy => "Happy",
            Self::Melancholy => "Melancholy",
            Self::Joyful => "Joyful",
            Self::Sad => "Sad",
        }
    }
}

impl fmt::Display for StyleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels comptant comme positifs pour la classe d'affect.
pub const POSITIVE_VOCABULARY: &[StyleLabel] = &[
    StyleLabel::Warm,
    StyleLabel::Soothing,
    StyleLabel::Passionate,
    StyleLabel::Happy,
    StyleLabel::Joyful,
];

/// Labels comptant comme négatifs pour la classe d'affect.
pub const NEGATIVE_VOCABULARY: &[StyleLabel] = &[StyleLabel::Sad, StyleLabel::Melancholy];

/// Binary emotional valence bucket used to pick a color palette.
///
/// # Example
/// ```
/// use sy_core::mood::AffectClass;
/// assert_ne!(AffectClass::Positive, AffectClass::Negative);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum AffectClass {
    /// Label set intersects the positive vocabulary.
    Positive,
    /// No positive label present.
    Negative,
}
