use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration complète du pipeline d'analyse et de génération.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine ;
/// les seuils 0.1 sont des constantes empiriques héritées, traitées
/// comme configuration et non comme valeurs dérivées.
///
/// # Example
/// ```
/// use sy_core::config::MoodConfig;
/// let config = MoodConfig::default();
/// assert_eq!(config.shape_count, 30);
/// assert!((config.energy_threshold - 0.1).abs() < f32::EPSILON);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MoodConfig {
    // === Analyse ===
    /// Seuil d'énergie séparant les labels Passionate/Sunny de Soothing/Warm.
    pub energy_threshold: f32,
    /// Seuil de zero-crossing rate séparant Happy de Melancholy.
    pub zcr_threshold: f32,

    // === Champ de visualisation ===
    /// Nombre de formes générées par analyse.
    pub shape_count: usize,
    /// Taille minimale d'une forme en pixels (borne incluse).
    pub size_min_px: f32,
    /// Taille maximale d'une forme en pixels (borne exclue).
    pub size_max_px: f32,
    /// Période d'animation minimale en secondes (borne incluse).
    pub period_min_s: f32,
    /// Période d'animation maximale en secondes (borne exclue).
    pub period_max_s: f32,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            energy_threshold: 0.1,
            zcr_threshold: 0.1,
            shape_count: 30,
            size_min_px: 30.0,
            size_max_px: 80.0,
            period_min_s: 1.0,
            period_max_s: 3.0,
        }
    }
}

impl MoodConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.energy_threshold = self.energy_threshold.clamp(0.0, 1.0);
        self.zcr_threshold = self.zcr_threshold.clamp(0.0, 1.0);
        self.shape_count = self.shape_count.min(10_000);
        // Sampling ranges must stay non-empty: max is pulled strictly above min.
        self.size_min_px = self.size_min_px.clamp(1.0, 1000.0);
        self.size_max_px = self.size_max_px.clamp(self.size_min_px + 1.0, 2000.0);
        self.period_min_s = self.period_min_s.clamp(0.1, 60.0);
        self.period_max_s = self.period_max_s.clamp(self.period_min_s + 0.1, 120.0);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    analysis: Option<AnalysisSection>,
    field: Option<FieldSection>,
}

/// Analysis section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct AnalysisSection {
    energy_threshold: Option<f32>,
    zcr_threshold: Option<f32>,
}

/// Field section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct FieldSection {
    shape_count: Option<usize>,
    size_min_px: Option<f32>,
    size_max_px: Option<f32>,
    period_min_s: Option<f32>,
    period_max_s: Option<f32>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use sy_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<MoodConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = MoodConfig::default();

    if let Some(a) = file.analysis {
        if let Some(v) = a.energy_threshold {
            config.energy_threshold = v;
        }
        if let Some(v) = a.zcr_threshold {
            config.zcr_threshold = v;
        }
    }

    if let Some(f) = file.field {
        if let Some(v) = f.shape_count {
            config.shape_count = v;
        }
        if let Some(v) = f.size_min_px {
            config.size_min_px = v;
        }
        if let Some(v) = f.size_max_px {
            config.size_max_px = v;
        }
        if let Some(v) = f.period_min_s {
            config.period_min_s = v;
        }
        if let Some(v) = f.period_max_s {
            config.period_max_s = v;
        }
    }

    config.clamp_all();
    Ok(config)
}
