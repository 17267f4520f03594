use std::path::PathBuf;

use clap::Parser;

/// synesthe — mood-driven synesthetic music visualization.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier audio à analyser (WAV, MP3, FLAC, OGG, AAC).
    pub audio: PathBuf,

    /// Fichier de configuration TOML. Défaut : configuration embarquée.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Graine du générateur aléatoire, pour une sortie reproductible.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Nombre de formes générées (remplace la valeur de la config).
    #[arg(long)]
    pub count: Option<usize>,

    /// Écrire le payload JSON dans ce fichier plutôt que sur stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
