use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sy_core::config::MoodConfig;

pub mod cli;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config et appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    if let Some(count) = cli.count {
        config.shape_count = count;
        config.clamp_all();
    }

    // 4. Source aléatoire : graine explicite ou entropie
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // 5. Pipeline complet (le fallback interne garantit un résultat)
    let analysis = pipeline::analyze_file(&cli.audio, &config, &mut rng);

    let tags: Vec<&str> = analysis.labels.iter().map(|l| l.as_str()).collect();
    println!("Mood: {}", tags.join(" · "));
    println!(
        "Affect: {:?} — rgba({}, {}, {}, {})",
        analysis.affect, analysis.color.r, analysis.color.g, analysis.color.b, analysis.color.a
    );
    if analysis.fallback {
        println!("(analyse indisponible, humeur par défaut)");
    }

    // 6. Payload JSON pour la couche de présentation
    let payload = serde_json::to_string_pretty(&analysis)?;
    match cli.out {
        Some(ref path) => {
            std::fs::write(path, payload)
                .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
            log::info!("Payload écrit dans {}", path.display());
        }
        None => println!("{payload}"),
    }

    Ok(())
}

/// Config TOML si fournie, sinon les valeurs par défaut embarquées.
fn resolve_config(cli: &cli::Cli) -> Result<MoodConfig> {
    match cli.config {
        Some(ref path) => sy_core::config::load_config(path),
        None => Ok(MoodConfig::default()),
    }
}
