use thiserror::Error;

/// Errors originating from the core pipeline.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Feature extraction requires at least one sample.
    #[error("Buffer d'échantillons vide")]
    EmptyBuffer,
}
