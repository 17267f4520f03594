//! Configuration, types, and shared structures for synesthe.
//!
//! This crate contains all shared types and configuration logic used
//! across the synesthe workspace. It performs no I/O besides reading
//! the TOML configuration file.

pub mod config;
pub mod error;
pub mod field;
pub mod mood;
pub mod palette;

pub use config::MoodConfig;
pub use error::CoreError;
pub use field::{ShapeDescriptor, VisualizationField};
pub use mood::{AffectClass, FeatureVector, StyleLabel};
pub use palette::Rgba;
