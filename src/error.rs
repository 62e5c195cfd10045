use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Errors that can occur while exporting the drawing
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Export surface has no area ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },
    #[error("Export of {width}x{height} pixels exceeds the limit of {limit} pixels")]
    TooLarge { width: u32, height: u32, limit: u64 },
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Browser download failed: {0}")]
    Download(String),
}

/// Top-level error for anything fallible in the sketchpad
#[derive(Error, Debug)]
pub enum SketchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
