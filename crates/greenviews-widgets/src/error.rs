//! Error types for greenviews-widgets.

use thiserror::Error;

/// Errors raised while reading or decoding a bundled asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// No asset with this name exists in the store.
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// The name is empty or escapes the asset root.
    #[error("Invalid asset name: {0:?}")]
    InvalidName(String),

    /// Reading the asset failed.
    #[error("IO error reading asset '{name}': {source}")]
    Io {
        /// Asset name
        name: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The bytes are not a decodable image.
    #[error("Failed to decode asset '{name}': {source}")]
    Decode {
        /// Asset name
        name: String,
        /// Underlying error
        source: image::ImageError,
    },

    /// The image decoded to zero pixels.
    #[error("Asset '{0}' decoded to an empty image")]
    Empty(String),
}

/// Errors raised while loading or validating a switch theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Reading the theme file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML syntax or shape error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML syntax or shape error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is not one of yaml, yml, toml.
    #[error("Unsupported theme format: {0}")]
    UnsupportedFormat(String),

    /// A field parsed but holds an unusable value.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },
}
