use thiserror::Error;

/// Why a selected photo could not become the profile picture.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhotoError {
    #[error("could not read {0}")]
    Unreadable(String),
    #[error("{0} is empty")]
    Empty(String),
    #[error("{0} is not a supported image (png, jpeg, gif, webp, svg, bmp)")]
    UnsupportedType(String),
    #[error("{name} is {size} bytes, the limit is {max}")]
    TooLarge { name: String, size: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid builder config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialise builder config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
