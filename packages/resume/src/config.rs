//! # Builder configuration: `resume-builder.toml`
//!
//! Optional TOML file tuning the builder. The desktop launcher looks for it in
//! the user's config directory; the web build always uses the defaults.
//!
//! ## Structure
//!
//! ```toml
//! [photo]
//! max_bytes = 5242880     # largest accepted profile photo
//!
//! [preview]
//! page_width = "8.5in"    # printed page width of the preview
//! ```
//!
//! Every section and key has a default, so a missing or empty file equals
//! [`BuilderConfig::default`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    #[serde(default)]
    pub photo: PhotoConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoConfig {
    #[serde(default = "default_max_photo_bytes")]
    pub max_bytes: usize,
}

fn default_max_photo_bytes() -> usize {
    5 * 1024 * 1024
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_photo_bytes(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// CSS length used as the max width of the preview page.
    #[serde(default = "default_page_width")]
    pub page_width: String,
}

fn default_page_width() -> String {
    "8.5in".to_string()
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            page_width: default_page_width(),
        }
    }
}

impl BuilderConfig {
    pub fn with_max_photo_bytes(mut self, max_bytes: usize) -> Self {
        self.photo.max_bytes = max_bytes;
        self
    }

    pub fn with_page_width(mut self, page_width: impl Into<String>) -> Self {
        self.preview.page_width = page_width.into();
        self
    }

    pub fn filename() -> &'static str {
        "resume-builder.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
