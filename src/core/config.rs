use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::codec::Codec;
use crate::encoders::algorithms::{RegistryError, find_closest_codec};

/// Global settings for base-rfc.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Codec used by the CLI when neither `--encode` nor `--decode` names one.
    #[serde(default)]
    pub default_codec: Option<String>,
}

/// Named codec configurations loaded from TOML.
///
/// ```toml
/// [codecs.base64url]
/// kind = "base64"
/// alphabet = "url_safe"
/// padding = "omitted"
/// ```
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CodecRegistry {
    /// Map of codec names to their configurations
    #[serde(default)]
    pub codecs: HashMap<String, Codec>,
    #[serde(default)]
    pub settings: Settings,
}

impl CodecRegistry {
    /// Parses codec configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, RegistryError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the codecs bundled with the library.
    pub fn load_default() -> Result<Self, RegistryError> {
        Self::from_toml(include_str!("../../codecs.toml"))
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Loads the built-in codecs, then applies overrides from
    /// `<config dir>/base-rfc/codecs.toml` and `./codecs.toml`, in that order.
    ///
    /// Later files replace earlier entries with the same name. An override
    /// file that fails to load is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, RegistryError> {
        let mut registry = Self::load_default()?;

        let user_path = dirs::config_dir().map(|dir| dir.join("base-rfc").join("codecs.toml"));
        let local_path = Path::new("codecs.toml").to_path_buf();

        for path in user_path.into_iter().chain(std::iter::once(local_path)) {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(overrides) => {
                    tracing::debug!(path = %path.display(), codecs = overrides.codecs.len(), "merging codec overrides");
                    registry.merge(overrides);
                }
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping codec overrides");
                }
            }
        }

        Ok(registry)
    }

    /// Merges another registry into this one.
    ///
    /// Codecs from `other` replace codecs with the same name in `self`.
    pub fn merge(&mut self, other: CodecRegistry) {
        self.codecs.extend(other.codecs);
        if other.settings.default_codec.is_some() {
            self.settings.default_codec = other.settings.default_codec;
        }
    }

    pub fn get(&self, name: &str) -> Option<&Codec> {
        self.codecs.get(name)
    }

    /// Looks a codec up by name, suggesting the closest name on a miss.
    pub fn codec(&self, name: &str) -> Result<Codec, RegistryError> {
        self.get(name).copied().ok_or_else(|| RegistryError::CodecNotFound {
            name: name.to_string(),
            suggestion: find_closest_codec(name, self.codecs.keys().map(String::as_str)),
        })
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
