use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{MappingError, Result};

/// HL7v2 schema versions with a registered field layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum V2Version {
    #[serde(rename = "2.4", alias = "v24", alias = "V24")]
    V24,
    #[serde(rename = "2.5.1", alias = "v251", alias = "V251")]
    V251,
}

impl V2Version {
    pub fn all() -> &'static [V2Version] {
        &[V2Version::V24, V2Version::V251]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            V2Version::V24 => "2.4",
            V2Version::V251 => "2.5.1",
        }
    }
}

impl fmt::Display for V2Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for V2Version {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "2.4" | "v24" | "V24" => Ok(V2Version::V24),
            "2.5.1" | "v251" | "V251" => Ok(V2Version::V251),
            other => Err(MappingError::UnknownVersion {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapperConfig {
    /// Versions whose mapping units get registered.
    pub versions: Vec<V2Version>,
    /// Version used when the caller does not name one (MSH-12 missing).
    pub default_version: V2Version,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            versions: V2Version::all().to_vec(),
            default_version: V2Version::V251,
        }
    }
}

impl MapperConfig {
    pub fn for_version(version: V2Version) -> Self {
        Self {
            versions: vec![version],
            default_version: version,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MapperConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.versions.is_empty() {
            return Err(MappingError::config("at least one HL7v2 version must be enabled"));
        }

        if !self.versions.contains(&self.default_version) {
            return Err(MappingError::config(format!(
                "default version {} is not among the enabled versions",
                self.default_version
            )));
        }

        Ok(())
    }

    pub fn is_enabled(&self, version: V2Version) -> bool {
        self.versions.contains(&version)
    }
}
