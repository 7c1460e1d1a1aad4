use serde::{Deserialize, Serialize};
use std::fmt;

/// FHIR R4 `HumanName`, restricted to the elements populated from XPN.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HumanName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefix: Vec<String>,
}

impl HumanName {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_given(&mut self, given: impl Into<String>) {
        self.given.push(given.into());
    }

    pub fn add_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix.push(prefix.into());
    }

    pub fn is_empty(&self) -> bool {
        self.family.is_none() && self.given.is_empty() && self.prefix.is_empty()
    }
}

impl fmt::Display for HumanName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self
            .prefix
            .iter()
            .chain(self.given.iter())
            .chain(self.family.iter())
            .map(String::as_str)
            .collect();
        f.write_str(&parts.join(" "))
    }
}
