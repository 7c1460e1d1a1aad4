use serde::{Deserialize, Serialize};
use std::fmt;

/// FHIR R4 `ContactPoint`.
///
/// `use` is never populated from XTN; the caller sets it from the segment
/// field the number came from (PID-13 home, PID-14 business).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<ContactPointSystem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<ContactPointUse>,
}

impl ContactPoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_use(mut self, use_: ContactPointUse) -> Self {
        self.use_ = Some(use_);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.system.is_none() && self.value.is_none() && self.use_.is_none()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContactPointSystem {
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "fax")]
    Fax,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "pager")]
    Pager,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "sms")]
    Sms,
    #[serde(rename = "other")]
    Other,
}

impl ContactPointSystem {
    pub fn code(&self) -> &'static str {
        match self {
            ContactPointSystem::Phone => "phone",
            ContactPointSystem::Fax => "fax",
            ContactPointSystem::Email => "email",
            ContactPointSystem::Pager => "pager",
            ContactPointSystem::Url => "url",
            ContactPointSystem::Sms => "sms",
            ContactPointSystem::Other => "other",
        }
    }
}

impl fmt::Display for ContactPointSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContactPointUse {
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "work")]
    Work,
    #[serde(rename = "temp")]
    Temp,
    #[serde(rename = "old")]
    Old,
    #[serde(rename = "mobile")]
    Mobile,
}
