use serde::{Deserialize, Serialize};

use super::Primitive;

/// FN - family name, the first component of XPN and the second of XCN.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FamilyName {
    /// FN.1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<Primitive>,
    /// FN.2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_surname_prefix: Option<Primitive>,
    /// FN.3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_surname: Option<Primitive>,
}

impl FamilyName {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surname(value: impl Into<Primitive>) -> Self {
        Self {
            surname: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn with_own_surname_prefix(mut self, value: impl Into<Primitive>) -> Self {
        self.own_surname_prefix = Some(value.into());
        self
    }

    pub fn with_own_surname(mut self, value: impl Into<Primitive>) -> Self {
        self.own_surname = Some(value.into());
        self
    }
}

/// XPN - extended person name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Xpn {
    /// XPN.1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<FamilyName>,
    /// XPN.2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<Primitive>,
    /// XPN.3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_and_further_given_names: Option<Primitive>,
    /// XPN.4
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<Primitive>,
    /// XPN.5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Primitive>,
    /// XPN.7, HL7 table 0200.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_type_code: Option<Primitive>,
}

impl Xpn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family_name(mut self, family_name: FamilyName) -> Self {
        self.family_name = Some(family_name);
        self
    }

    pub fn with_given_name(mut self, value: impl Into<Primitive>) -> Self {
        self.given_name = Some(value.into());
        self
    }

    pub fn with_second_and_further_given_names(mut self, value: impl Into<Primitive>) -> Self {
        self.second_and_further_given_names = Some(value.into());
        self
    }

    pub fn with_suffix(mut self, value: impl Into<Primitive>) -> Self {
        self.suffix = Some(value.into());
        self
    }

    pub fn with_prefix(mut self, value: impl Into<Primitive>) -> Self {
        self.prefix = Some(value.into());
        self
    }

    pub fn with_name_type_code(mut self, value: impl Into<Primitive>) -> Self {
        self.name_type_code = Some(value.into());
        self
    }
}
