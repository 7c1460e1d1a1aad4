use serde::{Deserialize, Serialize};

use super::Primitive;

/// SAD - street address, the first component of XAD.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sad {
    /// SAD.1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_or_mailing_address: Option<Primitive>,
    /// SAD.2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_name: Option<Primitive>,
    /// SAD.3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dwelling_number: Option<Primitive>,
}

impl Sad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_street_or_mailing_address(mut self, value: impl Into<Primitive>) -> Self {
        self.street_or_mailing_address = Some(value.into());
        self
    }

    pub fn with_street_name(mut self, value: impl Into<Primitive>) -> Self {
        self.street_name = Some(value.into());
        self
    }

    pub fn with_dwelling_number(mut self, value: impl Into<Primitive>) -> Self {
        self.dwelling_number = Some(value.into());
        self
    }
}

/// XAD - extended address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Xad {
    /// XAD.1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<Sad>,
    /// XAD.2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_designation: Option<Primitive>,
    /// XAD.3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<Primitive>,
    /// XAD.4
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_or_province: Option<Primitive>,
    /// XAD.5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_or_postal_code: Option<Primitive>,
    /// XAD.6
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Primitive>,
    /// XAD.7, HL7 table 0190.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_type: Option<Primitive>,
}

impl Xad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_street_address(mut self, street_address: Sad) -> Self {
        self.street_address = Some(street_address);
        self
    }

    pub fn with_other_designation(mut self, value: impl Into<Primitive>) -> Self {
        self.other_designation = Some(value.into());
        self
    }

    pub fn with_city(mut self, value: impl Into<Primitive>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn with_state_or_province(mut self, value: impl Into<Primitive>) -> Self {
        self.state_or_province = Some(value.into());
        self
    }

    pub fn with_zip_or_postal_code(mut self, value: impl Into<Primitive>) -> Self {
        self.zip_or_postal_code = Some(value.into());
        self
    }

    pub fn with_country(mut self, value: impl Into<Primitive>) -> Self {
        self.country = Some(value.into());
        self
    }

    pub fn with_address_type(mut self, value: impl Into<Primitive>) -> Self {
        self.address_type = Some(value.into());
        self
    }
}
