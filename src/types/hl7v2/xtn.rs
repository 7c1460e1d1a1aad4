//! XTN - extended telecommunication number.
//!
//! The layout drifted between 2.4 and 2.5.1: in 2.4 the first component is the
//! formatted number with trailing free text and the bare number sits at XTN.7;
//! in 2.5.1 XTN.1 is the (deprecated) telephone number and XTN.7 became the
//! local number. Each version therefore gets its own composite.

use serde::{Deserialize, Serialize};

use super::Primitive;

/// XTN as laid out in HL7 v2.4.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct XtnV24 {
    /// XTN.1 `[(999)] 999-9999 [X99999][C any text]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_number: Option<Primitive>,
    /// XTN.2, HL7 table 0201.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telecommunication_use_code: Option<Primitive>,
    /// XTN.3, HL7 table 0202.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telecommunication_equipment_type: Option<Primitive>,
    /// XTN.4
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<Primitive>,
    /// XTN.5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<Primitive>,
    /// XTN.6
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_city_code: Option<Primitive>,
    /// XTN.7
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Primitive>,
    /// XTN.8
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<Primitive>,
    /// XTN.9
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any_text: Option<Primitive>,
}

impl XtnV24 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatted_number(mut self, value: impl Into<Primitive>) -> Self {
        self.formatted_number = Some(value.into());
        self
    }

    pub fn with_telecommunication_use_code(mut self, value: impl Into<Primitive>) -> Self {
        self.telecommunication_use_code = Some(value.into());
        self
    }

    pub fn with_telecommunication_equipment_type(mut self, value: impl Into<Primitive>) -> Self {
        self.telecommunication_equipment_type = Some(value.into());
        self
    }

    pub fn with_email_address(mut self, value: impl Into<Primitive>) -> Self {
        self.email_address = Some(value.into());
        self
    }

    pub fn with_phone_number(mut self, value: impl Into<Primitive>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    pub fn with_any_text(mut self, value: impl Into<Primitive>) -> Self {
        self.any_text = Some(value.into());
        self
    }
}

/// XTN as laid out in HL7 v2.5.1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct XtnV251 {
    /// XTN.1, retained for backward compatibility only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone_number: Option<Primitive>,
    /// XTN.2, HL7 table 0201.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telecommunication_use_code: Option<Primitive>,
    /// XTN.3, HL7 table 0202.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telecommunication_equipment_type: Option<Primitive>,
    /// XTN.4
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<Primitive>,
    /// XTN.5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<Primitive>,
    /// XTN.6
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_city_code: Option<Primitive>,
    /// XTN.7
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_number: Option<Primitive>,
    /// XTN.8
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<Primitive>,
    /// XTN.9
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any_text: Option<Primitive>,
    /// XTN.10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_prefix: Option<Primitive>,
    /// XTN.11
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_dial_code: Option<Primitive>,
    /// XTN.12
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unformatted_telephone_number: Option<Primitive>,
}

impl XtnV251 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_telephone_number(mut self, value: impl Into<Primitive>) -> Self {
        self.telephone_number = Some(value.into());
        self
    }

    pub fn with_telecommunication_use_code(mut self, value: impl Into<Primitive>) -> Self {
        self.telecommunication_use_code = Some(value.into());
        self
    }

    pub fn with_telecommunication_equipment_type(mut self, value: impl Into<Primitive>) -> Self {
        self.telecommunication_equipment_type = Some(value.into());
        self
    }

    pub fn with_email_address(mut self, value: impl Into<Primitive>) -> Self {
        self.email_address = Some(value.into());
        self
    }

    pub fn with_local_number(mut self, value: impl Into<Primitive>) -> Self {
        self.local_number = Some(value.into());
        self
    }

    pub fn with_any_text(mut self, value: impl Into<Primitive>) -> Self {
        self.any_text = Some(value.into());
        self
    }

    pub fn with_unformatted_telephone_number(mut self, value: impl Into<Primitive>) -> Self {
        self.unformatted_telephone_number = Some(value.into());
        self
    }
}
