use serde::{Deserialize, Serialize};

use super::{FamilyName, Primitive};

/// HD - hierarchic designator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicDesignator {
    /// HD.1, HL7 table 0300.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_id: Option<Primitive>,
    /// HD.2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universal_id: Option<Primitive>,
    /// HD.3, HL7 table 0301.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universal_id_type: Option<Primitive>,
}

impl HierarchicDesignator {
    pub fn namespace(value: impl Into<Primitive>) -> Self {
        Self {
            namespace_id: Some(value.into()),
            ..Self::default()
        }
    }
}

/// XCN - extended composite ID number and name for persons.
///
/// The components mapped here sit at the same positions in 2.4 and 2.5.1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Xcn {
    /// XCN.1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<Primitive>,
    /// XCN.2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<FamilyName>,
    /// XCN.3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<Primitive>,
    /// XCN.4
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_and_further_given_names: Option<Primitive>,
    /// XCN.5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<Primitive>,
    /// XCN.6
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Primitive>,
    /// XCN.9
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigning_authority: Option<HierarchicDesignator>,
}

impl Xcn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_number(mut self, value: impl Into<Primitive>) -> Self {
        self.id_number = Some(value.into());
        self
    }

    pub fn with_family_name(mut self, family_name: FamilyName) -> Self {
        self.family_name = Some(family_name);
        self
    }

    pub fn with_given_name(mut self, value: impl Into<Primitive>) -> Self {
        self.given_name = Some(value.into());
        self
    }

    pub fn with_prefix(mut self, value: impl Into<Primitive>) -> Self {
        self.prefix = Some(value.into());
        self
    }

    pub fn with_assigning_authority(mut self, authority: HierarchicDesignator) -> Self {
        self.assigning_authority = Some(authority);
        self
    }
}
