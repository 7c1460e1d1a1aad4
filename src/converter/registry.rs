use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::{
    xad_to_address, xcn_to_reference_v24, xcn_to_reference_v251, xpn_to_human_name,
    xtn_to_contact_point_v24, xtn_to_contact_point_v251,
};
use crate::core::{MapperConfig, V2Version};
use crate::error::{MappingError, Result};
use crate::types::fhir::{Address, ContactPoint, HumanName, Reference};
use crate::types::hl7v2::{Xad, Xcn, Xpn, XtnV24, XtnV251};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum V2DataType {
    #[serde(rename = "XAD")]
    Xad,
    #[serde(rename = "XPN")]
    Xpn,
    #[serde(rename = "XTN")]
    Xtn,
    #[serde(rename = "XCN")]
    Xcn,
}

impl fmt::Display for V2DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            V2DataType::Xad => "XAD",
            V2DataType::Xpn => "XPN",
            V2DataType::Xtn => "XTN",
            V2DataType::Xcn => "XCN",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FhirDataType {
    Address,
    ContactPoint,
    HumanName,
    Reference,
}

impl fmt::Display for FhirDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FhirDataType::Address => "Address",
            FhirDataType::ContactPoint => "ContactPoint",
            FhirDataType::HumanName => "HumanName",
            FhirDataType::Reference => "Reference",
        };
        f.write_str(name)
    }
}

/// A source composite of any supported type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value")]
pub enum V2Composite {
    #[serde(rename = "XAD")]
    Xad(Xad),
    #[serde(rename = "XPN")]
    Xpn(Xpn),
    #[serde(rename = "XTN-2.4")]
    XtnV24(XtnV24),
    #[serde(rename = "XTN-2.5.1")]
    XtnV251(XtnV251),
    #[serde(rename = "XCN")]
    Xcn(Xcn),
}

impl V2Composite {
    pub fn data_type(&self) -> V2DataType {
        match self {
            V2Composite::Xad(_) => V2DataType::Xad,
            V2Composite::Xpn(_) => V2DataType::Xpn,
            V2Composite::XtnV24(_) | V2Composite::XtnV251(_) => V2DataType::Xtn,
            V2Composite::Xcn(_) => V2DataType::Xcn,
        }
    }

    fn describe(&self) -> String {
        match self {
            V2Composite::XtnV24(_) => "XTN (2.4)".to_string(),
            V2Composite::XtnV251(_) => "XTN (2.5.1)".to_string(),
            other => other.data_type().to_string(),
        }
    }
}

/// A mapped target data type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value")]
pub enum FhirComposite {
    Address(Address),
    ContactPoint(ContactPoint),
    HumanName(HumanName),
    Reference(Reference),
}

impl FhirComposite {
    pub fn data_type(&self) -> FhirDataType {
        match self {
            FhirComposite::Address(_) => FhirDataType::Address,
            FhirComposite::ContactPoint(_) => FhirDataType::ContactPoint,
            FhirComposite::HumanName(_) => FhirDataType::HumanName,
            FhirComposite::Reference(_) => FhirDataType::Reference,
        }
    }

    pub fn into_address(self) -> Option<Address> {
        match self {
            FhirComposite::Address(address) => Some(address),
            _ => None,
        }
    }

    pub fn into_contact_point(self) -> Option<ContactPoint> {
        match self {
            FhirComposite::ContactPoint(contact_point) => Some(contact_point),
            _ => None,
        }
    }

    pub fn into_human_name(self) -> Option<HumanName> {
        match self {
            FhirComposite::HumanName(name) => Some(name),
            _ => None,
        }
    }

    pub fn into_reference(self) -> Option<Reference> {
        match self {
            FhirComposite::Reference(reference) => Some(reference),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MappingKey {
    pub source: V2DataType,
    pub target: FhirDataType,
    pub version: V2Version,
}

impl MappingKey {
    pub fn new(source: V2DataType, target: FhirDataType, version: V2Version) -> Self {
        Self {
            source,
            target,
            version,
        }
    }
}

impl fmt::Display for MappingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (v{})", self.source, self.target, self.version)
    }
}

pub type MappingFn = fn(&V2Composite) -> Result<FhirComposite>;

fn map_xad(source: &V2Composite) -> Result<FhirComposite> {
    match source {
        V2Composite::Xad(xad) => Ok(FhirComposite::Address(xad_to_address(xad))),
        other => Err(MappingError::source_mismatch("XAD", other.describe())),
    }
}

fn map_xpn(source: &V2Composite) -> Result<FhirComposite> {
    match source {
        V2Composite::Xpn(xpn) => Ok(FhirComposite::HumanName(xpn_to_human_name(xpn))),
        other => Err(MappingError::source_mismatch("XPN", other.describe())),
    }
}

fn map_xtn_v24(source: &V2Composite) -> Result<FhirComposite> {
    match source {
        V2Composite::XtnV24(xtn) => Ok(FhirComposite::ContactPoint(xtn_to_contact_point_v24(xtn))),
        other => Err(MappingError::source_mismatch("XTN (2.4)", other.describe())),
    }
}

fn map_xtn_v251(source: &V2Composite) -> Result<FhirComposite> {
    match source {
        V2Composite::XtnV251(xtn) => {
            Ok(FhirComposite::ContactPoint(xtn_to_contact_point_v251(xtn)))
        }
        other => Err(MappingError::source_mismatch("XTN (2.5.1)", other.describe())),
    }
}

fn map_xcn_v24(source: &V2Composite) -> Result<FhirComposite> {
    match source {
        V2Composite::Xcn(xcn) => Ok(FhirComposite::Reference(xcn_to_reference_v24(xcn))),
        other => Err(MappingError::source_mismatch("XCN", other.describe())),
    }
}

fn map_xcn_v251(source: &V2Composite) -> Result<FhirComposite> {
    match source {
        V2Composite::Xcn(xcn) => Ok(FhirComposite::Reference(xcn_to_reference_v251(xcn))),
        other => Err(MappingError::source_mismatch("XCN", other.describe())),
    }
}

fn units_for(version: V2Version) -> [(MappingKey, MappingFn); 4] {
    let key = |source, target| MappingKey::new(source, target, version);
    match version {
        V2Version::V24 => [
            (key(V2DataType::Xad, FhirDataType::Address), map_xad as MappingFn),
            (key(V2DataType::Xpn, FhirDataType::HumanName), map_xpn as MappingFn),
            (key(V2DataType::Xtn, FhirDataType::ContactPoint), map_xtn_v24 as MappingFn),
            (key(V2DataType::Xcn, FhirDataType::Reference), map_xcn_v24 as MappingFn),
        ],
        V2Version::V251 => [
            (key(V2DataType::Xad, FhirDataType::Address), map_xad as MappingFn),
            (key(V2DataType::Xpn, FhirDataType::HumanName), map_xpn as MappingFn),
            (key(V2DataType::Xtn, FhirDataType::ContactPoint), map_xtn_v251 as MappingFn),
            (key(V2DataType::Xcn, FhirDataType::Reference), map_xcn_v251 as MappingFn),
        ],
    }
}

/// Lookup of mapping units by (source type, target type, version).
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct MappingRegistry {
    units: HashMap<MappingKey, MappingFn>,
    default_version: V2Version,
}

impl MappingRegistry {
    pub fn new() -> Self {
        Self::build(&MapperConfig::default())
    }

    pub fn from_config(config: &MapperConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &MapperConfig) -> Self {
        let units: HashMap<MappingKey, MappingFn> = config
            .versions
            .iter()
            .flat_map(|version| units_for(*version))
            .collect();

        tracing::debug!(
            units = units.len(),
            versions = ?config.versions,
            "Built HL7v2 -> FHIR mapping registry"
        );

        Self {
            units,
            default_version: config.default_version,
        }
    }

    pub fn default_version(&self) -> V2Version {
        self.default_version
    }

    pub fn lookup(&self, key: &MappingKey) -> Option<MappingFn> {
        self.units.get(key).copied()
    }

    pub fn contains(&self, key: &MappingKey) -> bool {
        self.units.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &MappingKey> {
        self.units.keys()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn map(
        &self,
        version: V2Version,
        target: FhirDataType,
        source: &V2Composite,
    ) -> Result<FhirComposite> {
        let key = MappingKey::new(source.data_type(), target, version);

        let Some(unit) = self.lookup(&key) else {
            tracing::warn!(%key, "No mapping unit registered");
            return Err(MappingError::UnsupportedMapping {
                source_type: key.source,
                target_type: key.target,
                version: key.version,
            });
        };

        tracing::trace!(%key, "Mapping composite");
        unit(source)
    }

    pub fn map_default(&self, target: FhirDataType, source: &V2Composite) -> Result<FhirComposite> {
        self.map(self.default_version, target, source)
    }
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
