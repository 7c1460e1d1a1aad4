//! XCN -> Reference, one unit per HL7v2 version.
//!
//! The display name is prefix, given name and surname joined by spaces. 2.4
//! always writes it, even when nothing contributed; 2.5.1 writes it only when
//! it is non-empty.

use url::Url;

use super::code_table::ASSIGNING_AUTHORITY_SYSTEM;
use crate::types::fhir::{Identifier, Reference};
use crate::types::hl7v2::{Xcn, value_of};

fn display_name(xcn: &Xcn) -> String {
    let mut name = String::new();

    if let Some(prefix) = value_of(&xcn.prefix) {
        name.push_str(&prefix);
    }
    if let Some(given) = value_of(&xcn.given_name) {
        name.push(' ');
        name.push_str(&given);
    }
    if let Some(surname) = xcn
        .family_name
        .as_ref()
        .and_then(|family_name| value_of(&family_name.surname))
    {
        name.push(' ');
        name.push_str(&surname);
    }

    name.trim().to_string()
}

fn identifier(xcn: &Xcn) -> Identifier {
    Identifier {
        system: xcn
            .assigning_authority
            .as_ref()
            .and_then(|authority| ASSIGNING_AUTHORITY_SYSTEM.lookup_component(&authority.namespace_id))
            .and_then(|system| Url::parse(system).ok()),
        value: value_of(&xcn.id_number),
    }
}

/// XCN (2.4) -> Reference.
pub fn xcn_to_reference_v24(xcn: &Xcn) -> Reference {
    Reference {
        identifier: identifier(xcn),
        display: Some(display_name(xcn)),
    }
}

/// XCN (2.5.1) -> Reference.
pub fn xcn_to_reference_v251(xcn: &Xcn) -> Reference {
    let name = display_name(xcn);
    Reference {
        identifier: identifier(xcn),
        display: (!name.is_empty()).then_some(name),
    }
}
