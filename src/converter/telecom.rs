//! XTN -> ContactPoint, one unit per HL7v2 layout.
//!
//! Both units share the result contract: `system` is `phone` once a telephone
//! slot carries a value, `value` carries the textual rendition of the number.
//! A slot holding the HL7 null counts as absent.

use crate::types::fhir::{ContactPoint, ContactPointSystem};
use crate::types::hl7v2::{XtnV24, XtnV251, value_of};

/// XTN (2.4) -> ContactPoint.
///
/// XTN.7 gates XTN.9. XTN.1 is checked afterwards and independently, and when
/// present its own text replaces whatever XTN.9 contributed.
// TODO: confirm with the integration owners whether XTN.1 and XTN.7 are
// really two slots; until then the second check overwrites the first.
pub fn xtn_to_contact_point_v24(xtn: &XtnV24) -> ContactPoint {
    let mut contact_point = ContactPoint::new();

    if value_of(&xtn.phone_number).is_some() {
        contact_point.value = value_of(&xtn.any_text);
        contact_point.system = Some(ContactPointSystem::Phone);
    }

    if let Some(formatted) = value_of(&xtn.formatted_number) {
        contact_point.value = Some(formatted);
        contact_point.system = Some(ContactPointSystem::Phone);
    }

    contact_point
}

/// XTN (2.5.1) -> ContactPoint. XTN.1 gates XTN.9.
pub fn xtn_to_contact_point_v251(xtn: &XtnV251) -> ContactPoint {
    let mut contact_point = ContactPoint::new();

    if value_of(&xtn.telephone_number).is_some() {
        contact_point.value = value_of(&xtn.any_text);
        contact_point.system = Some(ContactPointSystem::Phone);
    }

    contact_point
}
