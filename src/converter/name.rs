use crate::types::fhir::HumanName;
use crate::types::hl7v2::{Xpn, value_of};

/// XPN -> HumanName.
///
/// XPN.2 is taken whole as the single given name; XPN.1 contributes only its
/// surname (FN.1).
pub fn xpn_to_human_name(xpn: &Xpn) -> HumanName {
    let mut name = HumanName::new();

    if let Some(given) = value_of(&xpn.given_name) {
        name.add_given(given);
    }

    if let Some(family_name) = &xpn.family_name {
        name.family = value_of(&family_name.surname);
    }

    if let Some(prefix) = value_of(&xpn.prefix) {
        name.add_prefix(prefix);
    }

    name
}
