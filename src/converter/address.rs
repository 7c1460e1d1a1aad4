use super::code_table::ADDRESS_USE;
use crate::types::fhir::Address;
use crate::types::hl7v2::{Xad, value_of};

/// XAD -> Address.
///
/// SAD.3 (dwelling number) and SAD.2 (street name) each become their own line,
/// in that order. XAD.4 lands in `district`; XAD.7 goes through table 0190.
pub fn xad_to_address(xad: &Xad) -> Address {
    let mut address = Address::new();

    if let Some(street) = &xad.street_address {
        if let Some(dwelling_number) = value_of(&street.dwelling_number) {
            address.add_line(dwelling_number);
        }
        if let Some(street_name) = value_of(&street.street_name) {
            address.add_line(street_name);
        }
    }

    address.city = value_of(&xad.city);
    address.district = value_of(&xad.state_or_province);
    address.postal_code = value_of(&xad.zip_or_postal_code);
    address.use_ = ADDRESS_USE.lookup_component(&xad.address_type);

    address
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fhir::AddressUse;
    use crate::types::hl7v2::{Primitive, Sad};

    #[test]
    fn test_street_lines_are_independent() {
        let xad = Xad::new().with_street_address(Sad::new().with_street_name("Wellington Street"));
        assert_eq!(xad_to_address(&xad).line, vec!["Wellington Street"]);

        let xad = Xad::new().with_street_address(Sad::new());
        assert!(xad_to_address(&xad).line.is_empty());
    }

    #[test]
    fn test_null_components_leave_target_unset() {
        let xad = Xad {
            city: Some(Primitive::null()),
            address_type: Some(Primitive::null()),
            ..Xad::default()
        };
        let address = xad_to_address(&xad);
        assert_eq!(address.city, None);
        assert_eq!(address.use_, None);
    }

    #[test]
    fn test_sad1_is_not_mapped() {
        let xad = Xad::new()
            .with_street_address(Sad::new().with_street_or_mailing_address("1 Trevelyan Square"))
            .with_address_type("B");
        let address = xad_to_address(&xad);
        assert!(address.line.is_empty());
        assert_eq!(address.use_, Some(AddressUse::Work));
    }
}
