use octofhir_hl7v2_fhir::*;

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn create_test_address() -> Xad {
    Xad::new()
        .with_street_address(
            Sad::new()
                .with_dwelling_number("Flat 3")
                .with_street_name("22 Park Row"),
        )
        .with_city("Leeds")
        .with_state_or_province("West Yorkshire")
        .with_zip_or_postal_code("LS1 5JL")
        .with_country("GBR")
        .with_address_type("H")
}

#[allow(dead_code)]
pub fn create_test_name() -> Xpn {
    Xpn::new()
        .with_family_name(FamilyName::surname("Smith"))
        .with_given_name("Jane")
        .with_prefix("Mrs")
}

#[allow(dead_code)]
pub fn create_test_practitioner() -> Xcn {
    Xcn::new()
        .with_id_number("C1234567")
        .with_family_name(FamilyName::surname("Jones"))
        .with_given_name("Alan")
        .with_prefix("Dr")
        .with_assigning_authority(HierarchicDesignator::namespace("GMC"))
}

#[allow(dead_code)]
pub fn create_test_phone_v24() -> XtnV24 {
    XtnV24::new()
        .with_phone_number("2223333")
        .with_any_text("0113 222 3333")
}

#[allow(dead_code)]
pub fn create_test_phone_v251() -> XtnV251 {
    XtnV251::new()
        .with_telephone_number("01132223333")
        .with_any_text("0113 222 3333")
}
