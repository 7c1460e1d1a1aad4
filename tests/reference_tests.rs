mod common;

use common::*;
use octofhir_hl7v2_fhir::*;
use url::Url;

#[test]
fn test_gmc_practitioner() {
    let reference = xcn_to_reference_v251(&create_test_practitioner());

    assert_eq!(reference.display.as_deref(), Some("Dr Alan Jones"));
    assert_eq!(reference.identifier.value.as_deref(), Some("C1234567"));
    assert_eq!(
        reference.identifier.system,
        Some(Url::parse("https://fhir.hl7.org.uk/Id/gmc-number").unwrap())
    );
}

#[test]
fn test_gmp_practitioner() {
    let xcn = Xcn::new()
        .with_id_number("G1234567")
        .with_assigning_authority(HierarchicDesignator::namespace("GMP"));

    let reference = xcn_to_reference_v24(&xcn);

    assert_eq!(
        reference.identifier.system.as_ref().map(Url::as_str),
        Some("https://fhir.hl7.org.uk/Id/gmp-number")
    );
}

#[test]
fn test_unknown_authority_leaves_system_unset() {
    let xcn = Xcn::new()
        .with_id_number("123")
        .with_assigning_authority(HierarchicDesignator::namespace("NHS"));

    let reference = xcn_to_reference_v251(&xcn);

    assert_eq!(reference.identifier.system, None);
    assert_eq!(reference.identifier.value.as_deref(), Some("123"));
}

#[test]
fn test_display_skips_missing_parts() {
    let xcn = Xcn::new().with_family_name(FamilyName::surname("Jones"));

    assert_eq!(xcn_to_reference_v24(&xcn).display.as_deref(), Some("Jones"));
    assert_eq!(xcn_to_reference_v251(&xcn).display.as_deref(), Some("Jones"));
}

#[test]
fn test_empty_display_differs_by_version() {
    let xcn = Xcn::new().with_id_number("C1234567");

    assert_eq!(xcn_to_reference_v24(&xcn).display.as_deref(), Some(""));
    assert_eq!(xcn_to_reference_v251(&xcn).display, None);
}

#[test]
fn test_reference_fhir_json() {
    let json = serde_json::to_value(xcn_to_reference_v251(&create_test_practitioner())).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "identifier": {
                "system": "https://fhir.hl7.org.uk/Id/gmc-number",
                "value": "C1234567"
            },
            "display": "Dr Alan Jones"
        })
    );

    let empty = serde_json::to_value(xcn_to_reference_v251(&Xcn::new())).unwrap();
    assert_eq!(empty, serde_json::json!({}));
}
