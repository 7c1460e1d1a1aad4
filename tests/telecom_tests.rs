mod common;

use common::*;
use octofhir_hl7v2_fhir::*;

#[test]
fn test_v24_phone_number_copies_any_text() {
    let contact_point = xtn_to_contact_point_v24(&create_test_phone_v24());

    assert_eq!(contact_point.value.as_deref(), Some("0113 222 3333"));
    assert_eq!(contact_point.system, Some(ContactPointSystem::Phone));
    assert_eq!(contact_point.use_, None);
}

#[test]
fn test_v24_second_slot_wins() {
    let xtn = XtnV24::new()
        .with_phone_number("2223333")
        .with_any_text("0113 222 3333")
        .with_formatted_number("(0113)222-3333X99");

    let contact_point = xtn_to_contact_point_v24(&xtn);

    assert_eq!(contact_point.value.as_deref(), Some("(0113)222-3333X99"));
    assert_eq!(contact_point.system, Some(ContactPointSystem::Phone));
}

#[test]
fn test_v24_formatted_number_alone() {
    let xtn = XtnV24::new().with_formatted_number("(0113)222-3333");

    let contact_point = xtn_to_contact_point_v24(&xtn);

    assert_eq!(contact_point.value.as_deref(), Some("(0113)222-3333"));
    assert_eq!(contact_point.system, Some(ContactPointSystem::Phone));
}

#[test]
fn test_v24_any_text_without_phone_number_is_ignored() {
    let xtn = XtnV24::new().with_any_text("0113 222 3333");

    assert!(xtn_to_contact_point_v24(&xtn).is_empty());
}

#[test]
fn test_v24_phone_number_without_any_text_sets_system_only() {
    let xtn = XtnV24::new().with_phone_number("2223333");

    let contact_point = xtn_to_contact_point_v24(&xtn);

    assert_eq!(contact_point.value, None);
    assert_eq!(contact_point.system, Some(ContactPointSystem::Phone));
}

#[test]
fn test_v24_email_is_not_mapped() {
    let xtn = XtnV24::new()
        .with_telecommunication_use_code("NET")
        .with_telecommunication_equipment_type("Internet")
        .with_email_address("jane@example.org");

    assert!(xtn_to_contact_point_v24(&xtn).is_empty());
}

#[test]
fn test_v251_telephone_number_copies_any_text() {
    let contact_point = xtn_to_contact_point_v251(&create_test_phone_v251());

    assert_eq!(contact_point.value.as_deref(), Some("0113 222 3333"));
    assert_eq!(contact_point.system, Some(ContactPointSystem::Phone));
}

#[test]
fn test_v251_without_telephone_number_is_empty() {
    let xtn = XtnV251::new()
        .with_any_text("0113 222 3333")
        .with_unformatted_telephone_number("01132223333");

    assert_eq!(xtn_to_contact_point_v251(&xtn), ContactPoint::default());
}

#[test]
fn test_v251_null_any_text_leaves_value_unset() {
    let xtn = XtnV251 {
        telephone_number: Some(Primitive::new("01132223333")),
        any_text: Some(Primitive::null()),
        ..XtnV251::default()
    };

    let contact_point = xtn_to_contact_point_v251(&xtn);

    assert_eq!(contact_point.value, None);
    assert_eq!(contact_point.system, Some(ContactPointSystem::Phone));
}

#[test]
fn test_caller_sets_use_per_segment_field() {
    let home = [create_test_phone_v251()];
    let business = [XtnV251::new()
        .with_telephone_number("01134445555")
        .with_any_text("0113 444 5555")];

    let telecom: Vec<ContactPoint> = map_repetitions(&home, xtn_to_contact_point_v251)
        .into_iter()
        .map(|contact_point| contact_point.with_use(ContactPointUse::Home))
        .chain(
            map_repetitions(&business, xtn_to_contact_point_v251)
                .into_iter()
                .map(|contact_point| contact_point.with_use(ContactPointUse::Work)),
        )
        .collect();

    let json = serde_json::to_value(&telecom).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"system": "phone", "value": "0113 222 3333", "use": "home"},
            {"system": "phone", "value": "0113 444 5555", "use": "work"}
        ])
    );
}
