use criterion::{Criterion, criterion_group, criterion_main};
use octofhir_hl7v2_fhir::*;
use std::hint::black_box;

fn create_address() -> Xad {
    Xad::new()
        .with_street_address(
            Sad::new()
                .with_dwelling_number("Flat 3")
                .with_street_name("22 Park Row"),
        )
        .with_city("Leeds")
        .with_state_or_province("West Yorkshire")
        .with_zip_or_postal_code("LS1 5JL")
        .with_address_type("H")
}

fn create_phone() -> XtnV24 {
    XtnV24::new()
        .with_phone_number("2223333")
        .with_any_text("0113 222 3333")
        .with_formatted_number("(0113)222-3333")
}

fn bench_units(c: &mut Criterion) {
    let xad = create_address();
    let xtn = create_phone();
    let xpn = Xpn::new()
        .with_family_name(FamilyName::surname("Smith"))
        .with_given_name("Jane")
        .with_prefix("Mrs");

    c.bench_function("xad_to_address", |b| {
        b.iter(|| black_box(xad_to_address(black_box(&xad))))
    });

    c.bench_function("xtn_to_contact_point_v24", |b| {
        b.iter(|| black_box(xtn_to_contact_point_v24(black_box(&xtn))))
    });

    c.bench_function("xpn_to_human_name", |b| {
        b.iter(|| black_box(xpn_to_human_name(black_box(&xpn))))
    });
}

fn bench_registry(c: &mut Criterion) {
    let registry = MappingRegistry::new();
    let source = V2Composite::Xad(create_address());

    c.bench_function("registry_dispatch", |b| {
        b.iter(|| {
            black_box(registry.map(V2Version::V24, FhirDataType::Address, black_box(&source)))
                .unwrap()
        })
    });

    let repetitions: Vec<Xad> = (0..100).map(|_| create_address()).collect();
    c.bench_function("address_repetitions_100", |b| {
        b.iter(|| black_box(map_repetitions(black_box(&repetitions), xad_to_address)))
    });
}

criterion_group!(benches, bench_units, bench_registry);
criterion_main!(benches);
