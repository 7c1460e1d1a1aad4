//! FHIR R4 target data types. Serialized form follows FHIR JSON.

pub mod address;
pub mod contact_point;
pub mod human_name;
pub mod reference;

pub use address::{Address, AddressUse};
pub use contact_point::{ContactPoint, ContactPointSystem, ContactPointUse};
pub use human_name::HumanName;
pub use reference::{Identifier, Reference};
