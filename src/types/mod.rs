pub mod fhir;
pub mod hl7v2;

pub use fhir::*;
pub use hl7v2::*;
