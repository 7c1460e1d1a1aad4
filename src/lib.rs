//! # OctoFHIR HL7v2 -> FHIR
//!
//! Field-level mapping of HL7v2 demographic composites to FHIR R4 data types.
//!
//! ## Features
//!
//! - **XAD -> Address**, **XPN -> HumanName**, **XCN -> Reference**
//! - **XTN -> ContactPoint** with separate units for the 2.4 and 2.5.1 layouts
//! - **Presence-gated**: absent or null components leave target elements unset
//! - **Registry**: dispatch by (source type, target type, HL7v2 version)
//!
//! ## Quick Start
//!
//! ```rust
//! use octofhir_hl7v2_fhir::*;
//!
//! # fn example() -> Result<()> {
//! let xad = Xad::new()
//!     .with_street_address(Sad::new().with_dwelling_number("12").with_street_name("Park Row"))
//!     .with_city("Leeds")
//!     .with_address_type("H");
//!
//! // Call a unit directly
//! let address = xad_to_address(&xad);
//! assert_eq!(address.line, vec!["12", "Park Row"]);
//! assert_eq!(address.use_, Some(AddressUse::Home));
//!
//! // Or dispatch through the registry
//! let registry = MappingRegistry::new();
//! let mapped = registry.map(V2Version::V24, FhirDataType::Address, &V2Composite::Xad(xad))?;
//! assert_eq!(mapped.into_address(), Some(address));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod converter;
pub mod core;
pub mod error;
pub mod types;

pub use converter::*;
pub use crate::core::{MapperConfig, V2Version};
pub use error::{MappingError, Result};
pub use types::*;
