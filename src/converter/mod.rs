//! Mapping units from HL7v2 composites to FHIR data types.
//!
//! Every unit is a plain function from a borrowed source composite to a fresh
//! target value. Units never fail and never call one another; an absent source
//! component simply leaves the matching target element unset.

mod address;
pub mod code_table;
mod name;
mod reference;
mod registry;
mod telecom;

pub use address::*;
pub use code_table::{ADDRESS_USE, ASSIGNING_AUTHORITY_SYSTEM, CodeTable};
pub use name::*;
pub use reference::*;
pub use registry::*;
pub use telecom::*;

/// Apply a mapping unit to every repetition of a repeating field, in order.
///
/// ```rust
/// use octofhir_hl7v2_fhir::*;
///
/// let names = [Xpn::new().with_given_name("Jane"), Xpn::new()];
/// let mapped = map_repetitions(&names, xpn_to_human_name);
/// assert_eq!(mapped.len(), 2);
/// assert!(mapped[1].is_empty());
/// ```
pub fn map_repetitions<S, T>(repetitions: &[S], unit: impl Fn(&S) -> T) -> Vec<T> {
    repetitions.iter().map(unit).collect()
}
