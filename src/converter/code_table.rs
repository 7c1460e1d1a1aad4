//! Fixed coded-value tables from HL7v2 codes to FHIR enumerations.
//!
//! Lookups are total over any input but partial in their result: a code that
//! is absent from a table maps to `None` and the target element stays unset.

use crate::types::fhir::AddressUse;
use crate::types::hl7v2::Primitive;

/// A literal, ordered code-to-value table.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable<T: 'static> {
    entries: &'static [(&'static str, T)],
}

impl<T: Copy> CodeTable<T> {
    pub const fn new(entries: &'static [(&'static str, T)]) -> Self {
        Self { entries }
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, code: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, value)| *value)
    }

    /// Lookup of an optional component; absent component or HL7 null yield `None`.
    pub fn lookup_component(&self, component: &Option<Primitive>) -> Option<T> {
        component
            .as_ref()
            .and_then(Primitive::value)
            .and_then(|code| self.lookup(code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// HL7 table 0190 (address type) to FHIR `Address.use`.
pub const ADDRESS_USE: CodeTable<AddressUse> = CodeTable::new(&[
    ("H", AddressUse::Home),
    ("B", AddressUse::Work),
    ("C", AddressUse::Temp),
]);

/// Assigning authority namespace (HD.1) to identifier system.
pub const ASSIGNING_AUTHORITY_SYSTEM: CodeTable<&'static str> = CodeTable::new(&[
    ("GMC", "https://fhir.hl7.org.uk/Id/gmc-number"),
    ("GMP", "https://fhir.hl7.org.uk/Id/gmp-number"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_use_table() {
        assert_eq!(ADDRESS_USE.lookup("H"), Some(AddressUse::Home));
        assert_eq!(ADDRESS_USE.lookup("B"), Some(AddressUse::Work));
        assert_eq!(ADDRESS_USE.lookup("C"), Some(AddressUse::Temp));
        assert_eq!(ADDRESS_USE.lookup("X"), None);
        assert_eq!(ADDRESS_USE.lookup("h"), None);
        assert_eq!(ADDRESS_USE.lookup(""), None);
        assert_eq!(ADDRESS_USE.len(), 3);
    }

    #[test]
    fn test_lookup_component_gates_on_presence() {
        assert_eq!(ADDRESS_USE.lookup_component(&None), None);
        assert_eq!(ADDRESS_USE.lookup_component(&Some(Primitive::null())), None);
        assert_eq!(
            ADDRESS_USE.lookup_component(&Some(Primitive::new("H"))),
            Some(AddressUse::Home)
        );
    }

    #[test]
    fn test_assigning_authority_systems() {
        assert_eq!(
            ASSIGNING_AUTHORITY_SYSTEM.lookup("GMC"),
            Some("https://fhir.hl7.org.uk/Id/gmc-number")
        );
        assert_eq!(ASSIGNING_AUTHORITY_SYSTEM.lookup("NHS"), None);
    }
}
