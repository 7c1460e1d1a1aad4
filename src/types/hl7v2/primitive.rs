use serde::{Deserialize, Serialize};
use std::fmt;

/// HL7v2 explicit null as it appears on the wire.
pub const HL7_NULL: &str = "\"\"";

/// A transmitted HL7v2 leaf value (ST, ID, IS, NM).
///
/// The component being transmitted at all is modelled by the surrounding
/// `Option<Primitive>`. A transmitted component may still carry the explicit
/// HL7 null (`""` on the wire), in which case `value` is `None`. Serialized
/// form is a JSON string; the null is written as the wire literal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub struct Primitive {
    value: Option<String>,
}

impl Primitive {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// The explicit HL7 null: present, but without a value.
    pub fn null() -> Self {
        Self { value: None }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        if value == HL7_NULL {
            Self::null()
        } else {
            Self { value: Some(value) }
        }
    }
}

impl From<Primitive> for String {
    fn from(primitive: Primitive) -> Self {
        primitive.value.unwrap_or_else(|| HL7_NULL.to_string())
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.as_deref().unwrap_or(HL7_NULL))
    }
}

/// Value of an optional leaf component, present only when both the component
/// and its inner value were transmitted.
pub fn value_of(component: &Option<Primitive>) -> Option<String> {
    component.as_ref().and_then(Primitive::value).map(str::to_owned)
}
