//! HL7v2 source composites, as handed over by the message parser.

pub mod primitive;
pub mod xad;
pub mod xcn;
pub mod xpn;
pub mod xtn;

pub use primitive::{HL7_NULL, Primitive, value_of};
pub use xad::{Sad, Xad};
pub use xcn::{HierarchicDesignator, Xcn};
pub use xpn::{FamilyName, Xpn};
pub use xtn::{XtnV24, XtnV251};
