/*! Document reading

Only the XML layout can be read back, see [xml].
!*/
pub mod xml;

pub use xml::{from_xml, read_xml};
