/*!
# Document writing

Every output format implements [WriterTrait] over any [std::io::Write]:

- [XmlWriter] produces the `root/FILE/SECT/PAGE/STC` XML layout,
- [JsonWriter] dumps the [crate::pipelines::Document] as pretty JSON,
- [TextWriter] renders sentence pairs only, in one of the [Layout]s.

Each writer has a `create` constructor writing to a (buffered) file.
!*/
mod json;
mod text;
mod writertrait;
mod xml;

pub use json::JsonWriter;
pub use text::{render, Layout, TextWriter};
pub use writertrait::WriterTrait;
pub use xml::{to_xml, XmlWriter};
