//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! the [Document] tree and the [Bilingual] pipeline producing it.
pub mod bilingual;
pub mod document;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use bilingual::Bilingual;
pub use document::{
    page_id, pair_id, section_id, AnnotatedPair, BookMetadata, Document, DocumentAssembler,
    PageNode, SectionNode,
};
pub use pipeline::Pipeline;
