//! Document tree and its assembly.
mod assembler;
mod types;

pub use assembler::DocumentAssembler;
pub use types::{
    page_id, pair_id, section_id, AnnotatedPair, BookMetadata, Document, PageNode, SectionNode,
};
