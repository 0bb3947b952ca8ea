/*! Segmentation

- [SectionDetector] groups cleaned pages into [Section]s,
- [SentenceSplitter] splits a page into sentences.
!*/
mod sections;
mod splitter;

pub use sections::{CleanedPage, Section, SectionDetector};
pub use splitter::SentenceSplitter;
