//! Bilingual book pipeline
//!
//! Turns the pages of a scanned Chinese/Vietnamese book into a [Document].
//!
//! # Processing
//! 1. Pages are read from a [PageSource] (extracted text or OCR).
//! 1. Pages are cleaned and grouped into sections by the [SectionDetector].
//! 1. Each page is split into sentences, which are paired (Chinese source, Vietnamese translation).
//! 1. Optionally, entities are recognized on the Vietnamese side.
//!
//! A source without pages gives an empty [Document].
use log::{info, warn};

use crate::{
    config::Config,
    error::Error,
    ner::EntityAnnotator,
    segmentation::{Section, SectionDetector},
    sources::PageSource,
};

use super::{Document, DocumentAssembler, Pipeline};

pub struct Bilingual<S: PageSource> {
    source: S,
    detector: SectionDetector,
    assembler: DocumentAssembler,
}

impl<S: PageSource> Bilingual<S> {
    /// Builds the pipeline components from `config`.
    ///
    /// Errors if `config` holds invalid patterns.
    pub fn new(source: S, config: &Config) -> Result<Self, Error> {
        Ok(Self {
            source,
            detector: SectionDetector::from_config(config)?,
            assembler: DocumentAssembler::from_config(config),
        })
    }

    pub fn with_annotator(mut self, annotator: EntityAnnotator) -> Self {
        self.assembler = self.assembler.with_annotator(annotator);
        self
    }

    /// Reads and groups pages, without assembling.
    pub fn sections(&self) -> Result<Vec<Section>, Error> {
        let pages = self.source.pages()?;
        if pages.is_empty() {
            warn!("source has no pages");
        }
        Ok(self.detector.detect(&pages))
    }
}

impl<S: PageSource> Pipeline<Document> for Bilingual<S> {
    fn version() -> &'static str {
        "1.0.0"
    }

    fn run(&self) -> Result<Document, Error> {
        info!("running bilingual pipeline v{}", Self::version());
        let sections = self.sections()?;
        Ok(self.assembler.assemble(&sections))
    }
}
