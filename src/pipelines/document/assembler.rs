/*! Document assembly.

Builds the [Document] tree out of detected [Section]s:

1. each page is split into sentences by the [SentenceSplitter],
1. sentences are paired with [pair],
1. if an [EntityAnnotator] is set, the Vietnamese side of each pair gets annotated.

Pages whose cleaned text is empty (blank scans, separator pages) are skipped.
!*/
use log::{debug, info};

use crate::{
    config::Config,
    ner::EntityAnnotator,
    pairing::{pair, SentencePair},
    segmentation::{CleanedPage, Section, SentenceSplitter},
};

use super::types::{AnnotatedPair, BookMetadata, Document, PageNode, SectionNode};

pub struct DocumentAssembler {
    code: String,
    metadata: BookMetadata,
    splitter: SentenceSplitter,
    annotator: Option<EntityAnnotator>,
}

impl DocumentAssembler {
    pub fn new(code: String, metadata: BookMetadata, splitter: SentenceSplitter) -> Self {
        Self {
            code,
            metadata,
            splitter,
            annotator: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.code.clone(),
            config.book.clone(),
            SentenceSplitter::from_config(config),
        )
    }

    /// Annotates Vietnamese sentences with `annotator`.
    pub fn with_annotator(mut self, annotator: EntityAnnotator) -> Self {
        self.annotator = Some(annotator);
        self
    }

    fn annotate(&self, pair: SentencePair) -> AnnotatedPair {
        let entities = match (&self.annotator, pair.vietnamese()) {
            (Some(annotator), Some(vietnamese)) => annotator.annotate(vietnamese),
            _ => Vec::new(),
        };
        AnnotatedPair::new(pair, entities)
    }

    fn assemble_page(&self, page: &CleanedPage) -> PageNode {
        let sentences = self.splitter.split(&page.text);
        let pairs: Vec<AnnotatedPair> = pair(&sentences)
            .into_iter()
            .map(|pair| self.annotate(pair))
            .collect();

        debug!(
            "page {}: {} sentences, {} pairs",
            page.index,
            sentences.len(),
            pairs.len()
        );
        PageNode { pairs }
    }

    fn assemble_section(&self, section: &Section) -> SectionNode {
        let pages = section
            .pages
            .iter()
            .filter(|page| {
                let blank = page.text.trim().is_empty();
                if blank {
                    debug!("skipping blank page {}", page.index);
                }
                !blank
            })
            .map(|page| self.assemble_page(page))
            .collect();

        SectionNode {
            name: section.name.clone(),
            pages,
        }
    }

    pub fn assemble(&self, sections: &[Section]) -> Document {
        let sections: Vec<SectionNode> = sections
            .iter()
            .map(|section| self.assemble_section(section))
            .collect();

        let doc = Document::new(self.code.clone(), self.metadata.clone(), sections);
        info!(
            "assembled {}: {} sections, {} pairs",
            doc.code(),
            doc.sections().len(),
            doc.pairs().count()
        );
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentAssembler;
    use crate::{
        config::Config,
        error::Error,
        ner::{EntityAnnotator, EntityKind, RawEntity, Recognizer},
        pairing::SentencePair,
        segmentation::{CleanedPage, Section},
    };

    fn section(name: &str, texts: &[&str]) -> Section {
        Section {
            name: name.to_string(),
            pages: texts
                .iter()
                .enumerate()
                .map(|(idx, text)| CleanedPage {
                    index: idx + 1,
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn builds_tree() {
        let assembler = DocumentAssembler::from_config(&Config::default());
        let sections = vec![
            section("Giới thiệu", &["Lời giới thiệu sách."]),
            section(
                "TIÊU DIÊU DU",
                &["北冥有魚，其名為鯤。\n\nBiển Bắc có loài cá, tên là Côn.", ""],
            ),
        ];

        let doc = assembler.assemble(&sections);
        assert_eq!(doc.code(), "PAS_003");
        assert_eq!(doc.metadata().title, "Nam Hoa Kinh");
        assert_eq!(doc.sections().len(), 2);

        let intro = &doc.sections()[0];
        assert_eq!(intro.name, "Giới thiệu");
        assert_eq!(
            intro.pages[0].pairs[0].pair,
            SentencePair::VietnameseOnly("Lời giới thiệu sách.".to_string())
        );

        // blank page skipped
        let first = &doc.sections()[1];
        assert_eq!(first.pages.len(), 1);
        assert_eq!(
            first.pages[0].pairs[0].pair,
            SentencePair::Both {
                chinese: "北冥有魚，其名為鯤。".to_string(),
                vietnamese: "Biển Bắc có loài cá, tên là Côn.".to_string()
            }
        );
        assert!(first.pages[0].pairs[0].entities.is_empty());
    }

    #[test]
    fn empty_input() {
        let assembler = DocumentAssembler::from_config(&Config::default());
        assert!(assembler.assemble(&[]).is_empty());
    }

    struct Names;

    impl Recognizer for Names {
        fn predict(&self, text: &str) -> Result<Vec<RawEntity>, Error> {
            if text.starts_with("Trang Tử") {
                Ok(vec![
                    RawEntity::new(0, 5, "Trang", "B-PER"),
                    RawEntity::new(6, 8, "Tử", "I-PER"),
                ])
            } else {
                Err(Error::Ner("no answer".to_string()))
            }
        }
    }

    #[test]
    fn annotates_vietnamese_side() {
        let config = Config::default();
        let annotator = EntityAnnotator::from_config(Box::new(Names), &config).unwrap();
        let assembler = DocumentAssembler::from_config(&config).with_annotator(annotator);

        let doc = assembler.assemble(&[section(
            "TỀ VẬT LUẬN",
            &["莊子曰：北冥有魚。\n\nTrang Tử nói rằng.\n\nHuệ Tử không đáp."],
        )]);
        let pairs = &doc.sections()[0].pages[0].pairs;
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].pair.chinese(), Some("莊子曰：北冥有魚。"));
        assert_eq!(pairs[0].entities.len(), 1);
        assert_eq!(pairs[0].entities[0].word, "Trang Tử");
        assert_eq!(pairs[0].entities[0].kind, EntityKind::Per);
        // recognizer failure leaves the pair without entities
        assert!(pairs[1].entities.is_empty());
    }
}
