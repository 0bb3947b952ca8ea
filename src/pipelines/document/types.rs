//! Document tree.
//!
//! A [Document] is the book: its metadata and an ordered list of sections,
//! each holding pages, each holding sentence pairs.
//! Nodes carry no identifiers, these are derived from ordinals when exporting
//! (see [section_id], [page_id] and [pair_id]).
use serde::{Deserialize, Serialize};

use crate::{ner::Entity, pairing::SentencePair};

/// Book-level metadata. Unknown fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookMetadata {
    pub title: String,
    pub volume: String,
    pub author: String,
    pub period: String,
    pub language: String,
    pub translator: String,
    pub source: String,
}

impl BookMetadata {
    /// The bilingual Nam Hoa Kinh edition.
    pub fn nam_hoa_kinh() -> Self {
        Self {
            title: "Nam Hoa Kinh".to_string(),
            volume: String::new(),
            author: "Trang Tử".to_string(),
            period: "Chiến Quốc".to_string(),
            language: "Hán-Việt".to_string(),
            translator: "Nguyễn Duy Cần".to_string(),
            source: "thuviensach.vn".to_string(),
        }
    }

    /// `(tag, value)` couples, in export order.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("TITLE", self.title.as_str()),
            ("VOLUME", self.volume.as_str()),
            ("AUTHOR", self.author.as_str()),
            ("PERIOD", self.period.as_str()),
            ("LANGUAGE", self.language.as_str()),
            ("TRANSLATOR", self.translator.as_str()),
            ("SOURCE", self.source.as_str()),
        ]
    }

    /// Mutable access by export tag.
    pub fn field_mut(&mut self, tag: &str) -> Option<&mut String> {
        match tag {
            "TITLE" => Some(&mut self.title),
            "VOLUME" => Some(&mut self.volume),
            "AUTHOR" => Some(&mut self.author),
            "PERIOD" => Some(&mut self.period),
            "LANGUAGE" => Some(&mut self.language),
            "TRANSLATOR" => Some(&mut self.translator),
            "SOURCE" => Some(&mut self.source),
            _ => None,
        }
    }
}

/// A sentence pair and the entities found on its Vietnamese side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedPair {
    pub pair: SentencePair,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,
}

impl AnnotatedPair {
    pub fn new(pair: SentencePair, entities: Vec<Entity>) -> Self {
        Self { pair, entities }
    }
}

impl From<SentencePair> for AnnotatedPair {
    fn from(pair: SentencePair) -> Self {
        Self::new(pair, Vec::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    pub pairs: Vec<AnnotatedPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNode {
    pub name: String,
    pub pages: Vec<PageNode>,
}

impl SectionNode {
    pub fn new(name: String) -> Self {
        Self {
            name,
            pages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    code: String,
    metadata: BookMetadata,
    sections: Vec<SectionNode>,
}

impl Document {
    pub fn new(code: String, metadata: BookMetadata, sections: Vec<SectionNode>) -> Self {
        Self {
            code,
            metadata,
            sections,
        }
    }

    /// Book code, root of identifiers.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn metadata(&self) -> &BookMetadata {
        &self.metadata
    }

    pub fn sections(&self) -> &[SectionNode] {
        &self.sections
    }

    /// Every pair of the book, in reading order.
    pub fn pairs(&self) -> impl Iterator<Item = &AnnotatedPair> {
        self.sections
            .iter()
            .flat_map(|section| section.pages.iter())
            .flat_map(|page| page.pairs.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Identifier of the `section`th (1-based) section.
pub fn section_id(code: &str, section: usize) -> String {
    format!("{}.{:03}", code, section)
}

pub fn page_id(code: &str, section: usize, page: usize) -> String {
    format!("{}.{:03}", section_id(code, section), page)
}

pub fn pair_id(code: &str, section: usize, page: usize, pair: usize) -> String {
    format!("{}.{:02}", page_id(code, section, page), pair)
}
