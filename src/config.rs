/*! Corpus configuration.

Every list the pipeline relies on (section titles and heading patterns, entity allow-list, OCR noise literals, running headers)
lives in a [Config] value that is built once and handed to each component at construction.

The defaults describe the Nam Hoa Kinh edition this crate was written for.
A JSON file can override any subset of fields:

```json
{
    "code": "PAS_004",
    "known_titles": ["LỜI NÓI ĐẦU", "TIÊU DIÊU DU"],
    "book": { "title": "Nam Hoa Kinh", "author": "Trang Tử" }
}
```
!*/
use std::{fs::File, io::BufReader, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::Error, pipelines::BookMetadata};

/// Section titles of the Nam Hoa Kinh, in priority order.
pub const KNOWN_TITLES: [&str; 12] = [
    "LỜI NÓI ĐẦU",
    "TIỂU DẪN",
    "NỘI THIÊN",
    "NGOẠI THIÊN",
    "TẠP THIÊN",
    "TIÊU DIÊU DU",
    "TỀ VẬT LUẬN",
    "DƯỠNG SINH CHỦ",
    "NHÂN GIAN THẾ",
    "ĐỨC SUNG PHÙ",
    "ĐẠI TÔNG SƯ",
    "ỨNG ĐẾ VƯƠNG",
];

/// Chapter headings (`CHƯƠNG II. …`, `PHẦN 3 …`), matched per line after the known titles.
pub const TITLE_PATTERNS: [&str; 1] = [r"^(PHẦN|CHƯƠNG)\s+[IVXLCDM\d]+\.*\s+.+$"];

/// Entity groups kept from the NER output.
pub const ENTITY_TYPES: [&str; 6] = ["PER", "ORG", "LOC", "TME", "TITLE", "NUM"];

/// Page separator artifacts left by the OCR engine.
pub const NOISE_LITERALS: [&str; 5] = ["999", "F.F.F", "***", "---", "___"];

/// "author … book title" and translator running headers printed on every page.
pub const RUNNING_HEADERS: [&str; 2] = ["(?i)TRANG TỬ.*NAM HOA KINH.*", "(?i)Dịch kinh.*"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Book code, root of every synthesized ID.
    pub code: String,
    /// Name of the section holding the pages seen before any known title.
    pub default_section: String,
    pub known_titles: Vec<String>,
    /// Heading regexes, the matched text naming the section.
    pub title_patterns: Vec<String>,
    pub entity_types: Vec<String>,
    pub noise_literals: Vec<String>,
    pub running_headers: Vec<String>,
    /// Sentences must be strictly longer than this (in codepoints) to be kept.
    pub min_sentence_length: usize,
    pub book: BookMetadata,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            code: "PAS_003".to_string(),
            default_section: "Giới thiệu".to_string(),
            known_titles: KNOWN_TITLES.iter().map(|t| t.to_string()).collect(),
            title_patterns: TITLE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            entity_types: ENTITY_TYPES.iter().map(|t| t.to_string()).collect(),
            noise_literals: NOISE_LITERALS.iter().map(|t| t.to_string()).collect(),
            running_headers: RUNNING_HEADERS.iter().map(|t| t.to_string()).collect(),
            min_sentence_length: 5,
            book: BookMetadata::nam_hoa_kinh(),
        }
    }
}

impl Config {
    /// Reads a JSON configuration file. Missing fields take their default value.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let config: Config = serde_json::from_reader(reader)?;
        debug!("loaded configuration from {:?}: {:#?}", path, config);
        Ok(config)
    }
}
