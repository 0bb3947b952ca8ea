//! Entity types.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Entity as returned by a [super::Recognizer].
///
/// Offsets are character (not byte) offsets into the annotated text, `end` being exclusive.
/// Token classifiers use `entity` for the label, grouped outputs use `entity_group`: both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntity {
    pub start: usize,
    pub end: usize,
    pub word: String,
    #[serde(alias = "entity")]
    pub entity_group: String,
}

impl RawEntity {
    pub fn new(start: usize, end: usize, word: &str, entity_group: &str) -> Self {
        Self {
            start,
            end,
            word: word.to_string(),
            entity_group: entity_group.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityKind {
    Per,
    Org,
    Loc,
    Tme,
    Title,
    Num,
    Misc,
}

impl FromStr for EntityKind {
    type Err = Error;

    /// Parses a label, ignoring any `B-`/`I-` prefix.
    /// Long labels (`PERSON`, `ORGANIZATION`, `LOCATION`, `TIME`) are also accepted.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let kind = label.rsplit('-').next().unwrap_or(label);
        match kind.to_uppercase().as_str() {
            "PER" | "PERSON" => Ok(Self::Per),
            "ORG" | "ORGANIZATION" => Ok(Self::Org),
            "LOC" | "LOCATION" => Ok(Self::Loc),
            "TME" | "TIME" => Ok(Self::Tme),
            "TITLE" => Ok(Self::Title),
            "NUM" => Ok(Self::Num),
            "MISC" => Ok(Self::Misc),
            _ => Err(Error::Ner(format!("unknown entity label {:?}", label))),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Per => "PER",
            Self::Org => "ORG",
            Self::Loc => "LOC",
            Self::Tme => "TME",
            Self::Title => "TITLE",
            Self::Num => "NUM",
            Self::Misc => "MISC",
        };
        f.write_str(label)
    }
}

/// Entity attached to a Vietnamese sentence, after filtering and merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub word: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(start: usize, end: usize, word: &str, kind: EntityKind) -> Self {
        Self {
            start,
            end,
            word: word.to_string(),
            kind,
        }
    }
}

impl TryFrom<RawEntity> for Entity {
    type Error = Error;

    fn try_from(raw: RawEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: raw.entity_group.parse()?,
            start: raw.start,
            end: raw.end,
            word: raw.word,
        })
    }
}
