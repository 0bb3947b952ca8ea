/*! Sentence pairing.

Aligns Chinese source sentences with the Vietnamese translation that follows them.

The scan is greedy, left to right, with a lookahead of one:

- a Chinese sentence immediately followed by a Vietnamese one gives a [SentencePair::Both], and both are consumed,
- a Vietnamese sentence that was not consumed that way gives a [SentencePair::VietnameseOnly],
- anything else (lone Chinese, mixed, other) gives nothing.

Once consumed, a sentence is never reconsidered.
!*/
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    identifiers::{classify, Language},
};

/// One aligned unit. At least one side is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SentencePairSer", into = "SentencePairSer")]
pub enum SentencePair {
    Both { chinese: String, vietnamese: String },
    VietnameseOnly(String),
    ChineseOnly(String),
}

impl SentencePair {
    /// Builds a pair from optional sides. Errors if both are absent.
    pub fn new(chinese: Option<String>, vietnamese: Option<String>) -> Result<Self, Error> {
        match (chinese, vietnamese) {
            (Some(chinese), Some(vietnamese)) => Ok(Self::Both {
                chinese,
                vietnamese,
            }),
            (None, Some(vietnamese)) => Ok(Self::VietnameseOnly(vietnamese)),
            (Some(chinese), None) => Ok(Self::ChineseOnly(chinese)),
            (None, None) => Err(Error::InvalidDocument(
                "sentence pair with no side".to_string(),
            )),
        }
    }

    pub fn chinese(&self) -> Option<&str> {
        match self {
            Self::Both { chinese, .. } | Self::ChineseOnly(chinese) => Some(chinese),
            Self::VietnameseOnly(_) => None,
        }
    }

    pub fn vietnamese(&self) -> Option<&str> {
        match self {
            Self::Both { vietnamese, .. } | Self::VietnameseOnly(vietnamese) => Some(vietnamese),
            Self::ChineseOnly(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
/// Serializable version of [SentencePair].
struct SentencePairSer {
    chinese: Option<String>,
    vietnamese: Option<String>,
}

impl From<SentencePair> for SentencePairSer {
    fn from(pair: SentencePair) -> Self {
        match pair {
            SentencePair::Both {
                chinese,
                vietnamese,
            } => Self {
                chinese: Some(chinese),
                vietnamese: Some(vietnamese),
            },
            SentencePair::VietnameseOnly(vietnamese) => Self {
                chinese: None,
                vietnamese: Some(vietnamese),
            },
            SentencePair::ChineseOnly(chinese) => Self {
                chinese: Some(chinese),
                vietnamese: None,
            },
        }
    }
}

impl TryFrom<SentencePairSer> for SentencePair {
    type Error = Error;

    fn try_from(value: SentencePairSer) -> Result<Self, Self::Error> {
        SentencePair::new(value.chinese, value.vietnamese)
    }
}

/// Pairs sentences, see module documentation.
pub fn pair<S: AsRef<str>>(sentences: &[S]) -> Vec<SentencePair> {
    let languages: Vec<Language> = sentences.iter().map(|s| classify(s.as_ref())).collect();
    let mut pairs = Vec::new();
    let mut idx = 0;

    while idx < sentences.len() {
        let current = sentences[idx].as_ref();
        match (languages[idx], languages.get(idx + 1)) {
            (Language::Chinese, Some(Language::Vietnamese)) => {
                pairs.push(SentencePair::Both {
                    chinese: current.to_string(),
                    vietnamese: sentences[idx + 1].as_ref().to_string(),
                });
                idx += 2;
            }
            (Language::Vietnamese, _) => {
                pairs.push(SentencePair::VietnameseOnly(current.to_string()));
                idx += 1;
            }
            (lang, _) => {
                debug!("dropping unpaired {} sentence {:?}", lang, current);
                idx += 1;
            }
        }
    }

    pairs
}
