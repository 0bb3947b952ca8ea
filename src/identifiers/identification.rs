/*! Script-based language classification.

Classical Chinese and its Vietnamese translation are told apart by script alone:
Chinese lines are mostly CJK ideographs, Vietnamese lines carry Latin letters with
Vietnamese diacritics. Lines holding both are [Language::Mixed], lines holding neither
(numbers, punctuation, plain ASCII) are [Language::Other].
!*/
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transformers::normalize;

/// Share of CJK ideographs among alphanumeric characters above which a text is Chinese.
const CJK_RATIO: f64 = 0.3;

/// Letters that only occur in Vietnamese orthography (all tone marks over a/e/i/o/u/y, plus đ).
const VIETNAMESE_LETTERS: &str = "àáảãạăằắẳẵặâầấẩẫậèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵđ\
ÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬÈÉẺẼẸÊỀẾỂỄỆÌÍỈĨỊÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢÙÚỦŨỤƯỪỨỬỮỰỲÝỶỸỴĐ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Chinese,
    Vietnamese,
    Mixed,
    Other,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Chinese => "Chinese",
            Language::Vietnamese => "Vietnamese",
            Language::Mixed => "Mixed",
            Language::Other => "Other",
        };
        f.write_str(name)
    }
}

/// CJK Unified Ideographs block.
#[inline]
fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// `true` if at least one ideograph is present and ideographs make up more than 30%
/// of the alphanumeric characters.
pub fn is_chinese(text: &str) -> bool {
    let (cjk, alnum) = text.chars().fold((0usize, 0usize), |(cjk, alnum), c| {
        (
            cjk + usize::from(is_cjk(c)),
            alnum + usize::from(c.is_alphanumeric()),
        )
    });

    cjk > 0 && (cjk as f64 / alnum.max(1) as f64) > CJK_RATIO
}

/// `true` if the text holds at least one Vietnamese-specific letter.
pub fn is_vietnamese(text: &str) -> bool {
    text.chars().any(|c| VIETNAMESE_LETTERS.contains(c))
}

/// Classifies a (normalized) text.
pub fn classify(text: &str) -> Language {
    let text = normalize(text);
    match (is_chinese(&text), is_vietnamese(&text)) {
        (true, true) => Language::Mixed,
        (true, false) => Language::Chinese,
        (false, true) => Language::Vietnamese,
        (false, false) => Language::Other,
    }
}
