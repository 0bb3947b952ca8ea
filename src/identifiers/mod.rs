/*! Language identification

[classify] tells Chinese source lines from their Vietnamese translation using script heuristics only.

Remote detection (translation services) is abstracted behind [LanguageDetector]. !*/
mod detector;
mod identification;

pub use detector::{detect_or_none, Detection, LanguageDetector};
pub use identification::{classify, is_chinese, is_vietnamese, Language};
