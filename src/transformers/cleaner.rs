/*! Sentence-level text cleaning.

Removes what OCR and HTML exports leave in the text:
character references, separator artifacts (`***`, `---`…), invisible formatting characters
and whitespace runs.
!*/
use crate::config::{Config, NOISE_LITERALS};

use super::normalize::{decode_entities, normalize};

/// Zero-width and bidi formatting characters found in the exports.
const INVISIBLE: [char; 5] = ['\u{200b}', '\u{200e}', '\u{202a}', '\u{202c}', '\u{feff}'];

/// Glyph the OCR engine emits for a smudge in the margin.
const STRAY_GLYPH: char = '⸈';

#[derive(Debug, Clone)]
pub struct TextCleaner {
    noise_literals: Vec<String>,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new(NOISE_LITERALS.iter().map(|l| l.to_string()).collect())
    }
}

impl TextCleaner {
    pub fn new(noise_literals: Vec<String>) -> Self {
        // empty literals would make `replace` insert nothing everywhere, skip them
        let noise_literals = noise_literals
            .into_iter()
            .filter(|l| !l.is_empty())
            .collect();
        Self { noise_literals }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.noise_literals.clone())
    }

    /// Cleans `text`.
    ///
    /// Passes are repeated until the text is stable:
    /// removing a literal can glue together a new reference (`&***amp;`) and vice versa.
    /// Every pass either shortens the text or leaves it unchanged, so this terminates.
    pub fn clean(&self, text: &str) -> String {
        let mut current = self.clean_pass(text);
        loop {
            let next = self.clean_pass(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn clean_pass(&self, text: &str) -> String {
        let mut text = normalize(&decode_entities(text));

        for literal in &self.noise_literals {
            if text.contains(literal.as_str()) {
                text = text.replace(literal.as_str(), "");
            }
        }

        text.retain(|c| !INVISIBLE.contains(&c) && c != STRAY_GLYPH);

        let collapsed = text.split_whitespace().collect::<Vec<&str>>().join(" ");
        collapsed.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::TextCleaner;

    #[test]
    fn removes_references() {
        let c = TextCleaner::default();
        let inputs = [
            "Huệ Tử nói: &quot;Ta có cây lớn&quot;.",
            "a &amp; b",
            "&lt;Nội thiên&gt;",
            "&amp;quot; lồng nhau &amp;amp;lt;",
            "&&***quot;",
        ];
        for input in inputs {
            let cleaned = c.clean(input);
            for forbidden in ["&quot;", "&amp;", "&lt;", "&gt;"] {
                assert!(
                    !cleaned.contains(forbidden),
                    "{forbidden} found in {cleaned:?} (from {input:?})"
                );
            }
        }
    }

    #[test]
    fn removes_noise_literals() {
        let c = TextCleaner::default();
        assert_eq!(c.clean("*** TIÊU DIÊU DU ***"), "TIÊU DIÊU DU");
        assert_eq!(c.clean("Bắc Minh --- có cá"), "Bắc Minh có cá");
        assert_eq!(c.clean("F.F.F___"), "");
    }

    #[test]
    fn removes_invisible_and_stray() {
        let c = TextCleaner::default();
        assert_eq!(c.clean("\u{feff}Trang\u{200b} Tử⸈ nói"), "Trang Tử nói");
    }

    #[test]
    fn collapses_whitespace() {
        let c = TextCleaner::default();
        assert_eq!(c.clean("  Côn \n\n hóa\t làm   chim  "), "Côn hóa làm chim");
    }

    #[test]
    fn clean_idempotent() {
        let c = TextCleaner::default();
        let samples = [
            "&amp;amp;amp;",
            "a ⸈ b",
            "  -*-**- ",
            "Số 3.14 &nbsp; là số.",
            "莊子曰：「夫子固拙於用大矣。」",
        ];
        for s in samples {
            let once = c.clean(s);
            assert_eq!(c.clean(&once), once);
        }
    }

    #[test]
    fn custom_literals() {
        let c = TextCleaner::new(vec!["A.".to_string(), String::new()]);
        assert_eq!(c.clean("A. Tiêu dao"), "Tiêu dao");
        // default literals are not applied
        assert_eq!(c.clean("***"), "***");
    }
}
