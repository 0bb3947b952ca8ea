/*! Sentence splitter.

Splits page text into sentence-like units:

1. the text is split on blank lines (paragraphs); no sentence spans two paragraphs,
2. each paragraph is scanned character by character, and a sentence is closed on
   `.`, `!`, `?` or their full-width forms `。`, `！`, `？`, except:
   - a `.` followed by a digit (`3.14`),
   - a `.` inside Chinese text that is not followed by whitespace,
3. each sentence is cleaned and kept only if it is longer than the [Length] threshold.

The splitter holds no state between calls.
!*/
use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    config::Config,
    filtering::{Filter, Length},
    identifiers::is_chinese,
    transformers::TextCleaner,
};

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

const TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

#[derive(Debug, Clone, Default)]
pub struct SentenceSplitter {
    cleaner: TextCleaner,
    length: Length,
}

impl SentenceSplitter {
    pub fn new(cleaner: TextCleaner, length: Length) -> Self {
        Self { cleaner, length }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TextCleaner::from_config(config),
            Length::with_min_size(config.min_sentence_length),
        )
    }

    /// Splits `text` into sentences, in reading order.
    pub fn split(&self, text: &str) -> Vec<String> {
        PARAGRAPH_BREAK
            .split(text)
            .filter(|paragraph| !paragraph.trim().is_empty())
            .flat_map(|paragraph| self.split_paragraph(paragraph))
            .collect()
    }

    fn split_paragraph(&self, paragraph: &str) -> Vec<String> {
        let chars: Vec<char> = paragraph.chars().collect();
        let mut sentences = Vec::new();
        let mut buffer = String::new();

        for (idx, c) in chars.iter().enumerate() {
            buffer.push(*c);
            if !TERMINATORS.contains(c) {
                continue;
            }

            let next = chars.get(idx + 1);
            if *c == '.' {
                // decimal numbers
                if next.map_or(false, |n| n.is_numeric()) {
                    continue;
                }
                // dots inside Chinese text are not sentence ends
                if next.map_or(false, |n| !n.is_whitespace()) && is_chinese(&buffer) {
                    continue;
                }
            }

            self.flush(&mut buffer, &mut sentences);
        }

        self.flush(&mut buffer, &mut sentences);
        sentences
    }

    /// Cleans the buffer and keeps it if it is long enough. The buffer is emptied in any case.
    fn flush(&self, buffer: &mut String, sentences: &mut Vec<String>) {
        if !buffer.trim().is_empty() {
            let cleaned = self.cleaner.clean(buffer);
            if self.length.detect(cleaned.as_str()) {
                sentences.push(cleaned);
            }
        }
        buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::SentenceSplitter;
    use crate::{filtering::Length, transformers::TextCleaner};

    #[test]
    fn latin_terminators() {
        let s = SentenceSplitter::default();
        assert_eq!(
            s.split("Câu một. Câu hai! Câu ba?"),
            vec!["Câu một.", "Câu hai!", "Câu ba?"]
        );
    }

    #[test]
    fn decimals() {
        let s = SentenceSplitter::default();
        assert_eq!(s.split("Số 3.14 là số."), vec!["Số 3.14 là số."]);
    }

    #[test]
    fn full_width_terminators() {
        let s = SentenceSplitter::default();
        assert_eq!(
            s.split("北冥有魚，其名為鯤。鯤之大，不知其幾千里也。"),
            vec!["北冥有魚，其名為鯤。", "鯤之大，不知其幾千里也。"]
        );
    }

    #[test]
    fn chinese_inner_dot() {
        let s = SentenceSplitter::default();
        assert_eq!(
            s.split("莊子曰.北冥有魚. 化而為鳥其名為鵬"),
            vec!["莊子曰.北冥有魚.", "化而為鳥其名為鵬"]
        );
    }

    #[test]
    fn latin_dot_without_space_splits() {
        let s = SentenceSplitter::default();
        assert_eq!(s.split("Bắc Minh.Côn hóa chim"), vec!["Bắc Minh.", "Côn hóa chim"]);
    }

    #[test]
    fn paragraphs() {
        let s = SentenceSplitter::default();
        assert_eq!(
            s.split("Đoạn thứ nhất chưa hết\n\n  \n\nĐoạn thứ hai."),
            vec!["Đoạn thứ nhất chưa hết", "Đoạn thứ hai."]
        );
    }

    #[test]
    fn short_fragments_dropped() {
        let s = SentenceSplitter::default();
        assert_eq!(s.split("Ừ. Trang Tử nói vậy. 12."), vec!["Trang Tử nói vậy."]);
    }

    #[test]
    fn cleaned_before_filter() {
        let s = SentenceSplitter::default();
        // 11 chars raw, 3 once cleaned
        assert!(s.split("&quot;***Ừ.").is_empty());
        assert_eq!(s.split("Côn \u{200b}hóa&nbsp;chim."), vec!["Côn hóa chim."]);
    }

    #[test]
    fn custom_length() {
        let s = SentenceSplitter::new(TextCleaner::default(), Length::with_min_size(0));
        assert_eq!(s.split("Ừ. À!"), vec!["Ừ.", "À!"]);
    }

    #[test]
    fn restartable() {
        let s = SentenceSplitter::default();
        let text = "Câu chưa xong, chưa có dấu";
        assert_eq!(s.split(text), s.split(text));
        assert!(s.split("").is_empty());
    }
}
