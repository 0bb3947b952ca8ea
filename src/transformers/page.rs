/*! Page-level cleaning.

Undoes what the PDF/OCR extraction does to a page before it gets split into sentences:

- a known section title starting a line is restored to its verbatim spelling,
- running headers (`TRANG TỬ … NAM HOA KINH`, `Dịch kinh …`), `Trang <n>` footers and bare page numbers are removed,
- single newlines (line wraps inside a sentence) are joined, blank lines (paragraph breaks) are kept,
- runs of spaces and tabs become a single space.

Titles mentioned inside prose (`gọi là nội thiên`) are left as they are.
!*/
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{config::Config, error::Error};

use super::normalize::{decode_entities, normalize};

lazy_static! {
    static ref PAGE_FOOTER: Regex = Regex::new(r"(?i)Trang \d+").unwrap();
    static ref PAGE_NUMBER_LINE: Regex = Regex::new(r"(?m)^[ \t]*\d+[ \t]*$").unwrap();
    static ref HORIZONTAL_SPACE: Regex = Regex::new("[ \t\u{a0}]+").unwrap();
    static ref LINE_EDGE_SPACE: Regex = Regex::new(r"(?m)^ | $").unwrap();
}

#[derive(Debug, Clone)]
pub struct PageCleaner {
    /// verbatim title and its case-insensitive, line-start matcher, in priority order
    titles: Vec<(String, Regex)>,
    running_headers: Vec<Regex>,
}

impl PageCleaner {
    pub fn new(known_titles: &[String], running_headers: &[String]) -> Result<Self, Error> {
        let titles = known_titles
            .iter()
            .filter(|title| !title.is_empty())
            .map(|title| {
                let pattern = format!("(?im)^[ \t]*{}", regex::escape(title));
                Regex::new(&pattern).map(|re| (title.clone(), re))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let running_headers = running_headers
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            titles,
            running_headers,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(&config.known_titles, &config.running_headers)
    }

    /// Titles in priority order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(|(title, _)| title.as_str())
    }

    pub fn clean_page(&self, text: &str) -> String {
        let text = normalize(&text.replace("\r\n", "\n"));
        let mut text = decode_entities(&text);

        if let Some(canonical) = self.canonicalize_title(&text) {
            text = canonical;
        }

        for header in &self.running_headers {
            text = header.replace_all(&text, "").into_owned();
        }
        let text = PAGE_FOOTER.replace_all(&text, "");
        let text = PAGE_NUMBER_LINE.replace_all(&text, "");

        let text = join_wrapped_lines(&text);
        let text = HORIZONTAL_SPACE.replace_all(&text, " ");
        LINE_EDGE_SPACE.replace_all(&text, "").trim().to_string()
    }

    /// Rewrites the first line-start occurrence of the highest-priority title found
    /// (ignoring case) to its verbatim spelling. Returns [None] if no title starts a line.
    fn canonicalize_title(&self, text: &str) -> Option<String> {
        self.titles.iter().find_map(|(title, matcher)| {
            matcher.find(text).map(|found| {
                if found.as_str() != title {
                    debug!("restoring title {:?} from {:?}", title, found.as_str());
                }
                let mut rewritten = String::with_capacity(text.len());
                rewritten.push_str(&text[..found.start()]);
                rewritten.push_str(title);
                rewritten.push_str(&text[found.end()..]);
                rewritten
            })
        })
    }
}

/// Replaces every newline that is neither preceded nor followed by another newline with a space.
fn join_wrapped_lines(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(idx, c)| {
            let prev_is_newline = idx > 0 && chars[idx - 1] == '\n';
            let next_is_newline = chars.get(idx + 1) == Some(&'\n');
            if *c == '\n' && !prev_is_newline && !next_is_newline {
                ' '
            } else {
                *c
            }
        })
        .collect()
}
