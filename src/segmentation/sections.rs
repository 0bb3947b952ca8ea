/*! Section detection.

Groups consecutive pages under the most recently seen section title.

Pages are cleaned with [PageCleaner::clean_page] first, which restores titles to their verbatim spelling.
The boundary test is then a plain (case-sensitive) containment check, titles being tested in priority order:
the first one found opens a new section, and no other title is considered for that page.
Pages without a known title are then matched against the heading patterns ([Config::title_patterns]),
each applied line by line: the first match, normalized, names the new section.

Pages seen before any title go into a seed section named after [Config::default_section].
Sections without pages are never emitted.
!*/
use log::{debug, info};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::Error,
    sources::RawPage,
    transformers::{normalize, PageCleaner},
};

/// A page after [PageCleaner::clean_page].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedPage {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub pages: Vec<CleanedPage>,
}

impl Section {
    fn open(name: String) -> Self {
        Self {
            name,
            pages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SectionDetector {
    cleaner: PageCleaner,
    title_patterns: Vec<Regex>,
    default_name: String,
}

impl SectionDetector {
    /// Detector on known titles only.
    pub fn new(cleaner: PageCleaner, default_name: String) -> Self {
        Self {
            cleaner,
            title_patterns: Vec::new(),
            default_name,
        }
    }

    /// Adds heading patterns, compiled in multi-line mode (`^`/`$` match at line boundaries).
    pub fn with_title_patterns(mut self, patterns: &[String]) -> Result<Self, Error> {
        self.title_patterns = patterns
            .iter()
            .map(|pattern| RegexBuilder::new(pattern).multi_line(true).build())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(
            PageCleaner::from_config(config)?,
            config.default_section.clone(),
        )
        .with_title_patterns(&config.title_patterns)
    }

    /// First known title (in priority order) contained in `text`,
    /// else the first heading pattern match.
    fn find_title(&self, text: &str) -> Option<String> {
        if let Some(title) = self.cleaner.titles().find(|title| text.contains(title)) {
            return Some(title.to_string());
        }
        self.title_patterns
            .iter()
            .find_map(|pattern| pattern.find(text))
            .map(|heading| normalize(heading.as_str()))
            .filter(|heading| !heading.is_empty())
    }

    pub fn detect(&self, pages: &[RawPage]) -> Vec<Section> {
        let seed = Section::open(self.default_name.clone());

        let (mut sections, last) =
            pages
                .iter()
                .fold((Vec::new(), seed), |(mut closed, mut current), page| {
                    let page = CleanedPage {
                        index: page.index,
                        text: self.cleaner.clean_page(&page.text),
                    };

                    if let Some(title) = self.find_title(&page.text) {
                        debug!("found section {:?} on page {}", title, page.index);
                        if !current.pages.is_empty() {
                            closed.push(current);
                        }
                        current = Section::open(title);
                    }

                    current.pages.push(page);
                    (closed, current)
                });

        if !last.pages.is_empty() {
            sections.push(last);
        }

        info!(
            "detected {} sections over {} pages",
            sections.len(),
            pages.len()
        );
        for section in &sections {
            info!("{}: {} pages", section.name, section.pages.len());
        }

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::SectionDetector;
    use crate::{config::Config, error::Error, sources::RawPage, transformers::PageCleaner};

    fn detector() -> SectionDetector {
        SectionDetector::from_config(&Config::default()).unwrap()
    }

    fn summary(detector: &SectionDetector, texts: &[&str]) -> Vec<(String, Vec<usize>)> {
        detector
            .detect(&RawPage::from_texts(texts.iter().copied()))
            .into_iter()
            .map(|s| (s.name, s.pages.iter().map(|p| p.index).collect()))
            .collect()
    }

    #[test]
    fn groups_pages_under_titles() {
        let d = detector();
        let sections = summary(
            &d,
            &[
                "intro text",
                "TIÊU DIÊU DU page one",
                "more of section one",
                "TỀ VẬT LUẬN page two",
            ],
        );
        assert_eq!(
            sections,
            vec![
                ("Giới thiệu".to_string(), vec![1]),
                ("TIÊU DIÊU DU".to_string(), vec![2, 3]),
                ("TỀ VẬT LUẬN".to_string(), vec![4]),
            ]
        );
    }

    #[test]
    fn groups_pages_under_headings() {
        let d = detector();
        let sections = summary(
            &d,
            &[
                "lời tựa",
                "CHƯƠNG II. Tề vật\n\nNội dung chương hai",
                "tiếp theo",
                "PHẦN 3 Bàn về đạo",
            ],
        );
        assert_eq!(
            sections,
            vec![
                ("Giới thiệu".to_string(), vec![1]),
                ("CHƯƠNG II. Tề vật".to_string(), vec![2, 3]),
                ("PHẦN 3 Bàn về đạo".to_string(), vec![4]),
            ]
        );
    }

    #[test]
    fn known_titles_before_headings() {
        let d = detector();
        let sections = summary(&d, &["CHƯƠNG I. Mở đầu\n\nTIÊU DIÊU DU"]);
        assert_eq!(sections[0].0, "TIÊU DIÊU DU");
    }

    #[test]
    fn heading_must_start_a_line() {
        let d = detector();
        let sections = summary(&d, &["xem CHƯƠNG II. ở trên"]);
        assert_eq!(sections, vec![("Giới thiệu".to_string(), vec![1])]);
    }

    #[test]
    fn decomposed_heading_is_normalized() {
        let d = detector();
        // "CHƯƠNG" with combining horn, "Tề" with combining grave
        let sections = summary(&d, &["CHU\u{31b}O\u{31b}NG V. Te\u{302}\u{300} vật"]);
        assert_eq!(sections[0].0, "CHƯƠNG V. Tề vật");
    }

    #[test]
    fn invalid_heading_pattern() {
        let cleaner = PageCleaner::new(&[], &[]).unwrap();
        let result = SectionDetector::new(cleaner, "Mở đầu".to_string())
            .with_title_patterns(&["(unclosed".to_string()]);
        assert!(matches!(result, Err(Error::Regex(_))));
    }

    #[test]
    fn prose_mention_is_not_a_boundary() {
        let d = detector();
        let sections = summary(
            &d,
            &[
                "LỜI NÓI ĐẦU",
                "Bảy thiên đầu gọi là nội thiên, còn lại là ngoại thiên.",
            ],
        );
        assert_eq!(sections, vec![("LỜI NÓI ĐẦU".to_string(), vec![1, 2])]);
    }

    #[test]
    fn no_empty_seed_section() {
        let d = detector();
        let sections = summary(&d, &["TIÊU DIÊU DU", "Bắc Minh có con cá"]);
        assert_eq!(sections, vec![("TIÊU DIÊU DU".to_string(), vec![1, 2])]);
    }

    #[test]
    fn priority_order_wins() {
        let d = detector();
        let sections = summary(&d, &["TIÊU DIÊU DU thuộc NỘI THIÊN"]);
        assert_eq!(sections[0].0, "NỘI THIÊN");
    }

    #[test]
    fn case_insensitive_title() {
        let d = detector();
        let detected = d.detect(&RawPage::from_texts(["Tề Vật Luận\n\nTrang Tử nói"]));
        assert_eq!(detected[0].name, "TỀ VẬT LUẬN");
        assert!(detected[0].pages[0].text.starts_with("TỀ VẬT LUẬN"));
    }

    #[test]
    fn repeated_title_reopens() {
        let d = detector();
        let sections = summary(&d, &["TIÊU DIÊU DU", "TIÊU DIÊU DU (tiếp)"]);
        assert_eq!(
            sections,
            vec![
                ("TIÊU DIÊU DU".to_string(), vec![1]),
                ("TIÊU DIÊU DU".to_string(), vec![2]),
            ]
        );
    }

    #[test]
    fn pages_are_cleaned() {
        let d = detector();
        let detected = d.detect(&RawPage::from_texts(["dòng một\ndòng hai\n\n12\nTrang 12"]));
        assert_eq!(detected[0].pages[0].text, "dòng một dòng hai");

        let detected = d.detect(&RawPage::from_texts(["Bắc   Minh\t\tcó cá &amp;amp;amp; Côn"]));
        assert_eq!(detected[0].pages[0].text, "Bắc Minh có cá & Côn");
    }

    #[test]
    fn custom_default_name() {
        let cleaner = PageCleaner::new(&["CHƯƠNG MỘT".to_string()], &[]).unwrap();
        let d = SectionDetector::new(cleaner, "Mở đầu".to_string());
        let sections = summary(&d, &["lời tựa", "CHƯƠNG MỘT"]);
        assert_eq!(sections[0].0, "Mở đầu");
        assert_eq!(sections[1].0, "CHƯƠNG MỘT");
    }

    #[test]
    fn no_pages() {
        assert!(detector().detect(&[]).is_empty());
    }
}
