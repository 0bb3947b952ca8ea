/*! Page sources.

Pages come out of external collaborators (PDF text extraction, OCR engines) as plain strings.
Anything that can produce an ordered list of [RawPage] implements [PageSource].

- [TextPages] reads already-extracted text: a single file with form-feed separated pages
  (what `pdftotext` produces), or a folder of one `.txt` file per page.
- [OcrPages] runs an [Ocr] engine over a folder of page images.
!*/
mod ocr;
mod text;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use ocr::{Ocr, OcrPages};
pub use text::TextPages;

/// A page as produced by the extraction/OCR collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    /// 1-based page number
    pub index: usize,
    pub text: String,
}

impl RawPage {
    pub fn new(index: usize, text: String) -> Self {
        Self { index, text }
    }

    /// Numbers pages from 1, in iteration order.
    pub fn from_texts<I, S>(texts: I) -> Vec<RawPage>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(idx, text)| RawPage::new(idx + 1, text.into()))
            .collect()
    }
}

pub trait PageSource {
    /// Returns every page, in reading order. An empty source gives an empty [Vec].
    fn pages(&self) -> Result<Vec<RawPage>, Error>;
}

/// Lists files of `dir` matching any of `extensions`, ordered by page number.
///
/// Files are ordered by the number their stem starts with (`2.txt` before `10.txt`),
/// files without a number come last, in lexicographic order.
fn list_pages(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, Error> {
    let dir = glob::Pattern::escape(&dir.to_string_lossy());
    let mut paths = Vec::new();
    for ext in extensions {
        for path in glob::glob(&format!("{}/*.{}", dir, ext))? {
            paths.push(path?);
        }
    }

    paths.sort_by_key(|path| (page_number(path).unwrap_or(usize::MAX), path.clone()));
    Ok(paths)
}

/// Extract page number from a page file path (`page-012.txt`, `12.png`…).
fn page_number(path: &Path) -> Option<usize> {
    let stem = path.file_stem()?.to_str()?;
    let digits: String = stem
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
