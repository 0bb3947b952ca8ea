//! Already-extracted page text.
use std::path::PathBuf;

use log::{debug, info};

use crate::error::Error;

use super::{list_pages, PageSource, RawPage};

/// Page separator used by `pdftotext` and most OCR exporters.
const FORM_FEED: char = '\u{000C}';

/// Text pages, either from a single form-feed separated file or from a folder of `.txt` pages.
#[derive(Debug, Clone)]
pub struct TextPages {
    src: PathBuf,
}

impl TextPages {
    pub fn new(src: PathBuf) -> Self {
        Self { src }
    }

    fn pages_from_dir(&self) -> Result<Vec<RawPage>, Error> {
        let texts = list_pages(&self.src, &["txt"])?
            .into_iter()
            .map(|path| {
                debug!("reading page file {:?}", path);
                std::fs::read_to_string(path)
            })
            .collect::<Result<Vec<String>, _>>()?;

        Ok(RawPage::from_texts(texts))
    }

    fn pages_from_file(&self) -> Result<Vec<RawPage>, Error> {
        let content = std::fs::read_to_string(&self.src)?;
        let mut texts: Vec<&str> = content.split(FORM_FEED).collect();

        // extractors terminate the last page with a form feed too
        if texts.last().map_or(false, |last| last.trim().is_empty()) {
            texts.pop();
        }

        Ok(RawPage::from_texts(texts))
    }
}

impl PageSource for TextPages {
    fn pages(&self) -> Result<Vec<RawPage>, Error> {
        let pages = if self.src.is_dir() {
            self.pages_from_dir()?
        } else {
            self.pages_from_file()?
        };
        info!("read {} pages from {:?}", pages.len(), self.src);
        Ok(pages)
    }
}
