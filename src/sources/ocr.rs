//! OCR-backed page source.
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;

use super::{list_pages, PageSource, RawPage};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "tif", "tiff"];

/// OCR engine capability: turns a page image into plain text.
pub trait Ocr {
    fn recognize(&self, image: &Path) -> Result<String, Error>;
}

/// Pages recognized from a folder of page images.
///
/// A recognition failure aborts the whole read: a missing page would shift every page after it.
pub struct OcrPages<O: Ocr> {
    src: PathBuf,
    engine: O,
}

impl<O: Ocr> OcrPages<O> {
    pub fn new(src: PathBuf, engine: O) -> Self {
        Self { src, engine }
    }
}

impl<O: Ocr> PageSource for OcrPages<O> {
    fn pages(&self) -> Result<Vec<RawPage>, Error> {
        let images = list_pages(&self.src, &IMAGE_EXTENSIONS)?;
        info!("running ocr on {} images from {:?}", images.len(), self.src);

        let texts = images
            .iter()
            .map(|image| {
                debug!("ocr on {:?}", image);
                self.engine.recognize(image)
            })
            .collect::<Result<Vec<String>, Error>>()?;

        Ok(RawPage::from_texts(texts))
    }
}
