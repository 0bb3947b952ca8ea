/*! Text transformers.

Normalizes and cleans page and sentence text coming out of PDF extraction or OCR.

- [normalize] canonicalizes Unicode (NFC) and trims.
- [TextCleaner] additionally decodes character references and strips OCR noise, used on sentences.
- [PageCleaner] works on whole pages: restores section titles, strips running headers/footers
  and joins wrapped lines while keeping paragraph breaks.
!*/
mod cleaner;
mod normalize;
mod page;

pub use cleaner::TextCleaner;
pub use normalize::{decode_entities, normalize};
pub use page::PageCleaner;
