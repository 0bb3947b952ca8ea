/*! # Namhoa

Structuring of scanned bilingual books (classical Chinese source, Vietnamese translation).

Pages ([sources]) are cleaned ([transformers]), grouped into sections and split into sentences ([segmentation]).
Sentences are told apart by script ([identifiers]) and paired ([pairing]), the Vietnamese side being
optionally annotated with named entities ([ner]). [pipelines] wires everything into a [pipelines::Document]
that [io] writes as XML, JSON or text.

```no_run
use namhoa::{
    config::Config,
    io::{write_document, Format},
    pipelines::{Bilingual, Pipeline},
    sources::TextPages,
};

# fn main() -> Result<(), namhoa::error::Error> {
let config = Config::default();
let pipeline = Bilingual::new(TextPages::new("nam_hoa_kinh.txt".into()), &config)?;
let document = pipeline.run()?;
write_document(&document, "nam_hoa_kinh.xml".as_ref(), Format::Xml)?;
# Ok(())
# }
```
!*/
pub mod config;
pub mod error;
pub mod filtering;
pub mod identifiers;
pub mod io;
pub mod ner;
pub mod pairing;
pub mod pipelines;
pub mod segmentation;
pub mod sources;
pub mod transformers;
