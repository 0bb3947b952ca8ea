//! # Namhoa
//!
//! Structures scanned bilingual (classical Chinese / Vietnamese) books:
//! pages are cleaned, grouped into sections, split into sentences and paired,
//! then exported as XML (or JSON, or plain text).
//!
//! ## Getting started
//!
//! ```sh
//! namhoa 0.1.0
//! bilingual classical text structuring tool.
//!
//! USAGE:
//!     namhoa <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     build       Build a document from book pages
//!     help        Prints this message or the help of the given subcommand(s)
//!     sections    List detected sections
//! ```
//!
//! Logging is controlled by `RUST_LOG` (`RUST_LOG=info namhoa build book.txt book.xml`).
use std::path::Path;

use namhoa::{
    config::Config,
    error::Error,
    io::write_document,
    ner::{EntityAnnotator, PrecomputedRecognizer},
    pipelines::{Bilingual, Pipeline},
    sources::TextPages,
};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    match path {
        Some(path) => Config::from_path(path),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Namhoa::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Namhoa::Build(b) => {
            let mut config = load_config(b.config.as_deref())?;
            if let Some(code) = b.code {
                config.code = code;
            }

            let mut pipeline = Bilingual::new(TextPages::new(b.src), &config)?;
            if let Some(entities) = b.entities {
                let recognizer = PrecomputedRecognizer::from_path(&entities)?;
                let annotator = EntityAnnotator::from_config(Box::new(recognizer), &config)?;
                pipeline = pipeline.with_annotator(annotator);
            }

            let document = pipeline.run()?;
            write_document(&document, &b.dst, b.format)?;
        }

        cli::Namhoa::Sections(s) => {
            let config = load_config(s.config.as_deref())?;
            let pipeline = Bilingual::new(TextPages::new(s.src), &config)?;
            for section in pipeline.sections()? {
                let first = section.pages.first().map_or(0, |p| p.index);
                let last = section.pages.last().map_or(0, |p| p.index);
                println!(
                    "{}\t{} pages\t({}-{})",
                    section.name,
                    section.pages.len(),
                    first,
                    last
                );
            }
        }
    };
    Ok(())
}
