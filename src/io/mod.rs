/*!
# IO utilities

Document saving and loading.

[write_document] dispatches on [Format] to the writers of [writer].
!*/
pub mod reader;
pub mod writer;

use std::{fmt, path::Path, str::FromStr};

use log::info;

use crate::{error::Error, pipelines::Document};

use writer::{JsonWriter, Layout, TextWriter, WriterTrait, XmlWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xml,
    Json,
    Text(Layout),
}

impl Format {
    pub const NAMES: [&'static str; 5] = ["xml", "json", "aligned", "inline", "table"];
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xml" => Ok(Self::Xml),
            "json" => Ok(Self::Json),
            layout => layout
                .parse()
                .map(Self::Text)
                .map_err(|_| Error::Custom(format!("unknown format {:?}", s))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml => f.write_str("xml"),
            Self::Json => f.write_str("json"),
            Self::Text(layout) => write!(f, "{}", layout),
        }
    }
}

/// Writes `document` at `dst` in `format`, replacing any existing file.
pub fn write_document(document: &Document, dst: &Path, format: Format) -> Result<(), Error> {
    info!("writing {} to {:?}", format, dst);
    match format {
        Format::Xml => XmlWriter::create(dst)?.write(document),
        Format::Json => JsonWriter::create(dst)?.write(document),
        Format::Text(layout) => TextWriter::create(dst, layout)?.write(document),
    }
}
