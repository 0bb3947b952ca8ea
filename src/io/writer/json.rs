//! Pretty JSON export, following the serde layout of [Document].
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{error::Error, pipelines::Document};

use super::{writertrait, WriterTrait};

pub struct JsonWriter<W: Write> {
    inner: W,
}

impl JsonWriter<BufWriter<File>> {
    pub fn create(dst: &Path) -> Result<Self, Error> {
        Ok(Self::new(writertrait::create(dst)?))
    }
}

impl<W: Write> JsonWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> WriterTrait for JsonWriter<W> {
    fn write(&mut self, document: &Document) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut self.inner, document)?;
        writertrait::finish(&mut self.inner)
    }
}
