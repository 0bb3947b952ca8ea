use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{error::Error, pipelines::Document};

pub trait WriterTrait {
    fn write(&mut self, document: &Document) -> Result<(), Error>;
}

/// Buffered handle on a freshly created (or truncated) file.
pub(crate) fn create(dst: &Path) -> Result<BufWriter<File>, Error> {
    Ok(BufWriter::new(File::create(dst)?))
}

/// Flushes once the document is written.
pub(crate) fn finish<W: Write>(inner: &mut W) -> Result<(), Error> {
    inner.write_all(b"\n")?;
    inner.flush()?;
    Ok(())
}
