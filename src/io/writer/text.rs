/*! Plain-text rendering of sentence pairs.

Three layouts are available, see [Layout]. Entities are not rendered.
!*/
use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use itertools::Itertools;

use crate::{error::Error, pairing::SentencePair, pipelines::Document};

use super::{writertrait, WriterTrait};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Vietnamese column padded to the longest sentence, then `|` and Chinese.
    Aligned,
    /// `Vietnamese (Chinese)`, pairs separated by a space.
    Inline,
    /// Markdown table, `-` standing for missing sides.
    Table,
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aligned" => Ok(Self::Aligned),
            "inline" => Ok(Self::Inline),
            "table" => Ok(Self::Table),
            other => Err(Error::Custom(format!("unknown layout {:?}", other))),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aligned => "aligned",
            Self::Inline => "inline",
            Self::Table => "table",
        };
        f.write_str(name)
    }
}

/// Renders `pairs` with `layout`.
pub fn render<'a, I>(pairs: I, layout: Layout) -> String
where
    I: IntoIterator<Item = &'a SentencePair>,
{
    let pairs: Vec<&SentencePair> = pairs.into_iter().collect();
    match layout {
        Layout::Aligned => render_aligned(&pairs),
        Layout::Inline => render_inline(&pairs),
        Layout::Table => render_table(&pairs),
    }
}

fn render_aligned(pairs: &[&SentencePair]) -> String {
    let width = pairs
        .iter()
        .flat_map(|pair| [pair.chinese(), pair.vietnamese()])
        .flatten()
        .map(|side| side.chars().count())
        .max()
        .unwrap_or(0);

    pairs
        .iter()
        .map(|pair| match (pair.vietnamese(), pair.chinese()) {
            (Some(vi), Some(zh)) => format!("{:<width$} | {}", vi, zh, width = width),
            (Some(vi), None) => format!("{:<width$} |", vi, width = width),
            (None, Some(zh)) => format!("{:width$} | {}", "", zh, width = width),
            (None, None) => String::new(),
        })
        .join("\n")
}

fn render_inline(pairs: &[&SentencePair]) -> String {
    pairs
        .iter()
        .map(|pair| match (pair.vietnamese(), pair.chinese()) {
            (Some(vi), Some(zh)) => format!("{} ({})", vi, zh),
            (Some(vi), None) => vi.to_string(),
            (None, Some(zh)) => format!("({})", zh),
            (None, None) => String::new(),
        })
        .join(" ")
}

fn render_table(pairs: &[&SentencePair]) -> String {
    let mut lines = vec![
        "| Vietnamese | Chinese |".to_string(),
        "|------------|----------|".to_string(),
    ];
    lines.extend(pairs.iter().map(|pair| {
        format!(
            "| {} | {} |",
            pair.vietnamese().unwrap_or("-"),
            pair.chinese().unwrap_or("-")
        )
    }));
    lines.join("\n")
}

pub struct TextWriter<W: Write> {
    inner: W,
    layout: Layout,
}

impl TextWriter<BufWriter<File>> {
    pub fn create(dst: &Path, layout: Layout) -> Result<Self, Error> {
        Ok(Self::new(writertrait::create(dst)?, layout))
    }
}

impl<W: Write> TextWriter<W> {
    pub fn new(inner: W, layout: Layout) -> Self {
        Self { inner, layout }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> WriterTrait for TextWriter<W> {
    fn write(&mut self, document: &Document) -> Result<(), Error> {
        let text = render(document.pairs().map(|p| &p.pair), self.layout);
        self.inner.write_all(text.as_bytes())?;
        writertrait::finish(&mut self.inner)
    }
}
