/*! XML export.

Writes a [Document] with the following layout, which other tools depend on:

```xml
<?xml version="1.0" encoding="UTF-8"?>
<root>
  <FILE ID="PAS_003">
    <meta>
      <TITLE>Nam Hoa Kinh</TITLE>
      <VOLUME/>
      ...
    </meta>
    <SECT ID="PAS_003.001" NAME="TIÊU DIÊU DU">
      <PAGE ID="PAS_003.001.001">
        <STC ID="PAS_003.001.001.01">
          <C>北冥有魚，其名為鯤。</C>
          <V>Biển Bắc có loài cá, tên là Côn.</V>
          <NER>
            <ENTITY TYPE="LOC" START="0" END="8">Biển Bắc</ENTITY>
          </NER>
        </STC>
        <STC ID="PAS_003.001.001.02">Vietnamese sentence without entities</STC>
      </PAGE>
    </SECT>
  </FILE>
</root>
```
!*/
use std::{fs::File, io::BufWriter, io::Write, path::Path};

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::{
    error::Error,
    ner::Entity,
    pairing::SentencePair,
    pipelines::{page_id, pair_id, section_id, AnnotatedPair, BookMetadata, Document},
};

use super::{writertrait, WriterTrait};

pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
}

impl XmlWriter<BufWriter<File>> {
    pub fn create(dst: &Path) -> Result<Self, Error> {
        Ok(Self::new(writertrait::create(dst)?))
    }
}

impl<W: Write> XmlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new_with_indent(inner, b' ', 2),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), Error> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Start(element))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), Error> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), Error> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// `<name attributes…>text</name>`, or `<name attributes…/>` if `text` is empty.
    fn text_element(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> Result<(), Error> {
        if text.is_empty() {
            let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
            self.writer.write_event(Event::Empty(element))?;
            return Ok(());
        }
        self.start(name, attributes)?;
        self.text(text)?;
        self.end(name)
    }

    fn write_meta(&mut self, metadata: &BookMetadata) -> Result<(), Error> {
        self.start("meta", &[])?;
        for (tag, value) in metadata.fields() {
            self.text_element(tag, &[], value)?;
        }
        self.end("meta")
    }

    fn write_entities(&mut self, entities: &[Entity]) -> Result<(), Error> {
        self.start("NER", &[])?;
        for entity in entities {
            let kind = entity.kind.to_string();
            let start = entity.start.to_string();
            let end = entity.end.to_string();
            self.text_element(
                "ENTITY",
                &[
                    ("TYPE", kind.as_str()),
                    ("START", start.as_str()),
                    ("END", end.as_str()),
                ],
                &entity.word,
            )?;
        }
        self.end("NER")
    }

    fn write_pair(&mut self, id: &str, annotated: &AnnotatedPair) -> Result<(), Error> {
        let attributes = [("ID", id)];
        let entities = &annotated.entities;

        match &annotated.pair {
            SentencePair::VietnameseOnly(vietnamese) if entities.is_empty() => {
                return self.text_element("STC", &attributes, vietnamese);
            }
            SentencePair::VietnameseOnly(vietnamese) => {
                self.start("STC", &attributes)?;
                self.text_element("V", &[], vietnamese)?;
            }
            SentencePair::Both {
                chinese,
                vietnamese,
            } => {
                self.start("STC", &attributes)?;
                self.text_element("C", &[], chinese)?;
                self.text_element("V", &[], vietnamese)?;
            }
            SentencePair::ChineseOnly(chinese) => {
                self.start("STC", &attributes)?;
                self.text_element("C", &[], chinese)?;
            }
        }

        if !entities.is_empty() {
            self.write_entities(entities)?;
        }
        self.end("STC")
    }
}

impl<W: Write> WriterTrait for XmlWriter<W> {
    fn write(&mut self, document: &Document) -> Result<(), Error> {
        let code = document.code();

        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.start("root", &[])?;
        self.start("FILE", &[("ID", code)])?;
        self.write_meta(document.metadata())?;

        for (s, section) in document.sections().iter().enumerate() {
            let sect_id = section_id(code, s + 1);
            self.start(
                "SECT",
                &[("ID", sect_id.as_str()), ("NAME", section.name.as_str())],
            )?;

            for (p, page) in section.pages.iter().enumerate() {
                let pid = page_id(code, s + 1, p + 1);
                self.start("PAGE", &[("ID", pid.as_str())])?;
                for (i, pair) in page.pairs.iter().enumerate() {
                    self.write_pair(&pair_id(code, s + 1, p + 1, i + 1), pair)?;
                }
                self.end("PAGE")?;
            }

            self.end("SECT")?;
        }

        self.end("FILE")?;
        self.end("root")?;
        writertrait::finish(self.writer.get_mut())
    }
}

/// Serializes `document` to an XML string.
pub fn to_xml(document: &Document) -> Result<String, Error> {
    let mut writer = XmlWriter::new(Vec::new());
    writer.write(document)?;
    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::Custom(format!("non utf-8 xml output: {}", e)))
}
