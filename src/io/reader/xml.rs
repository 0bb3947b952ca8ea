/*! XML import.

Parses the layout written by [crate::io::writer::XmlWriter] back into a [Document].
Identifiers are not read: sections, pages and pairs are numbered by their position.
Text is not trimmed: indentation between elements is skipped, leaf contents are kept verbatim.
!*/
use std::path::Path;

use log::debug;
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

use crate::{
    error::Error,
    ner::Entity,
    pairing::SentencePair,
    pipelines::{AnnotatedPair, BookMetadata, Document, PageNode, SectionNode},
};

/// `STC` element being read.
#[derive(Debug, Default)]
struct PairBuilder {
    chinese: Option<String>,
    vietnamese: Option<String>,
    entities: Vec<Entity>,
}

#[derive(Debug, Default)]
struct DocumentBuilder {
    /// names of currently open elements
    stack: Vec<String>,
    code: Option<String>,
    metadata: BookMetadata,
    sections: Vec<SectionNode>,
    pair: Option<PairBuilder>,
    entity: Option<Entity>,
}

fn invalid(msg: &str) -> Error {
    Error::InvalidDocument(msg.to_string())
}

fn attribute(element: &BytesStart, name: &str) -> Result<String, Error> {
    match element
        .try_get_attribute(name)
        .map_err(quick_xml::Error::from)?
    {
        Some(attr) => Ok(attr.unescape_value()?.into_owned()),
        None => Err(Error::InvalidDocument(format!(
            "missing {} attribute on {}",
            name,
            String::from_utf8_lossy(element.name().as_ref())
        ))),
    }
}

fn offset(element: &BytesStart, name: &str) -> Result<usize, Error> {
    let value = attribute(element, name)?;
    value
        .parse()
        .map_err(|_| Error::InvalidDocument(format!("invalid {} offset {:?}", name, value)))
}

impl DocumentBuilder {
    fn current_page(&mut self) -> Result<&mut PageNode, Error> {
        self.sections
            .last_mut()
            .and_then(|section| section.pages.last_mut())
            .ok_or_else(|| invalid("STC outside of PAGE"))
    }

    fn current_pair(&mut self) -> Result<&mut PairBuilder, Error> {
        self.pair
            .as_mut()
            .ok_or_else(|| invalid("sentence content outside of STC"))
    }

    fn open(&mut self, element: &BytesStart) -> Result<(), Error> {
        let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
        match name.as_str() {
            "FILE" => self.code = Some(attribute(element, "ID")?),
            "SECT" => self
                .sections
                .push(SectionNode::new(attribute(element, "NAME")?)),
            "PAGE" => self
                .sections
                .last_mut()
                .ok_or_else(|| invalid("PAGE outside of SECT"))?
                .pages
                .push(PageNode::default()),
            "STC" => self.pair = Some(PairBuilder::default()),
            "ENTITY" => {
                self.entity = Some(Entity {
                    start: offset(element, "START")?,
                    end: offset(element, "END")?,
                    word: String::new(),
                    kind: attribute(element, "TYPE")?.parse()?,
                })
            }
            _ => (),
        }
        self.stack.push(name);
        Ok(())
    }

    fn text(&mut self, text: String) -> Result<(), Error> {
        let depth = self.stack.len();
        let (parent, current) = match depth {
            0 => return Ok(()),
            1 => ("", self.stack[0].clone()),
            _ => (self.stack[depth - 2].as_str(), self.stack[depth - 1].clone()),
        };

        if parent == "meta" {
            if let Some(field) = self.metadata.field_mut(&current) {
                *field = text;
            }
            return Ok(());
        }

        match current.as_str() {
            "C" => self.current_pair()?.chinese = Some(text),
            "V" => self.current_pair()?.vietnamese = Some(text),
            "ENTITY" => {
                if let Some(entity) = self.entity.as_mut() {
                    entity.word = text;
                }
            }
            _ if text.trim().is_empty() => (),
            // raw text directly in STC is a Vietnamese sentence
            "STC" => self.current_pair()?.vietnamese = Some(text),
            other => debug!("ignoring text in {}", other),
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        match self.stack.pop().as_deref() {
            Some("STC") => {
                let builder = self.pair.take().ok_or_else(|| invalid("unbalanced STC"))?;
                let pair = SentencePair::new(builder.chinese, builder.vietnamese)?;
                self.current_page()?
                    .pairs
                    .push(AnnotatedPair::new(pair, builder.entities));
            }
            Some("ENTITY") => {
                let entity = self
                    .entity
                    .take()
                    .ok_or_else(|| invalid("unbalanced ENTITY"))?;
                self.current_pair()?.entities.push(entity);
            }
            _ => (),
        }
        Ok(())
    }

    fn build(self) -> Result<Document, Error> {
        let code = self.code.ok_or_else(|| invalid("no FILE element"))?;
        Ok(Document::new(code, self.metadata, self.sections))
    }
}

/// Parses an XML string.
pub fn from_xml(xml: &str) -> Result<Document, Error> {
    let mut reader = Reader::from_str(xml);

    let mut builder = DocumentBuilder::default();
    loop {
        match reader.read_event()? {
            Event::Start(element) => builder.open(&element)?,
            Event::Empty(element) => {
                builder.open(&element)?;
                builder.close()?;
            }
            Event::Text(text) => builder.text(text.unescape()?.into_owned())?,
            Event::End(_) => builder.close()?,
            Event::Eof => break,
            _ => (),
        }
    }

    builder.build()
}

/// Reads an XML file.
pub fn read_xml(src: &Path) -> Result<Document, Error> {
    let xml = std::fs::read_to_string(src)?;
    from_xml(&xml)
}

#[cfg(test)]
mod tests {
    use super::from_xml;
    use crate::{
        error::Error,
        ner::{Entity, EntityKind},
        io::writer::to_xml,
        pairing::SentencePair,
        pipelines::{BookMetadata, Document},
    };

    const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<root>
  <FILE ID="PAS_003">
    <meta>
      <TITLE>Nam Hoa Kinh</TITLE>
      <VOLUME/>
      <AUTHOR>Trang Tử</AUTHOR>
    </meta>
    <SECT ID="PAS_003.001" NAME="TIÊU DIÊU DU">
      <PAGE ID="PAS_003.001.001">
        <STC ID="PAS_003.001.001.01">
          <C>北冥有魚</C>
          <V>Biển Bắc có cá</V>
          <NER>
            <ENTITY TYPE="LOC" START="0" END="8">Biển Bắc</ENTITY>
          </NER>
        </STC>
        <STC ID="PAS_003.001.001.02">Tên là &lt;Côn&gt;</STC>
      </PAGE>
      <PAGE ID="PAS_003.001.002">
      </PAGE>
    </SECT>
  </FILE>
</root>
"#;

    #[test]
    fn reads_layout() {
        let doc = from_xml(XML).unwrap();
        assert_eq!(doc.code(), "PAS_003");
        assert_eq!(doc.metadata().title, "Nam Hoa Kinh");
        assert_eq!(doc.metadata().author, "Trang Tử");
        assert_eq!(doc.metadata().volume, "");

        let section = &doc.sections()[0];
        assert_eq!(section.name, "TIÊU DIÊU DU");
        assert_eq!(section.pages.len(), 2);
        assert!(section.pages[1].pairs.is_empty());

        let pairs = &section.pages[0].pairs;
        assert_eq!(
            pairs[0].pair,
            SentencePair::Both {
                chinese: "北冥有魚".to_string(),
                vietnamese: "Biển Bắc có cá".to_string()
            }
        );
        assert_eq!(
            pairs[0].entities,
            vec![Entity::new(0, 8, "Biển Bắc", EntityKind::Loc)]
        );
        assert_eq!(
            pairs[1].pair,
            SentencePair::VietnameseOnly("Tên là <Côn>".to_string())
        );
    }

    #[test]
    fn metadata_kept_verbatim() {
        let mut metadata = BookMetadata::nam_hoa_kinh();
        metadata.title = "  Nam Hoa Kinh".to_string();
        metadata.source = "   ".to_string();
        let doc = Document::new("PAS_003".to_string(), metadata, vec![]);

        let back = from_xml(&to_xml(&doc).unwrap()).unwrap();
        assert_eq!(back.metadata().title, "  Nam Hoa Kinh");
        assert_eq!(back.metadata().source, "   ");
        assert_eq!(back, doc);
    }

    #[test]
    fn empty_stc() {
        let xml = r#"<root><FILE ID="X"><SECT ID="X.001" NAME="A"><PAGE ID="X.001.001"><STC ID="X.001.001.01"/></PAGE></SECT></FILE></root>"#;
        assert!(matches!(from_xml(xml), Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            from_xml("<root></root>"),
            Err(Error::InvalidDocument(_))
        ));
    }

    #[test]
    fn stc_outside_page() {
        let xml = r#"<root><FILE ID="X"><STC ID="1">Trang Tử nói</STC></FILE></root>"#;
        assert!(from_xml(xml).is_err());
    }

    #[test]
    fn bad_offset() {
        let xml = r#"<root><FILE ID="X"><SECT NAME="A"><PAGE><STC><V>Trang Tử</V><NER><ENTITY TYPE="PER" START="x" END="8">Trang Tử</ENTITY></NER></STC></PAGE></SECT></FILE></root>"#;
        assert!(from_xml(xml).is_err());
    }

    #[test]
    fn malformed() {
        assert!(from_xml("<root><FILE ID=\"X\"></root>").is_err());
    }
}
