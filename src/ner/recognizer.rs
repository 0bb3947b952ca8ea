/*! NER collaborators.

Model inference happens outside of this crate. A [Recognizer] is anything that answers
`predict(text)` with a list of [RawEntity].

- [PrecomputedRecognizer] serves predictions computed offline, stored as JSON lines:
  ```json
  {"text": "Trang Tử nói.", "entities": [{"start": 0, "end": 8, "word": "Trang Tử", "entity_group": "PER"}]}
  ```
- [LlmRecognizer] asks a chat model through a [Completion] client and parses its answer with [parse_llm_response].
!*/
use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use serde::Deserialize;

use crate::error::Error;

use super::RawEntity;

lazy_static! {
    static ref CODE_FENCE: Regex = Regex::new(r"^```(?:json)?\s*|\s*```$").unwrap();
    static ref TRAILING_COMMA: Regex = Regex::new(r",(\s*[\]}])").unwrap();
}

/// Instructions sent to chat models along with the sentence.
pub const NER_PROMPT: &str = "Nhiệm vụ: Nhận diện thực thể có tên (NER) trong văn bản tiếng Việt.

Hãy trích xuất các thực thể trong văn bản và phân loại chúng vào một trong các nhóm sau:
- PER: Tên người
- LOC: Địa danh
- ORG: Tổ chức
- TME: Thời gian
- TITLE: Tựa đề
- NUM: Số

Trả về kết quả dưới dạng danh sách JSON. Mỗi thực thể gồm các trường:
- start: vị trí bắt đầu (ký tự)
- end: vị trí kết thúc (ký tự)
- word: văn bản của thực thể
- entity_group: loại thực thể

Chỉ trả về JSON. Nếu không có thực thể, trả về `[]`.";

pub trait Recognizer {
    fn predict(&self, text: &str) -> Result<Vec<RawEntity>, Error>;
}

#[derive(Debug, Deserialize)]
struct Prediction {
    text: String,
    #[serde(default)]
    entities: Vec<RawEntity>,
}

/// Predictions computed ahead of time, looked up by sentence.
#[derive(Debug, Default)]
pub struct PrecomputedRecognizer {
    predictions: HashMap<String, Vec<RawEntity>>,
}

impl PrecomputedRecognizer {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let recognizer = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            "loaded predictions for {} sentences from {:?}",
            recognizer.predictions.len(),
            path
        );
        Ok(recognizer)
    }

    /// Reads JSON lines. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut predictions = HashMap::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let prediction: Prediction = serde_json::from_str(&line)?;
            predictions.insert(prediction.text, prediction.entities);
        }
        Ok(Self { predictions })
    }
}

impl Recognizer for PrecomputedRecognizer {
    /// Sentences without a recorded prediction have no entities.
    fn predict(&self, text: &str) -> Result<Vec<RawEntity>, Error> {
        match self.predictions.get(text) {
            Some(entities) => Ok(entities.clone()),
            None => {
                debug!("no prediction for {:?}", text);
                Ok(Vec::new())
            }
        }
    }
}

/// Parses a chat model answer: an optional ```` ```json ```` fence around a JSON list.
/// Trailing commas, which models like to emit, are tolerated.
pub fn parse_llm_response(response: &str) -> Result<Vec<RawEntity>, Error> {
    let json = CODE_FENCE.replace_all(response.trim(), "");
    let json = TRAILING_COMMA.replace_all(&json, "$1");
    serde_json::from_str(&json).map_err(|e| Error::Ner(format!("unparseable answer: {}", e)))
}

/// Chat model client.
pub trait Completion {
    fn complete(&self, system: &str, user: &str) -> Result<String, Error>;
}

pub struct LlmRecognizer<C: Completion> {
    client: C,
}

impl<C: Completion> LlmRecognizer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: Completion> Recognizer for LlmRecognizer<C> {
    fn predict(&self, text: &str) -> Result<Vec<RawEntity>, Error> {
        let answer = self.client.complete(NER_PROMPT, text)?;
        parse_llm_response(&answer)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{
        parse_llm_response, Completion, LlmRecognizer, PrecomputedRecognizer, Recognizer,
    };
    use crate::{error::Error, ner::RawEntity};

    #[test]
    fn fenced_answer() {
        let answer = "```json\n[\n  {\n    \"start\": 2,\n    \"end\": 5,\n    \"word\": \"TRANG\",\n    \"entity_group\": \"PER\",\n  },\n]\n```";
        let entities = parse_llm_response(answer).unwrap();
        assert_eq!(entities, vec![RawEntity::new(2, 5, "TRANG", "PER")]);
    }

    #[test]
    fn bare_answer() {
        assert!(parse_llm_response("[]").unwrap().is_empty());
        assert!(parse_llm_response("  ```\n[]\n```  ").unwrap().is_empty());
    }

    #[test]
    fn garbage_answer() {
        assert!(matches!(
            parse_llm_response("Xin lỗi, tôi không biết."),
            Err(Error::Ner(_))
        ));
    }

    #[test]
    fn precomputed() {
        let lines = r#"{"text": "Trang Tử nói.", "entities": [{"start": 0, "end": 8, "word": "Trang Tử", "entity_group": "PER"}]}

{"text": "Không có gì."}
"#;
        let r = PrecomputedRecognizer::from_reader(Cursor::new(lines)).unwrap();
        assert_eq!(
            r.predict("Trang Tử nói.").unwrap(),
            vec![RawEntity::new(0, 8, "Trang Tử", "PER")]
        );
        assert!(r.predict("Không có gì.").unwrap().is_empty());
        assert!(r.predict("Câu lạ.").unwrap().is_empty());
    }

    #[test]
    fn precomputed_bad_line() {
        let r = PrecomputedRecognizer::from_reader(Cursor::new("{not json}\n"));
        assert!(r.is_err());
    }

    struct CannedClient(&'static str);

    impl Completion for CannedClient {
        fn complete(&self, system: &str, _user: &str) -> Result<String, Error> {
            assert!(system.contains("entity_group"));
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn llm_recognizer() {
        let r = LlmRecognizer::new(CannedClient(
            "```json\n[{\"start\": 0, \"end\": 8, \"word\": \"Trang Tử\", \"entity_group\": \"PER\"}]\n```",
        ));
        assert_eq!(
            r.predict("Trang Tử nói.").unwrap(),
            vec![RawEntity::new(0, 8, "Trang Tử", "PER")]
        );
    }
}
