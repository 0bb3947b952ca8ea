/*! Named entity recognition

Entities are recognized on the Vietnamese side of sentence pairs by an external [Recognizer].
Its output is filtered on an allow-list of [EntityKind]s and adjacent entities are merged
(see [merge_adjacent]) by the [EntityAnnotator].
!*/
mod annotator;
mod entity;
mod merge;
mod recognizer;

pub use annotator::EntityAnnotator;
pub use entity::{Entity, EntityKind, RawEntity};
pub use merge::merge_adjacent;
pub use recognizer::{
    parse_llm_response, Completion, LlmRecognizer, PrecomputedRecognizer, Recognizer, NER_PROMPT,
};
