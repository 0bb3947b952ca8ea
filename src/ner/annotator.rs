//! Entity annotation of Vietnamese sentences.
use log::{debug, warn};

use crate::{config::Config, error::Error};

use super::{merge_adjacent, Entity, EntityKind, Recognizer};

/// Runs a [Recognizer], keeps allowed entity kinds and merges adjacent entities.
///
/// Recognizer failures are not fatal: the sentence is left without entities.
pub struct EntityAnnotator {
    recognizer: Box<dyn Recognizer>,
    allowed: Vec<EntityKind>,
}

impl EntityAnnotator {
    pub fn new(recognizer: Box<dyn Recognizer>, allowed: Vec<EntityKind>) -> Self {
        Self {
            recognizer,
            allowed,
        }
    }

    /// Uses [Config::entity_types] as allow-list. Errors on unknown labels.
    pub fn from_config(recognizer: Box<dyn Recognizer>, config: &Config) -> Result<Self, Error> {
        let allowed = config
            .entity_types
            .iter()
            .map(|label| label.parse())
            .collect::<Result<Vec<EntityKind>, Error>>()?;
        Ok(Self::new(recognizer, allowed))
    }

    pub fn annotate(&self, text: &str) -> Vec<Entity> {
        let raw = match self.recognizer.predict(text) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("entity recognition failed on {:?}: {}", text, e);
                return Vec::new();
            }
        };

        let entities = raw
            .into_iter()
            .filter_map(|raw| match Entity::try_from(raw) {
                Ok(entity) if self.allowed.contains(&entity.kind) => Some(entity),
                Ok(entity) => {
                    debug!("discarding {} entity {:?}", entity.kind, entity.word);
                    None
                }
                Err(e) => {
                    debug!("discarding entity: {}", e);
                    None
                }
            })
            .collect();

        merge_adjacent(entities, text)
    }
}
