//! Adjacent entity merging.
//!
//! Recognizers often split multi-word names (`Nguyễn` + `Văn`).
//! Two entities are merged when they have the same kind and are separated by exactly
//! one character (`first.end + 1 == second.start`). The merged word is sliced back from the
//! annotated text so that the separator is kept.
use log::debug;

use super::Entity;

/// Characters `start..end` of `text`, or [None] if out of bounds.
fn char_slice(text: &str, start: usize, end: usize) -> Option<String> {
    if start > end || end > text.chars().count() {
        return None;
    }
    Some(text.chars().skip(start).take(end - start).collect())
}

/// Merges adjacent same-kind entities. Entities are sorted by start offset first.
pub fn merge_adjacent(mut entities: Vec<Entity>, text: &str) -> Vec<Entity> {
    entities.sort_by_key(|e| e.start);
    let before = entities.len();

    let mut merged: Vec<Entity> = Vec::with_capacity(entities.len());
    for entity in entities {
        match merged.last_mut() {
            Some(current)
                if current.kind == entity.kind
                    && current.end.checked_add(1) == Some(entity.start) =>
            {
                let word = char_slice(text, current.start, entity.end)
                    .unwrap_or_else(|| format!("{} {}", current.word, entity.word));
                debug!(
                    "merging {:?} and {:?} into {:?} ({})",
                    current.word, entity.word, word, current.kind
                );
                current.end = entity.end;
                current.word = word;
            }
            _ => merged.push(entity),
        }
    }

    if merged.len() < before {
        debug!("entity merging: {} -> {} entities", before, merged.len());
    }
    merged
}
