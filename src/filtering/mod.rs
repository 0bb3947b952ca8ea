/*! Filtering utilities

Filters implement [Filter]: a pure predicate deciding whether an item is kept.
The sentence splitter uses [Length] to discard fragments too short to be sentences.
! */
mod filter;
mod sentence;

pub use filter::Filter;
pub use sentence::Length;
