//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// pipelines producing a value (a [super::Document], a list of sections…)
/// can share it.
pub trait Pipeline<T> {
    fn version() -> &'static str
    where
        Self: Sized;

    fn run(&self) -> Result<T, Error>;
}
