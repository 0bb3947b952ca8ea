/*! Remote language detection.

Translation services expose a language detection endpoint. It is an asynchronous collaborator:
each call is a single suspend point, awaited on its own, without retry.
A failed call means "no language detected", never an error for the caller.
!*/
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// language code as returned by the service (`vi`, `zh-CN`…)
    pub lang: String,
    pub confidence: f32,
}

/// Detection capability, implemented by translation API clients.
#[allow(async_fn_in_trait)]
pub trait LanguageDetector {
    async fn detect(&self, text: &str) -> Result<Detection, Error>;
}

/// Awaits one detection and degrades failures to [None].
pub async fn detect_or_none<D: LanguageDetector>(detector: &D, text: &str) -> Option<Detection> {
    match detector.detect(text).await {
        Ok(detection) => Some(detection),
        Err(e) => {
            warn!("language detection failed: {}", e);
            None
        }
    }
}
