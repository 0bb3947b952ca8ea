//! sentence-level filtering
use super::Filter;

/// Simple length filter.
/// Returns `false` if provided sentence is not longer than [Length::min_size] unicode codepoints.
///
/// [Length::min_size] is 5 by default.
#[derive(Debug, Clone)]
pub struct Length {
    min_size: usize,
}

impl Length {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl Filter<&str> for Length {
    fn detect(&self, sentence: &str) -> bool {
        sentence.chars().count() > self.min_size
    }
}

impl Default for Length {
    fn default() -> Self {
        Length { min_size: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, Length};

    #[test]
    fn length_default() {
        let f = Length::default();
        assert_eq!(f.min_size(), &5);
        assert!(f.detect("Câu một."));
        assert!(!f.detect("Chú."));
        // exactly the threshold is not enough
        assert!(!f.detect("abcde"));
        assert!(f.detect("abcdef"));
    }

    #[test]
    fn counts_codepoints() {
        // 6 codepoints, 14 bytes
        let f = Length::default();
        assert!(f.detect("莊子曰莊子曰"));
        assert!(!f.detect("莊子曰。"));
    }

    #[test]
    fn custom_min_size() {
        let f = Length::with_min_size(10);
        assert!(!f.detect("Câu hai là"));
        assert!(f.detect("Câu hai là đây."));
    }
}
