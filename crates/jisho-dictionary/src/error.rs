/// Why a lookup produced no entry
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Dictionary service unreachable: {0}")]
    Unreachable(String),

    #[error("Dictionary service returned HTTP {0}")]
    Status(u16),

    #[error("Malformed dictionary response: {0}")]
    Malformed(String),

    #[error("No results for {0:?}")]
    NoResults(String),
}

impl LookupError {
    /// Only an unreachable service is worth asking again
    pub fn is_retryable(&self) -> bool {
        matches!(self, LookupError::Unreachable(_))
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LookupError::Malformed(e.to_string())
        } else {
            LookupError::Unreachable(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unreachable_is_retryable() {
        assert!(LookupError::Unreachable("timed out".into()).is_retryable());
        assert!(!LookupError::NoResults("猫".into()).is_retryable());
        assert!(!LookupError::Status(404).is_retryable());
        assert!(!LookupError::Malformed("eof".into()).is_retryable());
    }
}
