use serde::Serialize;
use uuid::Uuid;

/// A validated submission. Constructed only by `validate`, immutable after
/// that, discarded once the call completes. The token identifies this
/// submission so callers can recognize a stale result.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplificationRequest {
    token: Uuid,
    complex_text: String,
}

impl SimplificationRequest {
    pub(crate) fn new(complex_text: String) -> Self {
        Self {
            token: Uuid::new_v4(),
            complex_text,
        }
    }

    pub fn token(&self) -> Uuid {
        self.token
    }

    pub fn complex_text(&self) -> &str {
        &self.complex_text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimplificationResult {
    pub simplified_text: String,
}
