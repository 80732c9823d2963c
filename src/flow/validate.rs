use super::types::SimplificationRequest;
use crate::{Error, Result};

pub const MIN_INPUT_CHARS: usize = 10;
pub const MAX_INPUT_CHARS: usize = 2000;

/// Checks the length bounds on trimmed input and builds the request.
/// Pure and deterministic; rejected input never reaches the capability.
pub fn validate(raw: &str) -> Result<SimplificationRequest> {
    let trimmed = raw.trim();
    let length = trimmed.chars().count();

    if length < MIN_INPUT_CHARS {
        return Err(Error::validation(format!(
            "Please enter at least {} characters to simplify.",
            MIN_INPUT_CHARS
        )));
    }

    if length > MAX_INPUT_CHARS {
        return Err(Error::validation(format!(
            "Text cannot be longer than {} characters.",
            MAX_INPUT_CHARS
        )));
    }

    Ok(SimplificationRequest::new(trimmed.to_string()))
}
