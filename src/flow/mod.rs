mod capability;
pub mod fsm;
mod prompt;
mod simplifier;
mod types;
mod validate;

pub use capability::Capability;
pub use prompt::{EXAMPLE_INSTRUCTION, SIMPLIFY_INSTRUCTION};
pub use simplifier::Simplifier;
pub use types::{SimplificationRequest, SimplificationResult};
pub use validate::{MAX_INPUT_CHARS, MIN_INPUT_CHARS, validate};
