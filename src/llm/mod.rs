mod client;

pub use client::{OpenAiGenerator, TextGenerator};
