#![allow(dead_code)]

use async_trait::async_trait;
use eli5_rust::{Error, Result, llm::TextGenerator};
use std::sync::{Arc, Mutex};

/// Mock text generator for testing. Scripted outputs are consumed in
/// order; every received (instruction, input) pair is recorded.
#[derive(Debug)]
pub struct MockTextGenerator {
    pub outputs: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub error: Option<String>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            outputs: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_outputs(self, outputs: Vec<String>) -> Self {
        *self.outputs.lock().unwrap() = outputs;
        self
    }

    pub fn with_output(self, output: &str) -> Self {
        self.with_outputs(vec![output.to_string()])
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn add_output(&self, output: &str) {
        self.outputs.lock().unwrap().push(output.to_string());
    }

    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Handles shared with a boxed copy of this mock, so assertions stay
    /// possible after the generator moves into a flow.
    pub fn handle(&self) -> MockHandle {
        MockHandle {
            calls: self.calls.clone(),
        }
    }

    pub fn into_boxed(self) -> Box<dyn TextGenerator> {
        Box::new(self)
    }
}

#[derive(Debug, Clone)]
pub struct MockHandle {
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockHandle {
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, instruction: &str, input: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((instruction.to_string(), input.to_string()));

        if let Some(ref error) = self.error {
            return Err(Error::service(error.clone()));
        }

        let mut outputs = self.outputs.lock().unwrap();
        if outputs.is_empty() {
            return Err(Error::service("No more mock outputs available"));
        }

        Ok(outputs.remove(0))
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}
