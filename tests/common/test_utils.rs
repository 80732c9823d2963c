#![allow(dead_code)]

use eli5_rust::{
    Result,
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
};
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            provider: "openai".to_string(),
            base_url: "https://api.openai.com".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gpt-4".to_string(),
        },
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

llm:
  provider: "openai"
  base_url: "https://api.openai.com"
  api_key: "test-api-key"
  model: "gpt-4"
"#;

/// Minimal configuration relying on the serde defaults
pub const MINIMAL_CONFIG_YAML: &str = r#"
server: {}

llm:
  api_key: "test-api-key"
  model: "gpt-4"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"

llm:
  provider: "openai"
  # missing required fields
"#;

/// Assertion helper for error results
pub fn assert_contains_error<T: std::fmt::Debug>(result: &Result<T>, expected_error: &str) {
    match result {
        Err(e) => assert!(
            e.to_string().contains(expected_error),
            "Expected error containing '{}', got: {}",
            expected_error,
            e
        ),
        Ok(value) => panic!(
            "Expected error containing '{}', but got success: {:?}",
            expected_error, value
        ),
    }
}

/// A valid submission body used across tests
pub const PHOTOSYNTHESIS: &str = "Photosynthesis is how plants use sunlight to create food.";
