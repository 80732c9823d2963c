use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use tracing::{debug, error, warn};

/// The external text-generation capability: one instruction, one input,
/// one output string. Implementations make exactly one outbound call per
/// invocation and never retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, instruction: &str, input: &str) -> Result<String>;
}

pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, instruction: &str, input: &str) -> Result<String> {
        debug!("Requesting completion for {} input chars", input.len());

        let system_message = ChatCompletionRequestSystemMessageArgs::default()
            .content(ChatCompletionRequestSystemMessageContent::Text(
                instruction.to_string(),
            ))
            .build()
            .map_err(|e| Error::internal(format!("Failed to build system message: {}", e)))?;

        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Text(
                input.to_string(),
            ))
            .build()
            .map_err(|e| Error::internal(format!("Failed to build user message: {}", e)))?;

        let messages: Vec<ChatCompletionRequestMessage> =
            vec![system_message.into(), user_message.into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| Error::internal(format!("Failed to build completion request: {}", e)))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            error!("Completion call failed: {}", e);
            Error::service(format!("capability call failed: {}", e))
        })?;

        debug!(
            "Received completion response with {} choices",
            response.choices.len()
        );

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            warn!("Completion response carried no usable output");
            return Err(Error::service("no output produced"));
        }

        Ok(content)
    }
}
