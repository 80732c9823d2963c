use super::{
    Capability,
    fsm::{SubmissionEvent, SubmissionStateMachine},
    prompt,
    types::{SimplificationRequest, SimplificationResult},
    validate::validate,
};
use crate::{Result, llm::TextGenerator};
use async_trait::async_trait;
use tracing::{debug, info};

/// A prompt bound to the generator it runs on. The instruction is fixed at
/// construction; the generator is injected so tests can substitute a fake.
pub struct Simplifier {
    generator: Box<dyn TextGenerator>,
    instruction: &'static str,
}

impl Simplifier {
    /// The five-year-old flow: playful register, emojis allowed.
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator,
            instruction: prompt::SIMPLIFY_INSTRUCTION,
        }
    }

    /// The example-explanation flow: same shape, plainer register.
    pub fn example(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator,
            instruction: prompt::EXAMPLE_INSTRUCTION,
        }
    }

    /// One outbound call for one validated request. The capability's output
    /// is passed through unmodified; a call either fully succeeds or fully
    /// fails.
    pub async fn simplify(
        &self,
        request: &SimplificationRequest,
    ) -> Result<SimplificationResult> {
        debug!(
            "Simplifying {} chars for submission {}",
            request.complex_text().chars().count(),
            request.token()
        );

        let simplified_text = self
            .generator
            .generate(self.instruction, request.complex_text())
            .await?;

        Ok(SimplificationResult { simplified_text })
    }

    /// A whole submission: validate, then call, driving the submission
    /// machine from `Idle` to a terminal state and back.
    pub async fn submit(&self, raw: &str) -> Result<SimplificationResult> {
        let mut machine = SubmissionStateMachine::new();
        machine.transition(SubmissionEvent::Submit)?;

        let request = match validate(raw) {
            Ok(request) => {
                machine.begin(request.token());
                machine.transition(SubmissionEvent::InputAccepted)?;
                request
            }
            Err(e) => {
                machine.transition(SubmissionEvent::InputRejected)?;
                return Err(e);
            }
        };

        match self.simplify(&request).await {
            Ok(result) => {
                machine.transition(SubmissionEvent::CallSucceeded)?;
                info!("Submission {} succeeded", request.token());
                machine.transition(SubmissionEvent::Reset)?;
                Ok(result)
            }
            Err(e) => {
                machine.set_error(e.to_string());
                machine.transition(SubmissionEvent::CallFailed)?;
                machine.transition(SubmissionEvent::Reset)?;
                Err(e)
            }
        }
    }
}

#[async_trait]
impl Capability<SimplificationRequest, SimplificationResult> for Simplifier {
    async fn invoke(&self, input: SimplificationRequest) -> Result<SimplificationResult> {
        self.simplify(&input).await
    }
}
