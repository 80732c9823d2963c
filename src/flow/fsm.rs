use crate::{Error, Result};
use tracing::{debug, info};
use uuid::Uuid;

// Submission states
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Calling,
    Succeeded,
    Failed,
}

// Submission events
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    Submit,
    InputRejected,
    InputAccepted,
    CallSucceeded,
    CallFailed,
    Reset,
}

// Submission context (visible state between transitions)
#[derive(Debug, Clone, Default)]
pub struct SubmissionContext {
    pub active_token: Option<Uuid>,
    pub last_error: Option<String>,
}

pub struct SubmissionStateMachine {
    state: SubmissionState,
    pub context: SubmissionContext,
}

impl SubmissionStateMachine {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            context: SubmissionContext::default(),
        }
    }

    pub fn current_state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn transition(&mut self, event: SubmissionEvent) -> Result<()> {
        let old_state = self.state.clone();
        debug!(
            "🔄 Submission machine processing event {:?} in state {:?}",
            event, old_state
        );

        let new_state = match (&self.state, &event) {
            (SubmissionState::Idle, SubmissionEvent::Submit) => SubmissionState::Validating,
            (SubmissionState::Validating, SubmissionEvent::InputRejected) => SubmissionState::Idle,
            (SubmissionState::Validating, SubmissionEvent::InputAccepted) => {
                SubmissionState::Calling
            }
            (SubmissionState::Calling, SubmissionEvent::CallSucceeded) => {
                SubmissionState::Succeeded
            }
            (SubmissionState::Calling, SubmissionEvent::CallFailed) => SubmissionState::Failed,
            (SubmissionState::Succeeded, SubmissionEvent::Reset)
            | (SubmissionState::Failed, SubmissionEvent::Reset) => SubmissionState::Idle,
            _ => {
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.state),
                    requested: format!("{:?}", event),
                });
            }
        };

        if old_state != new_state {
            info!(
                "🎯 Submission state transition: {:?} -> {:?} (event: {:?})",
                old_state, new_state, event
            );
        }

        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Succeeded | SubmissionState::Failed
        )
    }

    /// Marks `token` as the submission whose result may be applied.
    /// A later `begin` replaces it; results for the old token go stale.
    pub fn begin(&mut self, token: Uuid) {
        self.context.active_token = Some(token);
        self.context.last_error = None;
    }

    /// Whether a result carrying `token` still belongs to the active
    /// submission. Callers drop the result when this is false.
    pub fn accepts(&self, token: Uuid) -> bool {
        self.context.active_token == Some(token)
    }

    pub fn set_error(&mut self, error: String) {
        self.context.last_error = Some(error);
    }

    pub fn last_error(&self) -> Option<&str> {
        self.context.last_error.as_deref()
    }
}

impl Default for SubmissionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
