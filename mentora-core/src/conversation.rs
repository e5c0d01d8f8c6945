//! Conversation controller
//!
//! Owns the chat transcript, the pending query, and the recommended-video
//! list, and keeps them consistent across round trips to the
//! recommendation collaborator. Submission is modeled as an explicit
//! state machine rather than a transient boolean: discrete commands move
//! it between `Idle`, `Submitting`, and `Error`, and an unmatched
//! (state, command) pair leaves the state unchanged.

use crate::api::ApiClient;
use crate::types::{ChatMessage, Profile, Video};

/// Submission state of the controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// No request in flight
    #[default]
    Idle,
    /// One request in flight; further submissions are refused
    Submitting,
    /// Last request failed; the draft is retained for resubmission
    Error { message: String },
}

impl SubmitPhase {
    fn name(&self) -> &'static str {
        match self {
            SubmitPhase::Idle => "idle",
            SubmitPhase::Submitting => "submitting",
            SubmitPhase::Error { .. } => "error",
        }
    }
}

/// Commands that drive the submission state machine.
#[derive(Debug)]
pub enum SubmitCommand {
    /// A submission passed its preconditions and is being processed
    SubmitStarted,
    /// The round trip succeeded and state was merged
    RequestSucceeded,
    /// The round trip failed; transcript and videos were left untouched
    RequestFailed { message: String },
}

/// The text the viewer is composing, plus the submit-requested flag.
///
/// The flag debounces rapid repeated submit triggers: any number of Enter
/// presses set it, and it is consumed exactly once when a submission
/// begins processing.
#[derive(Debug, Default)]
pub struct PendingQuery {
    text: String,
    submit_requested: bool,
}

impl PendingQuery {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    /// Ask for the current text to be submitted.
    pub fn request_submit(&mut self) {
        self.submit_requested = true;
    }

    /// Consume the submit request. Returns true at most once per request,
    /// no matter how many times the trigger fired.
    pub fn take_submit_request(&mut self) -> bool {
        std::mem::take(&mut self.submit_requested)
    }

    fn clear(&mut self) {
        self.text.clear();
        self.submit_requested = false;
    }
}

/// What the view must render, derived from gate and controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStage {
    /// No profile: login prompt only
    Login,
    /// Authenticated, no conversation yet: single seeded query prompt
    Prompt,
    /// Full two-pane view: transcript, videos, persistent compose box
    Conversation,
}

/// Derive the render stage. The conversation UI is unreachable without a
/// profile, and the two-pane view appears only once a transcript exists.
pub fn view_stage(profile: Option<&Profile>, conversation: &Conversation) -> ViewStage {
    if profile.is_none() {
        ViewStage::Login
    } else if conversation.transcript().is_none() {
        ViewStage::Prompt
    } else {
        ViewStage::Conversation
    }
}

/// Owns transcript + recommended videos and drives the request/response
/// cycle with the recommendation collaborator.
#[derive(Debug, Default)]
pub struct Conversation {
    /// `None` until the first successful exchange; never reset to `None`
    /// afterwards within a session
    transcript: Option<Vec<ChatMessage>>,
    /// Replaced wholesale after each successful round trip
    videos: Vec<Video>,
    /// Compose box state
    pub pending: PendingQuery,
    phase: SubmitPhase,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transcript, `None` if no conversation has started
    pub fn transcript(&self) -> Option<&[ChatMessage]> {
        self.transcript.as_deref()
    }

    /// Current recommended videos
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Current submission phase
    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// Apply a command to the submission state machine.
    pub fn apply(&mut self, command: SubmitCommand) {
        let next = match (&self.phase, command) {
            (SubmitPhase::Idle, SubmitCommand::SubmitStarted) => SubmitPhase::Submitting,
            (SubmitPhase::Error { .. }, SubmitCommand::SubmitStarted) => SubmitPhase::Submitting,
            (SubmitPhase::Submitting, SubmitCommand::RequestSucceeded) => SubmitPhase::Idle,
            (SubmitPhase::Submitting, SubmitCommand::RequestFailed { message }) => {
                SubmitPhase::Error { message }
            }
            // Remain in the current state if the command is not applicable
            (phase, command) => {
                tracing::debug!(
                    state = phase.name(),
                    command = ?command,
                    "Submit FSM: command does not trigger a transition"
                );
                return;
            }
        };

        tracing::debug!(
            from = self.phase.name(),
            to = next.name(),
            "Submit FSM: transition"
        );
        self.phase = next;
    }

    /// Submit the pending compose-box text if a submit was requested.
    ///
    /// Consumes the submit-requested flag exactly once, so repeated
    /// triggers fold into a single submission.
    pub async fn submit_pending(&mut self, client: &ApiClient) {
        if !self.pending.take_submit_request() {
            return;
        }
        let text = self.pending.text().to_string();
        self.submit_query(client, &text).await;
    }

    /// Run one submission: append the user message to a prospective
    /// transcript, send the whole transcript to the recommendation
    /// collaborator, and merge the reply and video list back.
    ///
    /// The append and the call are one logical transaction. On success the
    /// transcript gains exactly one user and one assistant message, the
    /// video list is replaced, and the compose box is cleared. On failure
    /// nothing is committed: the transcript and videos keep their
    /// last-known-good values, the draft stays in the compose box for
    /// resubmission, and the failure is recorded in the `Error` phase.
    ///
    /// Callers are expected to have resolved authentication first; the
    /// view never routes a submit here while the login prompt is shown.
    pub async fn submit_query(&mut self, client: &ApiClient, text: &str) {
        let query = text.trim();
        if query.is_empty() {
            tracing::debug!("Ignoring empty query");
            return;
        }
        if self.phase == SubmitPhase::Submitting {
            tracing::debug!("Submission already in flight; ignoring");
            return;
        }

        self.apply(SubmitCommand::SubmitStarted);

        // Prospective transcript: existing turns plus the new user message
        let mut messages = self.transcript.clone().unwrap_or_default();
        messages.push(ChatMessage::user(query));

        match client.recommend(&messages).await {
            Ok(recommendation) => {
                messages.push(recommendation.reply);
                self.transcript = Some(messages);
                self.videos = recommendation.videos;
                self.pending.clear();
                self.apply(SubmitCommand::RequestSucceeded);
            }
            Err(e) => {
                if e.is_server_error() {
                    tracing::warn!(error = %e, "Recommendation call rejected by server");
                } else {
                    tracing::warn!(error = %e, "Recommendation call failed on the network");
                }
                self.apply(SubmitCommand::RequestFailed {
                    message: e.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            user_id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            picture: None,
        }
    }

    #[test]
    fn test_submit_fsm_transitions() {
        let mut convo = Conversation::new();
        assert_eq!(*convo.phase(), SubmitPhase::Idle);

        convo.apply(SubmitCommand::SubmitStarted);
        assert_eq!(*convo.phase(), SubmitPhase::Submitting);

        convo.apply(SubmitCommand::RequestSucceeded);
        assert_eq!(*convo.phase(), SubmitPhase::Idle);

        convo.apply(SubmitCommand::SubmitStarted);
        convo.apply(SubmitCommand::RequestFailed {
            message: "boom".to_string(),
        });
        assert_eq!(
            *convo.phase(),
            SubmitPhase::Error {
                message: "boom".to_string()
            }
        );

        // Error is retryable
        convo.apply(SubmitCommand::SubmitStarted);
        assert_eq!(*convo.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn test_submit_fsm_ignores_inapplicable_commands() {
        let mut convo = Conversation::new();

        // Success/failure without a submission in flight changes nothing
        convo.apply(SubmitCommand::RequestSucceeded);
        assert_eq!(*convo.phase(), SubmitPhase::Idle);

        convo.apply(SubmitCommand::RequestFailed {
            message: "late".to_string(),
        });
        assert_eq!(*convo.phase(), SubmitPhase::Idle);

        // A second start while submitting is not a transition
        convo.apply(SubmitCommand::SubmitStarted);
        convo.apply(SubmitCommand::SubmitStarted);
        assert_eq!(*convo.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn test_pending_query_debounces_submit_requests() {
        let mut pending = PendingQuery::default();
        pending.set_text("I want to learn Go");

        // Several Enter presses before processing begins
        pending.request_submit();
        pending.request_submit();
        pending.request_submit();

        assert!(pending.take_submit_request());
        // Consumed: no second submission from the same burst
        assert!(!pending.take_submit_request());
        // The draft itself is untouched by consumption
        assert_eq!(pending.text(), "I want to learn Go");
    }

    #[test]
    fn test_compose_editing() {
        let mut pending = PendingQuery::default();
        pending.push_char('G');
        pending.push_char('o');
        pending.push_char('!');
        pending.pop_char();
        assert_eq!(pending.text(), "Go");
    }

    #[test]
    fn test_view_stage_requires_profile() {
        let convo = Conversation::new();
        assert_eq!(view_stage(None, &convo), ViewStage::Login);
    }

    #[test]
    fn test_view_stage_prompt_until_transcript_exists() {
        let p = profile();
        let mut convo = Conversation::new();
        assert_eq!(view_stage(Some(&p), &convo), ViewStage::Prompt);

        convo.transcript = Some(vec![
            ChatMessage::user("i want to learn rust"),
            ChatMessage::assistant("Try these."),
        ]);
        assert_eq!(view_stage(Some(&p), &convo), ViewStage::Conversation);
    }
}
