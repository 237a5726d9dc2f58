use super::models::Transcript;
use super::relay_client::{ClientError, RelayClient};
use super::state::{Outcome, TurnState};
use crate::openai::{Message, Role};
use crate::relay::persona::{QUICK_QUESTIONS, TURN_FAILURE_FALLBACK};

/// Side effects the view should perform after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// The transcript grew; show the newest message
    ScrollToLatest,
    /// A turn finished; give the input box focus again
    FocusInput,
}

/// Owns the transcript, the pending input and the turn lifecycle.
/// Rendering lives elsewhere and reacts to `ViewEvent`s.
#[derive(Debug)]
pub struct Conversation {
    transcript: Transcript,
    input: String,
    state: TurnState,
    events: Vec<ViewEvent>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_transcript(Transcript::with_greeting())
    }

    pub fn with_transcript(transcript: Transcript) -> Self {
        Self {
            transcript,
            input: String::new(),
            state: TurnState::Idle,
            events: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Replace the pending input. Ignored while a turn is in flight.
    pub fn set_input(&mut self, text: &str) -> bool {
        if self.is_loading() {
            return false;
        }
        self.input = text.to_string();
        true
    }

    /// Fill the input with one of the canned questions without sending
    /// it.
    pub fn pick_quick_question(&mut self, idx: usize) -> bool {
        match QUICK_QUESTIONS.get(idx) {
            Some(question) => self.set_input(question),
            None => false,
        }
    }

    /// Start a turn from the pending input. Appends the user message,
    /// clears the input and returns the history to send to the relay.
    ///
    /// Returns `None` without touching anything when the input is
    /// blank or a turn is already in flight.
    pub fn begin_turn(&mut self) -> Option<Vec<Message>> {
        let content = self.input.trim();
        if content.is_empty() {
            return None;
        }
        // Submitting is the synchronous optimistic append below
        let awaiting = self.state.submit()?.await_reply()?;

        let user_msg = Message::new(Role::User, content);
        self.input.clear();
        self.transcript.push(user_msg);
        self.events.push(ViewEvent::ScrollToLatest);
        self.state = awaiting;

        let history = self.transcript.messages();
        Some(history)
    }

    /// Settle the in-flight turn with the relay's result. Failures of
    /// any kind become a single in-character assistant message. The
    /// turn always ends back in `Idle`.
    ///
    /// Returns `None` when no turn is awaiting a reply.
    pub fn settle(&mut self, result: Result<String, ClientError>) -> Option<Outcome> {
        let outcome = if result.is_ok() {
            Outcome::Success
        } else {
            Outcome::Failure
        };
        let Some(settled) = self.state.settle(outcome) else {
            tracing::warn!("Ignoring relay result with no turn in flight");
            return None;
        };

        let reply = match result {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Chat turn failed: {}", e);
                TURN_FAILURE_FALLBACK.to_string()
            }
        };
        self.transcript.push(Message::new(Role::Assistant, &reply));
        self.events.push(ViewEvent::ScrollToLatest);

        self.state = settled.finish().unwrap_or_default();
        self.events.push(ViewEvent::FocusInput);

        Some(outcome)
    }

    /// Run a full turn against `relay`. Never fails; a relay error is
    /// recorded in the transcript as the fallback message.
    ///
    /// Returns `None` when the turn was not started (blank input or a
    /// turn already in flight).
    pub async fn send(&mut self, relay: &dyn RelayClient) -> Option<Outcome> {
        let history = self.begin_turn()?;
        let result = relay.complete(&history).await;
        self.settle(result)
    }

    /// Take the view events accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }
}
