//! Client side of a conversation: the transcript, the turn state
//! machine and the transport used to reach the relay.
mod conversation;
pub mod input;
mod models;
mod relay_client;
mod state;

pub use conversation::{Conversation, ViewEvent};
pub use models::Transcript;
pub use relay_client::{ClientError, HttpRelayClient, RelayClient};
pub use state::{Outcome, TurnState};
