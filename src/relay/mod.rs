//! Persona relay between chat clients and the completion provider.
mod error;
pub mod persona;
mod service;

pub use error::{InvalidRequest, RelayError};
pub use service::{ProviderConfig, Relay, extract_content, persona_transcript, provider_error};
