//! The core models for keeping a conversation on the client.
use crate::openai::{Message, Role};
use crate::relay::persona::GREETING;

/// Append-only, ordered list of the visible messages. Order is
/// conversation order and is replayed to the relay as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// A transcript seeded with the persona's greeting
    pub fn with_greeting() -> Self {
        Self(vec![Message::new(Role::Assistant, GREETING)])
    }

    pub fn new_with_messages(messages: Vec<Message>) -> Self {
        Self(messages)
    }

    pub fn messages(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
