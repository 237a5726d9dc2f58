mod core;

pub use self::core::{CompletionRequest, Message, Role, completion};
