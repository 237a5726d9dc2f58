//! Mapping from key presses to what the input box should do.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Send the current input
    Submit,
    /// Insert a literal line break, never sends
    Newline,
}

/// Enter submits unless Shift or Alt is held. Many terminals can't
/// tell Shift+Enter from Enter, so Alt+Enter is accepted as well.
pub fn enter_action(shift: bool, alt: bool) -> KeyAction {
    if shift || alt {
        KeyAction::Newline
    } else {
        KeyAction::Submit
    }
}
