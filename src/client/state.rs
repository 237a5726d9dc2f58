/// How a settled turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Lifecycle of a single turn. Transitions are pure; an illegal
/// transition returns `None` and leaves the caller's state untouched.
///
/// ```text
/// Idle -> Submitting -> Awaiting -> Settled(_) -> Idle
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnState {
    #[default]
    Idle,
    Submitting,
    Awaiting,
    Settled(Outcome),
}

impl TurnState {
    /// True while a turn is in flight. Drives the loading indicator
    /// and disables input.
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Submitting | Self::Awaiting)
    }

    pub fn submit(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Submitting),
            _ => None,
        }
    }

    pub fn await_reply(self) -> Option<Self> {
        match self {
            Self::Submitting => Some(Self::Awaiting),
            _ => None,
        }
    }

    pub fn settle(self, outcome: Outcome) -> Option<Self> {
        match self {
            Self::Awaiting => Some(Self::Settled(outcome)),
            _ => None,
        }
    }

    pub fn finish(self) -> Option<Self> {
        match self {
            Self::Settled(_) => Some(Self::Idle),
            _ => None,
        }
    }
}
