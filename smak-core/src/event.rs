use crate::{action::Action, git::Entries, git::MergeOutcome};

/// Input to a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Action(Action),
    Resize { width: u16, height: u16 },
    /// Poll timeout with no terminal input
    Tick,
    Completed(Completion),
}

/// Result of an executed effect. Errors are carried as display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    CheckedOut {
        name: String,
        result: Result<(), String>,
    },
    Deleted(Result<(), String>),
    Merged {
        source: String,
        target: String,
        outcome: MergeOutcome,
    },
    Aborted(Result<(), String>),
    Reloaded(Result<Entries, String>),
    DetailFetched {
        reference: String,
        result: Result<String, String>,
    },
}

impl From<Action> for Event {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}
