use crate::git::EntriesKind;

/// Side effect requested by a transition, run by [`crate::driver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Checkout { name: String },
    DeleteBranches { names: Vec<String> },
    Merge { source: String, target: String },
    AbortMerge,
    Reload { kind: EntriesKind },
    FetchDetail { reference: String },
    Exit(SessionEnd),
}

/// How a browser session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    CheckedOut(String),
    Failed(String),
}
