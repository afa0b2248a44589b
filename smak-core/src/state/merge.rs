use crate::{
    effect::Effect,
    git::{Entries, EntriesKind, MergeOutcome},
};

/// Two-step merge: pick a source, pick a target, then report the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeState {
    Inactive,
    SelectingTarget {
        source_index: usize,
    },
    ResultReady {
        source_name: String,
        target_name: String,
        outcome: MergeOutcome,
    },
    /// Conflict panel dismissed; the working tree still holds the conflicted merge
    ConflictsPending {
        source_name: String,
        target_name: String,
        files: Vec<String>,
    },
}

const RELOAD: Effect = Effect::Reload {
    kind: EntriesKind::Branches,
};

impl MergeState {
    pub fn start(cursor: Option<usize>, entries: &Entries) -> Self {
        match cursor {
            Some(source_index) if source_index < entries.len() => {
                Self::SelectingTarget { source_index }
            }
            _ => Self::Inactive,
        }
    }

    pub fn source_index(&self) -> Option<usize> {
        match self {
            Self::SelectingTarget { source_index } => Some(*source_index),
            _ => None,
        }
    }

    pub fn is_result_ready(&self) -> bool {
        matches!(self, Self::ResultReady { .. })
    }

    pub fn confirm(self, cursor: Option<usize>, entries: &Entries) -> (Self, Option<Effect>) {
        match self {
            Self::SelectingTarget { source_index } => {
                let target = cursor.filter(|&t| t != source_index).and_then(|t| {
                    Some((entries.name_at(source_index)?, entries.name_at(t)?))
                });
                match target {
                    Some((source, target)) => {
                        let effect = Effect::Merge {
                            source: source.to_string(),
                            target: target.to_string(),
                        };
                        (self, Some(effect))
                    }
                    None => (self, None),
                }
            }
            Self::ResultReady { .. } => self.dismiss(),
            Self::ConflictsPending {
                source_name,
                target_name,
                files,
            } => (
                Self::ResultReady {
                    source_name,
                    target_name,
                    outcome: MergeOutcome::conflicts(files),
                },
                None,
            ),
            Self::Inactive => (self, None),
        }
    }

    /// Back out of the merge. Anything past target selection is aborted in git.
    pub fn cancel(self) -> (Self, Option<Effect>) {
        match self {
            Self::Inactive => (self, None),
            Self::SelectingTarget { .. } => (Self::Inactive, None),
            Self::ResultReady { .. } | Self::ConflictsPending { .. } => {
                (Self::Inactive, Some(Effect::AbortMerge))
            }
        }
    }

    /// Leave merge mode. Pending conflicts stay in the working tree.
    pub fn quit(self) -> (Self, Option<Effect>) {
        match self {
            Self::ResultReady { .. } => self.dismiss(),
            _ => (Self::Inactive, None),
        }
    }

    /// Close the result panel. Conflicts keep the merge pending, anything else ends it.
    fn dismiss(self) -> (Self, Option<Effect>) {
        match self {
            Self::ResultReady {
                source_name,
                target_name,
                outcome: MergeOutcome::Conflicts { files, .. },
            } => (
                Self::ConflictsPending {
                    source_name,
                    target_name,
                    files,
                },
                Some(RELOAD),
            ),
            Self::ResultReady { .. } => (Self::Inactive, Some(RELOAD)),
            other => (other, None),
        }
    }

    pub fn completed(source: String, target: String, outcome: MergeOutcome) -> Self {
        Self::ResultReady {
            source_name: source,
            target_name: target,
            outcome,
        }
    }

    /// State to keep after the branch list was reloaded
    pub fn after_reload(self) -> Self {
        match self {
            Self::ConflictsPending { .. } => self,
            _ => Self::Inactive,
        }
    }
}
