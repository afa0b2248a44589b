use super::entry::MergeOutcome;
use crate::constants::DEFAULT_UNMERGED_CODES;
use std::collections::BTreeSet;

/// Two-letter `git status --porcelain` codes that mark a path as unmerged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmergedCodes(BTreeSet<String>);

impl Default for UnmergedCodes {
    fn default() -> Self {
        Self::new(DEFAULT_UNMERGED_CODES.iter().copied())
    }
}

impl UnmergedCodes {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(codes.into_iter().map(|c| c.as_ref().to_string()).collect())
    }

    pub fn is_unmerged(&self, code: &str) -> bool {
        self.0.contains(code)
    }
}

/// Paths from `git status --porcelain -z` output whose code is unmerged, in
/// output order.
///
/// Records are NUL-terminated and paths are never quoted. A rename or copy
/// record names the new path and is followed by a bare record with the old one.
pub fn parse_unmerged_paths(output: &str, codes: &UnmergedCodes) -> Vec<String> {
    let mut paths = Vec::new();
    let mut records = output.split('\0');
    while let Some(record) = records.next() {
        let (Some(code), Some(path)) = (record.get(..2), record.get(3..)) else {
            continue;
        };
        if code.contains(['R', 'C']) {
            records.next();
        }
        if codes.is_unmerged(code) && !path.is_empty() {
            paths.push(path.to_string());
        }
    }
    paths
}

/// Outcome of a merge that exited non-zero: conflicts when any path is unmerged,
/// otherwise a failure carrying the raw command output.
pub fn classify_merge_failure(
    status_output: &str,
    merge_output: &str,
    codes: &UnmergedCodes,
) -> MergeOutcome {
    let files = parse_unmerged_paths(status_output, codes);
    if files.is_empty() {
        MergeOutcome::Failure {
            message: merge_output.trim().to_string(),
        }
    } else {
        MergeOutcome::conflicts(files)
    }
}
