use super::{
    entry::{BranchEntry, CommitEntry, MergeOutcome},
    error::CommandError,
    provider::GitProvider,
};
use std::{collections::HashMap, sync::Mutex};

/// In-memory collaborator for state machine and UI tests. Results set in the
/// `*_result` slots are returned once, then the call succeeds again.
#[derive(Default)]
pub struct MockGitProvider {
    pub branches: Mutex<Vec<BranchEntry>>,
    pub commits: Vec<CommitEntry>,
    pub details: HashMap<String, String>,
    pub merge_outcome: Mutex<Option<MergeOutcome>>,
    pub list_result: Mutex<Option<Result<(), CommandError>>>,
    pub checkout_result: Mutex<Option<Result<(), CommandError>>>,
    pub delete_result: Mutex<Option<Result<(), CommandError>>>,
    pub abort_result: Mutex<Option<Result<(), CommandError>>>,
    pub amend_result: Mutex<Option<Result<(), CommandError>>>,
    pub checkout_calls: Mutex<Vec<String>>,
    pub delete_calls: Mutex<Vec<Vec<String>>>,
    pub merge_calls: Mutex<Vec<(String, String)>>,
    pub abort_calls: Mutex<usize>,
    pub list_calls: Mutex<usize>,
    pub amend_calls: Mutex<Vec<bool>>,
}

impl MockGitProvider {
    pub fn with_branches(branches: Vec<BranchEntry>) -> Self {
        Self {
            branches: Mutex::new(branches),
            ..Self::default()
        }
    }

    pub fn with_commits(commits: Vec<CommitEntry>) -> Self {
        Self {
            commits,
            ..Self::default()
        }
    }

    pub fn fail_with(stderr: &str) -> CommandError {
        CommandError::failed(&["mock"], Some(1), stderr)
    }

    fn take(slot: &Mutex<Option<Result<(), CommandError>>>) -> Result<(), CommandError> {
        slot.lock().unwrap().take().unwrap_or(Ok(()))
    }

    fn record_list(&self) -> Result<(), CommandError> {
        *self.list_calls.lock().unwrap() += 1;
        Self::take(&self.list_result)
    }
}

impl GitProvider for MockGitProvider {
    fn list_branches(&self) -> Result<Vec<BranchEntry>, CommandError> {
        self.record_list()?;
        Ok(self.branches.lock().unwrap().clone())
    }

    fn list_commits(&self) -> Result<Vec<CommitEntry>, CommandError> {
        self.record_list()?;
        Ok(self.commits.clone())
    }

    fn checkout(&self, name: &str) -> Result<(), CommandError> {
        self.checkout_calls.lock().unwrap().push(name.to_string());
        Self::take(&self.checkout_result)
    }

    fn delete_branches(&self, names: &[String]) -> Result<(), CommandError> {
        self.delete_calls.lock().unwrap().push(names.to_vec());
        Self::take(&self.delete_result)?;
        self.branches
            .lock()
            .unwrap()
            .retain(|b| !names.contains(&b.name));
        Ok(())
    }

    fn merge(&self, source: &str, target: &str) -> MergeOutcome {
        self.merge_calls
            .lock()
            .unwrap()
            .push((source.to_string(), target.to_string()));
        self.merge_outcome
            .lock()
            .unwrap()
            .take()
            .unwrap_or(MergeOutcome::Success)
    }

    fn abort_merge(&self) -> Result<(), CommandError> {
        *self.abort_calls.lock().unwrap() += 1;
        Self::take(&self.abort_result)
    }

    fn fetch_detail(&self, reference: &str) -> Result<String, CommandError> {
        self.details
            .get(reference)
            .cloned()
            .ok_or_else(|| Self::fail_with(&format!("fatal: bad object {reference}")))
    }

    fn amend_all(&self, push: bool) -> Result<(), CommandError> {
        self.amend_calls.lock().unwrap().push(push);
        Self::take(&self.amend_result)
    }
}
