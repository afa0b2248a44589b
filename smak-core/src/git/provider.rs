use super::entry::{BranchEntry, CommitEntry, Entries, EntriesKind, MergeOutcome};
use super::error::CommandError;

/// Everything the browser needs from version control. Implementations block.
pub trait GitProvider: Send + Sync {
    /// Local branches, most recent commit first
    fn list_branches(&self) -> Result<Vec<BranchEntry>, CommandError>;
    /// Commits reachable from HEAD in `git log` order
    fn list_commits(&self) -> Result<Vec<CommitEntry>, CommandError>;
    fn checkout(&self, name: &str) -> Result<(), CommandError>;
    /// Delete each branch, forcing when the safe delete refuses
    fn delete_branches(&self, names: &[String]) -> Result<(), CommandError>;
    /// Merge `source` into `target`, leaving `target` checked out
    fn merge(&self, source: &str, target: &str) -> MergeOutcome;
    fn abort_merge(&self) -> Result<(), CommandError>;
    /// Stat and patch of a commit, with the full header
    fn fetch_detail(&self, reference: &str) -> Result<String, CommandError>;
    /// Stage everything and amend HEAD keeping its message
    fn amend_all(&self, push: bool) -> Result<(), CommandError>;

    fn load(&self, kind: EntriesKind) -> Result<Entries, CommandError> {
        Ok(match kind {
            EntriesKind::Branches => Entries::Branches(self.list_branches()?),
            EntriesKind::Commits => Entries::Commits(self.list_commits()?),
        })
    }
}
