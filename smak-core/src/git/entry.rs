use crate::constants::SHORT_HASH_LEN;
use chrono::{DateTime, FixedOffset};

const BRANCH_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchEntry {
    pub name: String,
    /// `None` when git reported a date we could not parse
    pub last_commit_time: Option<DateTime<FixedOffset>>,
    pub last_commit_summary: String,
    pub commits_ahead: u32,
    pub commits_behind: u32,
}

impl BranchEntry {
    pub fn title(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> String {
        let date = self.last_commit_time.map_or_else(
            || "unknown date".to_string(),
            |t| t.format(BRANCH_DATE_FORMAT).to_string(),
        );
        format!(
            "{date} | {} | ↑{} ↓{}",
            self.last_commit_summary, self.commits_ahead, self.commits_behind
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEntry {
    pub hash: String,
    pub summary: String,
    pub time: Option<DateTime<FixedOffset>>,
    pub author: String,
}

impl CommitEntry {
    pub fn short_hash(&self) -> &str {
        match self.hash.char_indices().nth(SHORT_HASH_LEN) {
            Some((idx, _)) => &self.hash[..idx],
            None => &self.hash,
        }
    }

    pub fn title(&self) -> String {
        format!("{} - {}", self.short_hash(), self.summary)
    }

    pub fn date(&self) -> String {
        self.time.map_or_else(
            || "unknown date".to_string(),
            |t| t.format(COMMIT_DATE_FORMAT).to_string(),
        )
    }

    pub fn description(&self) -> String {
        format!("{} by {}", self.date(), self.author)
    }
}

/// The list a browser session works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entries {
    Branches(Vec<BranchEntry>),
    Commits(Vec<CommitEntry>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntriesKind {
    Branches,
    Commits,
}

impl Entries {
    pub fn kind(&self) -> EntriesKind {
        match self {
            Self::Branches(_) => EntriesKind::Branches,
            Self::Commits(_) => EntriesKind::Commits,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Branches(b) => b.len(),
            Self::Commits(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identity used to follow an entry across reloads: branch name or commit hash
    pub fn name_at(&self, index: usize) -> Option<&str> {
        match self {
            Self::Branches(b) => b.get(index).map(|e| e.name.as_str()),
            Self::Commits(c) => c.get(index).map(|e| e.hash.as_str()),
        }
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        match self {
            Self::Branches(b) => b.iter().position(|e| e.name == name),
            Self::Commits(c) => c.iter().position(|e| e.hash == name),
        }
    }

    pub fn title_at(&self, index: usize) -> Option<String> {
        match self {
            Self::Branches(b) => b.get(index).map(|e| e.title().to_string()),
            Self::Commits(c) => c.get(index).map(CommitEntry::title),
        }
    }

    pub fn description_at(&self, index: usize) -> Option<String> {
        match self {
            Self::Branches(b) => b.get(index).map(BranchEntry::description),
            Self::Commits(c) => c.get(index).map(CommitEntry::description),
        }
    }

    pub fn commit_at(&self, index: usize) -> Option<&CommitEntry> {
        match self {
            Self::Commits(c) => c.get(index),
            Self::Branches(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Success,
    Conflicts { files: Vec<String>, count: usize },
    Failure { message: String },
}

impl MergeOutcome {
    pub fn conflicts(files: Vec<String>) -> Self {
        let count = files.len();
        Self::Conflicts { files, count }
    }
}
