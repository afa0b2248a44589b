pub mod cli;
pub mod entry;
pub mod error;
pub mod mock;
pub mod provider;
pub mod status;

pub use cli::CliGitProvider;
pub use entry::{BranchEntry, CommitEntry, Entries, EntriesKind, MergeOutcome};
pub use error::CommandError;
pub use provider::GitProvider;
pub use status::UnmergedCodes;

use crate::constants::{FIELD_SEPARATOR, GIT_DIR_ENTRY, GIT_ISO_DATE_FORMAT};
use chrono::{DateTime, FixedOffset};
use std::path::{Path, PathBuf};

pub fn parse_iso_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw.trim(), GIT_ISO_DATE_FORMAT).ok()
}

/// Parse one line of `git for-each-ref --format` output (name, committer date, subject).
/// Ahead/behind counts are left at zero.
pub fn parse_branch_line(line: &str) -> Option<BranchEntry> {
    let mut parts = line.splitn(3, FIELD_SEPARATOR);
    let name = parts.next()?.trim();
    let date = parts.next()?;
    let summary = parts.next()?.trim();
    if name.is_empty() {
        return None;
    }
    Some(BranchEntry {
        name: name.to_string(),
        last_commit_time: parse_iso_date(date),
        last_commit_summary: summary.to_string(),
        commits_ahead: 0,
        commits_behind: 0,
    })
}

/// Parse one line of `git log` output (hash, subject, author date, author name)
pub fn parse_commit_line(line: &str) -> Option<CommitEntry> {
    let mut parts = line.splitn(4, FIELD_SEPARATOR);
    let hash = parts.next()?.trim();
    let summary = parts.next()?;
    let date = parts.next()?;
    let author = parts.next()?;
    if hash.is_empty() {
        return None;
    }
    Some(CommitEntry {
        hash: hash.to_string(),
        summary: summary.to_string(),
        time: parse_iso_date(date),
        author: author.trim().to_string(),
    })
}

/// Parse `git rev-list --left-right --count origin/<b>...<b>` into `(ahead, behind)`
pub fn parse_ahead_behind(output: &str) -> Option<(u32, u32)> {
    let mut fields = output.split_whitespace();
    let behind = fields.next()?.parse().ok()?;
    let ahead = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((ahead, behind))
}

/// Most recent first; branches with an unknown date go last
pub fn sort_by_recency(branches: &mut [BranchEntry]) {
    branches.sort_by(|a, b| b.last_commit_time.cmp(&a.last_commit_time));
}

/// Walk up from `start` to the first directory holding a `.git` entry
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(GIT_DIR_ENTRY).exists())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(fields: &[&str]) -> String {
        fields.join(&FIELD_SEPARATOR.to_string())
    }

    #[test]
    fn test_parse_branch_line() {
        let entry =
            parse_branch_line(&line(&["feat/x", "2024-03-01 14:05:09 +0100", "Add x | y"]))
                .unwrap();
        assert_eq!(entry.name, "feat/x");
        assert_eq!(entry.last_commit_summary, "Add x | y");
        assert_eq!(
            entry.last_commit_time.unwrap().to_rfc3339(),
            "2024-03-01T14:05:09+01:00"
        );
        assert_eq!((entry.commits_ahead, entry.commits_behind), (0, 0));
    }

    #[test]
    fn test_parse_branch_line_bad_date_is_unknown() {
        let entry = parse_branch_line(&line(&["main", "yesterday", "msg"])).unwrap();
        assert!(entry.last_commit_time.is_none());
    }

    #[test]
    fn test_parse_branch_line_rejects_malformed() {
        assert!(parse_branch_line("").is_none());
        assert!(parse_branch_line("just-a-name").is_none());
        assert!(parse_branch_line(&line(&["", "2024-03-01 14:05:09 +0100", "m"])).is_none());
    }

    #[test]
    fn test_parse_commit_line() {
        let c = parse_commit_line(&line(&[
            "0123456789abcdef0123",
            "Fix the thing",
            "2023-12-31 23:59:59 -0500",
            "Grace Hopper",
        ]))
        .unwrap();
        assert_eq!(c.hash, "0123456789abcdef0123");
        assert_eq!(c.summary, "Fix the thing");
        assert_eq!(c.author, "Grace Hopper");
        assert!(c.time.is_some());
    }

    #[test]
    fn test_parse_ahead_behind() {
        assert_eq!(parse_ahead_behind("3\t5\n"), Some((5, 3)));
        assert_eq!(parse_ahead_behind("0 0"), Some((0, 0)));
        assert_eq!(parse_ahead_behind(""), None);
        assert_eq!(parse_ahead_behind("1"), None);
        assert_eq!(parse_ahead_behind("a b"), None);
    }

    #[test]
    fn test_sort_by_recency_puts_unknown_last() {
        let mk = |name: &str, date: &str| BranchEntry {
            name: name.to_string(),
            last_commit_time: parse_iso_date(date),
            last_commit_summary: String::new(),
            commits_ahead: 0,
            commits_behind: 0,
        };
        let mut branches = vec![
            mk("old", "2020-01-01 00:00:00 +0000"),
            mk("unknown", "garbage"),
            mk("new", "2024-01-01 00:00:00 +0000"),
            // Same instant as "new" in another zone
            mk("same", "2024-01-01 02:00:00 +0200"),
        ];
        sort_by_recency(&mut branches);
        let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["new", "same", "old", "unknown"]);
    }

    #[test]
    fn test_find_repo_root_walks_up() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join(GIT_DIR_ENTRY)).unwrap();
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_repo_root(&nested).as_deref(), Some(tmp.path()));
    }

    #[test]
    fn test_find_repo_root_none_outside_repo() {
        let tmp = tempfile::tempdir().unwrap();
        // tempdir may itself live below a repo, so only check the dir itself
        let found = find_repo_root(tmp.path());
        assert!(found.is_none_or(|root| root != tmp.path()));
    }
}
