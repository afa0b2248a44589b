use super::{
    entry::{BranchEntry, CommitEntry, MergeOutcome},
    error::CommandError,
    parse_ahead_behind, parse_branch_line, parse_commit_line,
    provider::GitProvider,
    sort_by_recency,
    status::{UnmergedCodes, classify_merge_failure},
};
use std::{
    path::PathBuf,
    process::{Command, Output},
};

const BRANCH_FORMAT: &str = "--format=%(refname:short)%1f%(committerdate:iso)%1f%(subject)";
const LOG_FORMAT: &str = "--pretty=format:%H%x1f%s%x1f%ad%x1f%an";

/// Runs the `git` binary inside a work tree.
pub struct CliGitProvider {
    repo_path: PathBuf,
    unmerged: UnmergedCodes,
}

impl CliGitProvider {
    pub fn new(repo_path: impl Into<PathBuf>, unmerged: UnmergedCodes) -> Self {
        Self {
            repo_path: repo_path.into(),
            unmerged,
        }
    }

    fn spawn(&self, args: &[&str]) -> Result<Output, CommandError> {
        log::debug!("git {}", args.join(" "));
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|source| CommandError::Spawn {
                args: args.join(" "),
                source,
            })
    }

    /// Run git and return stdout, failing on a non-zero exit
    fn run(&self, args: &[&str]) -> Result<String, CommandError> {
        let output = self.spawn(args)?;
        if !output.status.success() {
            return Err(CommandError::failed(
                args,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn ahead_behind(&self, branch: &str) -> (u32, u32) {
        let range = format!("origin/{branch}...{branch}");
        self.run(&["rev-list", "--left-right", "--count", &range])
            .ok()
            .and_then(|out| parse_ahead_behind(&out))
            .unwrap_or((0, 0))
    }
}

impl GitProvider for CliGitProvider {
    fn list_branches(&self) -> Result<Vec<BranchEntry>, CommandError> {
        let stdout = self.run(&["for-each-ref", BRANCH_FORMAT, "refs/heads"])?;
        let mut branches: Vec<BranchEntry> = stdout
            .lines()
            .filter_map(parse_branch_line)
            .map(|mut branch| {
                (branch.commits_ahead, branch.commits_behind) = self.ahead_behind(&branch.name);
                branch
            })
            .collect();
        sort_by_recency(&mut branches);
        Ok(branches)
    }

    fn list_commits(&self) -> Result<Vec<CommitEntry>, CommandError> {
        let stdout = self.run(&["log", LOG_FORMAT, "--date=iso"])?;
        Ok(stdout.lines().filter_map(parse_commit_line).collect())
    }

    fn checkout(&self, name: &str) -> Result<(), CommandError> {
        self.run(&["checkout", name]).map(|_| ())
    }

    fn delete_branches(&self, names: &[String]) -> Result<(), CommandError> {
        for name in names {
            if let Err(e) = self.run(&["branch", "-d", name]) {
                log::warn!("safe delete of {name} refused, forcing: {e}");
                self.run(&["branch", "-D", name])?;
            }
        }
        Ok(())
    }

    fn merge(&self, source: &str, target: &str) -> MergeOutcome {
        if let Err(e) = self.checkout(target) {
            let stderr = e.stderr().trim();
            return MergeOutcome::Failure {
                message: if stderr.is_empty() {
                    e.to_string()
                } else {
                    stderr.to_string()
                },
            };
        }

        let output = match self.spawn(&["merge", "--no-edit", source]) {
            Ok(output) => output,
            Err(e) => {
                return MergeOutcome::Failure {
                    message: e.to_string(),
                };
            }
        };
        if output.status.success() {
            return MergeOutcome::Success;
        }

        let combined = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        match self.run(&["status", "--porcelain", "-z"]) {
            Ok(status) => classify_merge_failure(&status, &combined, &self.unmerged),
            Err(e) => {
                log::warn!("could not inspect status after failed merge: {e}");
                MergeOutcome::Failure {
                    message: combined.trim().to_string(),
                }
            }
        }
    }

    fn abort_merge(&self) -> Result<(), CommandError> {
        self.run(&["merge", "--abort"]).map(|_| ())
    }

    fn fetch_detail(&self, reference: &str) -> Result<String, CommandError> {
        self.run(&["show", "--stat", "--patch", "--format=fuller", reference])
    }

    fn amend_all(&self, push: bool) -> Result<(), CommandError> {
        self.run(&["add", "-A"])?;
        self.run(&["commit", "--amend", "--no-edit"])?;
        if push {
            self.run(&["push", "--force-with-lease"])?;
        }
        Ok(())
    }
}
