#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

pub fn smak_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_smak"))
}

pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn commit_file(dir: &Path, file: &str, content: &str, message: &str, date: &str) {
    fs::write(dir.join(file), content).unwrap();
    git(dir, &["add", file]);
    let output = Command::new("git")
        .args(["commit", "-m", message])
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(output.status.success(), "commit {message} failed");
}

pub fn init_test_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(dir, &["config", "user.email", "test@test.com"]);
    git(dir, &["config", "user.name", "Test"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    commit_file(dir, "README.md", "# test\n", "init", "2024-01-01T12:00:00+00:00");
}

/// Scratch directories for a repo, its config and its log file
pub struct TestEnv {
    pub tmp: tempfile::TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("repo")).unwrap();
        fs::create_dir_all(tmp.path().join("config")).unwrap();
        Self { tmp }
    }

    pub fn repo(&self) -> PathBuf {
        self.tmp.path().join("repo")
    }

    pub fn config_home(&self) -> PathBuf {
        self.tmp.path().join("config")
    }

    pub fn cache_home(&self) -> PathBuf {
        self.tmp.path().join("cache")
    }

    pub fn smak(&self, dir: &Path) -> Command {
        let mut cmd = Command::new(smak_binary());
        cmd.current_dir(dir)
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_CACHE_HOME", self.cache_home());
        cmd
    }
}
