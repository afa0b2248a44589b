use smak_core::{
    constants::APP_NAME,
    git::{CommandError, EntriesKind, GitProvider, find_repo_root},
};
use std::path::{Path, PathBuf};

pub type CliResult<T> = Result<T, CliError>;

/// Failure reported on stderr before exiting.
///
/// `user` errors (bad working directory, failed git operation) exit with 1,
/// `system` errors (config, terminal, logging) with 2.
#[derive(Debug)]
pub struct CliError {
    message: String,
    code: u8,
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 1,
        }
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 2,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> u8 {
        self.code
    }
}

impl From<anyhow::Error> for CliError {
    fn from(value: anyhow::Error) -> Self {
        Self::system(format!("Error: {value:#}"))
    }
}

pub fn print_error(error: &CliError) {
    eprintln!("{}", error.message());
}

/// Root of the git work tree containing `cwd`
pub fn require_repo_root(cwd: &Path) -> CliResult<PathBuf> {
    let cwd = dunce::canonicalize(cwd).unwrap_or_else(|_| cwd.to_path_buf());
    find_repo_root(&cwd).ok_or_else(|| CliError::user("Error: not a git repository"))
}

pub fn load_error(kind: EntriesKind, error: &CommandError) -> CliError {
    let noun = match kind {
        EntriesKind::Branches => "branches",
        EntriesKind::Commits => "commits",
    };
    CliError::user(format!("Error getting {noun}: {error}"))
}

/// `smak c am`: stage everything, amend HEAD and optionally push
pub fn cmd_amend(git: &dyn GitProvider, push: bool) -> CliResult<String> {
    git.amend_all(push)
        .map_err(|e| CliError::user(format!("Error amending commit: {e}")))?;
    log::info!("{APP_NAME}: amended HEAD (push={push})");
    Ok(if push {
        "Successfully staged all changes, amended to latest commit, and pushed".to_string()
    } else {
        "Successfully staged all changes and amended to latest commit".to_string()
    })
}
