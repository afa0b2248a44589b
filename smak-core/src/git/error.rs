use thiserror::Error;

/// Failure of a single git invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to run git {args}: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },
    #[error("git {args} failed ({}): {}", exit_label(*code), stderr.trim_end())]
    Failed {
        args: String,
        /// `None` when the process was killed by a signal
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: Option<i32>) -> String {
    code.map_or_else(|| "killed by signal".to_string(), |c| format!("exit code {c}"))
}

impl CommandError {
    pub fn failed(args: &[&str], code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::Failed {
            args: args.join(" "),
            code,
            stderr: stderr.into(),
        }
    }

    /// Captured stderr of a failed command, empty for spawn failures
    pub fn stderr(&self) -> &str {
        match self {
            Self::Spawn { .. } => "",
            Self::Failed { stderr, .. } => stderr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_message_includes_args_and_stderr() {
        let err = CommandError::failed(&["branch", "-D", "x"], Some(1), "error: not found\n");
        assert_eq!(
            err.to_string(),
            "git branch -D x failed (exit code 1): error: not found"
        );
        assert_eq!(err.stderr(), "error: not found\n");
    }

    #[test]
    fn test_signal_exit() {
        let err = CommandError::failed(&["merge"], None, "");
        assert!(err.to_string().contains("killed by signal"));
    }
}
