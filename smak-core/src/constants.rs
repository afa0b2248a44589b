pub const APP_NAME: &str = "smak";

/// Entry name marking a git work tree root (a directory, or a file for linked worktrees)
pub const GIT_DIR_ENTRY: &str = ".git";

/// Separates fields in `git for-each-ref --format` / `git log --pretty` output
pub const FIELD_SEPARATOR: char = '\u{1f}';

/// Date layout produced by git's `iso` date format, e.g. `2024-03-01 14:05:09 +0100`
pub const GIT_ISO_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

pub const SHORT_HASH_LEN: usize = 8;

/// Porcelain status codes git uses for unmerged paths
pub const DEFAULT_UNMERGED_CODES: &[&str] = &["DD", "AU", "UD", "UA", "DU", "AA", "UU"];

/// Rows used by list chrome: borders, the status line and the footer
pub const LIST_CHROME_ROWS: u16 = 4;

/// Each list entry renders as a title line and a description line
pub const LIST_ROW_HEIGHT: u16 = 2;

/// Rows used by the viewer header (hash, author, date, message, blank), the
/// content borders, the status line and the footer
pub const VIEWER_CHROME_ROWS: u16 = 9;
