pub mod action;
pub mod config;
pub mod constants;
pub mod driver;
pub mod effect;
pub mod event;
pub mod git;
pub mod keyboard;
pub mod state;

// Re-export commonly used types at crate root
pub use action::Action;
pub use config::Config;
pub use effect::{Effect, SessionEnd};
pub use event::{Completion, Event};
pub use git::{CliGitProvider, Entries, EntriesKind, GitProvider};
pub use keyboard::KeyEvent;
pub use state::{BrowserState, Mode, Viewport};
