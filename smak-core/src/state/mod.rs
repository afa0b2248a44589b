pub mod list;
pub mod merge;
pub mod selection;
pub mod viewer;

pub use list::ScrollableList;
pub use merge::MergeState;
pub use selection::SelectionSet;
pub use viewer::{DiffLineKind, ViewerState};

use crate::{
    action::Action,
    config::keys::Command,
    constants::{LIST_CHROME_ROWS, LIST_ROW_HEIGHT, VIEWER_CHROME_ROWS},
    effect::{Effect, SessionEnd},
    event::{Completion, Event},
    git::{Entries, EntriesKind, MergeOutcome},
};

/// Terminal size in cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Entries that fit in the list at once
    pub fn list_rows(self) -> usize {
        usize::from((self.height.saturating_sub(LIST_CHROME_ROWS) / LIST_ROW_HEIGHT).max(1))
    }

    /// Content lines that fit in the commit viewer at once
    pub fn viewer_rows(self) -> usize {
        usize::from(self.height.saturating_sub(VIEWER_CHROME_ROWS).max(1))
    }
}

/// How a list row is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Normal,
    MarkedForDeletion,
    MergeSource,
}

/// What the browser is doing. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    /// Waiting for the user to accept or decline deleting the marked branches
    ConfirmingDelete,
    /// Never holds [`MergeState::Inactive`]
    Merging(MergeState),
    ViewingDetail(ViewerState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    pub entries: Entries,
    pub list: ScrollableList,
    pub selection: SelectionSet,
    pub mode: Mode,
    /// One per entry, rebuilt whenever marks or merge mode change
    pub rows: Vec<RowKind>,
    pub viewport: Viewport,
    /// Last collaborator error, cleared on the next key
    pub error: Option<String>,
}

impl BrowserState {
    pub fn new(entries: Entries, viewport: Viewport) -> Self {
        let mut state = Self {
            list: ScrollableList::new(entries.len()),
            entries,
            selection: SelectionSet::default(),
            mode: Mode::Browsing,
            rows: Vec::new(),
            viewport,
            error: None,
        };
        state.rebuild_rows();
        state
    }

    pub fn kind(&self) -> EntriesKind {
        self.entries.kind()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list.selected
    }

    /// Names the delete prompt will remove, in list order
    pub fn pending_delete_names(&self) -> Vec<String> {
        self.selection.names(&self.entries)
    }

    /// Pure transition. The returned effect, if any, must be executed and its
    /// completion fed back through `update`.
    pub fn update(mut self, event: Event) -> (Self, Option<Effect>) {
        match event {
            Event::Tick => (self, None),
            Event::Resize { width, height } => {
                self.resize(Viewport::new(width, height));
                (self, None)
            }
            Event::Action(action) => {
                self.error = None;
                self.on_action(action)
            }
            Event::Completed(completion) => self.on_completion(completion),
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.list
            .update_scroll_offset_for_selection(viewport.list_rows());
        if let Mode::ViewingDetail(viewer) = &mut self.mode {
            viewer.clamp(viewport.viewer_rows());
        }
    }

    fn on_action(mut self, action: Action) -> (Self, Option<Effect>) {
        let mode = std::mem::replace(&mut self.mode, Mode::Browsing);
        match mode {
            Mode::ViewingDetail(viewer) => self.on_viewer_action(viewer, action),
            Mode::Merging(merge) if merge.is_result_ready() => {
                let (merge, effect) = match action {
                    Action::Confirm => merge.confirm(None, &self.entries),
                    Action::Quit => merge.quit(),
                    Action::Cancel => merge.cancel(),
                    _ => (merge, None),
                };
                self.set_merge(merge);
                (self, effect)
            }
            Mode::ConfirmingDelete => match action {
                Action::Confirm => {
                    self.mode = Mode::ConfirmingDelete;
                    let names = self.pending_delete_names();
                    (self, Some(Effect::DeleteBranches { names }))
                }
                // Declining keeps the marks
                Action::Cancel | Action::Quit => (self, None),
                _ => {
                    self.mode = Mode::ConfirmingDelete;
                    (self, None)
                }
            },
            other => {
                self.mode = other;
                self.on_list_action(action)
            }
        }
    }

    fn on_viewer_action(
        mut self,
        mut viewer: ViewerState,
        action: Action,
    ) -> (Self, Option<Effect>) {
        let rows = self.viewport.viewer_rows();
        let half = isize::try_from((rows / 2).max(1)).unwrap_or(1);
        match action {
            Action::Quit | Action::Cancel => return (self, None),
            Action::MoveUp => viewer.scroll(-1, rows),
            Action::MoveDown => viewer.scroll(1, rows),
            Action::PageUp => viewer.page_up(rows),
            Action::PageDown => viewer.page_down(rows),
            Action::HalfPageUp => viewer.scroll(-half, rows),
            Action::HalfPageDown => viewer.scroll(half, rows),
            Action::MoveTop => viewer.scroll_to_top(),
            Action::MoveBottom => viewer.scroll_to_bottom(rows),
            Action::Confirm | Action::ToggleDelete | Action::StartMerge => {}
        }
        self.mode = Mode::ViewingDetail(viewer);
        (self, None)
    }

    fn on_list_action(mut self, action: Action) -> (Self, Option<Effect>) {
        let page = i32::try_from(self.viewport.list_rows()).unwrap_or(i32::MAX);
        match action {
            Action::MoveUp => self.move_cursor(|l| l.move_selection(-1)),
            Action::MoveDown => self.move_cursor(|l| l.move_selection(1)),
            Action::PageUp => self.move_cursor(|l| l.move_selection(-page)),
            Action::PageDown => self.move_cursor(|l| l.move_selection(page)),
            Action::HalfPageUp => self.move_cursor(|l| l.move_selection(-(page / 2).max(1))),
            Action::HalfPageDown => self.move_cursor(|l| l.move_selection((page / 2).max(1))),
            Action::MoveTop => self.move_cursor(ScrollableList::move_to_top),
            Action::MoveBottom => self.move_cursor(ScrollableList::move_to_bottom),
            Action::Quit => return self.back_out(false),
            Action::Cancel => return self.back_out(true),
            Action::ToggleDelete => {
                if self.mode == Mode::Browsing
                    && self.kind() == EntriesKind::Branches
                    && let Some(cursor) = self.cursor()
                {
                    self.selection.toggle(cursor, self.entries.len());
                    self.rebuild_rows();
                }
            }
            Action::StartMerge => {
                if self.mode == Mode::Browsing && self.kind() == EntriesKind::Branches {
                    let merge = MergeState::start(self.cursor(), &self.entries);
                    self.set_merge(merge);
                }
            }
            Action::Confirm => return self.confirm(),
        }
        (self, None)
    }

    fn confirm(mut self) -> (Self, Option<Effect>) {
        match std::mem::replace(&mut self.mode, Mode::Browsing) {
            Mode::Browsing if !self.selection.is_empty() => {
                self.mode = Mode::ConfirmingDelete;
                (self, None)
            }
            Mode::Browsing => {
                let Some(cursor) = self.cursor() else {
                    return (self, None);
                };
                let effect = match &self.entries {
                    Entries::Branches(branches) => Effect::Checkout {
                        name: branches[cursor].name.clone(),
                    },
                    Entries::Commits(commits) => Effect::FetchDetail {
                        reference: commits[cursor].hash.clone(),
                    },
                };
                (self, Some(effect))
            }
            Mode::Merging(merge) => {
                let (merge, effect) = merge.confirm(self.cursor(), &self.entries);
                self.set_merge(merge);
                (self, effect)
            }
            other => {
                self.mode = other;
                (self, None)
            }
        }
    }

    /// Quit and cancel back out one level: marks, then merge mode, then the session.
    /// Only cancel aborts a merge with pending conflicts.
    fn back_out(mut self, cancel: bool) -> (Self, Option<Effect>) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.rebuild_rows();
            return (self, None);
        }
        match std::mem::replace(&mut self.mode, Mode::Browsing) {
            Mode::Merging(merge) => {
                let (merge, effect) = if cancel { merge.cancel() } else { merge.quit() };
                self.set_merge(merge);
                (self, effect)
            }
            _ => (self, Some(Effect::Exit(SessionEnd::Quit))),
        }
    }

    fn move_cursor(&mut self, f: impl FnOnce(&mut ScrollableList)) {
        f(&mut self.list);
        self.list
            .update_scroll_offset_for_selection(self.viewport.list_rows());
    }

    fn set_merge(&mut self, merge: MergeState) {
        self.mode = match merge {
            MergeState::Inactive => Mode::Browsing,
            active => Mode::Merging(active),
        };
        self.rebuild_rows();
    }

    fn on_completion(mut self, completion: Completion) -> (Self, Option<Effect>) {
        let reload = Effect::Reload { kind: self.kind() };
        match completion {
            Completion::CheckedOut { name, result } => {
                let end = match result {
                    Ok(()) => SessionEnd::CheckedOut(name),
                    Err(e) => SessionEnd::Failed(format!("checkout of {name} failed: {e}")),
                };
                (self, Some(Effect::Exit(end)))
            }
            Completion::Deleted(result) => {
                self.selection.clear();
                self.mode = Mode::Browsing;
                self.error = result.err();
                self.rebuild_rows();
                (self, Some(reload))
            }
            Completion::Merged {
                source,
                target,
                outcome,
            } => {
                self.set_merge(MergeState::completed(source, target, outcome));
                (self, None)
            }
            Completion::Aborted(result) => {
                self.error = result.err();
                (self, Some(reload))
            }
            Completion::Reloaded(Ok(fresh)) => {
                self.apply_reload(fresh);
                (self, None)
            }
            Completion::Reloaded(Err(e)) => (self, Some(Effect::Exit(SessionEnd::Failed(e)))),
            Completion::DetailFetched { reference, result } => {
                match result {
                    Ok(content) => {
                        if let Some(commit) = self.commit_by_hash(&reference) {
                            let viewer = ViewerState::open(commit, content);
                            self.mode = Mode::ViewingDetail(viewer);
                        }
                    }
                    Err(e) => self.error = Some(e),
                }
                (self, None)
            }
        }
    }

    fn commit_by_hash(&self, hash: &str) -> Option<crate::git::CommitEntry> {
        let index = self.entries.position_of(hash)?;
        self.entries.commit_at(index).cloned()
    }

    fn apply_reload(&mut self, fresh: Entries) {
        self.selection.rebase(&self.entries, &fresh);
        self.list.reset(fresh.len());
        self.entries = fresh;
        self.mode = match std::mem::replace(&mut self.mode, Mode::Browsing) {
            Mode::Merging(merge) => match merge.after_reload() {
                MergeState::Inactive => Mode::Browsing,
                pending => Mode::Merging(pending),
            },
            _ => Mode::Browsing,
        };
        self.rebuild_rows();
    }

    /// Recompute row kinds. A merge source is shown as such even when marked.
    pub fn rebuild_rows(&mut self) {
        let source = match &self.mode {
            Mode::Merging(merge) => merge.source_index(),
            _ => None,
        };
        self.rows = (0..self.entries.len())
            .map(|i| {
                if source == Some(i) {
                    RowKind::MergeSource
                } else if self.selection.contains(i) {
                    RowKind::MarkedForDeletion
                } else {
                    RowKind::Normal
                }
            })
            .collect();
    }

    /// Commands to show in the footer bar, in display order.
    pub fn footer_commands(&self) -> &'static [Command] {
        match &self.mode {
            Mode::Browsing => match self.kind() {
                EntriesKind::Branches if !self.selection.is_empty() => &[
                    Command::MoveUp,
                    Command::MoveDown,
                    Command::Confirm,
                    Command::ToggleDelete,
                    Command::Cancel,
                    Command::Quit,
                ],
                EntriesKind::Branches => &[
                    Command::MoveUp,
                    Command::MoveDown,
                    Command::Confirm,
                    Command::ToggleDelete,
                    Command::StartMerge,
                    Command::Quit,
                ],
                EntriesKind::Commits => &[
                    Command::MoveUp,
                    Command::MoveDown,
                    Command::Confirm,
                    Command::Quit,
                ],
            },
            Mode::ConfirmingDelete => &[Command::Confirm, Command::Cancel],
            Mode::Merging(MergeState::SelectingTarget { .. }) => &[
                Command::MoveUp,
                Command::MoveDown,
                Command::Confirm,
                Command::Cancel,
            ],
            Mode::Merging(MergeState::ConflictsPending { .. }) => &[
                Command::MoveUp,
                Command::MoveDown,
                Command::Confirm,
                Command::Cancel,
                Command::Quit,
            ],
            Mode::Merging(_) => &[Command::Confirm, Command::Cancel],
            Mode::ViewingDetail(_) => &[
                Command::MoveUp,
                Command::MoveDown,
                Command::PageUp,
                Command::PageDown,
                Command::Cancel,
            ],
        }
    }

    /// Footer label for a command, worded for what it does in the current mode
    pub fn command_label(&self, command: &Command) -> &'static str {
        match (&self.mode, command) {
            (Mode::Browsing, Command::Confirm) if !self.selection.is_empty() => "delete",
            (Mode::Browsing, Command::Confirm) => match self.kind() {
                EntriesKind::Branches => "checkout",
                EntriesKind::Commits => "view",
            },
            (Mode::Browsing, Command::Cancel) => "clear",
            (Mode::Browsing, Command::ToggleDelete) => "mark",
            (Mode::Browsing, Command::StartMerge) => "merge",
            (Mode::ConfirmingDelete, Command::Confirm) => "yes",
            (Mode::ConfirmingDelete, Command::Cancel) => "no",
            (Mode::Merging(MergeState::SelectingTarget { .. }), Command::Confirm) => "merge into",
            (Mode::Merging(MergeState::ConflictsPending { .. }), Command::Confirm) => {
                "show conflicts"
            }
            (Mode::Merging(MergeState::ConflictsPending { .. }), Command::Quit) => "keep & leave",
            (Mode::Merging(MergeState::ResultReady { .. }), Command::Confirm) => "dismiss",
            (Mode::Merging(MergeState::SelectingTarget { .. }), Command::Cancel) => "cancel",
            (Mode::Merging(_), Command::Cancel) => "abort",
            (Mode::ViewingDetail(_), Command::Cancel) => "back",
            (_, Command::MoveUp | Command::MoveDown) => "navigate",
            _ => command.description(),
        }
    }

    /// Outcome to show in the merge result panel, if it is open
    pub fn merge_result(&self) -> Option<(&str, &str, &MergeOutcome)> {
        match &self.mode {
            Mode::Merging(MergeState::ResultReady {
                source_name,
                target_name,
                outcome,
            }) => Some((source_name, target_name, outcome)),
            _ => None,
        }
    }
}
