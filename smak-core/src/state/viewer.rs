use crate::git::CommitEntry;

/// Scrollable detail view of a single commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    pub commit: CommitEntry,
    pub raw_content: String,
    pub line_count: usize,
    pub scroll_offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    FileHeader,
    Added,
    Removed,
    HunkHeader,
    Context,
}

impl DiffLineKind {
    pub fn classify(line: &str) -> Self {
        if line.starts_with("+++") || line.starts_with("---") {
            Self::FileHeader
        } else if line.starts_with('+') {
            Self::Added
        } else if line.starts_with('-') {
            Self::Removed
        } else if line.starts_with("@@") {
            Self::HunkHeader
        } else {
            Self::Context
        }
    }
}

impl ViewerState {
    pub fn open(commit: CommitEntry, content: String) -> Self {
        Self {
            commit,
            line_count: content.lines().count(),
            raw_content: content,
            scroll_offset: 0,
        }
    }

    pub fn commit_reference(&self) -> &str {
        &self.commit.hash
    }

    pub fn lines(&self) -> impl Iterator<Item = (DiffLineKind, &str)> {
        self.raw_content
            .lines()
            .map(|line| (DiffLineKind::classify(line), line))
    }

    fn max_offset(&self, visible_rows: usize) -> usize {
        self.line_count.saturating_sub(visible_rows)
    }

    /// Scroll by `delta` lines, staying within `[0, lines - visible_rows]`
    pub fn scroll(&mut self, delta: isize, visible_rows: usize) {
        let target = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = target.min(self.max_offset(visible_rows));
    }

    pub fn page_down(&mut self, visible_rows: usize) {
        self.scroll(page(visible_rows), visible_rows);
    }

    pub fn page_up(&mut self, visible_rows: usize) {
        self.scroll(-page(visible_rows), visible_rows);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, visible_rows: usize) {
        self.scroll_offset = self.max_offset(visible_rows);
    }

    /// Re-clamp after the terminal was resized
    pub fn clamp(&mut self, visible_rows: usize) {
        self.scroll_offset = self.scroll_offset.min(self.max_offset(visible_rows));
    }
}

fn page(visible_rows: usize) -> isize {
    isize::try_from(visible_rows.max(1)).unwrap_or(isize::MAX)
}
