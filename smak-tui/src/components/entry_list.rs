use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use smak_core::git::EntriesKind;
use smak_core::state::{BrowserState, MergeState, Mode, RowKind};

pub fn draw(f: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(list_title(state))
        .title_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(theme.border));

    if state.entries.is_empty() {
        let noun = match state.kind() {
            EntriesKind::Branches => "branches",
            EntriesKind::Commits => "commits",
        };
        let empty = Paragraph::new(Span::styled(
            format!("No {noun} found"),
            Style::default().fg(theme.muted),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = (0..state.entries.len())
        .map(|i| {
            let row = state.rows.get(i).copied().unwrap_or(RowKind::Normal);
            let (marker, title_style) = match row {
                RowKind::Normal => ("  ", Style::default()),
                RowKind::MarkedForDeletion => (
                    "✗ ",
                    Style::default()
                        .fg(theme.marked)
                        .add_modifier(Modifier::CROSSED_OUT),
                ),
                RowKind::MergeSource => (
                    "⇢ ",
                    Style::default()
                        .fg(theme.merge_source)
                        .add_modifier(Modifier::BOLD),
                ),
            };
            let title = state.entries.title_at(i).unwrap_or_default();
            let description = state.entries.description_at(i).unwrap_or_default();

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, title_style),
                    Span::styled(title, title_style),
                ]),
                Line::from(Span::styled(
                    format!("  {description}"),
                    Style::default().fg(theme.muted),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme.accent)
                .fg(theme.highlight_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default()
        .with_offset(state.list.scroll_offset)
        .with_selected(state.list.selected);
    f.render_stateful_widget(list, area, &mut list_state);
}

fn list_title(state: &BrowserState) -> String {
    let count = state.entries.len();
    match (&state.mode, state.kind()) {
        (Mode::Merging(MergeState::SelectingTarget { source_index }), _) => {
            let source = state.entries.name_at(*source_index).unwrap_or("?");
            format!(" Merge {source} into… ")
        }
        (
            Mode::Merging(MergeState::ConflictsPending {
                source_name,
                target_name,
                files,
            }),
            _,
        ) => format!(
            " {} conflicting file(s) merging {source_name} into {target_name} ",
            files.len()
        ),
        (_, EntriesKind::Branches) if !state.selection.is_empty() => {
            format!(" {count} branches, {} marked ", state.selection.len())
        }
        (_, EntriesKind::Branches) => format!(" {count} branches "),
        (_, EntriesKind::Commits) => format!(" {count} commits "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render;
    use smak_core::action::Action;
    use smak_core::event::Event;
    use smak_core::git::{BranchEntry, CommitEntry, Entries};
    use smak_core::state::Viewport;

    fn branch(name: &str, summary: &str) -> BranchEntry {
        BranchEntry {
            name: name.to_string(),
            last_commit_time: None,
            last_commit_summary: summary.to_string(),
            commits_ahead: 2,
            commits_behind: 1,
        }
    }

    fn branches() -> BrowserState {
        BrowserState::new(
            Entries::Branches(vec![
                branch("main", "release prep"),
                branch("feature", "add parser"),
                branch("fix", "typo"),
            ]),
            Viewport::new(60, 12),
        )
    }

    fn draw_list(state: &BrowserState) -> String {
        render(60, 12, |f| draw(f, f.area(), state, &Theme::default()))
    }

    #[test]
    fn test_branch_rows_show_title_and_description() {
        let output = draw_list(&branches());
        assert!(output.contains("3 branches"));
        assert!(output.contains("▸ "));
        assert!(output.contains("main"));
        assert!(output.contains("unknown date | add parser | ↑2 ↓1"));
    }

    #[test]
    fn test_marked_rows_and_title_count() {
        let state = branches().update(Event::Action(Action::MoveDown)).0;
        let state = state.update(Event::Action(Action::ToggleDelete)).0;
        let output = draw_list(&state);
        assert!(output.contains("1 marked"));
        assert!(output.contains("✗ feature"));
    }

    #[test]
    fn test_merge_target_title_names_source() {
        let state = branches().update(Event::Action(Action::StartMerge)).0;
        let output = draw_list(&state);
        assert!(output.contains("Merge main into"));
        assert!(output.contains("⇢ main"));
    }

    #[test]
    fn test_commit_rows() {
        let state = BrowserState::new(
            Entries::Commits(vec![CommitEntry {
                hash: "0123456789abcdef".to_string(),
                summary: "Initial commit".to_string(),
                time: None,
                author: "Ada".to_string(),
            }]),
            Viewport::new(60, 12),
        );
        let output = draw_list(&state);
        assert!(output.contains("1 commits"));
        assert!(output.contains("01234567 - Initial commit"));
        assert!(output.contains("unknown date by Ada"));
    }

    #[test]
    fn test_empty_list() {
        let state = BrowserState::new(Entries::Branches(vec![]), Viewport::new(60, 12));
        assert!(draw_list(&state).contains("No branches found"));
    }
}
