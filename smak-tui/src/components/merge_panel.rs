use super::dialog::Dialog;
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Padding,
};
use smak_core::config::{Command, KeysConfig};
use smak_core::git::MergeOutcome;
use smak_core::state::BrowserState;

/// Borders, the heading, two blank lines and the key hints
const PANEL_CHROME_ROWS: u16 = 6;

/// Result panel shown after a merge attempt
pub fn draw(f: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme, keys: &KeysConfig) {
    let Some((source, target, outcome)) = state.merge_result() else {
        return;
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let (title, color) = match outcome {
        MergeOutcome::Success => (" Merged ", theme.success),
        MergeOutcome::Conflicts { .. } => (" Merge Conflicts ", theme.warning),
        MergeOutcome::Failure { .. } => (" Merge Failed ", theme.error),
    };

    let mut lines = match outcome {
        MergeOutcome::Success => vec![Line::from(vec![
            Span::raw("Merged "),
            Span::styled(source, bold.fg(theme.merge_source)),
            Span::raw(" into "),
            Span::styled(target, bold.fg(theme.accent)),
        ])],
        MergeOutcome::Conflicts { files, count } => {
            let mut lines = vec![
                Line::from(vec![
                    Span::raw("Merging "),
                    Span::styled(source, bold.fg(theme.merge_source)),
                    Span::raw(" into "),
                    Span::styled(target, bold.fg(theme.accent)),
                    Span::raw(format!(" left {count} conflicting file(s):")),
                ]),
                Line::raw(""),
            ];
            // The panel cannot scroll, so overflow collapses into a summary line
            let room = usize::from(area.height.saturating_sub(PANEL_CHROME_ROWS));
            let shown = if files.len() <= room {
                files.len()
            } else {
                room.saturating_sub(1)
            };
            lines.extend(
                files[..shown]
                    .iter()
                    .map(|file| Line::styled(format!("  {file}"), Style::default().fg(color))),
            );
            if shown < files.len() {
                lines.push(Line::styled(
                    format!("  …and {} more", files.len() - shown),
                    Style::default().fg(theme.muted),
                ));
            }
            lines
        }
        MergeOutcome::Failure { message } => {
            let mut lines = vec![
                Line::from(vec![
                    Span::raw("Could not merge "),
                    Span::styled(source, bold.fg(theme.merge_source)),
                    Span::raw(" into "),
                    Span::styled(target, bold.fg(theme.accent)),
                ]),
                Line::raw(""),
            ];
            lines.extend(
                message
                    .lines()
                    .map(|line| Line::styled(line, Style::default().fg(theme.muted))),
            );
            lines
        }
    };

    let keymap = keys.keymap_for_mode(&state.mode);
    let hint = |command: &Command, label: &'static str| {
        KeysConfig::find_key(&keymap, command).map(|key| {
            vec![
                Span::styled(key.to_string(), bold.fg(theme.hint)),
                Span::styled(format!(" {label}"), Style::default().fg(theme.muted)),
            ]
        })
    };
    let mut hints = Vec::new();
    if let Some(spans) = hint(&Command::Confirm, "dismiss") {
        hints.extend(spans);
    }
    if let Some(spans) = hint(&Command::Cancel, "abort merge") {
        if !hints.is_empty() {
            hints.push(Span::raw("   "));
        }
        hints.extend(spans);
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(hints));

    Dialog::new(lines)
        .title(title)
        .border_color(color)
        .padding(Padding::horizontal(1))
        .render(f, area);
}
