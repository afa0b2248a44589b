use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use smak_core::state::{DiffLineKind, ViewerState};

/// Rows taken by the commit header above the content
const HEADER_ROWS: u16 = 5;

pub fn draw(f: &mut Frame, area: Rect, viewer: &ViewerState, theme: &Theme) {
    let [header_area, content_area] =
        Layout::vertical([Constraint::Length(HEADER_ROWS), Constraint::Min(1)]).areas(area);

    let commit = &viewer.commit;
    let label = Style::default().fg(theme.muted);
    let header = vec![
        Line::from(vec![
            Span::styled("commit ", label),
            Span::styled(
                commit.hash.as_str(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Author: ", label),
            Span::raw(commit.author.as_str()),
        ]),
        Line::from(vec![Span::styled("Date:   ", label), Span::raw(commit.date())]),
        Line::from(Span::styled(
            format!("    {}", commit.summary),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(Paragraph::new(header), header_area);

    let visible = usize::from(content_area.height.saturating_sub(2));
    let lines: Vec<Line> = viewer
        .lines()
        .skip(viewer.scroll_offset)
        .take(visible)
        .map(|(kind, text)| Line::styled(text, line_style(kind, theme)))
        .collect();

    let position = if viewer.line_count == 0 {
        String::new()
    } else {
        format!(
            " {}-{} of {} ",
            viewer.scroll_offset + 1,
            (viewer.scroll_offset + visible).min(viewer.line_count),
            viewer.line_count
        )
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", commit.short_hash()))
        .title_bottom(Line::from(position).right_aligned())
        .border_style(Style::default().fg(theme.border));
    f.render_widget(Paragraph::new(lines).block(block), content_area);
}

fn line_style(kind: DiffLineKind, theme: &Theme) -> Style {
    match kind {
        DiffLineKind::FileHeader => Style::default().add_modifier(Modifier::BOLD),
        DiffLineKind::Added => Style::default().fg(theme.success),
        DiffLineKind::Removed => Style::default().fg(theme.error),
        DiffLineKind::HunkHeader => Style::default().fg(theme.hint),
        DiffLineKind::Context => Style::default(),
    }
}
