use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
};
use smak_core::state::{BrowserState, MergeState, Mode};

/// Error from the last operation, otherwise a short note about pending work
pub fn draw(f: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let span = if let Some(error) = &state.error {
        Span::styled(
            format!(" Error: {error}"),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )
    } else if let Mode::Merging(MergeState::ConflictsPending { .. }) = state.mode {
        Span::styled(
            " Merge left unresolved; abort it or resolve the conflicts outside smak",
            Style::default().fg(theme.warning),
        )
    } else if !state.selection.is_empty() {
        Span::styled(
            format!(" {} marked for deletion", state.selection.len()),
            Style::default().fg(theme.marked),
        )
    } else {
        return;
    };
    f.render_widget(Paragraph::new(span), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render;
    use smak_core::git::Entries;
    use smak_core::state::Viewport;

    fn empty() -> BrowserState {
        BrowserState::new(Entries::Branches(vec![]), Viewport::new(80, 10))
    }

    #[test]
    fn test_error_message() {
        let mut state = empty();
        state.error = Some("branch 'dev' not found".to_string());
        let output = render(80, 1, |f| draw(f, f.area(), &state, &Theme::default()));
        assert!(output.contains("Error: branch 'dev' not found"));
    }

    #[test]
    fn test_blank_without_anything_to_report() {
        let state = empty();
        let output = render(80, 1, |f| draw(f, f.area(), &state, &Theme::default()));
        assert!(output.trim().is_empty());
    }
}
