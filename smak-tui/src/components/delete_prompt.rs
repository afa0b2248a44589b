use super::dialog::Dialog;
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
};
use smak_core::config::{Command, KeysConfig};
use smak_core::state::{BrowserState, Mode};

pub fn draw(f: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme, keys: &KeysConfig) {
    if state.mode != Mode::ConfirmingDelete {
        return;
    }

    let keymap = keys.keymap_for_mode(&Mode::ConfirmingDelete);
    let confirm_key = KeysConfig::find_key(&keymap, &Command::Confirm)
        .map_or("y".to_string(), |k| k.to_string());
    let cancel_key = KeysConfig::find_key(&keymap, &Command::Cancel)
        .map_or("n".to_string(), |k| k.to_string());

    let names = state.pending_delete_names().join(", ");
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::raw("Delete branches: "),
            Span::styled(names, bold.fg(theme.marked)),
            Span::raw("?"),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::raw("yes ("),
            Span::styled(confirm_key, bold),
            Span::raw(") / no ("),
            Span::styled(cancel_key, bold),
            Span::raw(")"),
        ]),
    ];

    Dialog::new(lines)
        .title(" Confirm Delete ")
        .border_color(theme.marked)
        .alignment(Alignment::Center)
        .render(f, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render;
    use smak_core::action::Action;
    use smak_core::config::load_config_from_str;
    use smak_core::event::Event;
    use smak_core::git::{BranchEntry, Entries};
    use smak_core::state::Viewport;

    fn branch(name: &str) -> BranchEntry {
        BranchEntry {
            name: name.to_string(),
            last_commit_time: None,
            last_commit_summary: String::new(),
            commits_ahead: 0,
            commits_behind: 0,
        }
    }

    fn prompting() -> BrowserState {
        let mut state = BrowserState::new(
            Entries::Branches(vec![branch("main"), branch("old"), branch("stale")]),
            Viewport::new(80, 20),
        );
        for action in [
            Action::MoveDown,
            Action::ToggleDelete,
            Action::MoveDown,
            Action::ToggleDelete,
            Action::Confirm,
        ] {
            state = state.update(Event::Action(action)).0;
        }
        state
    }

    #[test]
    fn test_prompt_lists_marked_branches_in_order() {
        let state = prompting();
        let output = render(80, 20, |f| {
            draw(f, f.area(), &state, &Theme::default(), &KeysConfig::default());
        });
        assert!(output.contains("Confirm Delete"));
        assert!(output.contains("Delete branches: old, stale?"));
        assert!(output.contains("yes (y) / no (n)"));
    }

    #[test]
    fn test_prompt_shows_rebound_keys() {
        let config = load_config_from_str(
            r#"
[keys.delete_prompt]
"y" = "noop"
"Y" = "noop"
"enter" = "noop"
"o" = "confirm"
"#,
        )
        .unwrap();
        let state = prompting();
        let output = render(80, 20, |f| {
            draw(f, f.area(), &state, &Theme::default(), &config.keys);
        });
        assert!(output.contains("yes (o)"));
    }

    #[test]
    fn test_nothing_drawn_outside_prompt() {
        let mut state = prompting();
        state.mode = Mode::Browsing;
        let output = render(80, 20, |f| {
            draw(f, f.area(), &state, &Theme::default(), &KeysConfig::default());
        });
        assert!(output.trim().is_empty());
    }
}
