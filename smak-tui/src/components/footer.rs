use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use smak_core::config::KeysConfig;
use smak_core::state::BrowserState;

/// One line of `key label` hints for the current mode. Consecutive commands
/// sharing a label are folded together, e.g. `k/j navigate`.
pub fn draw(f: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme, keys: &KeysConfig) {
    let keymap = keys.keymap_for_mode(&state.mode);

    let mut groups: Vec<(Vec<String>, &'static str)> = Vec::new();
    for command in state.footer_commands() {
        let Some(key) = KeysConfig::find_key(&keymap, command) else {
            continue;
        };
        let label = state.command_label(command);
        match groups.last_mut() {
            Some((keys, last)) if *last == label => keys.push(key.to_string()),
            _ => groups.push((vec![key.to_string()], label)),
        }
    }

    let key_style = Style::default()
        .fg(theme.hint)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(theme.muted);

    let mut spans = vec![Span::raw(" ")];
    for (i, (keys, label)) in groups.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", label_style));
        }
        spans.push(Span::styled(keys.join("/"), key_style));
        spans.push(Span::styled(format!(" {label}"), label_style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render;
    use smak_core::action::Action;
    use smak_core::config::load_config_from_str;
    use smak_core::event::Event;
    use smak_core::git::{BranchEntry, CommitEntry, Entries};
    use smak_core::state::Viewport;

    fn branches() -> BrowserState {
        let branch = |name: &str| BranchEntry {
            name: name.to_string(),
            last_commit_time: None,
            last_commit_summary: String::new(),
            commits_ahead: 0,
            commits_behind: 0,
        };
        BrowserState::new(
            Entries::Branches(vec![branch("main"), branch("dev")]),
            Viewport::new(100, 10),
        )
    }

    fn draw_footer(state: &BrowserState, keys: &KeysConfig) -> String {
        render(100, 1, |f| draw(f, f.area(), state, &Theme::default(), keys))
    }

    #[test]
    fn test_browse_footer() {
        let output = draw_footer(&branches(), &KeysConfig::default());
        assert!(output.contains("k/j navigate"));
        assert!(output.contains("enter checkout"));
        assert!(output.contains("d mark"));
        assert!(output.contains("m merge"));
        assert!(output.contains("q quit"));
    }

    #[test]
    fn test_footer_follows_selection() {
        let state = branches().update(Event::Action(Action::ToggleDelete)).0;
        let output = draw_footer(&state, &KeysConfig::default());
        assert!(output.contains("enter delete"));
        assert!(output.contains("esc clear"));
        assert!(!output.contains("merge"));
    }

    #[test]
    fn test_commit_footer_views() {
        let state = BrowserState::new(
            Entries::Commits(vec![CommitEntry {
                hash: "abc".to_string(),
                summary: "s".to_string(),
                time: None,
                author: "a".to_string(),
            }]),
            Viewport::new(100, 10),
        );
        let output = draw_footer(&state, &KeysConfig::default());
        assert!(output.contains("enter view"));
        assert!(!output.contains("mark"));
    }

    #[test]
    fn test_unbound_commands_are_hidden() {
        let config = load_config_from_str(
            r#"
[keys.browse]
"m" = "noop"
"#,
        )
        .unwrap();
        let output = draw_footer(&branches(), &config.keys);
        assert!(!output.contains("merge"));
        assert!(output.contains("d mark"));
    }
}
