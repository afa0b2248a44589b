use crate::{components, keymap, theme::Theme};
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use smak_core::{
    config::KeysConfig,
    driver,
    effect::SessionEnd,
    event::Event,
    git::GitProvider,
    state::{BrowserState, MergeState, Mode},
};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(80);

/// Drive the browser until the session ends.
///
/// Effects run synchronously inside [`driver::dispatch`], so the screen is not
/// redrawn while git is working.
pub fn run(
    terminal: &mut DefaultTerminal,
    state: BrowserState,
    git: &dyn GitProvider,
    theme: &Theme,
    keys: &KeysConfig,
) -> anyhow::Result<SessionEnd> {
    let size = terminal.size()?;
    let (mut state, end) = driver::dispatch(
        state,
        Event::Resize {
            width: size.width,
            height: size.height,
        },
        git,
    );
    if let Some(end) = end {
        return Ok(end);
    }

    loop {
        terminal.draw(|f| draw(f, &state, theme, keys))?;

        // A poll timeout becomes a tick
        let event = if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    // Unbound keys leave the state, including any error, untouched
                    match keymap::resolve_action(key, &state, keys) {
                        Some(action) => Event::Action(action),
                        None => continue,
                    }
                }
                TermEvent::Resize(width, height) => Event::Resize { width, height },
                _ => continue,
            }
        } else {
            Event::Tick
        };

        let (next, end) = driver::dispatch(state, event, git);
        state = next;
        if let Some(end) = end {
            log::debug!("session ended: {end:?}");
            return Ok(end);
        }
    }
}

fn draw(f: &mut Frame, state: &BrowserState, theme: &Theme, keys: &KeysConfig) {
    let [main_area, status_area, footer_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    match &state.mode {
        Mode::ViewingDetail(viewer) => {
            components::detail_view::draw(f, main_area, viewer, theme);
        }
        Mode::ConfirmingDelete => {
            components::entry_list::draw(f, main_area, state, theme);
            components::delete_prompt::draw(f, main_area, state, theme, keys);
        }
        Mode::Merging(MergeState::ResultReady { .. }) => {
            components::entry_list::draw(f, main_area, state, theme);
            components::merge_panel::draw(f, main_area, state, theme, keys);
        }
        Mode::Browsing | Mode::Merging(_) => {
            components::entry_list::draw(f, main_area, state, theme);
        }
    }

    components::status_bar::draw(f, status_area, state, theme);
    components::footer::draw(f, footer_area, state, theme, keys);
}
