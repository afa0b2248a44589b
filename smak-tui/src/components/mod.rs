use ratatui::layout::Rect;

pub mod delete_prompt;
pub mod detail_view;
pub mod dialog;
pub mod entry_list;
pub mod footer;
pub mod merge_panel;
pub mod status_bar;

/// Center a rect of fixed size, clipped to the available area
pub fn centered_fixed_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Dialogs take 80% of the terminal width, but never less than 40 columns when they fit
pub fn dialog_width(terminal_width: u16) -> u16 {
    (terminal_width / 5 * 4).max(terminal_width.min(40))
}

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::{Frame, Terminal, backend::TestBackend};

    /// Draw into a test terminal and return the screen as text, one line per row
    pub fn render(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut output = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                output.push(buffer[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_fixed_rect(50, 10, area), Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_fixed_rect_clips_to_area() {
        let area = Rect::new(2, 1, 20, 5);
        assert_eq!(centered_fixed_rect(50, 10, area), area);
    }

    #[test]
    fn test_dialog_width() {
        assert_eq!(dialog_width(100), 80);
        assert_eq!(dialog_width(45), 40);
        assert_eq!(dialog_width(30), 30);
    }
}
