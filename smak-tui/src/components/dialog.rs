use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::{centered_fixed_rect, dialog_width};

/// A centered popup drawn over the list: the delete prompt and the merge result panel.
pub struct Dialog<'a> {
    lines: Vec<Line<'a>>,
    border_color: Color,
    title: Option<&'a str>,
    padding: Padding,
    alignment: Alignment,
}

impl<'a> Dialog<'a> {
    #[must_use]
    pub fn new(lines: Vec<Line<'a>>) -> Self {
        Self {
            lines,
            border_color: Color::White,
            title: None,
            padding: Padding::ZERO,
            alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn h_chrome(&self) -> u16 {
        2 + self.padding.left + self.padding.right
    }

    fn v_chrome(&self) -> u16 {
        2 + self.padding.top + self.padding.bottom
    }

    /// Compute `(width, height)` for this dialog given the terminal width.
    pub fn size(&self, terminal_width: u16) -> (u16, u16) {
        let width = dialog_width(terminal_width);
        let text_width = width.saturating_sub(self.h_chrome()).max(1);

        let content_height = self
            .lines
            .iter()
            .map(|line| word_wrapped_line_count(line, text_width))
            .fold(0u16, u16::saturating_add);

        (width, content_height.saturating_add(self.v_chrome()))
    }

    /// Render centered on `area`, clearing what is underneath first.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (width, height) = self.size(area.width);
        let centered = centered_fixed_rect(width, height, area);

        f.render_widget(Clear, centered);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .padding(self.padding);
        if let Some(title) = self.title {
            block = block.title(title);
        }

        let paragraph = Paragraph::new(self.lines.clone())
            .block(block)
            .wrap(Wrap { trim: false })
            .alignment(self.alignment);

        f.render_widget(paragraph, centered);
    }
}

/// Estimate how many rows a `Line` takes when word-wrapped to `max_width` columns.
pub fn word_wrapped_line_count(line: &Line, max_width: u16) -> u16 {
    let max_w = usize::from(max_width);
    if max_w == 0 {
        return 1;
    }

    let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    if text.is_empty() {
        return 1;
    }

    let mut lines: u16 = 1;
    let mut col: usize = 0;

    for word in text.split(' ') {
        let w = word.width();
        let needed = if col == 0 { w } else { w + 1 };

        if col + needed <= max_w {
            col += needed;
        } else if w <= max_w {
            lines += 1;
            col = w;
        } else {
            if col > 0 {
                lines += 1;
            }
            col = w;
            while col > max_w {
                lines += 1;
                col -= max_w;
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render;

    #[test]
    fn test_word_wrap_fits_on_one_line() {
        assert_eq!(word_wrapped_line_count(&Line::raw("hello world"), 11), 1);
    }

    #[test]
    fn test_word_wrap_breaks_at_word_boundary() {
        assert_eq!(word_wrapped_line_count(&Line::raw("hello world"), 10), 2);
        assert_eq!(word_wrapped_line_count(&Line::raw("one two three four"), 5), 4);
    }

    #[test]
    fn test_word_wrap_splits_oversized_word() {
        assert_eq!(word_wrapped_line_count(&Line::raw("abcdefghij"), 4), 3);
        assert_eq!(word_wrapped_line_count(&Line::raw("hi abcdefghij"), 6), 3);
    }

    #[test]
    fn test_word_wrap_counts_display_width() {
        // Each arrow is one column but three bytes
        assert_eq!(word_wrapped_line_count(&Line::raw("↑1 ↓2"), 5), 1);
    }

    #[test]
    fn test_word_wrap_degenerate_inputs() {
        assert_eq!(word_wrapped_line_count(&Line::raw(""), 20), 1);
        assert_eq!(word_wrapped_line_count(&Line::raw("hello"), 0), 1);
    }

    #[test]
    fn test_dialog_size_includes_chrome() {
        let dialog = Dialog::new(vec![Line::raw("hello"), Line::raw("")]);
        assert_eq!(dialog.size(100), (80, 4));

        let padded = Dialog::new(vec![Line::raw("hello")]).padding(Padding::uniform(1));
        assert_eq!(padded.size(100), (80, 5));
    }

    #[test]
    fn test_dialog_renders_title_and_text() {
        let output = render(60, 10, |f| {
            Dialog::new(vec![Line::raw("Are you sure?")])
                .title(" Confirm ")
                .render(f, f.area());
        });
        assert!(output.contains("Confirm"));
        assert!(output.contains("Are you sure?"));
    }
}
