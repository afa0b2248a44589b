use smak_core::config::{NamedColor, ThemeColor, ThemeConfig};
use ratatui::style::Color;

pub struct Theme {
    pub accent: Color,
    pub marked: Color,
    pub merge_source: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub muted: Color,
    pub border: Color,
    pub hint: Color,
    pub highlight_fg: Color,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            accent: to_ratatui_color(config.accent),
            marked: to_ratatui_color(config.marked),
            merge_source: to_ratatui_color(config.merge_source),
            success: to_ratatui_color(config.success),
            error: to_ratatui_color(config.error),
            warning: to_ratatui_color(config.warning),
            muted: to_ratatui_color(config.muted),
            border: to_ratatui_color(config.border),
            hint: to_ratatui_color(config.hint),
            highlight_fg: to_ratatui_color(config.highlight_fg),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

fn to_ratatui_color(color: ThemeColor) -> Color {
    match color {
        ThemeColor::Rgb(r, g, b) => Color::Rgb(r, g, b),
        ThemeColor::Named(named) => match named {
            NamedColor::Black => Color::Black,
            NamedColor::Red => Color::Red,
            NamedColor::Green => Color::Green,
            NamedColor::Yellow => Color::Yellow,
            NamedColor::Blue => Color::Blue,
            NamedColor::Magenta => Color::Magenta,
            NamedColor::Cyan => Color::Cyan,
            NamedColor::White => Color::White,
            NamedColor::Gray => Color::Gray,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Magenta);
        assert_eq!(theme.marked, Color::Red);
        assert_eq!(theme.merge_source, Color::Cyan);
        assert_eq!(theme.success, Color::Green);
        assert_eq!(theme.warning, Color::Yellow);
        assert_eq!(theme.muted, Color::Gray);
        assert_eq!(theme.highlight_fg, Color::White);
    }

    #[test]
    fn test_theme_custom() {
        let config = ThemeConfig {
            marked: ThemeColor::Named(NamedColor::Yellow),
            merge_source: ThemeColor::Rgb(255, 0, 255),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.marked, Color::Yellow);
        assert_eq!(theme.merge_source, Color::Rgb(255, 0, 255));
        assert_eq!(theme.accent, Color::Magenta); // default
    }
}
