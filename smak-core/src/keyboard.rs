use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
    }
}

impl KeyModifiers {
    pub const NONE: Self = Self::empty();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    F(u8),
}

/// Terminal-independent key press, used as the key type of every keymap.
///
/// String form is `[C-][A-][S-]<key>`, e.g. `C-c`, `enter`, `A-g`, `pagedown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::NONE)
    }
}

fn parse_code(raw: &str) -> Result<KeyCode, String> {
    let mut chars = raw.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }
    let code = match raw.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdown" => KeyCode::PageDown,
        "delete" | "del" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        lower => {
            if let Some(n) = lower.strip_prefix('f')
                && let Ok(n) = n.parse::<u8>()
                && (1..=12).contains(&n)
            {
                KeyCode::F(n)
            } else {
                return Err(format!("unknown key name '{raw}'"));
            }
        }
    };
    Ok(code)
}

impl FromStr for KeyEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("empty key".to_string());
        }
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            // A lone "-" or "C--" means the minus key itself
            if rest.len() > 2 && rest.as_bytes()[1] == b'-' {
                let flag = match &rest[..1] {
                    "C" => KeyModifiers::CONTROL,
                    "A" | "M" => KeyModifiers::ALT,
                    "S" => KeyModifiers::SHIFT,
                    _ => break,
                };
                modifiers |= flag;
                rest = &rest[2..];
            } else {
                break;
            }
        }
        Ok(Self::new(parse_code(rest)?, modifiers))
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("C-")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("A-")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("S-")?;
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Esc => f.write_str("esc"),
            KeyCode::Backspace => f.write_str("backspace"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::BackTab => f.write_str("backtab"),
            KeyCode::Up => f.write_str("up"),
            KeyCode::Down => f.write_str("down"),
            KeyCode::Left => f.write_str("left"),
            KeyCode::Right => f.write_str("right"),
            KeyCode::Home => f.write_str("home"),
            KeyCode::End => f.write_str("end"),
            KeyCode::PageUp => f.write_str("pgup"),
            KeyCode::PageDown => f.write_str("pgdown"),
            KeyCode::Delete => f.write_str("del"),
            KeyCode::F(n) => write!(f, "f{n}"),
        }
    }
}

impl KeyEvent {
    /// Convert a crossterm key press. Returns `None` for keys no binding can name.
    pub fn from_crossterm(key: crossterm::event::KeyEvent) -> Option<Self> {
        use crossterm::event::{KeyCode as Ct, KeyModifiers as CtMods};

        let code = match key.code {
            Ct::Char(c) => KeyCode::Char(c),
            Ct::Enter => KeyCode::Enter,
            Ct::Esc => KeyCode::Esc,
            Ct::Backspace => KeyCode::Backspace,
            Ct::Tab => KeyCode::Tab,
            Ct::BackTab => KeyCode::BackTab,
            Ct::Up => KeyCode::Up,
            Ct::Down => KeyCode::Down,
            Ct::Left => KeyCode::Left,
            Ct::Right => KeyCode::Right,
            Ct::Home => KeyCode::Home,
            Ct::End => KeyCode::End,
            Ct::PageUp => KeyCode::PageUp,
            Ct::PageDown => KeyCode::PageDown,
            Ct::Delete => KeyCode::Delete,
            Ct::F(n) => KeyCode::F(n),
            _ => return None,
        };

        let mut modifiers = KeyModifiers::NONE;
        if key.modifiers.contains(CtMods::CONTROL) {
            modifiers |= KeyModifiers::CONTROL;
        }
        if key.modifiers.contains(CtMods::ALT) {
            modifiers |= KeyModifiers::ALT;
        }
        // Char already carries its case
        if key.modifiers.contains(CtMods::SHIFT) && !matches!(code, KeyCode::Char(_)) {
            modifiers |= KeyModifiers::SHIFT;
        }
        Some(Self::new(code, modifiers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_named_keys() {
        assert_eq!("q".parse::<KeyEvent>().unwrap(), KeyEvent::char('q'));
        assert_eq!(
            "enter".parse::<KeyEvent>().unwrap(),
            KeyEvent::plain(KeyCode::Enter)
        );
        assert_eq!(
            "PgDown".parse::<KeyEvent>().unwrap(),
            KeyEvent::plain(KeyCode::PageDown)
        );
        assert_eq!(
            "f5".parse::<KeyEvent>().unwrap(),
            KeyEvent::plain(KeyCode::F(5))
        );
    }

    #[test]
    fn test_parse_modifiers() {
        assert_eq!(
            "C-c".parse::<KeyEvent>().unwrap(),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        );
        assert_eq!(
            "C-A-g".parse::<KeyEvent>().unwrap(),
            KeyEvent::new(
                KeyCode::Char('g'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            )
        );
        assert_eq!(
            "C--".parse::<KeyEvent>().unwrap(),
            KeyEvent::new(KeyCode::Char('-'), KeyModifiers::CONTROL)
        );
        assert_eq!("-".parse::<KeyEvent>().unwrap(), KeyEvent::char('-'));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("".parse::<KeyEvent>().is_err());
        assert!("invalid-key".parse::<KeyEvent>().is_err());
        assert!("f13".parse::<KeyEvent>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for raw in ["C-c", "enter", "A-G", "pgup", "space", "S-tab", "f1"] {
            let key: KeyEvent = raw.parse().unwrap();
            let shown = key.to_string();
            assert_eq!(shown.parse::<KeyEvent>().unwrap(), key, "{raw} -> {shown}");
        }
    }

    #[test]
    fn test_from_crossterm_drops_shift_on_chars() {
        use crossterm::event::{KeyCode as Ct, KeyEvent as CtKey, KeyModifiers as CtMods};

        let key = KeyEvent::from_crossterm(CtKey::new(Ct::Char('Y'), CtMods::SHIFT)).unwrap();
        assert_eq!(key, KeyEvent::char('Y'));

        let key = KeyEvent::from_crossterm(CtKey::new(Ct::Char('c'), CtMods::CONTROL)).unwrap();
        assert_eq!(
            key,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        );

        assert!(KeyEvent::from_crossterm(CtKey::new(Ct::CapsLock, CtMods::NONE)).is_none());
    }
}
