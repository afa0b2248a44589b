use crate::keyboard::{KeyCode, KeyEvent, KeyModifiers};
use crate::state::{MergeState, Mode};
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Commands that can be bound to keys
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// No-op: explicitly unbinds a key (removes inherited/default binding)
    Noop,

    Quit,
    Confirm,
    Cancel,

    // Branch workflows
    ToggleDelete,
    StartMerge,

    // Movement
    MoveUp,
    MoveDown,
    HalfPageUp,
    HalfPageDown,
    PageUp,
    PageDown,
    MoveTop,
    MoveBottom,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noop" | "none" | "unbound" => Ok(Command::Noop),
            "quit" => Ok(Command::Quit),
            "confirm" => Ok(Command::Confirm),
            "cancel" => Ok(Command::Cancel),
            "toggle_delete" => Ok(Command::ToggleDelete),
            "start_merge" => Ok(Command::StartMerge),
            "move_up" => Ok(Command::MoveUp),
            "move_down" => Ok(Command::MoveDown),
            "half_page_up" => Ok(Command::HalfPageUp),
            "half_page_down" => Ok(Command::HalfPageDown),
            "page_up" => Ok(Command::PageUp),
            "page_down" => Ok(Command::PageDown),
            "move_top" => Ok(Command::MoveTop),
            "move_bottom" => Ok(Command::MoveBottom),
            _ => Err(format!("Unknown command: {s}")),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Command::Noop => "noop",
            Command::Quit => "quit",
            Command::Confirm => "confirm",
            Command::Cancel => "cancel",
            Command::ToggleDelete => "toggle_delete",
            Command::StartMerge => "start_merge",
            Command::MoveUp => "move_up",
            Command::MoveDown => "move_down",
            Command::HalfPageUp => "half_page_up",
            Command::HalfPageDown => "half_page_down",
            Command::PageUp => "page_up",
            Command::PageDown => "page_down",
            Command::MoveTop => "move_top",
            Command::MoveBottom => "move_bottom",
        };
        write!(f, "{s}")
    }
}

impl Command {
    pub fn description(&self) -> &'static str {
        match self {
            Command::Noop => "unbound",
            Command::Quit => "quit",
            Command::Confirm => "confirm",
            Command::Cancel => "cancel",
            Command::ToggleDelete => "mark for deletion",
            Command::StartMerge => "start merge",
            Command::MoveUp => "up",
            Command::MoveDown => "down",
            Command::HalfPageUp => "half page up",
            Command::HalfPageDown => "half page down",
            Command::PageUp => "page up",
            Command::PageDown => "page down",
            Command::MoveTop => "top",
            Command::MoveBottom => "bottom",
        }
    }
}

/// Key bindings for a specific layer/mode
pub type KeyMap = HashMap<KeyEvent, Command>;

/// Complete key binding configuration, composed from reusable layers.
#[derive(Debug, Clone)]
pub struct KeysConfig {
    pub general: KeyMap,
    pub list_navigation: KeyMap,
    pub browse: KeyMap,
    pub merge_select: KeyMap,
    pub merge_result: KeyMap,
    pub delete_prompt: KeyMap,
    pub viewer: KeyMap,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeysConfigRaw {
    #[serde(default)]
    general: HashMap<String, String>,
    #[serde(default)]
    list_navigation: HashMap<String, String>,
    #[serde(default)]
    browse: HashMap<String, String>,
    #[serde(default)]
    merge_select: HashMap<String, String>,
    #[serde(default)]
    merge_result: HashMap<String, String>,
    #[serde(default)]
    delete_prompt: HashMap<String, String>,
    #[serde(default)]
    viewer: HashMap<String, String>,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn bind(map: &mut KeyMap, code: KeyCode, modifiers: KeyModifiers, command: Command) {
    map.insert(KeyEvent::new(code, modifiers), command);
}

fn bind_char(map: &mut KeyMap, c: char, command: Command) {
    bind(map, KeyCode::Char(c), KeyModifiers::NONE, command);
}

impl KeysConfig {
    pub fn new() -> Self {
        Self {
            general: Self::default_general(),
            list_navigation: Self::default_list_navigation(),
            browse: Self::default_browse(),
            merge_select: Self::default_merge_select(),
            merge_result: Self::default_merge_result(),
            delete_prompt: Self::default_delete_prompt(),
            viewer: Self::default_viewer(),
        }
    }

    /// Build the effective keymap for a given mode using precedence:
    /// general < list navigation < mode-specific
    pub fn keymap_for_mode(&self, mode: &Mode) -> KeyMap {
        let mut combined = KeyMap::new();
        Self::apply_layer(&mut combined, &self.general);

        match mode {
            Mode::Browsing => {
                Self::apply_layer(&mut combined, &self.list_navigation);
                Self::apply_layer(&mut combined, &self.browse);
            }
            Mode::Merging(MergeState::ResultReady { .. }) => {
                Self::apply_layer(&mut combined, &self.merge_result);
            }
            Mode::Merging(_) => {
                Self::apply_layer(&mut combined, &self.list_navigation);
                Self::apply_layer(&mut combined, &self.merge_select);
            }
            Mode::ConfirmingDelete => {
                Self::apply_layer(&mut combined, &self.delete_prompt);
            }
            Mode::ViewingDetail(_) => {
                Self::apply_layer(&mut combined, &self.viewer);
            }
        }

        combined
    }

    /// Find the key bound to a given command, preferring keys without modifiers
    /// and lower-case letters over their shifted forms.
    pub fn find_key(keymap: &KeyMap, command: &Command) -> Option<KeyEvent> {
        keymap
            .iter()
            .filter(|(_, cmd)| *cmd == command)
            .map(|(key, _)| *key)
            .min_by_key(|key| {
                let shifted = matches!(key.code, KeyCode::Char(c) if c.is_uppercase());
                (key.modifiers, shifted, key.code)
            })
    }

    fn apply_layer(base: &mut KeyMap, layer: &KeyMap) {
        for (key, command) in layer {
            if *command == Command::Noop {
                base.remove(key);
            } else {
                base.insert(*key, command.clone());
            }
        }
    }

    fn default_general() -> KeyMap {
        let mut map = KeyMap::new();
        bind(&mut map, KeyCode::Char('c'), KeyModifiers::CONTROL, Command::Quit);
        map
    }

    fn default_list_navigation() -> KeyMap {
        let mut map = KeyMap::new();
        bind(&mut map, KeyCode::Up, KeyModifiers::NONE, Command::MoveUp);
        bind(&mut map, KeyCode::Down, KeyModifiers::NONE, Command::MoveDown);
        bind_char(&mut map, 'k', Command::MoveUp);
        bind_char(&mut map, 'j', Command::MoveDown);
        bind(&mut map, KeyCode::Char('u'), KeyModifiers::CONTROL, Command::HalfPageUp);
        bind(&mut map, KeyCode::Char('d'), KeyModifiers::CONTROL, Command::HalfPageDown);
        bind(&mut map, KeyCode::PageUp, KeyModifiers::NONE, Command::PageUp);
        bind(&mut map, KeyCode::PageDown, KeyModifiers::NONE, Command::PageDown);
        bind(&mut map, KeyCode::Home, KeyModifiers::NONE, Command::MoveTop);
        bind(&mut map, KeyCode::End, KeyModifiers::NONE, Command::MoveBottom);
        bind_char(&mut map, 'g', Command::MoveTop);
        bind_char(&mut map, 'G', Command::MoveBottom);
        map
    }

    fn default_browse() -> KeyMap {
        let mut map = KeyMap::new();
        bind(&mut map, KeyCode::Enter, KeyModifiers::NONE, Command::Confirm);
        bind(&mut map, KeyCode::Esc, KeyModifiers::NONE, Command::Cancel);
        bind_char(&mut map, 'q', Command::Quit);
        bind_char(&mut map, 'd', Command::ToggleDelete);
        bind_char(&mut map, 'm', Command::StartMerge);
        map
    }

    fn default_merge_select() -> KeyMap {
        let mut map = KeyMap::new();
        bind(&mut map, KeyCode::Enter, KeyModifiers::NONE, Command::Confirm);
        bind(&mut map, KeyCode::Esc, KeyModifiers::NONE, Command::Cancel);
        bind_char(&mut map, 'q', Command::Quit);
        map
    }

    fn default_merge_result() -> KeyMap {
        let mut map = KeyMap::new();
        bind(&mut map, KeyCode::Enter, KeyModifiers::NONE, Command::Confirm);
        bind(&mut map, KeyCode::Esc, KeyModifiers::NONE, Command::Cancel);
        bind_char(&mut map, 'a', Command::Cancel);
        bind_char(&mut map, 'q', Command::Quit);
        map
    }

    fn default_delete_prompt() -> KeyMap {
        let mut map = KeyMap::new();
        bind_char(&mut map, 'y', Command::Confirm);
        bind_char(&mut map, 'Y', Command::Confirm);
        bind(&mut map, KeyCode::Enter, KeyModifiers::NONE, Command::Confirm);
        bind_char(&mut map, 'n', Command::Cancel);
        bind_char(&mut map, 'N', Command::Cancel);
        bind(&mut map, KeyCode::Esc, KeyModifiers::NONE, Command::Cancel);
        bind_char(&mut map, 'q', Command::Quit);
        map
    }

    fn default_viewer() -> KeyMap {
        let mut map = KeyMap::new();
        bind(&mut map, KeyCode::Up, KeyModifiers::NONE, Command::MoveUp);
        bind(&mut map, KeyCode::Down, KeyModifiers::NONE, Command::MoveDown);
        bind_char(&mut map, 'k', Command::MoveUp);
        bind_char(&mut map, 'j', Command::MoveDown);
        bind(&mut map, KeyCode::PageUp, KeyModifiers::NONE, Command::PageUp);
        bind(&mut map, KeyCode::PageDown, KeyModifiers::NONE, Command::PageDown);
        bind_char(&mut map, 'b', Command::PageUp);
        bind_char(&mut map, 'f', Command::PageDown);
        bind_char(&mut map, ' ', Command::PageDown);
        bind(&mut map, KeyCode::Char('u'), KeyModifiers::CONTROL, Command::HalfPageUp);
        bind(&mut map, KeyCode::Char('d'), KeyModifiers::CONTROL, Command::HalfPageDown);
        bind_char(&mut map, 'g', Command::MoveTop);
        bind_char(&mut map, 'G', Command::MoveBottom);
        bind(&mut map, KeyCode::Esc, KeyModifiers::NONE, Command::Cancel);
        bind_char(&mut map, 'q', Command::Cancel);
        map
    }

    /// Parse a string representation of keybindings into a `KeyMap`
    fn parse_keymap(raw_map: &HashMap<String, String>) -> Result<KeyMap, String> {
        let mut keymap = KeyMap::new();
        for (key_str, command_str) in raw_map {
            let key_event =
                KeyEvent::from_str(key_str).map_err(|e| format!("Invalid key '{key_str}': {e}"))?;
            let command = Command::from_str(command_str)
                .map_err(|e| format!("Invalid command '{command_str}': {e}"))?;
            keymap.insert(key_event, command);
        }
        Ok(keymap)
    }

    /// Merge user configuration with defaults.
    ///
    /// Keep `Noop` values so higher-precedence layers can explicitly unbind inherited mappings.
    fn from_raw(raw: &KeysConfigRaw) -> Result<Self, String> {
        let mut config = Self::default();

        config.general.extend(Self::parse_keymap(&raw.general)?);
        config
            .list_navigation
            .extend(Self::parse_keymap(&raw.list_navigation)?);
        config.browse.extend(Self::parse_keymap(&raw.browse)?);
        config
            .merge_select
            .extend(Self::parse_keymap(&raw.merge_select)?);
        config
            .merge_result
            .extend(Self::parse_keymap(&raw.merge_result)?);
        config
            .delete_prompt
            .extend(Self::parse_keymap(&raw.delete_prompt)?);
        config.viewer.extend(Self::parse_keymap(&raw.viewer)?);

        Ok(config)
    }
}

impl<'de> Deserialize<'de> for KeysConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = KeysConfigRaw::deserialize(deserializer)?;
        KeysConfig::from_raw(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{CommitEntry, MergeOutcome};
    use crate::state::ViewerState;

    fn raw_with(layer: &str, key: &str, command: &str) -> KeysConfigRaw {
        let toml = format!("[{layer}]\n\"{key}\" = \"{command}\"\n");
        toml::from_str(&toml).unwrap()
    }

    #[test]
    fn test_command_round_trips_through_strings() {
        for name in ["quit", "toggle_delete", "start_merge", "half_page_down", "noop"] {
            let command = Command::from_str(name).unwrap();
            assert_eq!(command.to_string(), name);
        }
        assert!(Command::from_str("delete_everything").is_err());
    }

    #[test]
    fn test_noop_aliases() {
        assert_eq!(Command::from_str("none").unwrap(), Command::Noop);
        assert_eq!(Command::from_str("unbound").unwrap(), Command::Noop);
    }

    #[test]
    fn test_browse_defaults() {
        let config = KeysConfig::default();
        let map = config.keymap_for_mode(&Mode::Browsing);
        assert_eq!(map.get(&KeyEvent::char('d')), Some(&Command::ToggleDelete));
        assert_eq!(map.get(&KeyEvent::char('m')), Some(&Command::StartMerge));
        assert_eq!(map.get(&KeyEvent::char('j')), Some(&Command::MoveDown));
        assert_eq!(
            map.get(&KeyEvent::plain(KeyCode::Enter)),
            Some(&Command::Confirm)
        );
        assert_eq!(
            map.get(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(&Command::Quit)
        );
    }

    #[test]
    fn test_delete_prompt_has_no_navigation() {
        let config = KeysConfig::default();
        let map = config.keymap_for_mode(&Mode::ConfirmingDelete);
        assert_eq!(map.get(&KeyEvent::char('Y')), Some(&Command::Confirm));
        assert_eq!(map.get(&KeyEvent::char('N')), Some(&Command::Cancel));
        assert_eq!(map.get(&KeyEvent::char('j')), None);
        assert_eq!(map.get(&KeyEvent::char('d')), None);
    }

    #[test]
    fn test_result_panel_and_target_selection_layers() {
        let config = KeysConfig::default();
        let result = config.keymap_for_mode(&Mode::Merging(MergeState::completed(
            "a".into(),
            "b".into(),
            MergeOutcome::Success,
        )));
        assert_eq!(result.get(&KeyEvent::char('j')), None);
        assert_eq!(result.get(&KeyEvent::char('a')), Some(&Command::Cancel));

        let select =
            config.keymap_for_mode(&Mode::Merging(MergeState::SelectingTarget { source_index: 0 }));
        assert_eq!(select.get(&KeyEvent::char('j')), Some(&Command::MoveDown));
        assert_eq!(select.get(&KeyEvent::char('m')), None);
    }

    #[test]
    fn test_viewer_paging_keys() {
        let config = KeysConfig::default();
        let viewer = ViewerState::open(
            CommitEntry {
                hash: "h".into(),
                summary: String::new(),
                time: None,
                author: String::new(),
            },
            String::new(),
        );
        let map = config.keymap_for_mode(&Mode::ViewingDetail(viewer));
        assert_eq!(map.get(&KeyEvent::char('b')), Some(&Command::PageUp));
        assert_eq!(map.get(&KeyEvent::char('f')), Some(&Command::PageDown));
        assert_eq!(map.get(&KeyEvent::char('q')), Some(&Command::Cancel));
    }

    #[test]
    fn test_user_binding_overrides_default() {
        let config = KeysConfig::from_raw(&raw_with("browse", "x", "toggle_delete")).unwrap();
        let map = config.keymap_for_mode(&Mode::Browsing);
        assert_eq!(map.get(&KeyEvent::char('x')), Some(&Command::ToggleDelete));
        // Defaults survive
        assert_eq!(map.get(&KeyEvent::char('d')), Some(&Command::ToggleDelete));
    }

    #[test]
    fn test_noop_can_unbind_inherited_mapping() {
        let config = KeysConfig::from_raw(&raw_with("browse", "C-c", "noop")).unwrap();
        let map = config.keymap_for_mode(&Mode::Browsing);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map.get(&ctrl_c), None, "C-c should be unbound");
        // Still bound where the browse layer does not apply
        let prompt = config.keymap_for_mode(&Mode::ConfirmingDelete);
        assert_eq!(prompt.get(&ctrl_c), Some(&Command::Quit));
    }

    #[test]
    fn test_invalid_key_or_command_rejected() {
        assert!(KeysConfig::from_raw(&raw_with("browse", "invalid-key", "quit")).is_err());
        assert!(KeysConfig::from_raw(&raw_with("browse", "x", "open_repo")).is_err());
    }

    #[test]
    fn test_unknown_layer_rejected() {
        let result: Result<KeysConfigRaw, _> = toml::from_str("[repo_select]\nx = \"quit\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_find_key_prefers_smallest() {
        let config = KeysConfig::default();
        let map = config.keymap_for_mode(&Mode::Browsing);
        assert_eq!(
            KeysConfig::find_key(&map, &Command::MoveDown),
            Some(KeyEvent::char('j'))
        );
        assert_eq!(
            KeysConfig::find_key(&map, &Command::Quit),
            Some(KeyEvent::char('q'))
        );
        assert_eq!(KeysConfig::find_key(&map, &Command::Noop), None);

        let prompt = config.keymap_for_mode(&Mode::ConfirmingDelete);
        assert_eq!(
            KeysConfig::find_key(&prompt, &Command::Confirm),
            Some(KeyEvent::char('y'))
        );
    }
}
