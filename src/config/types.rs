// Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

pub const DEFAULT_SELECTED_CLASS: &str = "selected";
pub const DEFAULT_SELECTOR: &str = ".nav-item";

/// Candidate and marker settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavigationConfig {
    /// Class toggled on the selected generic element
    #[serde(default = "default_selected_class")]
    pub selected_class: String,
    /// Criteria used when scanning the container for candidates
    #[serde(default = "default_selector")]
    pub selector: String,
}

fn default_selected_class() -> String {
    DEFAULT_SELECTED_CLASS.to_string()
}

fn default_selector() -> String {
    DEFAULT_SELECTOR.to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            selected_class: default_selected_class(),
            selector: default_selector(),
        }
    }
}

/// Input identifiers bound to each direction
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyBindings {
    #[serde(default = "default_left")]
    pub left: Vec<String>,
    #[serde(default = "default_up")]
    pub up: Vec<String>,
    #[serde(default = "default_right")]
    pub right: Vec<String>,
    #[serde(default = "default_down")]
    pub down: Vec<String>,
}

fn default_left() -> Vec<String> {
    vec!["ArrowLeft".to_string()]
}

fn default_up() -> Vec<String> {
    vec!["ArrowUp".to_string()]
}

fn default_right() -> Vec<String> {
    vec!["ArrowRight".to_string()]
}

fn default_down() -> Vec<String> {
    vec!["ArrowDown".to_string()]
}

impl KeyBindings {
    pub fn keys_for(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Left => &self.left,
            Direction::Up => &self.up,
            Direction::Right => &self.right,
            Direction::Down => &self.down,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            left: default_left(),
            up: default_up(),
            right: default_right(),
            down: default_down(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub keys: KeyBindings,
}
