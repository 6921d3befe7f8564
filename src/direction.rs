//! Logical navigation directions and key binding resolution

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::KeyBindings;
use crate::error::NavError;

/// One of the four logical navigation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// Scroll axis a direction travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// Left and Up travel towards the origin
    pub fn is_leading(self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            _ => Err(NavError::UnknownDirection(s.to_string())),
        }
    }
}

/// Maps raw input identifiers (e.g. `"ArrowLeft"`) to directions
#[derive(Debug, Clone, Default)]
pub struct DirectionResolver {
    table: HashMap<String, Direction>,
}

impl DirectionResolver {
    /// Build the lookup table from configured bindings.
    ///
    /// A key bound to several directions resolves to the first one in
    /// `Left, Up, Right, Down` order.
    pub fn new(bindings: &KeyBindings) -> Self {
        let mut table = HashMap::new();
        for direction in Direction::ALL {
            for key in bindings.keys_for(direction) {
                if let Some(existing) = table.get(key) {
                    log::warn!(
                        "Key {:?} bound to both {} and {}; keeping {}",
                        key,
                        existing,
                        direction,
                        existing
                    );
                    continue;
                }
                table.insert(key.clone(), direction);
            }
        }
        Self { table }
    }

    pub fn resolve(&self, input: &str) -> Option<Direction> {
        self.table.get(input).copied()
    }

    pub fn is_bound(&self, input: &str) -> bool {
        self.table.contains_key(input)
    }
}

#[cfg(test)]
#[path = "direction_tests.rs"]
mod direction_tests;
