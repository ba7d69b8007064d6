use serde::{Deserialize, Serialize};

/// A physical key the game reacts to.
///
/// Arrow keys and their WASD counterparts are distinct keys; releasing one
/// does not release the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// `a`, alternate move-left.
    A,
    /// `d`, alternate move-right.
    D,
    /// Space bar, jump.
    Space,
    /// `j`, attack.
    J,
    /// `z`, alternate attack.
    Z,
}

impl Key {
    /// Parse a key identifier such as `"left"`, `"Space"`, or `"j"`.
    /// Returns `None` for keys the game ignores.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "a" => Some(Self::A),
            "d" => Some(Self::D),
            "space" => Some(Self::Space),
            "j" => Some(Self::J),
            "z" => Some(Self::Z),
            _ => None,
        }
    }

    /// Whether holding this key moves the player left.
    pub fn moves_left(self) -> bool {
        matches!(self, Self::Left | Self::A)
    }

    /// Whether holding this key moves the player right.
    pub fn moves_right(self) -> bool {
        matches!(self, Self::Right | Self::D)
    }

    /// Whether pressing this key triggers a jump.
    pub fn is_jump(self) -> bool {
        self == Self::Space
    }

    /// Whether pressing this key triggers a melee attack.
    pub fn is_attack(self) -> bool {
        matches!(self, Self::J | Self::Z)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::A => write!(f, "a"),
            Self::D => write!(f, "d"),
            Self::Space => write!(f, "space"),
            Self::J => write!(f, "j"),
            Self::Z => write!(f, "z"),
        }
    }
}
