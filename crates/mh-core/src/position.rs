use serde::{Deserialize, Serialize};

/// A point in arena coordinates. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Create a position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Return this position shifted by the given offsets.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < f64::EPSILON);
        assert!((b.distance_to(a) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn offset_moves_both_axes() {
        let p = Position::new(10.0, 20.0).offset(-8.0, -4.0);
        assert_eq!(p, Position::new(2.0, 16.0));
    }

    #[test]
    fn display_rounds_to_one_decimal() {
        assert_eq!(Position::new(1.24, 3.0).to_string(), "(1.2, 3.0)");
    }
}
