/// A point in world space. Only ever used for distance math.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Position {
        Position { x, y }
    }

    /// L1 distance. Diagonal steps cost as much as two straight ones.
    pub fn manhattan_distance(&self, other: &Position) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Position::new(x, y)
    }
}
