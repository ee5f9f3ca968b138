use self::Direction::*;

/// One of the eight grid directions. Rows grow downwards, so `Up` is `(-1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    UpLeft,
    UpRight,
    DownRight,
    DownLeft,
}

/// Expansion order used by the search driver.
pub const ALL: [Direction; 8] = [Up, Right, Down, Left, UpLeft, UpRight, DownRight, DownLeft];

impl Direction {
    pub const COUNT: usize = 8;

    /// Slot of this direction in a node's neighbour table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// `(row, column)` step.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Up => (-1, 0),
            Right => (0, 1),
            Down => (1, 0),
            Left => (0, -1),
            UpLeft => (-1, -1),
            UpRight => (-1, 1),
            DownRight => (1, 1),
            DownLeft => (1, -1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        matches!(self, UpLeft | UpRight | DownRight | DownLeft)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
            UpLeft => DownRight,
            UpRight => DownLeft,
            DownRight => UpLeft,
            DownLeft => UpRight,
        }
    }

    /// Straight components of a diagonal, horizontal first. Straight
    /// directions have none.
    pub fn components(self) -> Option<[Direction; 2]> {
        match self {
            UpLeft => Some([Left, Up]),
            UpRight => Some([Right, Up]),
            DownRight => Some([Right, Down]),
            DownLeft => Some([Left, Down]),
            Up | Right | Down | Left => None,
        }
    }

    /// Forced-neighbour rules as `(side, ahead)` pairs: a node moving in this
    /// direction is a jump point when `side` is a wall and `ahead` is open.
    pub fn forced_checks(self) -> [(Direction, Direction); 2] {
        match self {
            Up => [(Left, UpLeft), (Right, UpRight)],
            Down => [(Left, DownLeft), (Right, DownRight)],
            Left => [(Up, UpLeft), (Down, DownLeft)],
            Right => [(Up, UpRight), (Down, DownRight)],
            UpLeft => [(Right, UpRight), (Down, DownLeft)],
            UpRight => [(Down, DownRight), (Left, UpLeft)],
            DownRight => [(Left, DownLeft), (Up, UpRight)],
            DownLeft => [(Right, DownRight), (Up, UpLeft)],
        }
    }
}
