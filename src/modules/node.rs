use super::direction::Direction;
use super::position::Position;

/// `(row, column)` on the board.
pub type Coordinate = (usize, usize);

/// Index of a node in its board's arena.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> NodeId {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// One grid cell. Identity, wall flag and neighbour links are fixed once the
/// board is built; search costs live with the searcher, not here.
#[derive(PartialEq, Debug, Clone)]
pub struct Node {
    id: NodeId,
    coordinate: Coordinate,
    position: Position,
    blocked: bool,
    neighbors: [Option<NodeId>; Direction::COUNT],
}

impl Node {
    pub(crate) fn new(
        id: NodeId,
        coordinate: Coordinate,
        position: Position,
        blocked: bool,
        neighbors: [Option<NodeId>; Direction::COUNT],
    ) -> Node {
        Node {
            id,
            coordinate,
            position,
            blocked,
            neighbors,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn get_coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Neighbour in `direction`, `None` past the board edge.
    pub fn neighbor(&self, direction: Direction) -> Option<NodeId> {
        self.neighbors[direction.index()]
    }
}
