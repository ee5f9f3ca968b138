use super::direction::{Direction, ALL};
use super::error::{PathfinderError, Result};
use super::node::{Coordinate, Node, NodeId};
use super::position::Position;
use std::ops::Index;

/// Maps grid cells to world space. Node `(row, col)` sits at
/// `origin + (col, row) * cell_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub origin: Position,
    pub cell_size: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            origin: Position::new(0.0, 0.0),
            cell_size: 1.0,
        }
    }
}

impl Layout {
    pub fn new(origin: Position, cell_size: f64) -> Layout {
        Layout { origin, cell_size }
    }

    fn validate(&self) -> Result<()> {
        if self.origin.is_finite() && self.cell_size.is_finite() && self.cell_size > 0.0 {
            Ok(())
        } else {
            Err(PathfinderError::InvalidLayout)
        }
    }

    fn position_of(&self, (row, column): Coordinate) -> Position {
        Position::new(
            self.origin.x + column as f64 * self.cell_size,
            self.origin.y + row as f64 * self.cell_size,
        )
    }
}

/// Static grid of nodes, built once and shared read-only by every search.
#[derive(Debug)]
pub struct Board {
    rows: usize,
    columns: usize,
    layout: Layout,
    plane: Box<[Node]>,
}

impl Index<NodeId> for Board {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.plane[id.index()]
    }
}

impl Index<Coordinate> for Board {
    type Output = Node;

    fn index(&self, (row, column): Coordinate) -> &Self::Output {
        &self.plane[self.columns * row + column]
    }
}

impl Board {
    /// Builds a board from row-major wall flags using the default layout.
    pub fn new(rows: usize, columns: usize, blocked: Vec<bool>) -> Result<Board> {
        Board::with_layout(rows, columns, blocked, Layout::default())
    }

    pub fn with_layout(
        rows: usize,
        columns: usize,
        blocked: Vec<bool>,
        layout: Layout,
    ) -> Result<Board> {
        layout.validate()?;

        let expected = rows * columns;
        if blocked.len() != expected {
            return Err(PathfinderError::DimensionMismatch {
                expected,
                actual: blocked.len(),
            });
        }

        let plane = blocked
            .iter()
            .enumerate()
            .map(|(index, &is_blocked)| {
                let coordinate = (index / columns, index % columns);
                let mut neighbors = [None; Direction::COUNT];
                for direction in ALL {
                    neighbors[direction.index()] =
                        Self::offset_index(rows, columns, coordinate, direction);
                }
                Node::new(
                    NodeId::new(index),
                    coordinate,
                    layout.position_of(coordinate),
                    is_blocked,
                    neighbors,
                )
            })
            .collect();

        log::debug!("built {}x{} board", rows, columns);

        Ok(Board {
            rows,
            columns,
            layout,
            plane,
        })
    }

    /// Parses a map where `#` is a wall and `.` is open floor, one row per line.
    pub fn from_ascii(map: &str) -> Result<Board> {
        let lines: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let rows = lines.len();
        let columns = lines.first().map_or(0, |line| line.chars().count());
        let mut blocked = Vec::with_capacity(rows * columns);

        for line in lines {
            let width = line.chars().count();
            if width != columns {
                return Err(PathfinderError::DimensionMismatch {
                    expected: columns,
                    actual: width,
                });
            }
            for tile in line.chars() {
                match tile {
                    '#' => blocked.push(true),
                    '.' => blocked.push(false),
                    other => return Err(PathfinderError::UnknownTile(other)),
                }
            }
        }

        Board::new(rows, columns, blocked)
    }

    fn offset_index(
        rows: usize,
        columns: usize,
        (row, column): Coordinate,
        direction: Direction,
    ) -> Option<NodeId> {
        let (d_row, d_column) = direction.offset();
        let row = row.checked_add_signed(d_row).filter(|r| *r < rows)?;
        let column = column.checked_add_signed(d_column).filter(|c| *c < columns)?;
        Some(NodeId::new(columns * row + column))
    }

    pub fn get_dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.plane.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plane.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.plane
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.plane.get(id.index())
    }

    pub fn node_at(&self, row: usize, column: usize) -> Option<&Node> {
        if row < self.rows && column < self.columns {
            Some(&self[(row, column)])
        } else {
            None
        }
    }

    pub fn neighbor(&self, id: NodeId, direction: Direction) -> Option<&Node> {
        self.node(id)?.neighbor(direction).map(|n| &self[n])
    }

    /// Clamps `pos` into the rectangle spanned by the node centres.
    pub fn clamp_position(&self, pos: Position) -> Option<Position> {
        if self.is_empty() || !pos.is_finite() {
            return None;
        }
        let first = self.layout.origin;
        let last = self.layout.position_of((self.rows - 1, self.columns - 1));
        Some(Position::new(
            pos.x.clamp(first.x, last.x),
            pos.y.clamp(first.y, last.y),
        ))
    }

    /// Cell whose centre is closest to `pos` once clamped to the board.
    pub fn coordinate_of(&self, pos: Position) -> Option<Coordinate> {
        let clamped = self.clamp_position(pos)?;
        let origin = self.layout.origin;
        let size = self.layout.cell_size;

        let row = ((clamped.y - origin.y) / size).round() as usize;
        let column = ((clamped.x - origin.x) / size).round() as usize;
        Some((row.min(self.rows - 1), column.min(self.columns - 1)))
    }

    pub fn nearest_node(&self, pos: Position) -> Option<&Node> {
        let (row, column) = self.coordinate_of(pos)?;
        self.node_at(row, column)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn get_board() -> Board {
        Board::from_ascii(
            "
            .#.
            ...
            ",
        )
        .unwrap()
    }

    #[test]
    fn returns_dimensions() {
        let board = get_board();

        assert_eq!(board.get_dimensions(), (2, 3));
        assert_eq!(board.len(), 6);
    }

    #[test]
    fn reads_walls() {
        let board = get_board();

        assert!(board[(0, 1)].is_blocked());
        assert!(!board[(1, 1)].is_blocked());
        assert_eq!(
            board.nodes().iter().filter(|n| n.is_blocked()).count(),
            1
        );
    }

    #[test]
    fn wires_neighbors() {
        let board = get_board();
        let corner = board[(0, 0)].id();

        assert_eq!(board.neighbor(corner, Direction::Up), None);
        assert_eq!(board.neighbor(corner, Direction::Left), None);
        assert_eq!(board.neighbor(corner, Direction::UpRight), None);
        assert_eq!(
            board.neighbor(corner, Direction::Right).map(Node::get_coordinate),
            Some((0, 1))
        );
        assert_eq!(
            board.neighbor(corner, Direction::DownRight).map(Node::get_coordinate),
            Some((1, 1))
        );

        let middle = board[(1, 1)].id();
        let present = ALL
            .iter()
            .filter(|d| board.neighbor(middle, **d).is_some())
            .count();
        assert_eq!(present, 5);
    }

    #[test]
    fn neighbor_links_are_symmetric() {
        let board = get_board();
        for node in board.nodes() {
            for dir in ALL {
                if let Some(next) = node.neighbor(dir) {
                    assert_eq!(board[next].neighbor(dir.opposite()), Some(node.id()));
                }
            }
        }
    }

    #[test]
    fn rejects_wrong_flag_count() {
        assert_eq!(
            Board::new(2, 2, vec![false; 3]).unwrap_err(),
            PathfinderError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn rejects_ragged_and_unknown_ascii() {
        assert!(matches!(
            Board::from_ascii("..\n...").unwrap_err(),
            PathfinderError::DimensionMismatch { .. }
        ));
        assert_eq!(
            Board::from_ascii(".x.").unwrap_err(),
            PathfinderError::UnknownTile('x')
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn rejects_bad_cell_size(#[case] cell_size: f64) {
        let layout = Layout::new(Position::new(0.0, 0.0), cell_size);
        assert_eq!(
            Board::with_layout(1, 1, vec![false], layout).unwrap_err(),
            PathfinderError::InvalidLayout
        );
    }

    #[test]
    fn places_nodes_with_layout() {
        let layout = Layout::new(Position::new(10.0, -5.0), 2.0);
        let board = Board::with_layout(2, 3, vec![false; 6], layout).unwrap();

        assert_eq!(board[(1, 2)].get_position(), Position::new(14.0, -3.0));
        assert_eq!(board[(0, 0)].get_position(), layout.origin);
    }

    #[rstest]
    #[case(Position::new(0.0, 0.0), (0, 0))]
    #[case(Position::new(1.4, 0.6), (1, 1))]
    #[case(Position::new(0.49, 1.2), (1, 0))]
    #[case(Position::new(-7.0, 40.0), (1, 0))]
    #[case(Position::new(99.0, -99.0), (0, 2))]
    fn rounds_and_clamps_to_nearest_node(#[case] pos: Position, #[case] expected: Coordinate) {
        let board = get_board();
        assert_eq!(
            board.nearest_node(pos).map(Node::get_coordinate),
            Some(expected)
        );
    }

    #[test]
    fn scaled_layout_rounds_to_cells() {
        let layout = Layout::new(Position::new(10.0, 10.0), 4.0);
        let board = Board::with_layout(3, 3, vec![false; 9], layout).unwrap();

        assert_eq!(board.coordinate_of(Position::new(15.0, 19.0)), Some((2, 1)));
        assert_eq!(board.coordinate_of(Position::new(11.9, 0.0)), Some((0, 0)));
    }

    #[test]
    fn empty_board_resolves_nothing() {
        let board = Board::new(0, 0, Vec::new()).unwrap();

        assert!(board.is_empty());
        assert!(board.nearest_node(Position::new(0.0, 0.0)).is_none());
        assert!(board.node_at(0, 0).is_none());
    }

    #[test]
    fn non_finite_position_resolves_nothing() {
        let board = get_board();
        assert!(board.nearest_node(Position::new(f64::NAN, 0.0)).is_none());
    }
}
