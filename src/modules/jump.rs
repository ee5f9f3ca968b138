//! Directional scanning for jump points.
//!
//! A scan walks a ray across the board and stops at the first node where an
//! optimal path could turn: the goal itself, or a node with a forced
//! neighbour. All eight directions share one scanner; the per-direction
//! differences live in the tables on [`Direction`].

use super::board::Board;
use super::direction::Direction;
use super::node::NodeId;

/// Read-only ray walker bound to one board and goal.
pub struct Scanner<'a> {
    board: &'a Board,
    goal: NodeId,
}

impl<'a> Scanner<'a> {
    pub fn new(board: &'a Board, goal: NodeId) -> Scanner<'a> {
        Scanner { board, goal }
    }

    /// Next jump point reached by leaving `origin` in `direction`, if any.
    ///
    /// The origin is never returned; the ray starts on its neighbour, and an
    /// absent or walled neighbour ends it at once.
    pub fn jump(&self, origin: NodeId, direction: Direction) -> Option<NodeId> {
        let first = self.open_neighbor(origin, direction)?;
        self.scan(first, direction)
    }

    fn scan(&self, node: NodeId, direction: Direction) -> Option<NodeId> {
        match direction.components() {
            Some(components) => self.scan_diagonal(node, direction, components),
            None => self.scan_straight(node, direction),
        }
    }

    fn scan_straight(&self, mut node: NodeId, direction: Direction) -> Option<NodeId> {
        loop {
            if node == self.goal || self.has_forced_neighbor(node, direction) {
                return Some(node);
            }
            node = self.open_neighbor(node, direction)?;
        }
    }

    fn scan_diagonal(
        &self,
        mut node: NodeId,
        direction: Direction,
        components: [Direction; 2],
    ) -> Option<NodeId> {
        loop {
            if node == self.goal || self.has_forced_neighbor(node, direction) {
                return Some(node);
            }

            // a jump point along either straight component makes this a turn
            if components
                .iter()
                .any(|&straight| self.scan_straight(node, straight).is_some())
            {
                return Some(node);
            }

            node = self.open_neighbor(node, direction)?;
        }
    }

    fn has_forced_neighbor(&self, node: NodeId, direction: Direction) -> bool {
        direction
            .forced_checks()
            .iter()
            .any(|&(side, ahead)| self.is_wall(node, side) && self.is_open(node, ahead))
    }

    fn open_neighbor(&self, node: NodeId, direction: Direction) -> Option<NodeId> {
        self.board
            .neighbor(node, direction)
            .filter(|next| !next.is_blocked())
            .map(|next| next.id())
    }

    // the board edge is not a wall
    fn is_wall(&self, node: NodeId, direction: Direction) -> bool {
        self.board
            .neighbor(node, direction)
            .map_or(false, |next| next.is_blocked())
    }

    fn is_open(&self, node: NodeId, direction: Direction) -> bool {
        self.open_neighbor(node, direction).is_some()
    }
}
