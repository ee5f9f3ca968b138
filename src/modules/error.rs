use super::node::{Coordinate, NodeId};
use super::position::Position;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathfinderError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathfinderError {
    #[error("Position {0:?} does not resolve to any grid node")]
    InvalidEndpoint(Position),
    #[error("Node {0:?} does not belong to this board")]
    UnknownNode(NodeId),
    #[error("Endpoint at {0:?} is blocked")]
    BlockedEndpoint(Coordinate),
    #[error("Open list is full, capacity {capacity}")]
    CapacityExceeded { capacity: usize },
    #[error("Open list is empty")]
    EmptyOpenList,
    #[error("Node {0:?} is already in the open list")]
    AlreadyQueued(NodeId),
    #[error("Node {0:?} is not in the open list")]
    NotQueued(NodeId),
    #[error("Cost {0} is not a number")]
    NonFiniteCost(f64),
    #[error("No search in progress")]
    NoActiveSearch,
    #[error("Expected {expected} cells but got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Unknown tile {0:?}")]
    UnknownTile(char),
    #[error("Layout origin must be finite and cell size positive")]
    InvalidLayout,
}
