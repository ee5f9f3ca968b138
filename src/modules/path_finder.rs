use super::board::Board;
use super::config::SearchConfig;
use super::direction::ALL;
use super::error::{PathfinderError, Result};
use super::jump::Scanner;
use super::node::NodeId;
use super::open_list::OpenList;
use super::path_builder::PathBuilder;
use super::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    Unvisited,
    Open,
    Closed,
}

/// Per-search cost scratch for one board node.
#[derive(Debug, Clone, Copy)]
struct NodeRecord {
    g: f64,
    h: f64,
    state: NodeState,
}

impl Default for NodeRecord {
    fn default() -> Self {
        NodeRecord {
            g: f64::INFINITY,
            h: 0.0,
            state: NodeState::Unvisited,
        }
    }
}

/// Counters for the current or most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved to the closed set.
    pub expanded: usize,
    /// Jump points pushed onto the open list.
    pub jump_points: usize,
    /// Open nodes whose cost improved.
    pub decreased: usize,
}

/// Outcome of a single [`PathFinder::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The node was closed and its jump points relaxed; the search goes on.
    Expanded(NodeId),
    /// Goal reached. Holds the jump points from start to goal inclusive.
    Found(Vec<NodeId>),
    /// Frontier ran dry without reaching the goal.
    Exhausted,
}

/// Jump Point Search driver over a shared, read-only [`Board`].
///
/// All mutable search state (costs, parents, open and closed membership)
/// lives here, so any number of finders can search the same board, and one
/// finder can be reused for many searches.
pub struct PathFinder<'a> {
    board: &'a Board,
    config: SearchConfig,
    path_builder: PathBuilder,
    heap: OpenList,
    records: Vec<NodeRecord>,
    // (start, goal) while a search is running
    search: Option<(NodeId, NodeId)>,
    stats: SearchStats,
}

impl<'a> PathFinder<'a> {
    pub fn new(board: &'a Board) -> PathFinder<'a> {
        PathFinder::with_config(board, SearchConfig::default())
    }

    pub fn with_config(board: &'a Board, config: SearchConfig) -> PathFinder<'a> {
        PathFinder {
            board,
            config,
            path_builder: PathBuilder::new(board.len()),
            heap: Self::open_list(&config),
            records: vec![NodeRecord::default(); board.len()],
            search: None,
            stats: SearchStats::default(),
        }
    }

    /// Shortest path between the nodes nearest to `start` and `goal`, as
    /// world positions of the jump points. `Ok(None)` means the goal is
    /// unreachable.
    pub fn find_path(&mut self, start: Position, goal: Position) -> Result<Option<Vec<Position>>> {
        self.begin(start, goal)?;
        let board = self.board;
        Ok(self.run()?.map(|path| {
            path.into_iter()
                .map(|id| board[id].get_position())
                .collect()
        }))
    }

    /// Like [`find_path`](Self::find_path) but between known nodes.
    pub fn find_path_between(&mut self, start: NodeId, goal: NodeId) -> Result<Option<Vec<NodeId>>> {
        self.begin_at(start, goal)?;
        self.run()
    }

    /// Resets all search state and seeds the open list with the start node.
    pub fn begin(&mut self, start: Position, goal: Position) -> Result<()> {
        let start = self.resolve(start)?;
        let goal = self.resolve(goal)?;
        self.begin_at(start, goal)
    }

    pub fn begin_at(&mut self, start: NodeId, goal: NodeId) -> Result<()> {
        self.cleanup();

        let board = self.board;
        let start_node = board.node(start).ok_or(PathfinderError::UnknownNode(start))?;
        let goal_node = board.node(goal).ok_or(PathfinderError::UnknownNode(goal))?;

        // skip if either end is walled
        for node in [start_node, goal_node] {
            if node.is_blocked() {
                return Err(PathfinderError::BlockedEndpoint(node.get_coordinate()));
            }
        }

        let h = start_node
            .get_position()
            .manhattan_distance(&goal_node.get_position());
        self.records[start.index()] = NodeRecord {
            g: 0.0,
            h,
            state: NodeState::Open,
        };
        self.heap.insert(start, h)?;
        self.search = Some((start, goal));

        log::debug!(
            "searching {:?} -> {:?}",
            start_node.get_coordinate(),
            goal_node.get_coordinate()
        );
        Ok(())
    }

    /// Runs one expansion: either finishes the search or closes the cheapest
    /// frontier node and relaxes the jump points reachable from it.
    pub fn step(&mut self) -> Result<Step> {
        let (_, goal) = self.search.ok_or(PathfinderError::NoActiveSearch)?;

        if self.heap.is_empty() {
            self.search = None;
            log::debug!("no path after {} expansions", self.stats.expanded);
            return Ok(Step::Exhausted);
        }

        let current = self.heap.peek_min()?;
        if current == goal {
            self.search = None;
            let path = self.path_builder.build(goal);
            log::debug!(
                "found {} waypoints after {} expansions",
                path.len(),
                self.stats.expanded
            );
            return Ok(Step::Found(path));
        }

        self.heap.extract_min()?;
        self.records[current.index()].state = NodeState::Closed;
        self.stats.expanded += 1;
        log::trace!("expanding {:?}", self.board[current].get_coordinate());

        if let Err(err) = self.expand(current, goal) {
            self.search = None;
            return Err(err);
        }
        Ok(Step::Expanded(current))
    }

    /// Steps until the search finishes.
    pub fn run(&mut self) -> Result<Option<Vec<NodeId>>> {
        loop {
            match self.step()? {
                Step::Expanded(_) => continue,
                Step::Found(path) => return Ok(Some(path)),
                Step::Exhausted => return Ok(None),
            }
        }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    pub fn open_len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_open(&self, node: NodeId) -> bool {
        self.heap.contains(node)
    }

    pub fn is_closed(&self, node: NodeId) -> bool {
        self.record(node)
            .map_or(false, |record| record.state == NodeState::Closed)
    }

    /// Best known cost from the start, if the node was reached this search.
    pub fn cost(&self, node: NodeId) -> Option<f64> {
        self.record(node)
            .filter(|record| record.state != NodeState::Unvisited)
            .map(|record| record.g)
    }

    /// Predecessor on the best known path, if any.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.path_builder.origin(node)
    }

    fn expand(&mut self, current: NodeId, goal: NodeId) -> Result<()> {
        let scanner = Scanner::new(self.board, goal);
        for direction in ALL {
            if let Some(jump_point) = scanner.jump(current, direction) {
                self.relax(current, jump_point, goal)?;
            }
        }
        Ok(())
    }

    fn relax(&mut self, current: NodeId, jump_point: NodeId, goal: NodeId) -> Result<()> {
        let board = self.board;
        let position = board[jump_point].get_position();
        let candidate =
            self.records[current.index()].g + board[current].get_position().manhattan_distance(&position);

        let record = &mut self.records[jump_point.index()];
        match record.state {
            NodeState::Closed => {}
            NodeState::Open => {
                if candidate < record.g {
                    record.g = candidate;
                    let f = candidate + record.h;
                    self.path_builder.link(jump_point, current);
                    self.heap.decrease_key(jump_point, f)?;
                    self.stats.decreased += 1;
                }
            }
            NodeState::Unvisited => {
                let h = position.manhattan_distance(&board[goal].get_position());
                *record = NodeRecord {
                    g: candidate,
                    h,
                    state: NodeState::Open,
                };
                self.path_builder.link(jump_point, current);
                self.heap.insert(jump_point, candidate + h)?;
                self.stats.jump_points += 1;
                log::trace!(
                    "jump point {:?} g={} h={}",
                    board[jump_point].get_coordinate(),
                    candidate,
                    h
                );
            }
        }
        Ok(())
    }

    fn resolve(&self, pos: Position) -> Result<NodeId> {
        self.board
            .nearest_node(pos)
            .map(|node| node.id())
            .ok_or(PathfinderError::InvalidEndpoint(pos))
    }

    fn record(&self, node: NodeId) -> Option<&NodeRecord> {
        self.records.get(node.index())
    }

    fn open_list(config: &SearchConfig) -> OpenList {
        match config.open_list_limit {
            Some(limit) => OpenList::with_limit(limit),
            None => OpenList::new(),
        }
    }

    fn cleanup(&mut self) {
        let size = self.board.len();
        self.heap.clear();
        self.records.clear();
        self.records.resize(size, NodeRecord::default());
        self.path_builder.reset(size);
        self.search = None;
        self.stats = SearchStats::default();
    }
}

/// One-shot search on `board` with the default configuration.
pub fn find_path(board: &Board, start: Position, goal: Position) -> Result<Option<Vec<Position>>> {
    PathFinder::new(board).find_path(start, goal)
}
