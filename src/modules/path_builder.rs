use super::node::NodeId;

/// Parent links recorded during one search, one slot per board node.
pub struct PathBuilder {
    node_origins: Vec<Option<NodeId>>,
}

impl PathBuilder {
    pub fn new(size: usize) -> PathBuilder {
        PathBuilder {
            node_origins: vec![None; size],
        }
    }

    pub fn reset(&mut self, size: usize) {
        self.node_origins.clear();
        self.node_origins.resize(size, None);
    }

    pub fn link(&mut self, node: NodeId, origin: NodeId) {
        self.node_origins[node.index()] = Some(origin);
    }

    pub fn origin(&self, node: NodeId) -> Option<NodeId> {
        self.node_origins.get(node.index()).copied().flatten()
    }

    /// Walks origins back from `goal` and returns the chain start-first.
    pub fn build(&self, goal: NodeId) -> Vec<NodeId> {
        let mut output: Vec<NodeId> = vec![goal];
        let mut node = goal;

        while let Some(origin) = self.origin(node) {
            // a chain can't be longer than the board
            if output.len() > self.node_origins.len() {
                break;
            }
            output.push(origin);
            node = origin;
        }

        output.reverse();
        output
    }
}
