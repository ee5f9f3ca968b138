use super::error::{PathfinderError, Result};
use super::node::NodeId;
use super::ordered_float::OrderedFloat;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// Heap key: total cost first, then insertion order so ties pop FIFO.
type Priority = Reverse<(OrderedFloat, u64)>;

/// Min-priority queue of frontier nodes keyed by `f = g + h`.
///
/// Every node appears at most once. The keyed heap tracks each node's slot,
/// which gives O(1) membership and O(log n) decrease-key.
pub struct OpenList {
    // set to min-heap
    heap: KeyedPriorityQueue<NodeId, Priority>,
    limit: Option<usize>,
    sequence: u64,
}

impl Default for OpenList {
    fn default() -> Self {
        OpenList::new()
    }
}

impl OpenList {
    /// Growable open list.
    pub fn new() -> OpenList {
        OpenList {
            heap: KeyedPriorityQueue::<NodeId, Priority>::new(),
            limit: None,
            sequence: 0,
        }
    }

    /// Open list that refuses to hold more than `capacity` nodes.
    pub fn with_limit(capacity: usize) -> OpenList {
        OpenList {
            limit: Some(capacity),
            ..OpenList::new()
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.heap.get_priority(&node).is_some()
    }

    /// Current `f` of a queued node.
    pub fn priority(&self, node: NodeId) -> Option<f64> {
        self.heap
            .get_priority(&node)
            .map(|Reverse((f, _))| f.value())
    }

    pub fn insert(&mut self, node: NodeId, f: f64) -> Result<()> {
        if self.contains(node) {
            return Err(PathfinderError::AlreadyQueued(node));
        }
        if let Some(capacity) = self.limit {
            if self.heap.len() >= capacity {
                log::warn!("open list full at {} nodes, rejecting {:?}", capacity, node);
                return Err(PathfinderError::CapacityExceeded { capacity });
            }
        }

        let key = Self::key(f)?;
        self.heap.push(node, Reverse((key, self.sequence)));
        self.sequence += 1;
        Ok(())
    }

    pub fn peek_min(&self) -> Result<NodeId> {
        self.heap
            .peek()
            .map(|(node, _)| *node)
            .ok_or(PathfinderError::EmptyOpenList)
    }

    pub fn extract_min(&mut self) -> Result<NodeId> {
        self.heap
            .pop()
            .map(|(node, _)| node)
            .ok_or(PathfinderError::EmptyOpenList)
    }

    /// Moves `node` up after its cost dropped to `f`. The node keeps its
    /// insertion rank for tie-breaking.
    pub fn decrease_key(&mut self, node: NodeId, f: f64) -> Result<()> {
        let Reverse((_, sequence)) = *self
            .heap
            .get_priority(&node)
            .ok_or(PathfinderError::NotQueued(node))?;

        let key = Self::key(f)?;
        self.heap
            .set_priority(&node, Reverse((key, sequence)))
            .map_err(|_| PathfinderError::NotQueued(node))?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.heap = KeyedPriorityQueue::<NodeId, Priority>::new();
        self.sequence = 0;
    }

    fn key(f: f64) -> Result<OrderedFloat> {
        OrderedFloat::new(f).ok_or(PathfinderError::NonFiniteCost(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn id(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn extracts_in_cost_order() {
        let mut open = OpenList::new();
        open.insert(id(0), 5.0).unwrap();
        open.insert(id(1), 1.0).unwrap();
        open.insert(id(2), 3.0).unwrap();

        assert_eq!(open.peek_min(), Ok(id(1)));
        assert_eq!(open.extract_min(), Ok(id(1)));
        assert_eq!(open.extract_min(), Ok(id(2)));
        assert_eq!(open.extract_min(), Ok(id(0)));
        assert!(open.is_empty());
    }

    #[test]
    fn breaks_ties_by_insertion_order() {
        let mut open = OpenList::new();
        for index in [4, 2, 7, 1] {
            open.insert(id(index), 2.0).unwrap();
        }

        let order: Vec<NodeId> = (0..4).map(|_| open.extract_min().unwrap()).collect();
        assert_eq!(order, vec![id(4), id(2), id(7), id(1)]);
    }

    #[test]
    fn tracks_membership() {
        let mut open = OpenList::new();
        open.insert(id(3), 1.0).unwrap();

        assert!(open.contains(id(3)));
        assert!(!open.contains(id(4)));
        assert_eq!(open.priority(id(3)), Some(1.0));

        open.extract_min().unwrap();
        assert!(!open.contains(id(3)));
    }

    #[test]
    fn rejects_double_insert() {
        let mut open = OpenList::new();
        open.insert(id(0), 1.0).unwrap();

        assert_eq!(
            open.insert(id(0), 0.5),
            Err(PathfinderError::AlreadyQueued(id(0)))
        );
        assert_eq!(open.len(), 1);
    }

    #[test]
    fn empty_queue_errors() {
        let mut open = OpenList::new();

        assert_eq!(open.peek_min(), Err(PathfinderError::EmptyOpenList));
        assert_eq!(open.extract_min(), Err(PathfinderError::EmptyOpenList));
    }

    #[test]
    fn decrease_key_resurfaces_node() {
        let mut open = OpenList::new();
        open.insert(id(0), 4.0).unwrap();
        open.insert(id(1), 6.0).unwrap();
        open.insert(id(2), 9.0).unwrap();

        open.decrease_key(id(2), 1.0).unwrap();

        assert_eq!(open.priority(id(2)), Some(1.0));
        assert_eq!(open.extract_min(), Ok(id(2)));
    }

    #[test]
    fn decrease_key_keeps_insertion_rank() {
        let mut open = OpenList::new();
        open.insert(id(0), 3.0).unwrap();
        open.insert(id(1), 5.0).unwrap();

        // equal cost now, but node 0 was queued first
        open.decrease_key(id(1), 3.0).unwrap();
        assert_eq!(open.extract_min(), Ok(id(0)));
    }

    #[test]
    fn decrease_key_requires_membership() {
        let mut open = OpenList::new();
        assert_eq!(
            open.decrease_key(id(5), 1.0),
            Err(PathfinderError::NotQueued(id(5)))
        );
    }

    #[test]
    fn rejects_nan_cost() {
        let mut open = OpenList::new();
        assert!(matches!(
            open.insert(id(0), f64::NAN),
            Err(PathfinderError::NonFiniteCost(_))
        ));
        assert!(open.is_empty());
    }

    #[test]
    fn enforces_limit() {
        let mut open = OpenList::with_limit(2);
        open.insert(id(0), 1.0).unwrap();
        open.insert(id(1), 1.0).unwrap();

        assert_eq!(
            open.insert(id(2), 1.0),
            Err(PathfinderError::CapacityExceeded { capacity: 2 })
        );

        open.extract_min().unwrap();
        assert!(open.insert(id(2), 1.0).is_ok());
    }

    #[test]
    fn clear_empties_queue() {
        let mut open = OpenList::new();
        open.insert(id(0), 1.0).unwrap();
        open.clear();

        assert!(open.is_empty());
        assert!(!open.contains(id(0)));
        assert!(open.insert(id(0), 2.0).is_ok());
    }

    #[test]
    fn matches_linear_scan_reference() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..50 {
            let mut open = OpenList::new();
            // (node, f) pairs still queued
            let mut reference: Vec<(usize, f64)> = Vec::new();

            for _ in 0..200 {
                match rng.gen_range(0..3) {
                    0 => {
                        let node = rng.gen_range(0..64);
                        if reference.iter().any(|(n, _)| *n == node) {
                            continue;
                        }
                        let f = rng.gen_range(0..40) as f64;
                        open.insert(id(node), f).unwrap();
                        reference.push((node, f));
                    }
                    1 if !reference.is_empty() => {
                        let slot = rng.gen_range(0..reference.len());
                        let (node, f) = reference[slot];
                        let lower = f - rng.gen_range(0..10) as f64;
                        open.decrease_key(id(node), lower).unwrap();
                        reference[slot].1 = lower;
                    }
                    _ if !reference.is_empty() => {
                        let min = reference
                            .iter()
                            .map(|(_, f)| *f)
                            .fold(f64::INFINITY, f64::min);
                        let popped = open.extract_min().unwrap();
                        let slot = reference
                            .iter()
                            .position(|(n, _)| *n == popped.index())
                            .unwrap();
                        assert_eq!(reference[slot].1, min);
                        reference.swap_remove(slot);
                    }
                    _ => {}
                }
                assert_eq!(open.len(), reference.len());
            }
        }
    }
}
