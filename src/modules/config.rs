/// Tunables for a [`PathFinder`](super::path_finder::PathFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Hard cap on frontier size. `None` lets the open list grow.
    pub open_list_limit: Option<usize>,
}

impl SearchConfig {
    pub fn with_open_list_limit(mut self, limit: usize) -> Self {
        self.open_list_limit = Some(limit);
        self
    }
}
