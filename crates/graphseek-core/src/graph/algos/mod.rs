pub mod dijkstra;
pub mod median;
pub mod reachability;

pub use dijkstra::ShortestPathTree;
pub use median::{find_median, DistanceTable, MedianSelector, MedianStrategy, OnDemandMedian};
pub use reachability::possible_targets;
