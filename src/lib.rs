pub mod error;
pub use self::error::RankError;
pub mod graph;
pub use self::graph::LinkGraph;
pub mod represent;
pub use self::represent::{adjacency_matrix, edge_list};
mod common;
pub use self::common::*;

pub mod page_rank;
