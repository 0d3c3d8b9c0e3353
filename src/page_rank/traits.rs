use crate::LinkGraph;
use std::collections::HashMap;

pub trait PageRank {
    type Ranking: PageRankResult;

    fn calc(&self) -> Self::Ranking;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &HashMap<String, f64, ahash::RandomState>;
    fn debug<'a>(&'a self, graph: &'a LinkGraph) -> impl std::fmt::Debug + 'a;
}
