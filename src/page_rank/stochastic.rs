use super::*;
use crate::*;
use rand::prelude::*;
use std::{cell::RefCell, collections::HashMap};

/// Monte-Carlo estimation: a single random walker, visit frequencies
/// normalized into a rank distribution.
#[derive(Debug)]
pub struct StochasticPageRank<'a, R>
where
    R: Rng,
{
    graph: &'a LinkGraph,
    repeats: usize,
    // out-links resolved to node indices, multiplicity preserved
    out_links: Vec<Vec<usize>>,
    rng: RefCell<R>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub repeats: usize,
}

#[derive(Debug, Clone)]
pub struct Ranking {
    pub page_rank: HashMap<String, f64, ahash::RandomState>,
    pub hits: HashMap<String, u64, ahash::RandomState>,
}

impl<'a, R: Rng> StochasticPageRank<'a, R> {
    pub fn new(graph: &'a LinkGraph, config: &Config, rng: R) -> Result<Self, RankError> {
        if graph.node_count() == 0 {
            return Err(RankError::EmptyGraph);
        }
        let index: HashMap<&str, usize, ahash::RandomState> = graph
            .iter_nodes()
            .enumerate()
            .map(|(i, node)| (node, i))
            .collect();
        let out_links = graph
            .iter_nodes()
            .map(|node| {
                graph
                    .out_links(node)
                    .iter()
                    .map(|target| index[target.as_str()])
                    .collect()
            })
            .collect();
        Ok(Self {
            graph,
            repeats: config.repeats,
            out_links,
            rng: RefCell::new(rng),
        })
    }
}

impl<R: Rng> PageRank for StochasticPageRank<'_, R> {
    type Ranking = self::Ranking;

    fn calc(&self) -> Self::Ranking {
        let n = self.graph.node_count();
        let mut counts = vec![0u64; n];
        let mut rng = self.rng.borrow_mut();

        let mut current = rng.random_range(0..n);
        counts[current] += 1;
        for _ in 0..self.repeats {
            current = match self.out_links[current].choose(&mut *rng) {
                Some(next) => *next,
                // sink: teleport anywhere, uniformly
                None => rng.random_range(0..n),
            };
            counts[current] += 1;
        }

        let total = (self.repeats + 1) as f64;
        let page_rank = self
            .graph
            .iter_nodes()
            .zip(counts.iter())
            .map(|(node, c)| (node.to_owned(), (*c as f64) / total))
            .collect();
        let hits = self
            .graph
            .iter_nodes()
            .zip(counts.iter())
            .map(|(node, c)| (node.to_owned(), *c))
            .collect();
        Ranking { page_rank, hits }
    }
}

impl PageRankResult for self::Ranking {
    fn page_rank(&self) -> &HashMap<String, f64, ahash::RandomState> {
        &self.page_rank
    }

    fn debug<'a>(&'a self, graph: &'a LinkGraph) -> impl std::fmt::Debug + 'a {
        RankingDebug {
            graph,
            ranking: self,
        }
    }
}

pub struct RankingDebug<'a> {
    graph: &'a LinkGraph,
    ranking: &'a Ranking,
}

impl std::fmt::Debug for RankingDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for node in self.graph.iter_nodes() {
            let p = self.ranking.page_rank.get(node).unwrap();
            let h = self.ranking.hits.get(node).unwrap();
            writeln!(f, "{node}: {p:.6} ({h} hits)")?;
        }
        Ok(())
    }
}
