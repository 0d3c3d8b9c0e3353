use super::*;
use crate::*;
use std::collections::{BTreeMap, HashMap};

/// Exact probability propagation: a fixed number of synchronous
/// power-iteration steps, no damping.
#[derive(Debug)]
pub struct DistributionPageRank<'a> {
    graph: &'a LinkGraph,
    steps: usize,
    // per source node, merged (target index, weight) with
    // weight = multiplicity / out-degree
    transitions: Vec<Vec<(usize, f64)>>,
    sinks: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub steps: usize,
}

#[derive(Debug, Clone)]
pub struct Ranking {
    pub page_rank: HashMap<String, f64, ahash::RandomState>,
}

impl<'a> DistributionPageRank<'a> {
    pub fn new(graph: &'a LinkGraph, config: &Config) -> Result<Self, RankError> {
        if graph.node_count() == 0 {
            return Err(RankError::EmptyGraph);
        }
        let index: HashMap<&str, usize, ahash::RandomState> = graph
            .iter_nodes()
            .enumerate()
            .map(|(i, node)| (node, i))
            .collect();
        let mut transitions = Vec::with_capacity(graph.node_count());
        let mut sinks = vec![];
        for (u, node) in graph.iter_nodes().enumerate() {
            let targets = graph.out_links(node);
            if targets.is_empty() {
                sinks.push(u);
                transitions.push(vec![]);
                continue;
            }
            let unit = 1.0 / (targets.len() as f64);
            let mut row = BTreeMap::new();
            for target in targets {
                let v = index[target.as_str()];
                if let Some(w) = row.get_mut(&v) {
                    *w += unit;
                } else {
                    row.insert(v, unit);
                }
            }
            transitions.push(row.into_iter().collect());
        }
        Ok(Self {
            graph,
            steps: config.steps,
            transitions,
            sinks,
        })
    }
}

impl PageRank for DistributionPageRank<'_> {
    type Ranking = self::Ranking;

    fn calc(&self) -> Self::Ranking {
        let n = self.graph.node_count();
        let uniform = 1.0 / (n as f64);
        let mut p = vec![uniform; n];
        let mut next = vec![0.0; n];
        for _ in 0..self.steps {
            next.fill(0.0);
            for (u, row) in self.transitions.iter().enumerate() {
                let mass = p[u];
                for (v, w) in row.iter() {
                    next[*v] += mass * w;
                }
            }
            // a sink spreads its whole mass over the graph, itself included
            for u in self.sinks.iter() {
                let unit = p[*u] * uniform;
                for x in next.iter_mut() {
                    *x += unit;
                }
            }
            std::mem::swap(&mut p, &mut next);
        }
        let page_rank = self
            .graph
            .iter_nodes()
            .zip(p.iter())
            .map(|(node, w)| (node.to_owned(), *w))
            .collect();
        Ranking { page_rank }
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
            writeln!(f, "{node}: {p:.6}")?;
        }
        Ok(())
    }
}
