use keyed_priority_queue::KeyedPriorityQueue;
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

pub fn norm_1<K: Eq + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub fn support(
    p: &HashMap<String, f64, ahash::RandomState>,
) -> HashSet<&str, ahash::RandomState> {
    p.iter()
        .filter_map(|(node, val)| {
            if *val < -1e-9 || *val > 1e-9 {
                Some(node.as_str())
            } else {
                None
            }
        })
        .collect()
}

/// The `n` highest-ranked nodes, best first. Ties break arbitrarily.
pub fn top_ranked(ranks: &HashMap<String, f64, ahash::RandomState>, n: usize) -> Vec<(&str, f64)> {
    let mut queue = KeyedPriorityQueue::new();
    for (node, rank) in ranks.iter() {
        queue.push(node.as_str(), OrdFloat(*rank));
    }
    let mut top = Vec::with_capacity(n.min(queue.len()));
    while top.len() < n {
        let Some((node, rank)) = queue.pop() else {
            break;
        };
        top.push((node, rank.0));
    }
    top
}

struct OrdFloat(f64);
impl PartialOrd for OrdFloat {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for OrdFloat {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.partial_cmp(&other.0).unwrap()
    }
}
impl PartialEq for OrdFloat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}
impl Eq for OrdFloat {}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank_map(pairs: &[(&str, f64)]) -> HashMap<String, f64, ahash::RandomState> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn top_ranked_sorts_descending() {
        let ranks = rank_map(&[("a", 0.1), ("b", 0.5), ("c", 0.4)]);
        assert_eq!(top_ranked(&ranks, 2), [("b", 0.5), ("c", 0.4)]);
    }

    #[test]
    fn top_ranked_truncates_to_population() {
        let ranks = rank_map(&[("a", 1.0)]);
        assert_eq!(top_ranked(&ranks, 20), [("a", 1.0)]);
    }

    #[test]
    fn support_ignores_negligible_mass() {
        let ranks = rank_map(&[("a", 1.0), ("b", 0.0), ("c", 1e-12)]);
        let support = support(&ranks);
        assert_eq!(support.len(), 1);
        assert!(support.contains("a"));
    }

    #[test]
    fn norm_1_sums_magnitudes() {
        let v = rank_map(&[("a", 0.5), ("b", -0.25)]);
        assert!((norm_1(&v) - 0.75).abs() < 1e-12);
    }
}
