use crate::LinkGraph;
use std::collections::HashMap;

/// 0/1 adjacency matrix over the graph's node order.
///
/// Parallel links collapse into a single 1; this view is for inspection
/// only and does not feed either ranker.
pub fn adjacency_matrix(graph: &LinkGraph) -> Vec<Vec<u8>> {
    let index: HashMap<&str, usize, ahash::RandomState> = graph
        .iter_nodes()
        .enumerate()
        .map(|(i, node)| (node, i))
        .collect();
    let n = graph.node_count();
    let mut matrix = vec![vec![0; n]; n];
    for source in graph.iter_nodes() {
        let row = &mut matrix[index[source]];
        for target in graph.out_links(source) {
            row[index[target.as_str()]] = 1;
        }
    }
    matrix
}

/// One `(source, target)` pair per link occurrence, in node order,
/// parallel links repeated.
pub fn edge_list(graph: &LinkGraph) -> Vec<(&str, &str)> {
    let mut edges = vec![];
    for source in graph.iter_nodes() {
        for target in graph.out_links(source) {
            edges.push((source, target.as_str()));
        }
    }
    edges
}
