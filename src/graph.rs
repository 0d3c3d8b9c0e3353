use crate::RankError;
use std::collections::HashMap;
use std::io::BufRead;

/// Directed link graph keyed by page name.
///
/// Nodes iterate in first-insertion order, and a node's outgoing links keep
/// their insertion order, duplicates included. Registering a link registers
/// both endpoints, so a target that never occurs as a source still has an
/// entry with an empty link list.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    order: Vec<String>,
    links: HashMap<String, Vec<String>, ahash::RandomState>,
    edges: usize,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a line-oriented link file, one whitespace-separated
    /// `source target` pair per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, RankError> {
        let mut graph = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let mut tokens = line.split_whitespace();
            let (Some(source), Some(target), None) =
                (tokens.next(), tokens.next(), tokens.next())
            else {
                return Err(RankError::MalformedLine {
                    line: idx + 1,
                    content: line.clone(),
                });
            };
            graph.add_link(source, target);
        }
        Ok(graph)
    }

    pub fn add_node(&mut self, node: &str) {
        if !self.links.contains_key(node) {
            self.order.push(node.to_owned());
            self.links.insert(node.to_owned(), vec![]);
        }
    }

    pub fn add_link(&mut self, source: &str, target: &str) {
        self.add_node(source);
        self.add_node(target);
        self.links.get_mut(source).unwrap().push(target.to_owned());
        self.edges += 1;
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of links, parallel links counted separately.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.links.contains_key(node)
    }

    /// Nodes in first-insertion order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Outgoing links of `node`, empty for unknown identifiers.
    pub fn out_links(&self, node: &str) -> &[String] {
        self.links.get(node).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_pairs() {
        let graph = LinkGraph::from_reader("a b\nb c\na b\n".as_bytes()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_links("a"), ["b", "b"]);
        assert_eq!(graph.out_links("b"), ["c"]);
        assert!(graph.out_links("c").is_empty());
    }

    #[test]
    fn loader_rejects_malformed_lines() {
        let err = LinkGraph::from_reader("a b\na b c\n".as_bytes()).unwrap_err();
        assert!(matches!(err, RankError::MalformedLine { line: 2, .. }), "{err}");

        let err = LinkGraph::from_reader("lonely\n".as_bytes()).unwrap_err();
        assert!(matches!(err, RankError::MalformedLine { line: 1, .. }), "{err}");

        let err = LinkGraph::from_reader("a b\n\nc d\n".as_bytes()).unwrap_err();
        assert!(matches!(err, RankError::MalformedLine { line: 2, .. }), "{err}");
    }

    #[test]
    fn first_insertion_order() {
        let mut graph = LinkGraph::new();
        graph.add_link("c", "a");
        graph.add_link("b", "c");
        graph.add_link("a", "b");
        let nodes: Vec<_> = graph.iter_nodes().collect();
        assert_eq!(nodes, ["c", "a", "b"]);
    }

    #[test]
    fn targets_become_sinks() {
        let mut graph = LinkGraph::new();
        graph.add_link("a", "b");
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_node("b"));
        assert!(graph.out_links("b").is_empty());
    }

    #[test]
    fn parallel_links_are_counted() {
        let mut graph = LinkGraph::new();
        graph.add_link("a", "b");
        graph.add_link("a", "b");
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn isolated_nodes() {
        let mut graph = LinkGraph::new();
        graph.add_node("a");
        graph.add_node("a");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }
}
