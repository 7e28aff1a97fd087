use std::collections::VecDeque;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::ComponentLabel;

/// Node identifier: the component's index in the sequence the graph was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: NodeId,
    pub label: ComponentLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    /// Default chain between consecutive components.
    Flow,
    /// Source → streaming ingestion → storage path.
    Ingest,
    /// Train → registry → serve → monitor sub-chain.
    Pipeline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
}

impl GraphEdge {
    pub fn id(&self) -> String {
        format!("edge-{}-{}", self.source, self.target)
    }
}

/// Directed diagram for one run. Nodes are in sequence order, edges in
/// construction order, so two builds from the same sequence are identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    entry: NodeId,
}

impl ArchitectureGraph {
    /// Callers guarantee `entry` and every edge endpoint index into `nodes`.
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>, entry: NodeId) -> Self {
        debug_assert!(entry.0 < nodes.len());
        debug_assert!(edges
            .iter()
            .all(|e| e.source.0 < nodes.len() && e.target.0 < nodes.len()));
        Self {
            nodes,
            edges,
            entry,
        }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn entry(&self) -> NodeId {
        self.entry
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.0)
    }

    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.label == label).map(|n| n.id)
    }

    pub fn label(&self, id: NodeId) -> Option<&ComponentLabel> {
        self.node(id).map(|n| &n.label)
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.edges.iter().filter(|e| e.target == id).count()
    }

    pub fn successors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges
            .iter()
            .filter(move |e| e.source == id)
            .map(|e| e.target)
    }

    /// Nodes with no incoming edge, in node order.
    pub fn roots(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .map(|n| n.id)
            .filter(|id| self.in_degree(*id) == 0)
            .collect()
    }

    /// Breadth-first visit order starting at the entry node.
    pub fn reachable_from_entry(&self) -> Vec<NodeId> {
        let mut seen = vec![false; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([self.entry]);
        seen[self.entry.0] = true;
        while let Some(id) = queue.pop_front() {
            order.push(id);
            for next in self.successors(id) {
                if !seen[next.0] {
                    seen[next.0] = true;
                    queue.push_back(next);
                }
            }
        }
        order
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_from_entry().len() == self.nodes.len()
    }

    pub fn has_dangling_edges(&self) -> bool {
        self.edges
            .iter()
            .any(|e| self.node(e.source).is_none() || self.node(e.target).is_none())
    }

    /// Kahn's algorithm; true when every node can be ordered.
    pub fn is_acyclic(&self) -> bool {
        let mut indegree: Vec<usize> = self.nodes.iter().map(|n| self.in_degree(n.id)).collect();
        let mut ready: VecDeque<NodeId> = self.roots().into();
        let mut visited = 0;
        while let Some(id) = ready.pop_front() {
            visited += 1;
            for next in self.successors(id) {
                indegree[next.0] -= 1;
                if indegree[next.0] == 0 {
                    ready.push_back(next);
                }
            }
        }
        visited == self.nodes.len()
    }
}
