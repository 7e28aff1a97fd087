//! Turns a component sequence into a diagram.
//!
//! Nodes keep sequence order and ids (`node-0` ..). The layout starts as a
//! linear chain and is then refined by role, using the catalog's component
//! table:
//!
//! 1. **Edge entry**: edge/CDN components move to the front of the chain, so
//!    they become the entry point feeding whatever used to be first.
//! 2. **ML pipeline**: training, registry, serving and model-monitoring
//!    components leave the chain and form a fixed-order sub-chain fed by the
//!    storage node (or the chain tail when there is no storage node). Skipped
//!    when the chain would otherwise be empty.
//! 3. **Streaming ingest**: with both a streaming and a storage component
//!    present, the streaming node leaves the chain and sits on a side path
//!    `source → stream → storage`, where source is the first chain node that
//!    is not an edge component. When storage is itself the source, the stream
//!    is spliced into the chain right ahead of storage instead.
//!
//! Every edge points forward in chain order or away from the chain, so the
//! result is acyclic, and the chain head is the only node without an
//! incoming edge.

use stratus_core::{
    ArchitectureGraph, Catalog, ComponentSequence, EdgeKind, GraphEdge, GraphNode, NodeId,
    TopologyRole,
};

pub(crate) fn build(catalog: &Catalog, components: &ComponentSequence) -> ArchitectureGraph {
    let roles: Vec<Option<TopologyRole>> = components.iter().map(|l| catalog.role_of(l)).collect();
    let has_role = |i: usize, role: TopologyRole| roles[i] == Some(role);

    let nodes: Vec<GraphNode> = components
        .iter()
        .enumerate()
        .map(|(i, label)| GraphNode {
            id: NodeId(i),
            label: label.clone(),
        })
        .collect();

    let mut chain: Vec<usize> = (0..nodes.len()).collect();

    // Edge/CDN components take the front, keeping their relative order.
    let (front, rest): (Vec<usize>, Vec<usize>) =
        chain.iter().copied().partition(|&i| has_role(i, TopologyRole::Edge));
    if !front.is_empty() {
        tracing::debug!(entry = %components.as_slice()[front[0]], "edge refinement");
        chain = front.into_iter().chain(rest).collect();
    }

    let mut pipeline: Vec<usize> = chain
        .iter()
        .copied()
        .filter(|&i| roles[i].and_then(TopologyRole::pipeline_stage).is_some())
        .collect();
    if pipeline.len() < chain.len() {
        pipeline.sort_by_key(|&i| (roles[i].and_then(TopologyRole::pipeline_stage), i));
        chain.retain(|i| !pipeline.contains(i));
    } else {
        pipeline.clear();
    }

    let storage = chain
        .iter()
        .copied()
        .find(|&i| has_role(i, TopologyRole::Storage));
    let streams: Vec<usize> = chain
        .iter()
        .copied()
        .filter(|&i| has_role(i, TopologyRole::Streaming))
        .collect();

    let mut ingest_edges = Vec::new();
    let mut spliced = Vec::new();
    if let (Some(storage), false) = (storage, streams.is_empty()) {
        chain.retain(|i| !streams.contains(i));
        let source = chain
            .iter()
            .copied()
            .find(|&i| !has_role(i, TopologyRole::Edge));
        match source {
            Some(source) if source != storage => {
                tracing::debug!(streams = streams.len(), "streaming side path");
                for &stream in &streams {
                    ingest_edges.push(edge(source, stream, EdgeKind::Ingest));
                    ingest_edges.push(edge(stream, storage, EdgeKind::Ingest));
                }
            }
            _ => {
                tracing::debug!(streams = streams.len(), "streaming spliced ahead of storage");
                let at = chain.iter().position(|&i| i == storage).unwrap_or(chain.len());
                for (offset, &stream) in streams.iter().enumerate() {
                    chain.insert(at + offset, stream);
                }
                spliced = streams;
            }
        }
    }

    let mut edges: Vec<GraphEdge> = Vec::with_capacity(nodes.len() + ingest_edges.len());
    for pair in chain.windows(2) {
        let kind = if spliced.contains(&pair[0]) || spliced.contains(&pair[1]) {
            EdgeKind::Ingest
        } else {
            EdgeKind::Flow
        };
        push_unique(&mut edges, edge(pair[0], pair[1], kind));
    }
    for e in ingest_edges {
        push_unique(&mut edges, e);
    }

    if let Some(&first) = pipeline.first() {
        let feeder = storage.or_else(|| chain.last().copied());
        if let Some(feeder) = feeder {
            tracing::debug!(stages = pipeline.len(), "ml pipeline refinement");
            push_unique(&mut edges, edge(feeder, first, EdgeKind::Pipeline));
        }
        for pair in pipeline.windows(2) {
            push_unique(&mut edges, edge(pair[0], pair[1], EdgeKind::Pipeline));
        }
    }

    // `components` is never empty, so the chain always has a head.
    let entry = NodeId(chain.first().copied().unwrap_or_default());
    ArchitectureGraph::new(nodes, edges, entry)
}

fn edge(source: usize, target: usize, kind: EdgeKind) -> GraphEdge {
    GraphEdge {
        source: NodeId(source),
        target: NodeId(target),
        kind,
    }
}

fn push_unique(edges: &mut Vec<GraphEdge>, e: GraphEdge) {
    if !edges
        .iter()
        .any(|x| x.source == e.source && x.target == e.target)
    {
        edges.push(e);
    }
}
