//! Text renderings of an architecture graph.

use std::fmt::Write;
use stratus_core::{ArchitectureGraph, EdgeKind, NodeId};
use stratus_engine::RunResult;

const ARROW: &str = "  →  ";

/// Mermaid `flowchart LR` source. Flow edges are solid, ingest edges dotted,
/// ML pipeline edges thick.
pub fn mermaid(graph: &ArchitectureGraph) -> String {
    let mut out = String::from("flowchart LR\n");
    for node in graph.nodes() {
        let _ = writeln!(
            out,
            "    n{}[\"{}\"]",
            node.id.0,
            node.label.as_str().replace('"', "#quot;")
        );
    }
    for edge in graph.edges() {
        let arrow = match edge.kind {
            EdgeKind::Flow => "-->",
            EdgeKind::Ingest => "-.->",
            EdgeKind::Pipeline => "==>",
        };
        let _ = writeln!(out, "    n{} {} n{}", edge.source.0, arrow, edge.target.0);
    }
    out
}

/// The main path from the entry as `A  →  B  →  C`, followed by one
/// `  ↳ ` line per side branch.
pub fn arrow_chain(graph: &ArchitectureGraph) -> String {
    let edges = graph.edges();
    let mut used = vec![false; edges.len()];

    let mut path = vec![graph.entry()];
    loop {
        let current = path[path.len() - 1];
        let next = edges
            .iter()
            .enumerate()
            .find(|(i, e)| !used[*i] && e.source == current && !path.contains(&e.target));
        match next {
            Some((i, e)) => {
                used[i] = true;
                path.push(e.target);
            }
            None => break,
        }
    }

    let mut out = join(graph, &path);
    for start in 0..edges.len() {
        if used[start] {
            continue;
        }
        used[start] = true;
        let mut branch = vec![edges[start].source, edges[start].target];
        // A branch ends where it rejoins the main path.
        while let Some(i) = (0..edges.len()).find(|&i| {
            let tip = branch[branch.len() - 1];
            !used[i] && edges[i].source == tip && !path.contains(&tip)
        }) {
            used[i] = true;
            branch.push(edges[i].target);
        }
        out.push_str("\n  ↳ ");
        out.push_str(&join(graph, &branch));
    }
    out
}

/// What `recommend` shows: advisor trace, numbered components and both diagram renderings.
pub fn run_summary(run_id: u64, run: &RunResult) -> String {
    let mut out = format!("# Run {run_id}: {}\n\n## Advisors\n", run.focus);
    for entry in &run.trace {
        let _ = write!(out, "- {} [{}]: {}", entry.advisor, entry.rule, entry.rationale);
        match (entry.changed, entry.applicable) {
            (true, _) => {}
            (false, true) => out.push_str(" (already covered)"),
            (false, false) => out.push_str(" (not applicable)"),
        }
        out.push('\n');
    }
    out.push_str("\n## Components\n");
    for (i, label) in run.components.iter().enumerate() {
        let _ = writeln!(out, "{}. {label}", i + 1);
    }
    let _ = write!(
        out,
        "\n## Diagram\n{}\n\n```mermaid\n{}```\n",
        arrow_chain(&run.graph),
        mermaid(&run.graph)
    );
    out
}

fn join(graph: &ArchitectureGraph, ids: &[NodeId]) -> String {
    ids.iter()
        .filter_map(|&id| graph.label(id))
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(ARROW)
}
