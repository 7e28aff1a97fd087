pub mod select;
mod compose;
mod topology;

pub use select::{Selection, TraceEntry};

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use stratus_core::catalog::Template;
use stratus_core::{
    ArchitectureGraph, Catalog, ComponentSequence, Error, FocusCategory, PriorityVector, Report,
    Result,
};

/// Inputs for one full recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    #[serde(default)]
    pub use_case: String,
    pub focus: FocusCategory,
    #[serde(default)]
    pub priorities: PriorityVector,
}

/// Everything one recommendation produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub focus: FocusCategory,
    pub priorities: PriorityVector,
    pub use_case: String,
    pub components: ComponentSequence,
    pub trace: Vec<TraceEntry>,
    pub graph: ArchitectureGraph,
    pub tutorial: Report,
    pub design_doc: Report,
}

/// Selector, graph builder and report composer bound to one catalog.
///
/// Holds no state between calls.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
    /// Template seed per focus, indexed by `FocusCategory::index`.
    seeds: Vec<ComponentSequence>,
}

impl Engine {
    /// Validate the catalog and prepare the per-focus seeds.
    pub fn new(catalog: Catalog) -> Result<Self> {
        catalog.validate()?;
        let seeds = FocusCategory::ALL
            .iter()
            .map(|&focus| {
                catalog
                    .template(focus)
                    .map(Template::seed)
                    .ok_or(Error::MissingTemplate(focus))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { catalog, seeds })
    }

    /// Engine over the built-in catalog.
    pub fn builtin() -> &'static Engine {
        static BUILTIN: OnceLock<Engine> = OnceLock::new();
        // The built-in catalog is covered by `builtin_catalog_validates`.
        BUILTIN.get_or_init(|| Self::new(Catalog::builtin()).expect("built-in catalog is valid"))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn select(
        &self,
        focus: FocusCategory,
        priorities: &PriorityVector,
        free_text: &str,
    ) -> ComponentSequence {
        self.select_traced(focus, priorities, free_text).components
    }

    /// Selection together with the rules that fired, in evaluation order.
    pub fn select_traced(
        &self,
        focus: FocusCategory,
        priorities: &PriorityVector,
        free_text: &str,
    ) -> Selection {
        select::select(
            &self.catalog,
            &self.seeds[focus.index()],
            focus,
            priorities,
            free_text,
        )
    }

    pub fn build_graph(&self, components: &ComponentSequence) -> ArchitectureGraph {
        topology::build(&self.catalog, components)
    }

    /// Tutorial and design document, in that order.
    pub fn compose(
        &self,
        free_text: &str,
        focus: FocusCategory,
        components: &ComponentSequence,
        priorities: &PriorityVector,
    ) -> (Report, Report) {
        compose::compose(&self.catalog, free_text, focus, components, priorities)
    }

    pub fn run(&self, request: &RunRequest) -> RunResult {
        let Selection { components, trace } =
            self.select_traced(request.focus, &request.priorities, &request.use_case);
        let graph = self.build_graph(&components);
        let (tutorial, design_doc) = self.compose(
            &request.use_case,
            request.focus,
            &components,
            &request.priorities,
        );
        tracing::info!(
            focus = %request.focus,
            components = components.len(),
            rules = trace.len() - 1,
            edges = graph.edges().len(),
            "recommendation complete"
        );
        RunResult {
            focus: request.focus,
            priorities: request.priorities,
            use_case: request.use_case.clone(),
            components,
            trace,
            graph,
            tutorial,
            design_doc,
        }
    }
}

/// Select components with the built-in catalog.
pub fn select(
    focus: FocusCategory,
    priorities: &PriorityVector,
    free_text: &str,
) -> ComponentSequence {
    Engine::builtin().select(focus, priorities, free_text)
}

/// Lay out components with the built-in catalog.
pub fn build_graph(components: &ComponentSequence) -> ArchitectureGraph {
    Engine::builtin().build_graph(components)
}

/// Compose both documents with the built-in catalog.
pub fn compose(
    free_text: &str,
    focus: FocusCategory,
    components: &ComponentSequence,
    priorities: &PriorityVector,
) -> (Report, Report) {
    Engine::builtin().compose(free_text, focus, components, priorities)
}
