mod render;
mod session;

use chrono::Utc;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use session::Session;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use stratus_core::{
    ComponentSequence, FocusCategory, PriorityInput, PriorityVector, ReportKind,
};
use stratus_engine::{Engine, RunRequest};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `STRATUS_LOG=stratus_engine=debug`.
const LOG_ENV: &str = "STRATUS_LOG";

// --- Request types ---

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct RecommendRequest {
    /// Free-text description of the workload, e.g. "Healthcare system to store patient records with audit trails". Keywords in it add components.
    #[serde(default)]
    use_case: String,
    /// Focus category: "AI/ML", "Serverless", "Data Platform", "Zero Trust", "E-commerce", "Microservices" or "API Platform"
    focus: String,
    /// Non-functional priorities, each 0-10. Omitted fields default to latency 7, loadBalancing 6, costSensitivity 5, performance 7, security 8, scalability 8.
    #[serde(default)]
    priorities: PriorityInput,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct BuildGraphRequest {
    /// Ordered component labels, e.g. ["Amazon CloudFront", "API Gateway", "Amazon S3"]. Labels are matched exactly; later duplicates are dropped.
    components: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct ComposeRequest {
    /// Free-text use case, restated at the top of both documents
    #[serde(default)]
    use_case: String,
    /// Focus category name (see list_focus_categories)
    focus: String,
    /// Ordered component labels
    components: Vec<String>,
    /// Non-functional priorities, each 0-10. Omitted fields take the defaults.
    #[serde(default)]
    priorities: PriorityInput,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct GetReportRequest {
    /// "tutorial" for the build steps or "designDoc" for the technical design document
    kind: ReportKind,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct ExportRequest {
    /// Directory to write tutorial_build_steps.txt and technical_design_document.txt into. Created if missing.
    dir: String,
}

// --- Server ---

#[derive(Clone)]
pub struct StratusServer {
    tool_router: ToolRouter<Self>,
    engine: Arc<Engine>,
    session: Arc<Mutex<Session>>,
}

#[tool_router]
impl StratusServer {
    pub fn new(engine: Engine) -> Self {
        Self {
            tool_router: Self::tool_router(),
            engine: Arc::new(engine),
            session: Arc::new(Mutex::new(Session::default())),
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[tool(description = "List the focus categories with the base components each one starts from")]
    fn list_focus_categories(&self) -> Result<CallToolResult, McpError> {
        let lines: Vec<String> = FocusCategory::ALL
            .iter()
            .map(|&focus| {
                let base = self
                    .engine
                    .catalog()
                    .template(focus)
                    .map(|t| {
                        t.components
                            .iter()
                            .map(|l| l.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                format!("{focus}: {base}")
            })
            .collect();
        Ok(CallToolResult::success(vec![Content::text(lines.join("\n"))]))
    }

    #[tool(
        description = "Get the active catalog as JSON: thresholds per priority, component table (group and diagram role per label), base templates, keyword rules and threshold rules."
    )]
    fn get_catalog(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(pretty(
            self.engine.catalog(),
        ))]))
    }

    #[tool(
        description = "Run a full recommendation: select components, build the diagram and write the tutorial and design document. Becomes the current run for get_report and export_reports. Returns the advisor trace, the component list and the diagram (arrow chain and Mermaid)."
    )]
    fn recommend(
        &self,
        Parameters(req): Parameters<RecommendRequest>,
    ) -> Result<CallToolResult, McpError> {
        let focus = parse_focus(&req.focus)?;
        let priorities = match PriorityVector::try_from(req.priorities) {
            Ok(p) => p,
            Err(e) => return Ok(tool_error(e)),
        };
        let result = self.engine.run(&RunRequest {
            use_case: req.use_case,
            focus,
            priorities,
        });

        let mut session = self.session();
        let run_id = session.run_id();
        let run = session.store(result, Utc::now());
        Ok(CallToolResult::success(vec![Content::text(format!(
            "{}\nUse get_report for the tutorial or design document, export_reports to save both.",
            render::run_summary(run_id, run)
        ))]))
    }

    #[tool(
        description = "Select components only. Returns the ordered component labels as a JSON array. Does not change the current run."
    )]
    fn select_components(
        &self,
        Parameters(req): Parameters<RecommendRequest>,
    ) -> Result<CallToolResult, McpError> {
        let focus = parse_focus(&req.focus)?;
        let priorities = match PriorityVector::try_from(req.priorities) {
            Ok(p) => p,
            Err(e) => return Ok(tool_error(e)),
        };
        let components = self.engine.select(focus, &priorities, &req.use_case);
        Ok(CallToolResult::success(vec![Content::text(pretty(&components))]))
    }

    #[tool(
        description = "Build the architecture diagram for a component list. Returns the graph as JSON {nodes: [{id, label}], edges: [{source, target, kind}], entry} followed by Mermaid source."
    )]
    fn build_graph(
        &self,
        Parameters(req): Parameters<BuildGraphRequest>,
    ) -> Result<CallToolResult, McpError> {
        let components = match ComponentSequence::from_labels(req.components) {
            Ok(c) => c,
            Err(e) => return Ok(tool_error(e)),
        };
        let graph = self.engine.build_graph(&components);
        Ok(CallToolResult::success(vec![Content::text(format!(
            "{}\n\n```mermaid\n{}```",
            pretty(&graph),
            render::mermaid(&graph)
        ))]))
    }

    #[tool(
        description = "Write the tutorial and technical design document for a component list. Returns both texts, tutorial first. Does not change the current run."
    )]
    fn compose_reports(
        &self,
        Parameters(req): Parameters<ComposeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let focus = parse_focus(&req.focus)?;
        let inputs = PriorityVector::try_from(req.priorities)
            .and_then(|p| ComponentSequence::from_labels(req.components).map(|c| (p, c)));
        let (priorities, components) = match inputs {
            Ok(v) => v,
            Err(e) => return Ok(tool_error(e)),
        };
        let (tutorial, doc) = self
            .engine
            .compose(&req.use_case, focus, &components, &priorities);
        Ok(CallToolResult::success(vec![
            Content::text(tutorial.to_text()),
            Content::text(doc.to_text()),
        ]))
    }

    #[tool(description = "Get one document of the current run as plain text")]
    fn get_report(
        &self,
        Parameters(req): Parameters<GetReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.session().report(req.kind) {
            Some(report) => Ok(CallToolResult::success(vec![Content::text(report.to_text())])),
            None => Ok(tool_error(NO_RUN)),
        }
    }

    #[tool(description = "Save both documents of the current run to a directory")]
    fn export_reports(
        &self,
        Parameters(req): Parameters<ExportRequest>,
    ) -> Result<CallToolResult, McpError> {
        let guard = self.session();
        let Some(run) = guard.current() else {
            return Ok(tool_error(NO_RUN));
        };
        match session::export_reports(&PathBuf::from(&req.dir), run) {
            Ok(paths) => {
                let lines: Vec<String> = paths
                    .iter()
                    .map(|p| format!("Wrote {}", p.display()))
                    .collect();
                Ok(CallToolResult::success(vec![Content::text(lines.join("\n"))]))
            }
            Err(e) => Ok(tool_error(format!(
                "Failed to export reports to '{}': {}",
                req.dir, e
            ))),
        }
    }

    #[tool(description = "Start a new design: clear the current run")]
    fn reset(&self) -> Result<CallToolResult, McpError> {
        let run_id = self.session().reset();
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Started a new design (run {run_id}). Previous results cleared."
        ))]))
    }
}

#[tool_handler]
impl ServerHandler for StratusServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = format!(
            "{}\n\n## Selection rules\n{}",
            INSTRUCTIONS,
            self.engine.catalog().describe()
        );
        ServerInfo {
            instructions: Some(instructions.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// --- Helpers ---

const NO_RUN: &str = "No current run. Call recommend first.";

fn parse_focus(name: &str) -> Result<FocusCategory, McpError> {
    name.parse()
        .map_err(|e: stratus_core::Error| McpError::invalid_params(e.to_string(), None))
}

fn tool_error(e: impl Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(e.to_string())])
}

fn pretty<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("Serialization error: {}", e))
}

const INSTRUCTIONS: &str = r#"stratus recommends a cloud reference architecture from a focus category, six non-functional priorities (0-10) and a free-text use case.

## Workflow
1. Call `list_focus_categories` to pick a focus.
2. Call `recommend` with the focus, the use case and any priorities that differ from the defaults.
3. Read the advisor trace to see which rule added each component.
4. Call `get_report` with kind "tutorial" or "designDoc", or `export_reports` to save both.
5. Call `reset` before starting an unrelated design.

`select_components`, `build_graph` and `compose_reports` run one stage on its own, e.g. to re-draw a hand-edited component list. Component labels are matched exactly."#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Handle `stratus-mcp init` subcommand
    if std::env::args().nth(1).as_deref() == Some("init") {
        return init_catalog();
    }

    let catalog = stratus_core::load_catalog()
        .inspect_err(|e| tracing::error!(error = %e, "refusing to start"))?;
    let engine = Engine::new(catalog)?;
    tracing::info!("serving on stdio");

    let service = StratusServer::new(engine)
        .serve(rmcp::transport::io::stdio())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "MCP server error"))?;
    service.waiting().await?;
    Ok(())
}

/// Log to stderr; stdout carries the protocol.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

/// Write the built-in catalog where `load_catalog` looks, so it can be edited.
fn init_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let path = stratus_core::catalog_path();
    if path.exists() {
        eprintln!("{} already exists; remove it first to start over.", path.display());
        std::process::exit(1);
    }
    stratus_core::write_catalog(&path, &stratus_core::Catalog::builtin())?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}
