use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use stratus_core::{Report, ReportKind};
use stratus_engine::RunResult;

/// The shell's in-memory design state: the latest run of the current design.
#[derive(Debug)]
pub struct Session {
    run_id: u64,
    current: Option<RunResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            run_id: 1,
            current: None,
        }
    }
}

impl Session {
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    pub fn current(&self) -> Option<&RunResult> {
        self.current.as_ref()
    }

    /// Keep `result` as the current run, stamping both reports with `at`.
    pub fn store(&mut self, mut result: RunResult, at: DateTime<Utc>) -> &RunResult {
        result.tutorial = result.tutorial.stamped(at);
        result.design_doc = result.design_doc.stamped(at);
        self.current.insert(result)
    }

    /// Start a new design. Returns the new run id.
    pub fn reset(&mut self) -> u64 {
        self.current = None;
        self.run_id += 1;
        tracing::info!(run_id = self.run_id, "session reset");
        self.run_id
    }

    pub fn report(&self, kind: ReportKind) -> Option<&Report> {
        self.current.as_ref().map(|run| match kind {
            ReportKind::Tutorial => &run.tutorial,
            ReportKind::DesignDoc => &run.design_doc,
        })
    }
}

/// Write both documents of a run into `dir` under their download names.
pub fn export_reports(dir: &Path, run: &RunResult) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(2);
    for report in [&run.tutorial, &run.design_doc] {
        let path = dir.join(report.file_name());
        let tmp = path.with_extension("txt.tmp");
        fs::write(&tmp, report.to_text())?;
        fs::rename(&tmp, &path)?;
        tracing::info!(path = %path.display(), "exported report");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stratus_core::{FocusCategory, PriorityVector};
    use stratus_engine::{Engine, RunRequest};

    fn sample_run() -> RunResult {
        Engine::builtin().run(&RunRequest {
            use_case: "Order history dashboard".into(),
            focus: FocusCategory::ECommerce,
            priorities: PriorityVector::default(),
        })
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap()
    }

    #[test]
    fn store_stamps_reports_and_reset_clears() {
        let mut session = Session::default();
        assert_eq!(session.run_id(), 1);
        assert!(session.report(ReportKind::Tutorial).is_none());

        session.store(sample_run(), at());
        let doc = session.report(ReportKind::DesignDoc).unwrap();
        assert_eq!(doc.generated_at(), Some(at()));
        assert_eq!(session.run_id(), 1);

        assert_eq!(session.reset(), 2);
        assert!(session.current().is_none());
    }

    #[test]
    fn store_replaces_the_previous_run() {
        let mut session = Session::default();
        session.store(sample_run(), at());
        let mut second = sample_run();
        second.use_case = "second".into();
        session.store(second, at());
        assert_eq!(session.current().unwrap().use_case, "second");
    }

    #[test]
    fn export_writes_stamped_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::default();
        let run = session.store(sample_run(), at());
        let written = export_reports(&dir.path().join("out"), run).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["tutorial_build_steps.txt", "technical_design_document.txt"]
        );
        let text = fs::read_to_string(&written[1]).unwrap();
        assert!(text.starts_with("# Technical Design Document (TDD)\n\nGenerated: 2026-03-04T05:06:07Z\n"));
        assert!(text.contains("## Non-functional Priorities"));
    }
}
