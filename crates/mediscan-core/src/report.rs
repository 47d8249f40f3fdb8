//! Report-upload view state.

use std::path::Path;

use serde::Serialize;

use mediscan_contracts::{
    analysis::{AnalysisPhase, ExtractionReport, SelectedFile, StatusCounts},
    error::{MediscanError, MediscanResult},
};

use mediscan_sample::reports::ACCEPTED_EXTENSIONS;

use crate::{analyzer::Analyzer, scheduler::TaskId};

/// The selected file and its analyzer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportUpload {
    file: Option<SelectedFile>,
    analyzer: Analyzer<ExtractionReport>,
}

impl ReportUpload {
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.analyzer.phase()
    }

    pub fn result(&self) -> Option<&ExtractionReport> {
        self.analyzer.result()
    }

    /// Status tally of the revealed rows.
    pub fn summary(&self) -> Option<StatusCounts> {
        self.result().map(ExtractionReport::counts)
    }

    /// Store the file reference and hide any earlier results. Returns an
    /// in-flight analysis task that should be cancelled.
    pub fn select_file(&mut self, file: SelectedFile) -> Option<TaskId> {
        self.file = Some(file);
        self.analyzer.reset()
    }

    /// Back to the pre-upload state. Returns an in-flight analysis task that
    /// should be cancelled.
    pub fn remove_file(&mut self) -> Option<TaskId> {
        self.file = None;
        self.analyzer.reset()
    }

    pub fn can_analyze(&self) -> bool {
        self.file.is_some() && self.analyzer.is_idle()
    }

    pub fn begin_analysis(&mut self, task: TaskId) -> bool {
        self.can_analyze() && self.analyzer.begin(task)
    }

    pub fn complete_analysis(&mut self, report: ExtractionReport) -> bool {
        self.analyzer.complete(report)
    }
}

/// Build a `SelectedFile` from the metadata of `path`. The contents are never
/// opened. Only PDF, JPEG and PNG reports are accepted, judged by extension.
pub fn pick_file(path: &Path) -> MediscanResult<SelectedFile> {
    let unavailable = |reason: String| MediscanError::FileUnavailable {
        path: path.display().to_string(),
        reason,
    };

    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)));
    if !accepted {
        return Err(unavailable("unsupported file type".to_string()));
    }

    let meta = std::fs::metadata(path).map_err(|e| unavailable(e.to_string()))?;
    if !meta.is_file() {
        return Err(unavailable("not a regular file".to_string()));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| unavailable("path has no file name".to_string()))?;

    Ok(SelectedFile::new(name, meta.len()))
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::scheduler::Scheduler;

    fn extraction() -> ExtractionReport {
        ExtractionReport {
            rows: Vec::new(),
            insights: Vec::new(),
        }
    }

    #[test]
    fn analysis_requires_a_file() {
        let mut r = ReportUpload::default();
        let mut sched = Scheduler::new();
        let t = sched.schedule(Instant::now(), Duration::from_secs(1), ());
        assert!(!r.can_analyze());
        assert!(!r.begin_analysis(t));
        assert_eq!(r.phase(), AnalysisPhase::Idle);
    }

    #[test]
    fn selecting_a_new_file_hides_previous_results() {
        let mut r = ReportUpload::default();
        let mut sched = Scheduler::new();
        r.select_file(SelectedFile::new("a.pdf", 10));
        r.begin_analysis(sched.schedule(Instant::now(), Duration::from_secs(1), ()));
        r.complete_analysis(extraction());
        assert!(r.result().is_some());

        assert_eq!(r.select_file(SelectedFile::new("b.pdf", 20)), None);
        assert!(r.result().is_none());
        assert_eq!(r.phase(), AnalysisPhase::Idle);
        assert_eq!(r.file().map(|f| f.name.as_str()), Some("b.pdf"));
    }

    #[test]
    fn removing_mid_analysis_returns_the_task() {
        let mut r = ReportUpload::default();
        let mut sched = Scheduler::new();
        let t = sched.schedule(Instant::now(), Duration::from_secs(1), ());
        r.select_file(SelectedFile::new("a.pdf", 10));
        r.begin_analysis(t);

        assert_eq!(r.remove_file(), Some(t));
        assert!(r.file().is_none());
        assert_eq!(r.phase(), AnalysisPhase::Idle);
    }

    #[test]
    fn pick_file_reads_name_and_size() {
        let dir = std::env::temp_dir().join(format!("mediscan-pick-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("lab-results.pdf");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let picked = pick_file(&path).unwrap();
        assert_eq!(picked, SelectedFile::new("lab-results.pdf", 2048));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn pick_file_rejects_missing_paths_and_directories() {
        let err = pick_file(Path::new("/nonexistent/report.pdf")).unwrap_err();
        assert!(matches!(err, MediscanError::FileUnavailable { .. }));

        let dir = std::env::temp_dir().join(format!("mediscan-dir-{}.pdf", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let err = pick_file(&dir).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn pick_file_accepts_only_report_extensions() {
        let dir = std::env::temp_dir().join(format!("mediscan-ext-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let notes = dir.join("notes.txt");
        std::fs::write(&notes, b"notes").unwrap();
        let scan = dir.join("SCAN.PNG");
        std::fs::write(&scan, b"png").unwrap();

        let err = pick_file(&notes).unwrap_err();
        assert!(matches!(err, MediscanError::FileUnavailable { .. }));
        assert!(err.to_string().contains("unsupported file type"));
        assert_eq!(pick_file(&scan).unwrap(), SelectedFile::new("SCAN.PNG", 3));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
