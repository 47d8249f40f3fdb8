//! Symptom-check view state.

use serde::Serialize;

use mediscan_contracts::analysis::{AnalysisPhase, SymptomReport};

use crate::{analyzer::Analyzer, scheduler::TaskId};

/// The symptom text, its analyzer, and the simulated voice capture.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SymptomCheck {
    text: String,
    analyzer: Analyzer<SymptomReport>,
    #[serde(skip)]
    voice_capture: Option<TaskId>,
}

impl SymptomCheck {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.analyzer.phase()
    }

    pub fn result(&self) -> Option<&SymptomReport> {
        self.analyzer.result()
    }

    /// Replace the text. Ignored while voice capture holds the input.
    ///
    /// Clearing the text discards any shown result and returns the view to
    /// Idle, unless an analysis is in flight.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if self.is_listening() {
            return;
        }
        self.text = text.into();
        if self.text.is_empty() && !self.analyzer.is_analyzing() {
            self.analyzer.reset();
        }
    }

    /// Whether `begin_analysis` would succeed.
    pub fn can_analyze(&self) -> bool {
        !self.text.is_empty() && self.analyzer.is_idle()
    }

    pub fn begin_analysis(&mut self, task: TaskId) -> bool {
        self.can_analyze() && self.analyzer.begin(task)
    }

    pub fn complete_analysis(&mut self, report: SymptomReport) -> bool {
        self.analyzer.complete(report)
    }

    pub fn is_listening(&self) -> bool {
        self.voice_capture.is_some()
    }

    /// Lock the input while `task` captures speech.
    pub fn start_listening(&mut self, task: TaskId) {
        self.voice_capture = Some(task);
    }

    /// Unlock the input. Returns the capture task that should be cancelled.
    pub fn stop_listening(&mut self) -> Option<TaskId> {
        self.voice_capture.take()
    }

    /// The capture finished: unlock the input and use `transcript` as the text.
    pub fn finish_listening(&mut self, transcript: &str) -> bool {
        if self.voice_capture.take().is_none() {
            return false;
        }
        self.set_text(transcript);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::scheduler::Scheduler;

    fn report() -> SymptomReport {
        SymptomReport {
            conditions: Vec::new(),
            recommendations: vec!["rest".to_string()],
        }
    }

    fn task(sched: &mut Scheduler<()>) -> TaskId {
        sched.schedule(Instant::now(), Duration::from_secs(1), ())
    }

    #[test]
    fn empty_text_cannot_be_analyzed() {
        let mut s = SymptomCheck::default();
        let mut sched = Scheduler::new();
        assert!(!s.begin_analysis(task(&mut sched)));
        assert_eq!(s.phase(), AnalysisPhase::Idle);
    }

    #[test]
    fn clearing_text_after_done_returns_to_idle() {
        let mut s = SymptomCheck::default();
        let mut sched = Scheduler::new();
        s.set_text("headache");
        s.begin_analysis(task(&mut sched));
        s.complete_analysis(report());
        assert_eq!(s.phase(), AnalysisPhase::Done);

        s.set_text("");
        assert_eq!(s.phase(), AnalysisPhase::Idle);
        assert!(s.result().is_none());
    }

    #[test]
    fn clearing_text_mid_analysis_keeps_it_running() {
        let mut s = SymptomCheck::default();
        let mut sched = Scheduler::new();
        s.set_text("headache");
        s.begin_analysis(task(&mut sched));
        s.set_text("");
        assert_eq!(s.phase(), AnalysisPhase::Analyzing);
    }

    #[test]
    fn text_is_locked_while_listening() {
        let mut s = SymptomCheck::default();
        let mut sched = Scheduler::new();
        s.set_text("typed");
        s.start_listening(task(&mut sched));
        s.set_text("ignored");
        assert_eq!(s.text(), "typed");

        assert!(s.finish_listening("spoken"));
        assert!(!s.is_listening());
        assert_eq!(s.text(), "spoken");
    }

    #[test]
    fn finish_without_listening_is_ignored() {
        let mut s = SymptomCheck::default();
        assert!(!s.finish_listening("spoken"));
        assert_eq!(s.text(), "");
    }
}
