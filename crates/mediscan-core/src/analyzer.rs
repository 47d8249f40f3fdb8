//! The idle → analyzing → done state machine shared by the symptom-check and
//! report-upload views.
//!
//! There are exactly two transitions. `begin` leaves Idle when the owning view
//! has checked its input, and `complete` leaves Analyzing when the delayed task
//! fires. Neither can fail, nothing is retried, and Done is only left through
//! `reset` when the input is discarded.

use serde::Serialize;

use mediscan_contracts::analysis::AnalysisPhase;

use crate::scheduler::TaskId;

#[derive(Debug, Clone, Serialize)]
pub struct Analyzer<P> {
    phase: AnalysisPhase,
    result: Option<P>,
    #[serde(skip)]
    task: Option<TaskId>,
}

impl<P> Default for Analyzer<P> {
    fn default() -> Self {
        Self {
            phase: AnalysisPhase::Idle,
            result: None,
            task: None,
        }
    }
}

impl<P> Analyzer<P> {
    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == AnalysisPhase::Idle
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase == AnalysisPhase::Analyzing
    }

    /// The payload, present only once the analysis is done.
    pub fn result(&self) -> Option<&P> {
        self.result.as_ref()
    }

    /// Idle → Analyzing, remembering the delayed task that will complete it.
    /// Returns false (and changes nothing) from any other phase.
    pub fn begin(&mut self, task: TaskId) -> bool {
        if self.phase != AnalysisPhase::Idle {
            return false;
        }
        self.phase = AnalysisPhase::Analyzing;
        self.task = Some(task);
        true
    }

    /// Analyzing → Done, revealing `payload`. Ignored in any other phase.
    pub fn complete(&mut self, payload: P) -> bool {
        if self.phase != AnalysisPhase::Analyzing {
            return false;
        }
        self.phase = AnalysisPhase::Done;
        self.result = Some(payload);
        self.task = None;
        true
    }

    /// Back to Idle, dropping any payload. Returns the in-flight task, if any,
    /// so the caller can cancel it.
    pub fn reset(&mut self) -> Option<TaskId> {
        self.phase = AnalysisPhase::Idle;
        self.result = None;
        self.task.take()
    }
}
