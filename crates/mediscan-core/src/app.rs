//! The application context.
//!
//! `App` owns the navigation shell, every view's state, the delayed-task
//! scheduler, and a `Clock`. Front ends call its operations in response to
//! input and call `advance` whenever time may have passed; `advance` applies
//! every delayed task that has come due.
//!
//! ```rust,ignore
//! let mut app = App::new(MediscanConfig::default(), 1280);
//! app.submit_login();
//! app.send_chat("hello");
//! // ...two seconds later...
//! app.advance();
//! ```

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use mediscan_contracts::{
    analysis::SelectedFile,
    chat::ChatMessage,
    page::{LayoutMode, Page, View},
};
use mediscan_sample::{chat as sample_chat, reports, symptoms};

use crate::{
    chat::ChatLog,
    config::MediscanConfig,
    login::LoginForm,
    report::ReportUpload,
    scheduler::Scheduler,
    settings::SettingsForm,
    shell::Shell,
    symptom::SymptomCheck,
    traits::{Clock, SystemClock},
};

/// What a delayed task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    SymptomAnalysisComplete,
    ReportAnalysisComplete,
    AssistantReply,
    VoiceCaptureComplete,
}

pub struct App<C: Clock = SystemClock> {
    clock: C,
    config: MediscanConfig,
    shell: Shell,
    login: LoginForm,
    symptom: SymptomCheck,
    report: ReportUpload,
    chat: ChatLog,
    settings: SettingsForm,
    timers: Scheduler<TimerEvent>,
}

impl App<SystemClock> {
    /// An app on the real clock, laid out for a viewport `width_px` wide.
    pub fn new(config: MediscanConfig, width_px: u32) -> Self {
        Self::with_clock(config, width_px, SystemClock)
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(config: MediscanConfig, width_px: u32, clock: C) -> Self {
        let shell = Shell::new(width_px, config.layout.sidebar_min_width_px);
        Self {
            clock,
            config,
            shell,
            login: LoginForm::default(),
            symptom: SymptomCheck::default(),
            report: ReportUpload::default(),
            chat: ChatLog::new(sample_chat::seed_transcript()),
            settings: SettingsForm::default(),
            timers: Scheduler::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &MediscanConfig {
        &self.config
    }

    // ── Shell ────────────────────────────────────────────────────────────────

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut Shell {
        &mut self.shell
    }

    pub fn view(&self) -> View {
        self.shell.visible_view()
    }

    pub fn navigate(&mut self, page: Page) {
        self.shell.navigate(page);
    }

    // ── Login ────────────────────────────────────────────────────────────────

    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn submit_login(&mut self) -> bool {
        self.login.submit(&mut self.shell)
    }

    // ── Symptom check ────────────────────────────────────────────────────────

    pub fn symptom(&self) -> &SymptomCheck {
        &self.symptom
    }

    pub fn set_symptom_text(&mut self, text: impl Into<String>) {
        self.symptom.set_text(text);
    }

    /// Start a symptom analysis. No-op on empty text or unless idle.
    pub fn analyze_symptoms(&mut self) -> bool {
        if !self.symptom.can_analyze() {
            return false;
        }
        let task = self.timers.schedule(
            self.clock.now(),
            self.config.timing.symptom_analysis(),
            TimerEvent::SymptomAnalysisComplete,
        );
        let started = self.symptom.begin_analysis(task);
        info!(chars = self.symptom.text().chars().count(), "symptom analysis started");
        started
    }

    /// Start or stop the simulated voice capture. Returns whether the view is
    /// listening afterwards.
    pub fn toggle_voice_input(&mut self) -> bool {
        if let Some(task) = self.symptom.stop_listening() {
            self.timers.cancel(task);
            debug!("voice capture stopped");
            return false;
        }
        let task = self.timers.schedule(
            self.clock.now(),
            self.config.timing.voice_capture(),
            TimerEvent::VoiceCaptureComplete,
        );
        self.symptom.start_listening(task);
        debug!("voice capture started");
        true
    }

    // ── Report upload ────────────────────────────────────────────────────────

    pub fn report(&self) -> &ReportUpload {
        &self.report
    }

    pub fn select_report_file(&mut self, file: SelectedFile) {
        info!(name = %file.name, size_bytes = file.size_bytes, "report file selected");
        if let Some(task) = self.report.select_file(file) {
            self.timers.cancel(task);
        }
    }

    pub fn remove_report_file(&mut self) {
        if let Some(task) = self.report.remove_file() {
            self.timers.cancel(task);
        }
        debug!("report file removed");
    }

    /// Start a report analysis. No-op without a file or unless idle.
    pub fn analyze_report(&mut self) -> bool {
        if !self.report.can_analyze() {
            return false;
        }
        let task = self.timers.schedule(
            self.clock.now(),
            self.config.timing.report_analysis(),
            TimerEvent::ReportAnalysisComplete,
        );
        let started = self.report.begin_analysis(task);
        info!("report analysis started");
        started
    }

    // ── Chat ─────────────────────────────────────────────────────────────────

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatLog {
        &mut self.chat
    }

    /// Append a user message and schedule the one assistant reply it earns.
    /// Blank text changes nothing.
    pub fn send_chat(&mut self, text: &str) -> bool {
        let Some(id) = self.chat.push_user(text, self.clock.local_time()) else {
            return false;
        };
        self.timers.schedule(
            self.clock.now(),
            self.config.timing.chat_reply(),
            TimerEvent::AssistantReply,
        );
        info!(message_id = id, "chat message sent");
        true
    }

    /// Send whatever is in the compose box. Blank drafts are left in place.
    pub fn submit_chat_draft(&mut self) -> bool {
        if self.chat.draft().trim().is_empty() {
            return false;
        }
        let draft = self.chat.take_draft();
        self.send_chat(&draft)
    }

    /// Prefill the compose box with quick suggestion `index`.
    pub fn apply_chat_suggestion(&mut self, index: usize) -> bool {
        match sample_chat::QUICK_SUGGESTIONS.get(index) {
            Some((_, text)) => {
                self.chat.set_draft(*text);
                true
            }
            None => false,
        }
    }

    // ── Settings ─────────────────────────────────────────────────────────────

    pub fn settings(&self) -> &SettingsForm {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsForm {
        &mut self.settings
    }

    // ── Delayed tasks ────────────────────────────────────────────────────────

    /// Apply every delayed task due by now. Returns how many fired.
    pub fn advance(&mut self) -> usize {
        let due = self.timers.drain_due(self.clock.now());
        let fired = due.len();
        for event in due {
            self.apply(event);
        }
        fired
    }

    fn apply(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::SymptomAnalysisComplete => {
                if self.symptom.complete_analysis(symptoms::analysis_result()) {
                    info!("symptom analysis complete");
                }
            }
            TimerEvent::ReportAnalysisComplete => {
                if self.report.complete_analysis(reports::extraction_result()) {
                    info!("report analysis complete");
                }
            }
            TimerEvent::AssistantReply => {
                let id = self
                    .chat
                    .push_assistant(sample_chat::ASSISTANT_REPLY, self.clock.local_time());
                info!(message_id = id, "assistant replied");
            }
            TimerEvent::VoiceCaptureComplete => {
                if self.symptom.finish_listening(symptoms::VOICE_TRANSCRIPT) {
                    debug!("voice capture complete");
                }
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    /// A serializable picture of the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            view: self.view(),
            layout: self.shell.layout(),
            width_px: self.shell.width_px(),
            login: &self.login,
            symptom: &self.symptom,
            report: &self.report,
            chat: self.chat.messages(),
            settings: &self.settings,
            pending_tasks: self.timers.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub view: View,
    pub layout: LayoutMode,
    pub width_px: u32,
    pub login: &'a LoginForm,
    pub symptom: &'a SymptomCheck,
    pub report: &'a ReportUpload,
    pub chat: &'a [ChatMessage],
    pub settings: &'a SettingsForm,
    pub pending_tasks: usize,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::traits::ManualClock;
    use mediscan_contracts::{analysis::AnalysisPhase, chat::Sender};

    fn app() -> App<ManualClock> {
        let mut app = App::with_clock(MediscanConfig::default(), 1280, ManualClock::new());
        app.submit_login();
        app
    }

    fn wait(app: &mut App<ManualClock>, ms: u64) -> usize {
        app.clock().advance(Duration::from_millis(ms));
        app.advance()
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    #[test]
    fn starts_on_login_and_lands_on_overview() {
        let mut app = App::with_clock(MediscanConfig::default(), 1280, ManualClock::new());
        assert_eq!(app.view(), View::Login);
        assert!(app.submit_login());
        assert_eq!(app.view(), View::Page(Page::Overview));
        assert!(!app.submit_login());
    }

    #[test]
    fn resize_below_threshold_keeps_the_page() {
        let mut app = app();
        app.navigate(Page::Chat);
        app.shell_mut().resize(640);
        assert_eq!(app.shell().layout(), LayoutMode::Overlay);
        assert_eq!(app.view(), View::Page(Page::Chat));
    }

    #[test]
    fn layout_threshold_comes_from_config() {
        let mut config = MediscanConfig::default();
        config.layout.sidebar_min_width_px = 1400;
        let app = App::with_clock(config, 1280, ManualClock::new());
        assert_eq!(app.shell().layout(), LayoutMode::Overlay);
    }

    // ── Chat ─────────────────────────────────────────────────────────────────

    #[test]
    fn blank_chat_send_changes_nothing() {
        let mut app = app();
        let before = app.chat().len();
        assert!(!app.send_chat(""));
        assert!(!app.send_chat("   "));
        assert_eq!(app.chat().len(), before);
        assert_eq!(app.pending_tasks(), 0);
    }

    #[test]
    fn hello_adds_user_message_then_one_reply() {
        let mut app = app();
        let before = app.chat().len();

        assert!(app.send_chat("hello"));
        assert_eq!(app.chat().len(), before + 1);
        let sent = app.chat().messages().last().unwrap();
        assert_eq!(sent.sender, Sender::User);
        assert_eq!(sent.body, "hello");

        assert_eq!(wait(&mut app, 1999), 0);
        assert_eq!(app.chat().len(), before + 1);

        assert_eq!(wait(&mut app, 1), 1);
        assert_eq!(app.chat().len(), before + 2);
        let reply = app.chat().messages().last().unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.body, sample_chat::ASSISTANT_REPLY);

        assert_eq!(wait(&mut app, 10_000), 0);
        assert_eq!(app.chat().len(), before + 2);
    }

    #[test]
    fn rapid_sends_each_get_a_reply_in_order() {
        let mut app = app();
        let before = app.chat().len();
        app.send_chat("one");
        app.clock().advance(Duration::from_millis(100));
        app.send_chat("two");

        wait(&mut app, 5000);
        let tail: Vec<Sender> = app.chat().messages()[before..]
            .iter()
            .map(|m| m.sender)
            .collect();
        assert_eq!(
            tail,
            vec![Sender::User, Sender::User, Sender::Assistant, Sender::Assistant]
        );
    }

    #[test]
    fn replies_keep_arriving_after_navigating_away() {
        let mut app = app();
        app.navigate(Page::Chat);
        let before = app.chat().len();
        app.send_chat("hello");
        app.navigate(Page::Settings);
        wait(&mut app, 2000);
        assert_eq!(app.chat().len(), before + 2);
    }

    #[test]
    fn suggestion_then_submit_sends_the_draft() {
        let mut app = app();
        assert!(app.apply_chat_suggestion(2));
        assert_eq!(app.chat().draft(), "Schedule an appointment");
        assert!(app.submit_chat_draft());
        assert_eq!(app.chat().draft(), "");
        assert_eq!(
            app.chat().messages().last().map(|m| m.body.as_str()),
            Some("Schedule an appointment")
        );
        assert!(!app.apply_chat_suggestion(9));
    }

    // ── Symptom check ────────────────────────────────────────────────────────

    #[test]
    fn empty_symptoms_do_not_start_analysis() {
        let mut app = app();
        assert!(!app.analyze_symptoms());
        assert_eq!(app.symptom().phase(), AnalysisPhase::Idle);
        assert_eq!(app.pending_tasks(), 0);
    }

    #[test]
    fn symptom_analysis_walks_idle_analyzing_done() {
        let mut app = app();
        app.set_symptom_text("headache");
        assert!(app.analyze_symptoms());
        assert_eq!(app.symptom().phase(), AnalysisPhase::Analyzing);

        wait(&mut app, 1000);
        assert_eq!(app.symptom().phase(), AnalysisPhase::Analyzing);

        wait(&mut app, 1000);
        assert_eq!(app.symptom().phase(), AnalysisPhase::Done);
        assert_eq!(app.symptom().result().map(|r| r.conditions.len()), Some(3));
    }

    #[test]
    fn symptom_payload_ignores_the_text() {
        let run = |text: &str| {
            let mut app = app();
            app.set_symptom_text(text);
            app.analyze_symptoms();
            wait(&mut app, 2000);
            app.symptom().result().cloned()
        };
        let a = run("headache");
        let b = run("xyz123");
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn done_symptom_analysis_cannot_be_rerun() {
        let mut app = app();
        app.set_symptom_text("cough");
        app.analyze_symptoms();
        wait(&mut app, 2000);
        assert!(!app.analyze_symptoms());
        assert_eq!(app.pending_tasks(), 0);
    }

    #[test]
    fn voice_capture_fills_the_text() {
        let mut app = app();
        assert!(app.toggle_voice_input());
        assert!(app.symptom().is_listening());

        wait(&mut app, 3000);
        assert!(!app.symptom().is_listening());
        assert_eq!(app.symptom().text(), symptoms::VOICE_TRANSCRIPT);
    }

    #[test]
    fn stopping_voice_capture_cancels_it() {
        let mut app = app();
        app.set_symptom_text("typed");
        app.toggle_voice_input();
        assert!(!app.toggle_voice_input());
        assert_eq!(app.pending_tasks(), 0);

        wait(&mut app, 3000);
        assert_eq!(app.symptom().text(), "typed");
    }

    // ── Report upload ────────────────────────────────────────────────────────

    #[test]
    fn report_analysis_needs_a_file() {
        let mut app = app();
        assert!(!app.analyze_report());
        assert_eq!(app.report().phase(), AnalysisPhase::Idle);
    }

    #[test]
    fn report_analysis_reveals_the_table() {
        let mut app = app();
        app.select_report_file(SelectedFile::new("blood-test.pdf", 524_288));
        assert_eq!(app.report().file().map(|f| f.size_bytes), Some(524_288));
        assert!(app.analyze_report());

        wait(&mut app, 2499);
        assert_eq!(app.report().phase(), AnalysisPhase::Analyzing);
        wait(&mut app, 1);
        assert_eq!(app.report().phase(), AnalysisPhase::Done);

        let summary = app.report().summary().unwrap();
        assert_eq!((summary.normal, summary.high, summary.total), (6, 2, 8));
    }

    #[test]
    fn removing_the_file_resets_and_clears_results() {
        let mut app = app();
        app.select_report_file(SelectedFile::new("scan.png", 1024));
        app.analyze_report();
        wait(&mut app, 2500);
        assert!(app.report().result().is_some());

        app.remove_report_file();
        assert!(app.report().file().is_none());
        assert!(app.report().result().is_none());
        assert_eq!(app.report().phase(), AnalysisPhase::Idle);
    }

    #[test]
    fn removing_mid_analysis_cancels_the_pending_task() {
        let mut app = app();
        app.select_report_file(SelectedFile::new("scan.png", 1024));
        app.analyze_report();
        app.remove_report_file();
        assert_eq!(app.pending_tasks(), 0);

        app.select_report_file(SelectedFile::new("scan2.png", 2048));
        wait(&mut app, 5000);
        assert_eq!(app.report().phase(), AnalysisPhase::Idle);
    }

    // ── Snapshot ─────────────────────────────────────────────────────────────

    #[test]
    fn snapshot_reports_pending_tasks_and_view() {
        let mut app = app();
        app.navigate(Page::Chat);
        app.send_chat("hi");
        let snap = app.snapshot();
        assert_eq!(snap.view, View::Page(Page::Chat));
        assert_eq!(snap.pending_tasks, 1);
        assert_eq!(snap.chat.len(), app.chat().len());
    }
}
