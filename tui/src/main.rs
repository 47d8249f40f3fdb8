//! MediScan Health Assistant — interactive Ratatui TUI
//!
//! Layout (wide terminal):
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  MediScan AI · <page>                                               │
//!   ├─── sidebar ───┬─── page ────────────────────────────────────────────┤
//!   │  Dashboard    │                                                     │
//!   │  Symptom ...  │  the selected view                                  │
//!   │  ...          │                                                     │
//!   ├───────────────┴─────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! Below the sidebar threshold the sidebar collapses into an overlay menu
//! toggled with [m].

mod ui;

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
    time::{Duration, Instant},
};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use mediscan_contracts::{
    error::{MediscanError, MediscanResult},
    page::{Page, View},
};
use mediscan_core::{
    login::LoginField,
    report::pick_file,
    settings::{ProfileField, Toggle},
    App, MediscanConfig,
};

/// Approximate width of one terminal cell, used to express the terminal width
/// as a viewport width in pixels.
const CELL_WIDTH_PX: u32 = 8;

/// Upper bound on how long the loop sleeps waiting for input, so spinners keep
/// turning while nothing is due.
const TICK_MS: u64 = 150;

// ── CLI definition ────────────────────────────────────────────────────────────

/// MediScan — mock AI health assistant in the terminal.
#[derive(Parser)]
#[command(name = "mediscan-tui", about = "MediScan health assistant TUI")]
struct Cli {
    /// TOML file overriding delays and the sidebar width threshold.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs here (RUST_LOG controls the level). Logging is off otherwise.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── Front-end state ───────────────────────────────────────────────────────────

/// Which text field keystrokes currently go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditTarget {
    Symptoms,
    ChatDraft,
    Profile(ProfileField),
    FilePath,
}

/// A row of the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsRow {
    Field(ProfileField),
    Toggle(Toggle),
    Language,
    Timezone,
}

impl SettingsRow {
    fn all() -> Vec<SettingsRow> {
        ProfileField::ALL
            .into_iter()
            .map(SettingsRow::Field)
            .chain(Toggle::ALL.into_iter().map(SettingsRow::Toggle))
            .chain([SettingsRow::Language, SettingsRow::Timezone])
            .collect()
    }
}

/// The core `App` plus what only the terminal needs: focus, cursor rows, the
/// file-path prompt, and a transient status line.
struct Tui {
    app: App,
    editing: Option<EditTarget>,
    login_row: usize,
    settings_row: usize,
    path_input: String,
    status: Option<String>,
    tick: u64,
}

impl Tui {
    fn new(app: App) -> Self {
        Self {
            app,
            editing: None,
            login_row: 0,
            settings_row: 0,
            path_input: String::new(),
            status: None,
            tick: 0,
        }
    }

    fn settings_rows(&self) -> Vec<SettingsRow> {
        SettingsRow::all()
    }

    fn selected_login_field(&self) -> LoginField {
        let fields = self.app.login().fields();
        fields[self.login_row.min(fields.len() - 1)]
    }

    /// Returns false when the user asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match self.app.view() {
            View::Login => {
                self.handle_login_key(key);
                true
            }
            View::Page(page) => {
                if let Some(target) = self.editing {
                    self.handle_edit_key(target, key);
                    true
                } else {
                    self.handle_page_key(page, key)
                }
            }
        }
    }

    // ── Login ────────────────────────────────────────────────────────────────

    fn handle_login_key(&mut self, key: KeyEvent) {
        let field_count = self.app.login().fields().len();
        match key.code {
            KeyCode::Enter => {
                self.app.submit_login();
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.login_row = (self.login_row + field_count - 1) % field_count;
            }
            KeyCode::Down | KeyCode::Tab => {
                self.login_row = (self.login_row + 1) % field_count;
            }
            KeyCode::F(2) => {
                self.app.login_mut().toggle_mode();
                self.login_row = 0;
            }
            KeyCode::Backspace => {
                let field = self.selected_login_field();
                let mut value = self.app.login().field(field).to_string();
                value.pop();
                self.app.login_mut().set_field(field, value);
            }
            KeyCode::Char(c) => {
                let field = self.selected_login_field();
                let mut value = self.app.login().field(field).to_string();
                value.push(c);
                self.app.login_mut().set_field(field, value);
            }
            _ => {}
        }
    }

    // ── Text editing ─────────────────────────────────────────────────────────

    fn edit_buffer(&self, target: EditTarget) -> String {
        match target {
            EditTarget::Symptoms => self.app.symptom().text().to_string(),
            EditTarget::ChatDraft => self.app.chat().draft().to_string(),
            EditTarget::Profile(field) => self.app.settings().field(field).to_string(),
            EditTarget::FilePath => self.path_input.clone(),
        }
    }

    fn store_buffer(&mut self, target: EditTarget, value: String) {
        match target {
            EditTarget::Symptoms => self.app.set_symptom_text(value),
            EditTarget::ChatDraft => self.app.chat_mut().set_draft(value),
            EditTarget::Profile(field) => self.app.settings_mut().set_field(field, value),
            EditTarget::FilePath => self.path_input = value,
        }
    }

    fn handle_edit_key(&mut self, target: EditTarget, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if target == EditTarget::FilePath {
                    self.path_input.clear();
                }
                self.editing = None;
            }
            KeyCode::Enter => self.commit_edit(target),
            KeyCode::Backspace => {
                let mut value = self.edit_buffer(target);
                value.pop();
                self.store_buffer(target, value);
            }
            KeyCode::Char(c) => {
                let mut value = self.edit_buffer(target);
                value.push(c);
                self.store_buffer(target, value);
            }
            _ => {}
        }
    }

    fn commit_edit(&mut self, target: EditTarget) {
        match target {
            EditTarget::ChatDraft => {
                // The compose box stays focused for the next message.
                self.app.submit_chat_draft();
            }
            EditTarget::FilePath => {
                let path = PathBuf::from(self.path_input.trim());
                match pick_file(&path) {
                    Ok(file) => {
                        self.status = Some(format!("Selected {}", file.name));
                        self.app.select_report_file(file);
                    }
                    Err(e) => {
                        warn!(error = %e, "file picker");
                        self.status = Some(e.to_string());
                    }
                }
                self.path_input.clear();
                self.editing = None;
            }
            EditTarget::Symptoms | EditTarget::Profile(_) => self.editing = None,
        }
    }

    // ── Page keys ────────────────────────────────────────────────────────────

    fn handle_page_key(&mut self, page: Page, key: KeyEvent) -> bool {
        self.status = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return false,
            KeyCode::Tab => self.app.navigate(page.next()),
            KeyCode::BackTab => self.app.navigate(page.prev()),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.app.navigate(Page::ALL[idx]);
            }
            KeyCode::Char('m') => self.app.shell_mut().toggle_menu(),
            _ => match page {
                Page::Overview => {}
                Page::SymptomCheck => self.handle_symptom_key(key),
                Page::ReportUpload => self.handle_report_key(key),
                Page::Chat => self.handle_chat_key(key),
                Page::Settings => self.handle_settings_key(key),
            },
        }
        true
    }

    fn handle_symptom_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('i') | KeyCode::Enter if !self.app.symptom().is_listening() => {
                self.editing = Some(EditTarget::Symptoms);
            }
            KeyCode::Char('a') => {
                self.app.analyze_symptoms();
            }
            KeyCode::Char('v') => {
                self.app.toggle_voice_input();
            }
            _ => {}
        }
    }

    fn handle_report_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('o') if self.app.report().file().is_none() => {
                self.editing = Some(EditTarget::FilePath);
            }
            KeyCode::Char('x') => self.app.remove_report_file(),
            KeyCode::Char('a') => {
                self.app.analyze_report();
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('i') | KeyCode::Enter => self.editing = Some(EditTarget::ChatDraft),
            KeyCode::F(n @ 1..=3) => {
                self.app.apply_chat_suggestion(usize::from(n - 1));
                self.editing = Some(EditTarget::ChatDraft);
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        let rows = self.settings_rows();
        match key.code {
            KeyCode::Up => {
                self.settings_row = (self.settings_row + rows.len() - 1) % rows.len();
            }
            KeyCode::Down => self.settings_row = (self.settings_row + 1) % rows.len(),
            KeyCode::Char('s') => {
                self.app.settings_mut().save();
                self.status = Some("Changes saved".to_string());
            }
            KeyCode::Enter | KeyCode::Char(' ') => match rows[self.settings_row] {
                SettingsRow::Field(field) => self.editing = Some(EditTarget::Profile(field)),
                SettingsRow::Toggle(toggle) => {
                    self.app.settings_mut().toggle(toggle);
                }
                SettingsRow::Language => {
                    self.app.settings_mut().cycle_language();
                }
                SettingsRow::Timezone => {
                    self.app.settings_mut().cycle_timezone();
                }
            },
            _ => {}
        }
    }

    /// Fire due tasks and advance the spinner.
    fn on_tick(&mut self) {
        let fired = self.app.advance();
        if fired > 0 {
            debug!(fired, "delayed tasks fired");
        }
        self.tick = self.tick.wrapping_add(1);
    }

    /// How long to wait for input before the next tick.
    fn poll_timeout(&self, last_tick: Instant) -> Duration {
        let tick = Duration::from_millis(TICK_MS).saturating_sub(last_tick.elapsed());
        match self.app.next_deadline() {
            Some(due) => tick.min(due.saturating_duration_since(Instant::now())),
            None => tick,
        }
    }
}

fn width_px(columns: u16) -> u32 {
    u32::from(columns) * CELL_WIDTH_PX
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn create_log_file(path: &Path) -> MediscanResult<File> {
    File::create(path).map_err(|e| MediscanError::ConfigError {
        reason: format!("cannot create log file '{}': {}", path.display(), e),
    })
}

fn init_logging(log_file: Option<&PathBuf>) -> MediscanResult<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = create_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    tui: &mut Tui,
) -> MediscanResult<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, tui))?;

        if event::poll(tui.poll_timeout(last_tick))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !tui.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(columns, _) => tui.app.shell_mut().resize(width_px(columns)),
                _ => {}
            }
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_MS) {
            last_tick = Instant::now();
        }
        tui.on_tick();
    }
}

fn run(cli: Cli) -> MediscanResult<()> {
    init_logging(cli.log_file.as_ref())?;
    let config = MediscanConfig::load(cli.config.as_deref())?;

    let (columns, _) = terminal::size()?;
    let mut tui = Tui::new(App::new(config, width_px(columns)));

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, &mut tui);
    restore_terminal(&mut terminal)?;
    result
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("mediscan-tui: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use mediscan_contracts::analysis::AnalysisPhase;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_str(tui: &mut Tui, s: &str) {
        for c in s.chars() {
            tui.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn logged_in() -> Tui {
        let mut tui = Tui::new(App::new(MediscanConfig::default(), width_px(120)));
        tui.handle_key(press(KeyCode::Enter));
        tui
    }

    #[test]
    fn enter_on_blank_login_form_logs_in() {
        let tui = logged_in();
        assert_eq!(tui.app.view(), View::Page(Page::Overview));
    }

    #[test]
    fn typing_on_login_fills_the_selected_field() {
        let mut tui = Tui::new(App::new(MediscanConfig::default(), width_px(120)));
        type_str(&mut tui, "sam@example.com");
        tui.handle_key(press(KeyCode::Down));
        type_str(&mut tui, "pw");
        assert_eq!(tui.app.login().field(LoginField::Email), "sam@example.com");
        assert_eq!(tui.app.login().field(LoginField::Password), "pw");
        assert_eq!(tui.app.view(), View::Login);
    }

    #[test]
    fn number_keys_and_tab_navigate() {
        let mut tui = logged_in();
        tui.handle_key(press(KeyCode::Char('4')));
        assert_eq!(tui.app.view(), View::Page(Page::Chat));
        tui.handle_key(press(KeyCode::Tab));
        assert_eq!(tui.app.view(), View::Page(Page::Settings));
        tui.handle_key(press(KeyCode::BackTab));
        assert_eq!(tui.app.view(), View::Page(Page::Chat));
    }

    #[test]
    fn symptom_text_editing_and_analysis() {
        let mut tui = logged_in();
        tui.handle_key(press(KeyCode::Char('2')));
        tui.handle_key(press(KeyCode::Char('i')));
        type_str(&mut tui, "a cough");
        tui.handle_key(press(KeyCode::Esc));
        assert_eq!(tui.app.symptom().text(), "a cough");

        tui.handle_key(press(KeyCode::Char('a')));
        assert_eq!(tui.app.symptom().phase(), AnalysisPhase::Analyzing);
    }

    #[test]
    fn chat_enter_sends_and_keeps_focus() {
        let mut tui = logged_in();
        tui.handle_key(press(KeyCode::Char('4')));
        let before = tui.app.chat().len();
        tui.handle_key(press(KeyCode::Char('i')));
        type_str(&mut tui, "hello");
        tui.handle_key(press(KeyCode::Enter));
        assert_eq!(tui.app.chat().len(), before + 1);
        assert_eq!(tui.editing, Some(EditTarget::ChatDraft));
    }

    #[test]
    fn missing_file_path_reports_status_and_keeps_view_empty() {
        let mut tui = logged_in();
        tui.handle_key(press(KeyCode::Char('3')));
        tui.handle_key(press(KeyCode::Char('o')));
        type_str(&mut tui, "/nonexistent/report.pdf");
        tui.handle_key(press(KeyCode::Enter));
        assert!(tui.app.report().file().is_none());
        assert!(tui.status.as_deref().unwrap_or("").contains("unavailable"));
        assert_eq!(tui.editing, None);
    }

    #[test]
    fn settings_space_flips_the_selected_toggle() {
        let mut tui = logged_in();
        tui.handle_key(press(KeyCode::Char('5')));
        for _ in 0..ProfileField::ALL.len() {
            tui.handle_key(press(KeyCode::Down));
        }
        tui.handle_key(press(KeyCode::Char(' ')));
        assert!(!tui.app.settings().is_enabled(Toggle::HealthAlerts));
    }

    #[test]
    fn unwritable_log_file_is_a_config_error_naming_the_path() {
        let path = std::env::temp_dir()
            .join(format!("mediscan-no-such-dir-{}", std::process::id()))
            .join("tui.log");
        let err = create_log_file(&path).unwrap_err();
        assert!(matches!(err, MediscanError::ConfigError { .. }));
        assert!(err.to_string().contains("tui.log"));
    }

    #[test]
    fn q_quits_only_outside_text_fields() {
        let mut tui = logged_in();
        tui.handle_key(press(KeyCode::Char('4')));
        tui.handle_key(press(KeyCode::Char('i')));
        assert!(tui.handle_key(press(KeyCode::Char('q'))));
        tui.handle_key(press(KeyCode::Esc));
        assert!(!tui.handle_key(press(KeyCode::Char('q'))));
    }
}
