//! MediScan Health Assistant — Demo CLI
//!
//! Drives the interaction core through a scripted session on a manual clock,
//! so every simulated delay passes instantly and the output is reproducible.
//!
//! Usage:
//!   cargo run -p demo -- walkthrough
//!   cargo run -p demo -- symptom --text "sore throat and a cough"
//!   cargo run -p demo -- report --file ./blood-test.pdf
//!   cargo run -p demo -- --json chat --message "hello"

use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mediscan_contracts::{
    analysis::SelectedFile,
    chat::Sender,
    error::{MediscanError, MediscanResult},
    page::Page,
};
use mediscan_core::{report::pick_file, traits::ManualClock, App, MediscanConfig};
use mediscan_sample::chat as sample_chat;

/// Viewport width the scripted session pretends to have.
const DEMO_WIDTH_PX: u32 = 1280;

const DEFAULT_SYMPTOMS: &str = "I have a headache and a mild fever since yesterday";

const SAMPLE_REPORT: (&str, u64) = ("blood-test-report.pdf", 524_288);

// ── CLI definition ────────────────────────────────────────────────────────────

/// MediScan — scripted health assistant session.
///
/// Each subcommand logs in and exercises one view (or all of them), advancing
/// a virtual clock past every simulated delay.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "MediScan scripted session",
    long_about = "Runs a MediScan session against a virtual clock: symptom analysis,\n\
                  report extraction and chat replies complete without real waiting."
)]
struct Cli {
    /// TOML file overriding delays and the sidebar width threshold.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the final session state as JSON instead of a text summary.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Visit every page, run both analyses and exchange a chat message.
    Walkthrough {
        /// Page to land on after login (e.g. "chat", "reports").
        #[arg(long, default_value = "overview")]
        page: String,
    },
    /// Analyze a symptom description.
    Symptom {
        #[arg(long, default_value = DEFAULT_SYMPTOMS)]
        text: String,

        /// Fill the description with the simulated voice transcript instead.
        #[arg(long)]
        voice: bool,
    },
    /// Select a report file and extract its results.
    Report {
        /// Report to select. A built-in sample is used when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Send one chat message and wait for the reply.
    Chat {
        #[arg(long, default_value = "hello")]
        message: String,
    },
}

type DemoApp = App<ManualClock>;

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> MediscanResult<()> {
    let config = MediscanConfig::load(cli.config.as_deref())?;
    let mut app = App::with_clock(config, DEMO_WIDTH_PX, ManualClock::new());

    if !cli.json {
        print_banner(&app);
    }

    app.submit_login();

    match cli.command {
        Command::Walkthrough { page } => walkthrough(&mut app, &page, cli.json)?,
        Command::Symptom { text, voice } => run_symptom(&mut app, &text, voice, cli.json),
        Command::Report { file } => run_report(&mut app, file, cli.json)?,
        Command::Chat { message } => run_chat(&mut app, &message, cli.json),
    }

    // Let anything still in flight land before reporting.
    let settle = app.config().timing.longest();
    wait(&mut app, settle);

    if cli.json {
        let snapshot = serde_json::to_string_pretty(&app.snapshot()).map_err(|e| {
            MediscanError::Serialization {
                reason: e.to_string(),
            }
        })?;
        println!("{}", snapshot);
    } else {
        println!("Session complete.");
    }
    Ok(())
}

/// Step the virtual clock forward and apply whatever came due.
fn wait(app: &mut DemoApp, delay: Duration) {
    app.clock().advance(delay);
    let fired = app.advance();
    info!(waited_ms = delay.as_millis() as u64, fired, "virtual time advanced");
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

fn walkthrough(app: &mut DemoApp, landing: &str, quiet: bool) -> MediscanResult<()> {
    let landing: Page = landing.parse()?;
    app.navigate(landing);
    if !quiet {
        println!("Logged in, landed on {}.", landing.label());
        println!();
    }

    for page in Page::ALL {
        app.navigate(page);
        match page {
            Page::Overview => {
                if !quiet {
                    print_section(page);
                    let data = mediscan_sample::overview::overview();
                    println!("  {}", data.greeting);
                    for vital in &data.vitals {
                        println!("  {:<16} {} {} ({})", vital.label, vital.value, vital.unit, vital.badge);
                    }
                    println!();
                }
            }
            Page::SymptomCheck => {
                run_symptom(app, DEFAULT_SYMPTOMS, false, quiet)
            }
            Page::ReportUpload => run_report(app, None, quiet)?,
            Page::Chat => run_chat(app, "hello", quiet),
            Page::Settings => {
                let on = app
                    .settings_mut()
                    .toggle(mediscan_core::settings::Toggle::WeeklySummary);
                app.settings_mut().save();
                if !quiet {
                    print_section(page);
                    println!("  Weekly Health Summary: {}", if on { "on" } else { "off" });
                    println!("  Saved: {}", app.settings().is_acknowledged());
                    println!();
                }
            }
        }
    }
    Ok(())
}

fn run_symptom(app: &mut DemoApp, text: &str, voice: bool, quiet: bool) {
    app.navigate(Page::SymptomCheck);
    if voice {
        app.toggle_voice_input();
        let capture = app.config().timing.voice_capture();
        wait(app, capture);
    } else {
        app.set_symptom_text(text);
    }

    let started = app.analyze_symptoms();
    let delay = app.config().timing.symptom_analysis();
    wait(app, delay);

    if quiet {
        return;
    }
    print_section(Page::SymptomCheck);
    println!("  Symptoms: {}", app.symptom().text());
    if !started {
        println!("  Nothing to analyze.");
        println!();
        return;
    }
    if let Some(report) = app.symptom().result() {
        for m in &report.conditions {
            println!("  {:<20} {:>3}%  {} risk", m.condition, m.probability, m.risk.label());
        }
        println!("  Recommendations:");
        for r in &report.recommendations {
            println!("    - {}", r);
        }
    }
    println!();
}

fn run_report(app: &mut DemoApp, file: Option<PathBuf>, quiet: bool) -> MediscanResult<()> {
    app.navigate(Page::ReportUpload);
    let selected = match file {
        Some(path) => pick_file(&path)?,
        None => SelectedFile::new(SAMPLE_REPORT.0, SAMPLE_REPORT.1),
    };
    app.select_report_file(selected);
    app.analyze_report();
    let delay = app.config().timing.report_analysis();
    wait(app, delay);

    if quiet {
        return Ok(());
    }
    print_section(Page::ReportUpload);
    if let Some(file) = app.report().file() {
        println!("  File: {} ({})", file.name, file.size_mb());
    }
    if let (Some(report), Some(counts)) = (app.report().result(), app.report().summary()) {
        println!(
            "  {} normal, {} high, {} low, {} total",
            counts.normal, counts.high, counts.low, counts.total
        );
        for row in &report.rows {
            println!(
                "  {:<24} {:>8} {:<8} {:<14} {}",
                row.parameter,
                row.value,
                row.unit,
                row.reference_range,
                row.status.label()
            );
        }
    }
    println!();
    Ok(())
}

fn run_chat(app: &mut DemoApp, message: &str, quiet: bool) {
    app.navigate(Page::Chat);
    let before = app.chat().len();
    app.send_chat(message);
    let delay = app.config().timing.chat_reply();
    wait(app, delay);

    if quiet {
        return;
    }
    print_section(Page::Chat);
    for m in &app.chat().messages()[before..] {
        let who = match m.sender {
            Sender::User => "You",
            Sender::Assistant => sample_chat::ASSISTANT_NAME,
        };
        println!("  [{}] {}: {}", m.timestamp, who, m.body);
    }
    if app.chat().len() == before {
        println!("  Nothing sent.");
    }
    println!();
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_section(page: Page) {
    println!("── {} ──", page.label());
}

fn print_banner(app: &DemoApp) {
    let timing = &app.config().timing;
    println!();
    println!("MediScan AI — Health Assistant");
    println!("Scripted session on a virtual clock");
    println!("===================================");
    println!();
    println!("Simulated delays:");
    println!("  symptom analysis  {} ms", timing.symptom_analysis_ms);
    println!("  report analysis   {} ms", timing.report_analysis_ms);
    println!("  assistant reply   {} ms", timing.chat_reply_ms);
    println!("  voice capture     {} ms", timing.voice_capture_ms);
    println!();
}
