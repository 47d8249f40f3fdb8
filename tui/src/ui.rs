//! Rendering. Every function here reads `Tui` and draws; none of them mutate.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row,
        Sparkline, Table, Wrap,
    },
    Frame,
};

use mediscan_contracts::{
    analysis::{AnalysisPhase, ResultStatus, RiskLevel},
    chat::Sender,
    page::{LayoutMode, Page, View},
};
use mediscan_core::login::{LoginField, LoginMode};
use mediscan_sample::{chat as sample_chat, overview, reports, symptoms};

use crate::{EditTarget, SettingsRow, Tui};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn label_style() -> Style {
    Style::default().fg(Color::Gray)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn status_color(status: ResultStatus) -> Color {
    match status {
        ResultStatus::Normal => Color::Green,
        ResultStatus::High => Color::Red,
        ResultStatus::Low => Color::Yellow,
    }
}

fn spinner(tui: &Tui) -> &'static str {
    SPINNER[(tui.tick % SPINNER.len() as u64) as usize]
}

/// An input line, with a cursor when `focused`.
fn input_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let mut spans = vec![
        Span::styled(if focused { "> " } else { "  " }, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<16}", label), label_style()),
        Span::styled(value, value_style),
    ];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

// ── Top level ─────────────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, tui: &Tui) {
    let area = f.area();
    match tui.app.view() {
        View::Login => render_login(f, area, tui),
        View::Page(page) => render_shell(f, tui, page),
    }
}

fn render_shell(f: &mut Frame, tui: &Tui, page: Page) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(8),    // sidebar + page
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    render_header(f, outer[0], tui, page);

    let shell = tui.app.shell();
    let body = if shell.layout() == LayoutMode::Sidebar {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(20)])
            .split(outer[1]);
        render_menu(f, cols[0], page);
        cols[1]
    } else {
        outer[1]
    };

    match page {
        Page::Overview => render_overview(f, body),
        Page::SymptomCheck => render_symptom(f, body, tui),
        Page::ReportUpload => render_report(f, body, tui),
        Page::Chat => render_chat(f, body, tui),
        Page::Settings => render_settings(f, body, tui),
    }

    if shell.layout() == LayoutMode::Overlay && shell.is_menu_open() {
        let popup = Rect {
            x: outer[1].x,
            y: outer[1].y,
            width: outer[1].width.min(26),
            height: outer[1].height.min(Page::ALL.len() as u16 + 2),
        };
        f.render_widget(Clear, popup);
        render_menu(f, popup, page);
    }

    render_footer(f, outer[2], tui, page);
}

fn render_header(f: &mut Frame, area: Rect, tui: &Tui, page: Page) {
    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut spans = vec![
        Span::styled("MediScan AI    ", title_style),
        Span::styled(page.label(), Style::default().fg(Color::White)),
    ];
    if tui.app.pending_tasks() > 0 {
        spans.push(Span::styled(
            format!("    {} working", spinner(tui)),
            Style::default().fg(Color::Yellow),
        ));
    }
    let profile = overview::patient_profile();
    let right = Line::from(Span::styled(
        format!("{} · {} ", profile.name, profile.patient_id),
        dim(),
    ))
    .alignment(Alignment::Right);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
    f.render_widget(Paragraph::new(right), inner);
}

fn render_menu(f: &mut Frame, area: Rect, current: Page) {
    let items: Vec<ListItem> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let style = if *page == current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(
                format!(" [{}] {}", i + 1, page.label()),
                style,
            )))
        })
        .collect();
    f.render_widget(List::new(items).block(panel("Menu")), area);
}

fn render_footer(f: &mut Frame, area: Rect, tui: &Tui, page: Page) {
    let keys = if tui.editing.is_some() {
        "[Enter] confirm   [Esc] stop editing   [Backspace] delete"
    } else {
        match page {
            Page::Overview => "[Tab/1-5] pages   [m] menu   [q] quit",
            Page::SymptomCheck => "[i] describe   [v] voice   [a] analyze   [Tab/1-5] pages   [q] quit",
            Page::ReportUpload => "[o] open file   [x] remove   [a] analyze   [Tab/1-5] pages   [q] quit",
            Page::Chat => "[i] type   [F1-F3] suggestions   [Tab/1-5] pages   [q] quit",
            Page::Settings => "[Up/Down] select   [Space] change   [s] save   [Tab/1-5] pages   [q] quit",
        }
    };
    let mut spans = vec![Span::styled(keys, Style::default().fg(Color::DarkGray))];
    if let Some(status) = &tui.status {
        spans.push(Span::styled(format!("   {}", status), Style::default().fg(Color::Yellow)));
    }
    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Login ─────────────────────────────────────────────────────────────────────

fn render_login(f: &mut Frame, area: Rect, tui: &Tui) {
    let form = tui.app.login();
    let width = area.width.min(60);
    let height = area.height.min(14);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let selected = tui.selected_login_field();
    let mut lines = vec![
        Line::from(Span::styled(
            "MediScan AI",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Your personal health assistant", dim())),
        Line::from(""),
        Line::from(Span::styled(
            form.heading(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    for field in form.fields() {
        let label = match field {
            LoginField::Name => "Full Name",
            LoginField::Email => "Email",
            LoginField::Password => "Password",
        };
        let raw = form.field(*field);
        let shown = if *field == LoginField::Password {
            "*".repeat(raw.chars().count())
        } else {
            raw.to_string()
        };
        lines.push(owned_input_line(label, shown, *field == selected));
    }
    lines.push(Line::from(""));
    let switch = match form.mode() {
        LoginMode::SignIn => "[Enter] sign in   [F2] create an account",
        LoginMode::SignUp => "[Enter] create account   [F2] back to sign in",
    };
    lines.push(Line::from(Span::styled(switch, dim())));

    f.render_widget(Clear, card);
    f.render_widget(Paragraph::new(lines).block(panel("Sign in")), card);
}

fn owned_input_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let line = input_line(label, &value, focused);
    Line::from(
        line.spans
            .into_iter()
            .map(|s| Span::styled(s.content.into_owned(), s.style))
            .collect::<Vec<_>>(),
    )
}

// ── Overview ──────────────────────────────────────────────────────────────────

fn render_overview(f: &mut Frame, area: Rect) {
    let data = overview::overview();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // greeting + summary
            Constraint::Length(6), // vitals
            Constraint::Min(6),    // charts
            Constraint::Length(6), // recent reports
        ])
        .split(area);

    let summary = &data.summary;
    let summary_lines = vec![
        Line::from(vec![
            Span::styled(data.greeting.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("   AI Health Summary: ", label_style()),
            Span::styled(
                format!("{} risk", summary.risk.label()),
                Style::default().fg(risk_color(summary.risk)).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(summary.narrative.clone(), Style::default().fg(Color::White))),
        Line::from(vec![
            Span::styled("Health Score ", label_style()),
            Span::raw(summary.health_score.clone()),
            Span::styled("   Activity ", label_style()),
            Span::raw(summary.activity_level.clone()),
            Span::styled("   Trend ", label_style()),
            Span::styled(summary.trend.clone(), Style::default().fg(Color::Green)),
        ]),
    ];
    f.render_widget(
        Paragraph::new(summary_lines)
            .wrap(Wrap { trim: true })
            .block(panel("Overview")),
        rows[0],
    );

    let vital_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, data.vitals.len() as u32); data.vitals.len()])
        .split(rows[1]);
    for (vital, col) in data.vitals.iter().zip(vital_cols.iter()) {
        let lines = vec![
            Line::from(vec![
                Span::styled(vital.value.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}", vital.unit), label_style()),
            ]),
            Line::from(Span::styled(vital.badge.clone(), Style::default().fg(Color::Green))),
            Line::from(Span::styled(vital.trend.clone(), dim())),
        ];
        f.render_widget(Paragraph::new(lines).block(panel(&vital.label)), *col);
    }

    let chart_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let heart: Vec<u64> = data.heart_rate.points.iter().map(|p| p.value as u64).collect();
    let heart_title = format!("{} · {}", data.heart_rate.title, data.heart_rate.subtitle);
    f.render_widget(
        Sparkline::default()
            .block(panel(&heart_title))
            .data(&heart)
            .style(Style::default().fg(Color::Red)),
        chart_cols[0],
    );

    let bars: Vec<Bar> = data
        .blood_sugar
        .points
        .iter()
        .map(|p| {
            Bar::default()
                .label(Line::from(p.label.clone()))
                .value(p.value as u64)
        })
        .collect();
    let sugar_title = format!("{} · {}", data.blood_sugar.title, data.blood_sugar.subtitle);
    f.render_widget(
        BarChart::default()
            .block(panel(&sugar_title))
            .data(BarGroup::default().bars(&bars))
            .bar_width(4)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Cyan)),
        chart_cols[1],
    );

    let report_rows: Vec<Row> = data
        .recent_reports
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.name.clone()),
                Cell::from(r.date.clone()),
                Cell::from(r.kind.clone()),
                Cell::from(Span::styled(r.status.clone(), Style::default().fg(Color::Green))),
            ])
        })
        .collect();
    let table = Table::new(
        report_rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(Row::new(vec!["Report", "Date", "Type", "Status"]).style(label_style()))
    .block(panel("Recent Reports"));
    f.render_widget(table, rows[3]);
}

// ── Symptom check ─────────────────────────────────────────────────────────────

fn render_symptom(f: &mut Frame, area: Rect, tui: &Tui) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(6)])
        .split(cols[0]);

    let check = tui.app.symptom();
    let editing = tui.editing == Some(EditTarget::Symptoms);
    let mut input = vec![Line::from(Span::styled(
        "Describe your symptoms in detail",
        label_style(),
    ))];
    let text = if check.text().is_empty() && !editing {
        Span::styled("e.g. I have a headache and a mild fever since yesterday", dim())
    } else {
        Span::raw(check.text())
    };
    input.push(Line::from(vec![
        text,
        Span::styled(if editing { "_" } else { "" }, Style::default().fg(Color::Cyan)),
    ]));
    if check.is_listening() {
        input.push(Line::from(Span::styled(
            format!("{} Listening... speak now", spinner(tui)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    f.render_widget(
        Paragraph::new(input).wrap(Wrap { trim: false }).block(panel("AI Symptom Analyzer")),
        left[0],
    );

    let mut lines: Vec<Line> = Vec::new();
    match check.phase() {
        AnalysisPhase::Idle => {
            lines.push(Line::from(Span::styled(
                "Enter your symptoms and press [a] to analyze.",
                dim(),
            )));
        }
        AnalysisPhase::Analyzing => {
            lines.push(Line::from(Span::styled(
                format!("{} Analyzing your symptoms...", spinner(tui)),
                Style::default().fg(Color::Yellow),
            )));
        }
        AnalysisPhase::Done => {
            if let Some(report) = check.result() {
                for m in &report.conditions {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{:<20}", m.condition),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(format!("{:>3}%  ", m.probability), label_style()),
                        Span::styled(
                            format!("{} risk", m.risk.label()),
                            Style::default().fg(risk_color(m.risk)),
                        ),
                    ]));
                    lines.push(Line::from(Span::styled(format!("  {}", m.description), dim())));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("Recommendations", label_style())));
                for r in &report.recommendations {
                    lines.push(Line::from(format!("  • {}", r)));
                }
            }
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(symptoms::DISCLAIMER, Style::default().fg(Color::Yellow))));
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(panel("Analysis Results")),
        left[1],
    );

    let mut side: Vec<Line> = vec![Line::from(Span::styled("Tips for Better Analysis", label_style()))];
    side.extend(symptoms::tips().into_iter().map(|t| Line::from(format!("  • {}", t))));
    side.push(Line::from(""));
    side.push(Line::from(Span::styled("Recent Analyses", label_style())));
    for r in symptoms::recent_analyses() {
        side.push(Line::from(vec![
            Span::styled(format!("  {}  ", r.date), dim()),
            Span::raw(r.condition.clone()),
            Span::styled(format!("  {}", r.risk.label()), Style::default().fg(risk_color(r.risk))),
        ]));
    }
    f.render_widget(
        Paragraph::new(side).wrap(Wrap { trim: true }).block(panel("Guidance")),
        cols[1],
    );
}

// ── Report upload ─────────────────────────────────────────────────────────────

fn render_report(f: &mut Frame, area: Rect, tui: &Tui) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(cols[0]);

    let upload = tui.app.report();
    let picker = if tui.editing == Some(EditTarget::FilePath) {
        vec![
            Line::from(Span::styled("Path to a PDF, JPG or PNG report", label_style())),
            input_line("File", &tui.path_input, true),
        ]
    } else if let Some(file) = upload.file() {
        vec![Line::from(vec![
            Span::styled(file.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", file.size_mb()), dim()),
        ])]
    } else {
        vec![
            Line::from(Span::styled("Drop your medical report here", label_style())),
            Line::from(Span::styled("Press [o] to choose a file (PDF, JPG, PNG)", dim())),
        ]
    };
    f.render_widget(Paragraph::new(picker).block(panel("Upload Medical Report")), left[0]);

    match (upload.phase(), upload.result()) {
        (AnalysisPhase::Done, Some(report)) => {
            let inner = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(4), Constraint::Length(6)])
                .split(left[1]);

            let counts = report.counts();
            let tally = Line::from(vec![
                Span::styled(format!("{} normal", counts.normal), Style::default().fg(Color::Green)),
                Span::raw("   "),
                Span::styled(format!("{} high", counts.high), Style::default().fg(Color::Red)),
                Span::raw("   "),
                Span::styled(format!("{} low", counts.low), Style::default().fg(Color::Yellow)),
                Span::styled(format!("   {} total", counts.total), label_style()),
            ]);
            f.render_widget(Paragraph::new(tally).block(panel("Summary")), inner[0]);

            let rows: Vec<Row> = report
                .rows
                .iter()
                .map(|r| {
                    Row::new(vec![
                        Cell::from(r.parameter.clone()),
                        Cell::from(format!("{} {}", r.value, r.unit)),
                        Cell::from(r.reference_range.clone()),
                        Cell::from(Span::styled(
                            r.status.label(),
                            Style::default().fg(status_color(r.status)),
                        )),
                    ])
                })
                .collect();
            let table = Table::new(
                rows,
                [
                    Constraint::Percentage(35),
                    Constraint::Percentage(25),
                    Constraint::Percentage(25),
                    Constraint::Percentage(15),
                ],
            )
            .header(Row::new(vec!["Parameter", "Value", "Reference", "Status"]).style(label_style()))
            .block(panel("Extracted Results"));
            f.render_widget(table, inner[1]);

            let insights: Vec<Line> = report
                .insights
                .iter()
                .map(|i| Line::from(format!("  • {}", i)))
                .collect();
            f.render_widget(
                Paragraph::new(insights).wrap(Wrap { trim: true }).block(panel("AI Insights")),
                inner[2],
            );
        }
        (AnalysisPhase::Analyzing, _) => {
            f.render_widget(
                Paragraph::new(Span::styled(
                    format!("{} Extracting values from your report...", spinner(tui)),
                    Style::default().fg(Color::Yellow),
                ))
                .block(panel("Analysis")),
                left[1],
            );
        }
        _ => {
            let hint = if upload.file().is_some() {
                "Press [a] to analyze the selected report."
            } else {
                "Select a report to begin."
            };
            f.render_widget(
                Paragraph::new(Span::styled(hint, dim())).block(panel("Analysis")),
                left[1],
            );
        }
    }

    let mut side = vec![Line::from(Span::styled("Supported Report Types", label_style()))];
    side.extend(
        reports::supported_report_types()
            .into_iter()
            .map(|t| Line::from(format!("  • {}", t))),
    );
    side.push(Line::from(""));
    side.push(Line::from(Span::styled("Previous Uploads", label_style())));
    for u in reports::previous_uploads() {
        side.push(Line::from(vec![
            Span::raw(format!("  {}", u.name)),
            Span::styled(format!("  {}", u.date), dim()),
            Span::styled(format!("  {}", u.status.label()), Style::default().fg(status_color(u.status))),
        ]));
    }
    f.render_widget(
        Paragraph::new(side).wrap(Wrap { trim: true }).block(panel("Reports")),
        cols[1],
    );
}

// ── Chat ──────────────────────────────────────────────────────────────────────

fn render_chat(f: &mut Frame, area: Rect, tui: &Tui) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // transcript
            Constraint::Length(3), // quick suggestions
            Constraint::Length(3), // compose box
            Constraint::Length(2), // disclaimer
        ])
        .split(area);

    let chat = tui.app.chat();
    let mut lines: Vec<Line> = Vec::new();
    for m in chat.messages() {
        let (who, color) = match m.sender {
            Sender::User => ("You", Color::Cyan),
            Sender::Assistant => (sample_chat::ASSISTANT_NAME, Color::Green),
        };
        lines.push(Line::from(vec![
            Span::styled(who, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", m.timestamp), dim()),
        ]));
        lines.push(Line::from(format!("  {}", m.body)));
    }
    // Keep the newest messages in view.
    let visible = rows[0].height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(visible);
    let title = format!("{} · Online", sample_chat::ASSISTANT_NAME);
    f.render_widget(
        Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>()).block(panel(&title)),
        rows[0],
    );

    let suggestions: Vec<Span> = sample_chat::QUICK_SUGGESTIONS
        .iter()
        .enumerate()
        .map(|(i, (label, _))| Span::styled(format!("[F{}] {}   ", i + 1, label), label_style()))
        .collect();
    f.render_widget(Paragraph::new(Line::from(suggestions)).block(panel("Quick Suggestions")), rows[1]);

    let editing = tui.editing == Some(EditTarget::ChatDraft);
    let draft = if chat.draft().is_empty() && !editing {
        Line::from(Span::styled("Type your health question...", dim()))
    } else {
        input_line("You", chat.draft(), editing)
    };
    f.render_widget(Paragraph::new(draft).block(panel("Message")), rows[2]);

    f.render_widget(
        Paragraph::new(Span::styled(sample_chat::DISCLAIMER, dim())).wrap(Wrap { trim: true }),
        rows[3],
    );
}

// ── Settings ──────────────────────────────────────────────────────────────────

fn render_settings(f: &mut Frame, area: Rect, tui: &Tui) {
    let settings = tui.app.settings();
    let mut lines: Vec<Line> = Vec::new();
    for (i, row) in tui.settings_rows().into_iter().enumerate() {
        let selected = i == tui.settings_row;
        let line = match row {
            SettingsRow::Field(field) => {
                let editing = tui.editing == Some(EditTarget::Profile(field));
                owned_input_line(field.label(), settings.field(field).to_string(), editing || selected)
            }
            SettingsRow::Toggle(toggle) => {
                let on = settings.is_enabled(toggle);
                Line::from(vec![
                    Span::styled(if selected { "> " } else { "  " }, Style::default().fg(Color::Cyan)),
                    Span::styled(
                        if on { "[x] " } else { "[ ] " },
                        Style::default().fg(if on { Color::Green } else { Color::DarkGray }),
                    ),
                    Span::raw(toggle.label()),
                ])
            }
            SettingsRow::Language => owned_input_line("Language", settings.language().label().to_string(), selected),
            SettingsRow::Timezone => owned_input_line("Timezone", settings.timezone().label().to_string(), selected),
        };
        lines.push(line);
    }
    lines.push(Line::from(""));
    if settings.is_acknowledged() {
        lines.push(Line::from(Span::styled(
            "Changes saved",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }
    f.render_widget(Paragraph::new(lines).block(panel("Settings")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediscan_core::{App, MediscanConfig};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(tui: &Tui, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, tui)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn logged_in(width: u16) -> Tui {
        let mut app = App::new(MediscanConfig::default(), crate::width_px(width));
        app.submit_login();
        Tui::new(app)
    }

    #[test]
    fn login_screen_shows_heading() {
        let tui = Tui::new(App::new(MediscanConfig::default(), crate::width_px(100)));
        let screen = render(&tui, 100, 30);
        assert!(screen.contains("Welcome Back"));
    }

    #[test]
    fn wide_terminal_shows_sidebar() {
        let tui = logged_in(120);
        let screen = render(&tui, 120, 40);
        assert!(screen.contains("[5] Settings"));
        assert!(screen.contains("Welcome back, Sarah!"));
    }

    #[test]
    fn narrow_terminal_hides_menu_until_toggled() {
        let mut tui = logged_in(60);
        assert!(!render(&tui, 60, 40).contains("[5] Settings"));
        tui.app.shell_mut().toggle_menu();
        assert!(render(&tui, 60, 40).contains("[5] Settings"));
    }

    #[test]
    fn chat_page_shows_the_disclaimer() {
        let mut tui = logged_in(160);
        tui.app.navigate(Page::Chat);
        let screen = render(&tui, 160, 40);
        assert!(screen.contains("general health information"));
    }

    #[test]
    fn every_page_draws() {
        let mut tui = logged_in(120);
        for page in Page::ALL {
            tui.app.navigate(page);
            let screen = render(&tui, 120, 40);
            assert!(screen.contains(page.label()), "{}", page);
        }
    }
}
