//! UI rendering for the timer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::core::{format_duration_mmss, Phase, SESSIONS_PER_CYCLE};
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, countdown, progress, session dots, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Countdown
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Session dots
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_dots(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[5]);
}

/// Color for the current phase.
fn phase_color(phase: Phase) -> Color {
    if phase.is_break() {
        Color::Green
    } else {
        Color::Red
    }
}

/// Render the header: phase name and position in the cycle.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snapshot = app.snapshot();

    let position = match snapshot.phase {
        Phase::Work => format!("{} of {}", snapshot.session_index, SESSIONS_PER_CYCLE),
        Phase::ShortBreak => format!("after session {}", snapshot.session_index),
        Phase::LongBreak => format!("after {SESSIONS_PER_CYCLE} sessions"),
    };
    let title = format!(" {} ({position}) ", snapshot.phase);

    let color = phase_color(snapshot.phase);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(header, area);
}

/// Render the countdown and its state label.
fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snapshot = app.snapshot();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format_duration_mmss(snapshot.remaining()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.status_label(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let countdown = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(countdown, area);
}

/// Render the phase progress gauge.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snapshot = app.snapshot();

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(snapshot.phase)))
        .ratio(app.progress().clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}

/// Render one dot per work session in the cycle.
fn render_dots(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snapshot = app.snapshot();

    let mut spans = Vec::new();
    for session in 1..=SESSIONS_PER_CYCLE {
        let completed = if snapshot.phase == Phase::Work {
            session < snapshot.session_index
        } else {
            session <= snapshot.session_index
        };

        let (symbol, style) = if completed {
            ("●", Style::default().fg(Color::Green))
        } else if snapshot.phase == Phase::Work && session == snapshot.session_index {
            (
                "●",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };

        spans.push(Span::styled(format!("{symbol} "), style));
    }

    let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(dots, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("Space:start/pause | s:skip | r:reset | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
