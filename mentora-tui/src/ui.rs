//! UI rendering for the TUI.

use mentora_core::{Role, SubmitPhase, ViewStage};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Viewer's turns in the transcript
const USER_COLOR: Color = Color::Rgb(80, 200, 120);
/// Assistant turns in the transcript
const ASSISTANT_COLOR: Color = Color::Rgb(0, 180, 180);
/// Border color for the transcript pane
const BORDER_CHAT: Color = Color::Rgb(80, 160, 80);
/// Border color for the videos pane
const BORDER_VIDEOS: Color = Color::Rgb(180, 100, 180);
/// Video titles in the recommendation pane
const VIDEO_TITLE: Color = Color::Rgb(255, 215, 0);
/// Failed-submission message line
const ERROR_COLOR: Color = Color::Rgb(220, 80, 80);
/// Secondary text
const DIM: Color = Color::Rgb(128, 128, 128);

/// Render the application UI.
pub fn render(frame: &mut Frame, app: &App) {
    match app.stage() {
        ViewStage::Login => render_login(frame, app),
        ViewStage::Prompt => render_prompt(frame, app),
        ViewStage::Conversation => render_conversation(frame, app),
    }
}

/// Render the login screen: the only action without a profile is signing in.
fn render_login(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, app, chunks[0]);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "AI Learning Assistant",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Press Enter to sign in"),
    ];
    if let Some(status) = &app.status {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(DIM),
        )));
    }

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, chunks[1]);

    render_footer(frame, "enter sign in · r re-check · q quit", chunks[2]);
}

/// Render the seeded query prompt shown before any conversation exists.
fn render_prompt(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Min(3),    // Body
        Constraint::Length(3), // Compose box
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, app, chunks[0]);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "What do you want to learn today?",
            Style::default().fg(Color::Cyan).bold(),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, chunks[1]);

    render_compose(frame, app, chunks[2]);
    render_footer(frame, "enter send · ctrl+l logout · esc quit", chunks[3]);
}

/// Render the two-pane view: transcript and compose on the left,
/// recommended videos on the right.
fn render_conversation(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Min(5),    // Panes
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, app, chunks[0]);

    let panes = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let left = Layout::vertical([
        Constraint::Min(3),    // Transcript
        Constraint::Length(1), // Error line
        Constraint::Length(3), // Compose box
    ])
    .split(panes[0]);

    render_transcript(frame, app, left[0]);
    render_error_line(frame, app, left[1]);
    render_compose(frame, app, left[2]);
    render_videos(frame, app, panes[1]);

    render_footer(
        frame,
        "enter send · up/down scroll · ctrl+l logout · esc quit",
        chunks[2],
    );
}

/// Render the header: app name on the left, viewer identity on the right.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::horizontal([Constraint::Length(12), Constraint::Min(1)]).split(area);

    let app_name = Paragraph::new(" mentora").style(Style::default().fg(Color::Cyan).bold());
    frame.render_widget(app_name, chunks[0]);

    if let Some(profile) = app.gate.profile() {
        let identity = Paragraph::new(format!("{} <{}> ", profile.name, profile.email))
            .style(Style::default().fg(DIM))
            .alignment(Alignment::Right);
        frame.render_widget(identity, chunks[1]);
    }
}

/// Render the transcript pane.
fn render_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(transcript) = app.conversation.transcript() {
        for message in transcript {
            let (label, color) = match message.role {
                Role::User => ("You", USER_COLOR),
                Role::Assistant => ("Assistant", ASSISTANT_COLOR),
            };
            lines.push(Line::from(Span::styled(
                label,
                Style::default().fg(color).bold(),
            )));
            for text_line in message.content.lines() {
                lines.push(Line::from(text_line.to_string()));
            }
            lines.push(Line::from(""));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_CHAT))
                .title(" Conversation "),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Render the failed-submission line, empty unless the last round trip
/// failed. The draft stays in the compose box so it can be resent as-is.
fn render_error_line(frame: &mut Frame, app: &App, area: Rect) {
    if let SubmitPhase::Error { message } = app.conversation.phase() {
        let line = Paragraph::new(format!("send failed: {} (press enter to retry)", message))
            .style(Style::default().fg(ERROR_COLOR));
        frame.render_widget(line, area);
    }
}

/// Render the persistent compose box.
fn render_compose(frame: &mut Frame, app: &App, area: Rect) {
    let compose = Paragraph::new(app.conversation.pending.text().to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Your message "),
    );
    frame.render_widget(compose, area);
}

/// Render the recommended videos pane.
fn render_videos(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for video in app.conversation.videos() {
        lines.push(Line::from(Span::styled(
            video.title.clone(),
            Style::default().fg(VIDEO_TITLE).bold(),
        )));
        lines.push(Line::from(video.display_description()));
        lines.push(Line::from(Span::styled(
            video.url.clone(),
            Style::default().fg(DIM),
        )));
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Recommendations appear here after your first message.",
            Style::default().fg(DIM),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_VIDEOS))
                .title(" Recommended videos "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the footer hint line.
fn render_footer(frame: &mut Frame, hints: &str, area: Rect) {
    let footer = Paragraph::new(hints).style(Style::default().fg(DIM));
    frame.render_widget(footer, area);
}
