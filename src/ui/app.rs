//! Single-screen layout: tone selector, input/output panes, prompt
//! preview, and the status/help chrome around them.

use std::sync::OnceLock;
use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::{AppState, Phase};
use crate::constants::{MAX_EMAIL_CHARS, MIN_SPLIT_VIEW_WIDTH, SPINNER_FRAME_MS};
use crate::tone::ALL_TONES;

use super::theme::Theme;
use super::widgets::{error_bar, help_bar, status_bar, toast_popup, truncate_string};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn spinner_frame() -> &'static str {
    static START: OnceLock<Instant> = OnceLock::new();
    let elapsed = START.get_or_init(Instant::now).elapsed().as_millis();
    SPINNER_FRAMES[(elapsed / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len()]
}

struct AppLayout {
    status_area: Rect,
    tone_area: Rect,
    input_area: Rect,
    output_area: Rect,
    preview_area: Rect,
    help_area: Rect,
}

fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(4), // Tone selector
            Constraint::Min(0),    // Input/output panes
            Constraint::Length(3), // Prompt preview
            Constraint::Length(1), // Help bar / error
        ])
        .split(area);

    // Side by side on wide terminals, stacked on narrow ones
    let (input_area, output_area) = if area.width >= MIN_SPLIT_VIEW_WIDTH {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        (panes[0], panes[1])
    } else {
        let panes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        (panes[0], panes[1])
    };

    AppLayout {
        status_area: chunks[0],
        tone_area: chunks[1],
        input_area,
        output_area,
        preview_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let layout = compute_layout(frame.area());

    render_status(frame, layout.status_area, state);
    render_tone_selector(frame, layout.tone_area, state);
    render_input(frame, layout.input_area, state);
    render_output(frame, layout.output_area, state);
    render_preview(frame, layout.preview_area, state);

    if let Some(ref error) = state.workflow.error_message {
        error_bar(frame, layout.help_area, error);
    } else {
        help_bar(frame, layout.help_area, crate::input::KeyBindings::hints());
    }

    // Toasts stack upward from the bottom-right corner
    for (slot, toast) in state.toasts.iter().rev().enumerate() {
        toast_popup(
            frame,
            frame.area(),
            &toast.title,
            &toast.description,
            slot as u16,
        );
    }
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let right = match state.workflow.phase {
        Phase::Loading => format!("{} rewriting...", spinner_frame()),
        Phase::Success => "done".to_string(),
        _ => String::new(),
    };
    status_bar(frame, area, "ToneCraft", &right);
}

fn render_tone_selector(frame: &mut Frame, area: Rect, state: &AppState) {
    let selected = state.workflow.tone;

    let mut spans: Vec<Span> = vec![Span::styled(" ", Theme::text())];
    for tone in ALL_TONES {
        let style = if tone == selected {
            Theme::selected()
        } else {
            Theme::text_muted()
        };
        spans.push(Span::styled(format!(" {} ", tone.label()), style));
        spans.push(Span::styled(" ", Theme::text()));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            format!(" {}", selected.description()),
            Theme::text_muted(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(" Tone ", Theme::label()));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(
        " Your Email ({}/{}) ",
        state.workflow.char_count(),
        MAX_EMAIL_CHARS
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .title(Span::styled(title, Theme::label()));

    let paragraph = if state.workflow.source_text.is_empty() {
        Paragraph::new("Paste or type your email here...")
            .style(Theme::text_muted())
            .block(block)
    } else {
        // Trailing cursor marker; the editor is always focused
        let mut text = state.workflow.source_text.clone();
        text.push('▌');
        Paragraph::new(text)
            .style(Theme::text())
            .wrap(Wrap { trim: false })
            .block(block)
    };
    frame.render_widget(paragraph, area);
}

fn render_output(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(" Rewritten Email ", Theme::label()));

    let paragraph = match state.workflow.phase {
        Phase::Loading => Paragraph::new(format!(
            "{} Crafting your email...",
            spinner_frame()
        ))
        .style(Theme::text_loading())
        .block(block),
        _ if !state.workflow.rewritten_text.is_empty() => {
            Paragraph::new(state.workflow.rewritten_text.clone())
                .style(Theme::text())
                .wrap(Wrap { trim: false })
                .block(block)
        }
        _ => Paragraph::new("Your rewritten email will appear here.")
            .style(Theme::text_muted())
            .block(block),
    };
    frame.render_widget(paragraph, area);
}

fn render_preview(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(" Prompt ", Theme::label()));

    let max_width = area.width.saturating_sub(2) as usize;
    let paragraph = if state.workflow.prompt_preview.is_empty() {
        Paragraph::new("The prompt sent to the generator appears here.")
            .style(Theme::text_muted())
            .block(block)
    } else {
        Paragraph::new(truncate_string(&state.workflow.prompt_preview, max_width))
            .style(Theme::text_accent())
            .block(block)
    };
    frame.render_widget(paragraph, area);
}
