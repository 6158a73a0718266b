//! Common UI widgets and utilities

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme::Theme;

pub fn status_bar(frame: &mut Frame, area: Rect, left: &str, right: &str) {
    use unicode_width::UnicodeWidthStr;

    let left_text = format!(" {}", left);
    let gap = (area.width as usize)
        .saturating_sub(left_text.width())
        .saturating_sub(right.width() + 1);

    let line = Line::from(vec![
        Span::styled(left_text, Theme::status_bar()),
        Span::styled(" ".repeat(gap), Theme::status_bar()),
        Span::styled(format!("{} ", right), Theme::status_bar()),
    ]);
    frame.render_widget(Paragraph::new(line).style(Theme::status_bar()), area);
}

pub fn error_bar(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph =
        Paragraph::new(format!(" Error: {} ", message)).style(Theme::error_bar());
    frame.render_widget(paragraph, area);
}

pub fn help_bar(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    use unicode_width::UnicodeWidthStr;

    let available_width = area.width as usize;

    // Width of each hint including its separator
    let hint_widths: Vec<usize> = hints
        .iter()
        .enumerate()
        .map(|(i, (key, desc))| {
            let base = format!(" {} ", key).width() + desc.width();
            if i < hints.len() - 1 { base + 3 } else { base + 1 }
        })
        .collect();

    // Fit as many hints as the bar allows
    let mut total_width = 0;
    let mut hints_to_show = 0;
    for width in &hint_widths {
        if total_width + width <= available_width {
            total_width += width;
            hints_to_show += 1;
        } else {
            break;
        }
    }
    hints_to_show = hints_to_show.max(1).min(hints.len());

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().take(hints_to_show).enumerate() {
        spans.push(Span::styled(format!(" {} ", key), Theme::help_key()));
        spans.push(Span::styled(desc.to_string(), Theme::help_desc()));
        if i < hints_to_show - 1 {
            spans.push(Span::styled(" │ ", Theme::help_desc()));
        }
    }
    spans.push(Span::styled(" ", Theme::help_desc()));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Theme::status_bar()),
        area,
    );
}

/// Toast popup anchored to the bottom-right corner, above the help bar.
pub fn toast_popup(frame: &mut Frame, area: Rect, title: &str, description: &str, slot: u16) {
    use unicode_width::UnicodeWidthStr;

    let width = (title.width().max(description.width()) as u16 + 4)
        .min(area.width.saturating_sub(2));
    let height = 4;

    let x = area.width.saturating_sub(width + 1);
    let y = area
        .height
        .saturating_sub(2 + (slot + 1) * height);
    let popup = Rect::new(x, y, width, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .title(Span::styled(format!(" {} ", title), Theme::text_accent()));
    let paragraph = Paragraph::new(description.to_string())
        .style(Theme::text())
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, popup);
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}
