use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::grading::{GradedAnswer, Outcome, format_score};

const TEXT_PREVIEW_LENGTH: usize = 45;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app.graded().len());
    render_breakdown(frame, chunks[1], app.graded(), app.scroll());
    render_controls(frame, chunks[2]);
}

fn outcome_style(outcome: Outcome) -> (&'static str, Color) {
    match outcome {
        Outcome::Full => ("+", Color::Green),
        Outcome::Partial => ("~", Color::Yellow),
        Outcome::Zero => ("-", Color::Red),
        Outcome::Unanswered => ("?", Color::DarkGray),
    }
}

fn render_header(frame: &mut Frame, area: Rect, count: usize) {
    let content = vec![
        Line::from(Span::styled(
            "SCORES",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(format!("{} questions", count).fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_breakdown(frame: &mut Frame, area: Rect, graded: &[GradedAnswer], scroll: usize) {
    let lines: Vec<Line> = graded.iter().map(graded_line).collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll_offset(scroll), 0));
    frame.render_widget(widget, area);
}

fn graded_line(answer: &GradedAnswer) -> Line<'static> {
    let (symbol, color) = outcome_style(answer.outcome);
    let label = if answer.text.is_empty() {
        answer.question_id.clone()
    } else {
        truncate(&answer.text)
    };

    Line::from(vec![
        Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
        Span::styled(
            format!("{:>7} / {:<7}", format_score(answer.score), format_score(answer.value)),
            Style::default().fg(color).bold(),
        ),
        Span::styled(format!(" {:<16} ", answer.kind), Style::default().fg(Color::DarkGray)),
        Span::styled(label, Style::default().fg(Color::Gray)),
    ])
}

/// Paragraph scroll offsets are u16; longer lists pin to the last reachable row.
fn scroll_offset(scroll: usize) -> u16 {
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

fn truncate(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > TEXT_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(TEXT_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_saturates() {
        assert_eq!(scroll_offset(0), 0);
        assert_eq!(scroll_offset(65_535), u16::MAX);
        assert_eq!(scroll_offset(70_000), u16::MAX);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short"), "short");
        let long = "x".repeat(60);
        assert_eq!(truncate(&long).chars().count(), TEXT_PREVIEW_LENGTH + 3);
    }
}
