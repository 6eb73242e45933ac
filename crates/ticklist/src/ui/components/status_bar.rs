use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::{AppMode, AppState};

/// Render the status bar at the top of the screen
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::Blue));

    let mode_str = match state.mode {
        AppMode::Normal => "NORMAL",
        AppMode::Insert => "INSERT",
        AppMode::Dialog => "DIALOG",
    };

    let open = state.tasks.iter().filter(|t| !t.completed).count();
    let done = state.tasks.len() - open;

    let mut title_spans = vec![
        Span::styled(
            "ticklist",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Mode: {}", mode_str),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{} open, {} done", open, done),
            Style::default().fg(Color::Green),
        ),
    ];

    if state.is_loading {
        title_spans.push(Span::raw(" | "));
        title_spans.push(Span::styled("Loading...", Style::default().fg(Color::Red)));
    }

    let mut lines = vec![Line::from(title_spans)];

    // Store errors take precedence over transient status messages
    if let Some(ref error) = state.error {
        lines.push(Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(error.clone(), Style::default().fg(Color::Red)),
        ]));
    } else if let Some(ref msg) = state.status_message {
        lines.push(Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Blue)),
            Span::styled(msg.clone(), Style::default().fg(Color::Yellow)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
