use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Render the help overlay showing all keyboard shortcuts
pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help - Keyboard Shortcuts ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let content = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "Navigation",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  j / ↓      ", Style::default().fg(Color::Cyan)),
            Span::raw("Move selection down"),
        ]),
        Line::from(vec![
            Span::styled("  k / ↑      ", Style::default().fg(Color::Cyan)),
            Span::raw("Move selection up"),
        ]),
        Line::from(vec![
            Span::styled("  gg / G     ", Style::default().fg(Color::Cyan)),
            Span::raw("Jump to first / last task"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Tasks",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Space/Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" Toggle completion"),
        ]),
        Line::from(vec![
            Span::styled("  n          ", Style::default().fg(Color::Cyan)),
            Span::raw("Add a new task"),
        ]),
        Line::from(vec![
            Span::styled("  d          ", Style::default().fg(Color::Cyan)),
            Span::raw("Delete selected task"),
        ]),
        Line::from(vec![
            Span::styled("  r          ", Style::default().fg(Color::Cyan)),
            Span::raw("Reload tasks from disk"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Add-Task Form",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Tab / ↑↓   ", Style::default().fg(Color::Cyan)),
            Span::raw("Switch fields"),
        ]),
        Line::from(vec![
            Span::styled("  Enter      ", Style::default().fg(Color::Cyan)),
            Span::raw("Save (on Title) / open calendar (on Deadline)"),
        ]),
        Line::from(vec![
            Span::styled("  Esc        ", Style::default().fg(Color::Cyan)),
            Span::raw("Discard the form"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q / Esc    ", Style::default().fg(Color::Cyan)),
            Span::raw("Quit application"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close...",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )]),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rect for popups
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
