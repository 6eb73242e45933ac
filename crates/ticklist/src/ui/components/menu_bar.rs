use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Render the menu bar at the bottom of the screen
pub fn render(frame: &mut Frame, area: Rect) {
    let menu_items = vec![
        ("n", "New"),
        ("Space", "Toggle"),
        ("d", "Delete"),
        ("r", "Reload"),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    let mut spans = vec![];

    for (i, (key, desc)) in menu_items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }

        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));

        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Cyan),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
