use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::app::state::AppState;
use ticklist_store::Task;

/// Render the task list filling the main area
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = if !state.tasks.is_empty() {
        let now = Utc::now();
        state
            .tasks
            .iter()
            .map(|task| task_item(task, now))
            .collect()
    } else {
        vec![
            ListItem::new(Line::from(vec![
                Span::styled("○ ", Style::default().fg(Color::Gray)),
                Span::raw("No tasks yet"),
            ])),
            ListItem::new(Line::from(vec![
                Span::styled("💡 ", Style::default().fg(Color::Cyan)),
                Span::styled("Press 'n' to create one", Style::default().fg(Color::Cyan)),
            ])),
        ]
    };

    let block = Block::default()
        .title("Tasks")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    if !state.tasks.is_empty() {
        list_state.select(Some(state.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn task_item(task: &Task, now: chrono::DateTime<Utc>) -> ListItem<'_> {
    let (r, g, b) = task.color.rgb();
    let marker = Span::styled("● ", Style::default().fg(Color::Rgb(r, g, b)));

    let checkbox = if task.completed { "[x] " } else { "[ ] " };

    let title_style = if task.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let deadline_style = if !task.completed && task.deadline < now {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![
        marker,
        Span::raw(checkbox),
        Span::styled(task.title.as_str(), title_style),
        Span::raw("  "),
        Span::styled(
            task.deadline.format("%Y-%m-%d").to_string(),
            deadline_style,
        ),
    ];
    if !task.description.is_empty() {
        spans.push(Span::styled(
            format!("  {}", task.description),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::DIM),
        ));
    }

    ListItem::new(Line::from(spans))
}
