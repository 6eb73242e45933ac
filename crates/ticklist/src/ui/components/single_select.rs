/// **Input**: Option list plus keyboard events for navigation/confirmation.
/// **Output**: Selected value on confirm and list rendering via ratatui.
/// **Position**: Reusable TUI component for single-choice selection.
/// **Update**: Revisit when selection behavior or styling changes.
use std::fmt::Display;

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

#[derive(Debug, Clone)]
pub struct SingleSelect<T> {
    title: String,
    options: Vec<T>,
    cursor: usize,
}

impl<T> SingleSelect<T>
where
    T: Clone + Display,
{
    pub fn new(title: impl Into<String>, options: Vec<T>) -> Self {
        Self {
            title: title.into(),
            options,
            cursor: 0,
        }
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor
    }

    /// Up/Down (or j/k) move the cursor; Enter confirms and returns the value.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<T> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                None
            }
            KeyCode::Enter => self.confirm(),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let items = if self.options.is_empty() {
            vec![ListItem::new(Line::from("No options"))]
        } else {
            self.options
                .iter()
                .map(|option| ListItem::new(Line::from(option.to_string())))
                .collect()
        };

        let border_color = if focused { Color::Yellow } else { Color::Blue };
        let block = Block::default()
            .title(self.title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        if !self.options.is_empty() {
            state.select(Some(self.cursor));
        }

        frame.render_stateful_widget(list, area, &mut state);
    }

    fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_down(&mut self) {
        if !self.options.is_empty() && self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }

    fn confirm(&mut self) -> Option<T> {
        self.options.get(self.cursor).cloned()
    }
}
