/// **Input**: Keyboard events and the deadline date the form opened with.
/// **Output**: A confirmed calendar date, plus the month-grid popup rendering.
/// **Position**: Date selection component embedded in the add-task form.
/// **Update**: Revisit when picker key bindings or the grid layout change.
use chrono::{Datelike, Days, Months, NaiveDate, Utc};
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Month-grid calendar popup. Holds only a cursor date; the caller keeps the
/// deadline until a selection is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    cursor: NaiveDate,
}

impl DatePicker {
    pub fn new(initial: NaiveDate) -> Self {
        Self { cursor: initial }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Move the cursor, or return the confirmed date on Enter. Esc is the
    /// caller's concern (it dismisses the picker without a selection).
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<NaiveDate> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_days(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_days(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_days(-7),
            KeyCode::Down | KeyCode::Char('j') => self.move_days(7),
            KeyCode::Char('[') | KeyCode::PageUp => self.move_months(-1),
            KeyCode::Char(']') | KeyCode::PageDown => self.move_months(1),
            KeyCode::Char('t') => self.cursor = Utc::now().date_naive(),
            KeyCode::Enter => return Some(self.cursor),
            _ => {}
        }
        None
    }

    fn move_days(&mut self, days: i64) {
        let moved = if days < 0 {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_add_days(Days::new(days as u64))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    // chrono's month arithmetic clamps to the end of the target month
    // (Jan 31 + 1 month = Feb 28/29), which is exactly what we want.
    fn move_months(&mut self, months: i32) {
        let moved = if months < 0 {
            self.cursor
                .checked_sub_months(Months::new(months.unsigned_abs()))
        } else {
            self.cursor.checked_add_months(Months::new(months as u32))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    /// Render the calendar popup on top of the form.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(36, 14, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", self.cursor.format("%B %Y")))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let today = Utc::now().date_naive();
        let first = self.cursor.with_day(1).unwrap_or(self.cursor);
        let leading = first.weekday().num_days_from_sunday() as usize;
        let day_count = days_in_month(first);

        let mut content = vec![Line::from(Span::styled(
            " Su Mo Tu We Th Fr Sa",
            Style::default().fg(Color::Gray),
        ))];

        let mut spans: Vec<Span> = vec![Span::raw("   ".repeat(leading))];
        for day in 1..=day_count {
            let date = first.with_day(day).unwrap_or(first);
            let style = if date == self.cursor {
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if date == today {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!("{day:2}"), style));

            if date.weekday().num_days_from_sunday() == 6 {
                content.push(Line::from(std::mem::take(&mut spans)));
            }
        }
        if !spans.is_empty() {
            content.push(Line::from(spans));
        }

        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled("←↑↓→ ", Style::default().fg(Color::Cyan)),
            Span::styled("move  ", Style::default().fg(Color::Gray)),
            Span::styled("[ ] ", Style::default().fg(Color::Cyan)),
            Span::styled("month  ", Style::default().fg(Color::Gray)),
            Span::styled("t ", Style::default().fg(Color::Cyan)),
            Span::styled("today", Style::default().fg(Color::Gray)),
        ]));
        content.push(Line::from(vec![
            Span::styled("Enter ", Style::default().fg(Color::Cyan)),
            Span::styled("select  ", Style::default().fg(Color::Gray)),
            Span::styled("Esc ", Style::default().fg(Color::Cyan)),
            Span::styled("cancel", Style::default().fg(Color::Gray)),
        ]));

        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Left);

        frame.render_widget(paragraph, popup_area);
    }
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Create a centered rect with a fixed size for the calendar popup
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn arrows_move_by_day_and_week() {
        let mut picker = DatePicker::new(date(2025, 6, 15));

        picker.handle_key(key_event(KeyCode::Right));
        assert_eq!(picker.cursor(), date(2025, 6, 16));

        picker.handle_key(key_event(KeyCode::Left));
        assert_eq!(picker.cursor(), date(2025, 6, 15));

        picker.handle_key(key_event(KeyCode::Down));
        assert_eq!(picker.cursor(), date(2025, 6, 22));

        picker.handle_key(key_event(KeyCode::Up));
        assert_eq!(picker.cursor(), date(2025, 6, 15));
    }

    #[test]
    fn day_moves_cross_month_boundaries() {
        let mut picker = DatePicker::new(date(2025, 1, 31));
        picker.handle_key(key_event(KeyCode::Char('l')));
        assert_eq!(picker.cursor(), date(2025, 2, 1));

        picker.handle_key(key_event(KeyCode::Char('h')));
        assert_eq!(picker.cursor(), date(2025, 1, 31));
    }

    #[test]
    fn month_move_clamps_to_month_end() {
        let mut picker = DatePicker::new(date(2025, 1, 31));
        picker.handle_key(key_event(KeyCode::Char(']')));
        assert_eq!(picker.cursor(), date(2025, 2, 28));

        let mut picker = DatePicker::new(date(2025, 3, 31));
        picker.handle_key(key_event(KeyCode::Char('[')));
        assert_eq!(picker.cursor(), date(2025, 2, 28));
    }

    #[test]
    fn month_move_respects_leap_years() {
        let mut picker = DatePicker::new(date(2024, 1, 31));
        picker.handle_key(key_event(KeyCode::PageDown));
        assert_eq!(picker.cursor(), date(2024, 2, 29));
    }

    #[test]
    fn t_jumps_to_today() {
        let mut picker = DatePicker::new(date(2000, 1, 1));
        picker.handle_key(key_event(KeyCode::Char('t')));
        assert_eq!(picker.cursor(), Utc::now().date_naive());
    }

    #[test]
    fn enter_confirms_cursor_date() {
        let mut picker = DatePicker::new(date(2025, 6, 15));
        picker.handle_key(key_event(KeyCode::Down));
        let picked = picker.handle_key(key_event(KeyCode::Enter));
        assert_eq!(picked, Some(date(2025, 6, 22)));
    }

    #[test]
    fn movement_keys_do_not_confirm() {
        let mut picker = DatePicker::new(date(2025, 6, 15));
        assert_eq!(picker.handle_key(key_event(KeyCode::Down)), None);
        assert_eq!(picker.handle_key(key_event(KeyCode::Char(']'))), None);
        assert_eq!(picker.handle_key(key_event(KeyCode::Char('x'))), None);
    }

    #[test]
    fn days_in_month_handles_all_lengths() {
        assert_eq!(days_in_month(date(2025, 1, 1)), 31);
        assert_eq!(days_in_month(date(2025, 2, 1)), 28);
        assert_eq!(days_in_month(date(2024, 2, 1)), 29);
        assert_eq!(days_in_month(date(2025, 4, 1)), 30);
    }
}
