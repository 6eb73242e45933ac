/// **Input**: `NewTask` draft fields and ratatui layout/style primitives.
/// **Output**: `TaskForm` state and `render` function for the add-task dialog.
/// **Position**: TUI component for the add-task modal.
/// **Update**: Revisit when form fields or validation rules change.
use chrono::{DateTime, NaiveDate, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::components::date_picker::DatePicker;
use crate::ui::components::single_select::SingleSelect;
use ticklist_store::{ColorTag, NewTask, PALETTE};

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Deadline,
    Color,
}

impl TaskField {
    pub fn next(self) -> Self {
        match self {
            TaskField::Title => TaskField::Deadline,
            TaskField::Deadline => TaskField::Color,
            TaskField::Color => TaskField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            TaskField::Title => TaskField::Color,
            TaskField::Deadline => TaskField::Title,
            TaskField::Color => TaskField::Deadline,
        }
    }
}

/// Ephemeral add-task form state. Lives only while the modal is open.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub title: String,
    pub deadline: DateTime<Utc>,
    pub color: ColorTag,
    pub color_select: SingleSelect<ColorTag>,
    pub date_picker: Option<DatePicker>,
    pub error_message: Option<String>,
    pub focused_field: TaskField,
}

impl TaskForm {
    /// Defaults: empty title, deadline now, first palette color.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            deadline: Utc::now(),
            color: ColorTag::default(),
            color_select: SingleSelect::new("Color", PALETTE.to_vec()),
            date_picker: None,
            error_message: None,
            focused_field: TaskField::Title,
        }
    }

    /// Replace the calendar date of the deadline, keeping its time of day.
    pub fn set_deadline_date(&mut self, date: NaiveDate) {
        self.deadline = date.and_time(self.deadline.time()).and_utc();
    }

    /// Open the calendar popup seeded with the current deadline date.
    pub fn open_date_picker(&mut self) {
        self.date_picker = Some(DatePicker::new(self.deadline.date_naive()));
    }

    /// Build the draft handed to the store. Rejects an empty trimmed title;
    /// the title itself is submitted verbatim.
    pub fn to_draft(&self) -> Result<NewTask, String> {
        if self.title.trim().is_empty() {
            return Err("title cannot be empty".to_string());
        }
        Ok(NewTask {
            title: self.title.clone(),
            description: String::new(),
            deadline: self.deadline,
            color: self.color,
            completed: false,
        })
    }
}

/// Render the add-task dialog
pub fn render(frame: &mut Frame, area: Rect, form: &TaskForm) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" New Task ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [title_area, deadline_area, color_area, error_area, instructions_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);

    // Title field
    let title_style = field_style(form.focused_field == TaskField::Title);
    let mut title_spans = vec![
        Span::styled("Title:    ", title_style),
        Span::raw(&form.title),
    ];
    if form.focused_field == TaskField::Title {
        title_spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }
    frame.render_widget(Paragraph::new(Line::from(title_spans)), title_area);

    // Deadline field
    let deadline_style = field_style(form.focused_field == TaskField::Deadline);
    let mut deadline_spans = vec![
        Span::styled("Deadline: ", deadline_style),
        Span::raw(form.deadline.format("%Y-%m-%d %H:%M").to_string()),
    ];
    if form.focused_field == TaskField::Deadline {
        deadline_spans.push(Span::styled(
            "  (Enter opens calendar)",
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(deadline_spans)), deadline_area);

    // Color field as an embedded single-select over the palette
    form.color_select
        .render(frame, color_area, form.focused_field == TaskField::Color);

    // Error message if any
    if let Some(ref error) = form.error_message {
        let error_line = Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(error, Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(Paragraph::new(error_line), error_area);
    }

    // Instructions
    let instructions = Line::from(vec![
        Span::styled("Tab/↑↓ ", Style::default().fg(Color::Cyan)),
        Span::styled("switch fields  ", Style::default().fg(Color::Gray)),
        Span::styled("Enter ", Style::default().fg(Color::Cyan)),
        Span::styled("save  ", Style::default().fg(Color::Gray)),
        Span::styled("Esc ", Style::default().fg(Color::Cyan)),
        Span::styled("cancel", Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        instructions_area,
    );

    // Calendar popup on top while it is open
    if let Some(ref picker) = form.date_picker {
        picker.render(frame, area);
    }
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Timelike};

    #[test]
    fn new_form_starts_from_defaults() {
        let before = Utc::now();
        let form = TaskForm::new();
        assert!(form.title.is_empty());
        assert_eq!(form.color, ColorTag::Red);
        assert!(form.deadline >= before);
        assert!(form.date_picker.is_none());
        assert!(form.error_message.is_none());
        assert_eq!(form.focused_field, TaskField::Title);
    }

    #[test]
    fn field_cycle_wraps_both_ways() {
        assert_eq!(TaskField::Title.next(), TaskField::Deadline);
        assert_eq!(TaskField::Deadline.next(), TaskField::Color);
        assert_eq!(TaskField::Color.next(), TaskField::Title);

        assert_eq!(TaskField::Title.prev(), TaskField::Color);
        assert_eq!(TaskField::Color.prev(), TaskField::Deadline);
        assert_eq!(TaskField::Deadline.prev(), TaskField::Title);
    }

    #[test]
    fn to_draft_rejects_empty_and_whitespace_titles() {
        let mut form = TaskForm::new();
        assert!(form.to_draft().is_err());

        form.title = "   \t ".to_string();
        assert!(form.to_draft().is_err());
    }

    #[test]
    fn to_draft_submits_title_verbatim() {
        let mut form = TaskForm::new();
        form.title = "  call mom  ".to_string();
        form.color = ColorTag::Blue;

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.title, "  call mom  ");
        assert_eq!(draft.description, "");
        assert_eq!(draft.deadline, form.deadline);
        assert_eq!(draft.color, ColorTag::Blue);
        assert!(!draft.completed);
    }

    #[test]
    fn set_deadline_date_keeps_time_of_day() {
        let mut form = TaskForm::new();
        let time = NaiveTime::from_hms_opt(14, 30, 45).unwrap();
        form.deadline = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_time(time)
            .and_utc();

        form.set_deadline_date(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap());

        assert_eq!(
            form.deadline.date_naive(),
            NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()
        );
        assert_eq!(form.deadline.hour(), 14);
        assert_eq!(form.deadline.minute(), 30);
        assert_eq!(form.deadline.second(), 45);
    }

    #[test]
    fn picker_opens_seeded_with_deadline_date() {
        let mut form = TaskForm::new();
        form.deadline = NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap())
            .and_utc();

        form.open_date_picker();
        assert_eq!(
            form.date_picker.unwrap().cursor(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
    }
}
