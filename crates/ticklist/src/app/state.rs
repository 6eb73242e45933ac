/// **Input**: Task store access, key events routed by the application loop.
/// **Output**: Mutated AppState for UI rendering and persisted tasks.
/// **Position**: TUI application state and input-handling coordinator.
/// **Update**: Add task form modal state and input handling.
/// **Update**: Add deletion confirmation and store removal.
/// **Update**: Route date picker keys while the popup is open.
use crate::ui::components::task_form::{TaskField, TaskForm};
use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use ticklist_store::{NewTask, Task, TaskStore};

/// Application mode - determines how keyboard input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal mode - vi-like navigation commands
    Normal,
    /// Insert mode - typing into the task form
    Insert,
    /// Dialog mode - confirmation dialog is open
    Dialog,
}

/// Confirmation actions that can be triggered from dialogs
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    /// Delete a specific task by ID
    DeleteTask { task_id: String },
}

/// Modal types that can be displayed
#[derive(Debug, Clone)]
pub enum ModalType {
    /// Confirmation dialog with message and action context
    Confirm {
        title: String,
        message: String,
        action: ConfirmAction,
    },
    /// Add-task form dialog
    TaskForm { form: TaskForm },
}

/// Ticks a pending 'g' prefix stays armed (one second at the 250ms tick rate)
const G_PREFIX_TICKS: u8 = 4;

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Current input mode
    pub mode: AppMode,
    /// Currently selected index in the task list
    pub selected_index: usize,
    /// Status message to display to user
    pub status_message: Option<String>,
    /// Whether help overlay is shown
    pub show_help: bool,
    /// Current modal (if any)
    pub modal: Option<ModalType>,
    /// Reference to the task store
    store: Arc<TaskStore>,
    /// Cached tasks for synchronous access in render
    pub tasks: Vec<Task>,
    /// Whether a fetch from the store is in flight
    pub is_loading: bool,
    /// Last fetch error reported by the store
    pub error: Option<String>,
    /// Pending 'g' key prefix state (number of ticks remaining before timeout)
    pub pending_g_ticks: u8,
}

impl AppState {
    /// Create new application state with the task cache primed
    pub async fn new(store: Arc<TaskStore>) -> Result<Self> {
        let mut state = Self {
            mode: AppMode::Normal,
            selected_index: 0,
            status_message: Some("Press F1 for help".to_string()),
            show_help: false,
            modal: None,
            store,
            tasks: Vec::new(),
            is_loading: false,
            error: None,
            pending_g_ticks: 0,
        };
        state.refresh_tasks().await;
        Ok(state)
    }

    /// Reload the task cache from the store
    pub async fn refresh_tasks(&mut self) {
        self.is_loading = true;
        match self.store.list_tasks().await {
            Ok(tasks) => {
                self.tasks = tasks;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to list tasks");
                self.error = Some(err.to_string());
            }
        }
        self.is_loading = false;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    /// Move to next task in the list
    pub fn next_item(&mut self) {
        if !self.tasks.is_empty() && self.selected_index < self.tasks.len() - 1 {
            self.selected_index += 1;
        }
    }

    /// Move to previous task in the list
    pub fn previous_item(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Jump to first task in the list
    pub fn jump_to_first_item(&mut self) {
        self.selected_index = 0;
        self.pending_g_ticks = 0; // Clear any pending 'g' prefix
    }

    /// Jump to last task in the list
    pub fn jump_to_last_item(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = self.tasks.len() - 1;
        }
        self.pending_g_ticks = 0; // Clear any pending 'g' prefix
    }

    /// Handle a 'g' key press: a second press within the window jumps to the top
    pub fn handle_g_prefix(&mut self) {
        if self.pending_g_ticks > 0 {
            self.jump_to_first_item();
        } else {
            self.pending_g_ticks = G_PREFIX_TICKS;
        }
    }

    /// Update on tick (called periodically)
    pub fn update_tick(&mut self) {
        // Decrement pending 'g' key prefix timer if active
        if self.pending_g_ticks > 0 {
            self.pending_g_ticks -= 1;
        }
    }

    /// Show help
    pub fn show_help(&mut self) {
        self.show_help = true;
    }

    /// Close help
    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    /// Open the add-task modal with default field values
    pub fn create_new_task(&mut self) {
        self.mode = AppMode::Insert;
        self.modal = Some(ModalType::TaskForm {
            form: TaskForm::new(),
        });
        self.status_message = Some("Creating new task...".to_string());
    }

    /// Toggle completion of the selected task
    pub async fn toggle_selected_task(&mut self) -> Result<()> {
        let Some(task) = self.tasks.get(self.selected_index) else {
            self.status_message = Some("No task selected".to_string());
            return Ok(());
        };
        let task_id = task.id.clone();
        let title = task.title.clone();
        let was_completed = task.completed;

        match self
            .store
            .update_task(&task_id, |t| t.completed = !t.completed)
            .await
        {
            Ok(()) => {
                self.refresh_tasks().await;
                self.status_message = Some(if was_completed {
                    format!("Reopened '{title}'")
                } else {
                    format!("Completed '{title}'")
                });
            }
            Err(err) => {
                self.status_message = Some(err.to_string());
            }
        }
        Ok(())
    }

    /// Ask for confirmation before deleting the selected task
    pub fn delete_selected_task(&mut self) {
        if let Some(task) = self.tasks.get(self.selected_index) {
            let message = format!("Delete task '{}'", task.title);
            self.mode = AppMode::Dialog;
            self.modal = Some(ModalType::Confirm {
                title: "Delete Task".to_string(),
                message,
                action: ConfirmAction::DeleteTask {
                    task_id: task.id.clone(),
                },
            });
            self.status_message = Some("Confirm deletion...".to_string());
        } else {
            self.status_message = Some("No task selected".to_string());
        }
    }

    /// Close the confirmation dialog, running its action when confirmed
    pub async fn close_dialog(&mut self, confirmed: bool) -> Result<()> {
        let action = match self.modal.take() {
            Some(ModalType::Confirm { action, .. }) => Some(action),
            other => {
                self.modal = other;
                None
            }
        };
        self.mode = AppMode::Normal;

        if confirmed {
            match action {
                Some(ConfirmAction::DeleteTask { task_id }) => {
                    let title = self
                        .tasks
                        .iter()
                        .find(|t| t.id == task_id)
                        .map(|t| t.title.clone())
                        .unwrap_or_else(|| task_id.clone());
                    match self.store.delete_task(&task_id).await {
                        Ok(()) => {
                            self.refresh_tasks().await;
                            self.status_message = Some(format!("Deleted '{title}'"));
                        }
                        Err(err) => {
                            self.status_message = Some(err.to_string());
                        }
                    }
                }
                None => {}
            }
        }
        Ok(())
    }

    /// Whether the add-task form currently has the date picker open
    pub fn date_picker_open(&self) -> bool {
        matches!(
            self.modal.as_ref(),
            Some(ModalType::TaskForm { form }) if form.date_picker.is_some()
        )
    }

    /// Discard the form and return to the list
    pub fn close_task_form(&mut self) {
        self.modal = None;
        self.mode = AppMode::Normal;
    }

    fn set_form_error(&mut self, message: String) {
        if let Some(ModalType::TaskForm { form }) = self.modal.as_mut() {
            form.error_message = Some(message);
        }
    }

    /// Handle form input (called when in Insert mode)
    pub async fn handle_form_input(&mut self, key: KeyEvent) -> Result<()> {
        let mut pending_draft: Option<NewTask> = None;

        if let Some(ModalType::TaskForm { form }) = self.modal.as_mut() {
            // The date picker owns the keys while it is open
            if let Some(picker) = form.date_picker.as_mut() {
                if key.code == KeyCode::Esc {
                    form.date_picker = None;
                } else if let Some(date) = picker.handle_key(key) {
                    form.set_deadline_date(date);
                    form.date_picker = None;
                }
                return Ok(());
            }

            match key.code {
                KeyCode::Tab => {
                    form.focused_field = form.focused_field.next();
                    form.error_message = None;
                }
                KeyCode::BackTab => {
                    form.focused_field = form.focused_field.prev();
                    form.error_message = None;
                }
                KeyCode::Down | KeyCode::Up => {
                    if form.focused_field == TaskField::Color {
                        let selected = form.color_select.handle_key(key);
                        if let Some(value) = selected {
                            form.color = value;
                        } else if let Some(option) = form
                            .color_select
                            .options()
                            .get(form.color_select.cursor_index())
                        {
                            form.color = *option;
                        }
                    } else if matches!(key.code, KeyCode::Down) {
                        form.focused_field = form.focused_field.next();
                    } else {
                        form.focused_field = form.focused_field.prev();
                    }
                    form.error_message = None;
                }
                KeyCode::Backspace => {
                    if form.focused_field == TaskField::Title {
                        form.title.pop();
                    }
                    form.error_message = None;
                }
                KeyCode::Enter => match form.focused_field {
                    TaskField::Color => {
                        if let Some(value) = form.color_select.handle_key(key) {
                            form.color = value;
                        }
                        form.error_message = None;
                    }
                    TaskField::Deadline => {
                        form.open_date_picker();
                    }
                    TaskField::Title => match form.to_draft() {
                        Ok(draft) => {
                            pending_draft = Some(draft);
                            form.error_message = None;
                        }
                        Err(message) => {
                            form.error_message = Some(message);
                        }
                    },
                },
                KeyCode::Char('j') | KeyCode::Char('k')
                    if form.focused_field == TaskField::Color =>
                {
                    let selected = form.color_select.handle_key(key);
                    if let Some(value) = selected {
                        form.color = value;
                    } else if let Some(option) = form
                        .color_select
                        .options()
                        .get(form.color_select.cursor_index())
                    {
                        form.color = *option;
                    }
                    form.error_message = None;
                }
                KeyCode::Char(ch)
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT) =>
                {
                    if form.focused_field == TaskField::Title {
                        form.title.push(ch);
                    }
                    form.error_message = None;
                }
                _ => {}
            }
        }

        if let Some(draft) = pending_draft {
            match self.store.add_task(draft).await {
                Ok(task) => {
                    self.refresh_tasks().await;
                    self.status_message = Some(format!("Added '{}'", task.title));
                    self.close_task_form();
                }
                Err(err) => {
                    self.set_form_error(err.to_string());
                }
            }
        }
        Ok(())
    }
}
