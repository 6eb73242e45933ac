use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::app::state::{AppState, ModalType};

pub mod components;

/// Main render function - called every frame
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Split the screen into main sections
    let [status_area, main_area, menu_area] = Layout::vertical([
        Constraint::Length(3), // Status bar
        Constraint::Fill(1),   // Task list
        Constraint::Length(1), // Menu bar
    ])
    .areas(area);

    components::status_bar::render(frame, status_area, state);
    components::task_list::render(frame, main_area, state);
    components::menu_bar::render(frame, menu_area);

    // Render modal on top if present
    if let Some(ref modal) = state.modal {
        match modal {
            ModalType::Confirm { title, message, .. } => {
                components::confirm::render(frame, area, title, message);
            }
            ModalType::TaskForm { form } => {
                components::task_form::render(frame, area, form);
            }
        }
    }

    // Render help overlay if shown
    if state.show_help {
        components::help::render(frame, area);
    }
}
