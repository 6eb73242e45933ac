pub mod event;
pub mod state;

use crate::app::event::AppEvent;
use crate::app::state::{AppMode, AppState};
use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self as crossterm_event, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::sync::Arc;
use ticklist_store::TaskStore;
use tokio::sync::{RwLock, mpsc};

const TICK_RATE: u64 = 250;

pub struct App {
    pub state: Arc<RwLock<AppState>>,
    pub event_tx: mpsc::Sender<AppEvent>,
    pub event_rx: mpsc::Receiver<AppEvent>,
    pub should_exit: bool,
}

impl App {
    pub async fn new(store: Arc<TaskStore>) -> Result<Self> {
        let state = Arc::new(RwLock::new(AppState::new(store).await?));
        let (event_tx, event_rx) = mpsc::channel(100);

        Ok(Self {
            state,
            event_tx,
            event_rx,
            should_exit: false,
        })
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(TICK_RATE));
        let event_tx = self.event_tx.clone();
        let _input_task = tokio::task::spawn_blocking(move || {
            loop {
                match crossterm_event::read() {
                    Ok(Event::Key(key)) => {
                        if key.kind == KeyEventKind::Press
                            && event_tx.blocking_send(AppEvent::Key(key)).is_err()
                        {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        });

        self.draw(terminal).await?;

        while !self.should_exit {
            tokio::select! {
                _ = interval.tick() => {
                    self.handle_event(AppEvent::Tick).await?;
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event).await?;
                }
            }

            self.draw(terminal).await?;
        }

        Ok(())
    }

    async fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Key(key) => {
                let mut state = self.state.write().await;
                match state.mode {
                    AppMode::Normal => {
                        Self::handle_normal_mode(&mut state, key, &mut self.should_exit).await?;
                    }
                    AppMode::Insert => Self::handle_insert_mode(&mut state, key).await?,
                    AppMode::Dialog => Self::handle_dialog_mode(&mut state, key).await?,
                }
            }
            AppEvent::Tick => {
                let mut state = self.state.write().await;
                state.update_tick();
            }
        }

        Ok(())
    }

    async fn handle_normal_mode(
        state: &mut AppState,
        key: KeyEvent,
        should_exit: &mut bool,
    ) -> Result<()> {
        use KeyCode::*;

        // While the help overlay is up, any key dismisses it
        if state.show_help {
            state.close_help();
            return Ok(());
        }

        match key.code {
            Char('q') | Esc => {
                *should_exit = true;
            }
            Char('j') | Down => {
                state.next_item();
            }
            Char('k') | Up => {
                state.previous_item();
            }
            Char('g') => {
                state.handle_g_prefix();
            }
            Char('G') => {
                state.jump_to_last_item();
            }
            Char(' ') | Enter => {
                state.toggle_selected_task().await?;
            }
            Char('n') => {
                state.create_new_task();
            }
            Char('d') => {
                state.delete_selected_task();
            }
            Char('r') => {
                state.refresh_tasks().await;
                if state.error.is_none() {
                    state.status_message = Some("Tasks reloaded".to_string());
                }
            }
            F(1) | Char('?') => {
                state.show_help();
            }
            _ => {}
        }

        if !matches!(key.code, Char('g')) {
            state.pending_g_ticks = 0;
        }

        Ok(())
    }

    async fn handle_insert_mode(state: &mut AppState, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc if !state.date_picker_open() => {
                state.close_task_form();
            }
            _ => {
                state.handle_form_input(key).await?;
            }
        }
        Ok(())
    }

    async fn handle_dialog_mode(state: &mut AppState, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => {
                state.close_dialog(false).await?;
            }
            KeyCode::Char('y') | KeyCode::Enter => {
                state.close_dialog(true).await?;
            }
            _ => {}
        }
        Ok(())
    }

    async fn draw(&self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        let state = self.state.read().await;
        terminal.draw(|frame| {
            crate::ui::render(frame, &state);
        })?;
        Ok(())
    }
}
