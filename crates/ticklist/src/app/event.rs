use ratatui::crossterm::event::KeyEvent;

/// Events consumed by the application loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic timer tick
    Tick,
    /// Keyboard input
    Key(KeyEvent),
}
