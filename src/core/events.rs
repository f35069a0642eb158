// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Move keyboard focus to the next visible tab list
    NextList,

    /// Move keyboard focus to the previous visible tab list
    PreviousList,

    /// Step the determinate progress bar
    IncreaseProgress,
    DecreaseProgress,

    /// Flip the reduced-motion preference
    ToggleReducedMotion,

    /// Cycle the card type shown on the cards page
    CycleCardType,

    /// Key for the focused tab list (arrows, Home/End, Enter/Space)
    ListKey(KeyEvent),

    /// Pointer input, routed by position
    Mouse(MouseEvent),

    /// Terminal was resized; relayout on the next draw
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // List focus
            KeyCode::Tab => AppEvent::NextList,
            KeyCode::BackTab => AppEvent::PreviousList,

            // Page controls
            KeyCode::Char('+') | KeyCode::Char('=') => AppEvent::IncreaseProgress,
            KeyCode::Char('-') => AppEvent::DecreaseProgress,
            KeyCode::Char('m') => AppEvent::ToggleReducedMotion,
            KeyCode::Char('c') => AppEvent::CycleCardType,

            // Everything else goes to the focused list
            _ => AppEvent::ListKey(key),
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(_) | MouseEventKind::Up(_) | MouseEventKind::Moved => AppEvent::Mouse(mouse),
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_global_keys() {
        assert_eq!(EventHandler::handle(press(KeyCode::Char('q'))), AppEvent::Quit);
        assert_eq!(
            EventHandler::handle(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))),
            AppEvent::Quit
        );
        assert_eq!(EventHandler::handle(press(KeyCode::Tab)), AppEvent::NextList);
        assert_eq!(EventHandler::handle(press(KeyCode::Char('c'))), AppEvent::CycleCardType);
    }

    #[test]
    fn test_navigation_keys_reach_the_list() {
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(EventHandler::handle(Event::Key(right)), AppEvent::ListKey(right));
    }

    #[test]
    fn test_releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(EventHandler::handle(Event::Key(release)), AppEvent::None);
    }

    #[test]
    fn test_scroll_is_ignored() {
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(EventHandler::handle(Event::Mouse(scroll)), AppEvent::None);

        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..scroll
        };
        assert_eq!(EventHandler::handle(Event::Mouse(down)), AppEvent::Mouse(down));
    }
}
