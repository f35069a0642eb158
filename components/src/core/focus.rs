// Focus visibility policy
// Keyboard-driven focus gets a strong ring, pointer-driven focus does not

use crossterm::event::KeyCode;

/// Decides whether a strong focus indicator should render right now
pub trait FocusVisibilityPolicy {
    /// A pointer was pressed somewhere; pointer focus should stay quiet
    fn pointer_press(&mut self);

    /// A key went down; navigation keys switch back to keyboard modality
    fn keydown(&mut self, key: KeyCode);

    fn should_show_strong_focus(&self) -> bool;
}

/// Default policy tracking the modality of the most recent interaction
#[derive(Debug, Clone)]
pub struct StrongFocus {
    visible: bool,
    always_strong: bool,
}

impl StrongFocus {
    pub fn new() -> Self {
        // keyboard modality until a pointer is seen
        Self {
            visible: true,
            always_strong: false,
        }
    }

    /// Force the strong ring regardless of modality
    pub fn set_always_strong(&mut self, always: bool) {
        self.always_strong = always;
    }

    pub fn is_always_strong(&self) -> bool {
        self.always_strong
    }
}

impl Default for StrongFocus {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys that move focus and therefore imply keyboard navigation
pub fn is_navigation_key(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Enter
            | KeyCode::Char(' ')
    )
}

impl FocusVisibilityPolicy for StrongFocus {
    fn pointer_press(&mut self) {
        self.visible = false;
    }

    fn keydown(&mut self, key: KeyCode) {
        if is_navigation_key(key) {
            self.visible = true;
        }
    }

    fn should_show_strong_focus(&self) -> bool {
        self.always_strong || self.visible
    }
}
