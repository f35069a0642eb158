// Input normalization
// Classifies raw clicks into activations and decides which ones are genuine

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

/// What produced a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTrigger {
    /// Enter/Space on a focused interactive element
    Keyboard,
    /// Mouse button released over the element
    Pointer,
    /// Code called `click()` on the element (assistive tech, tests, parents)
    Programmatic,
}

/// Where a click was dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The component host itself
    Host,
    /// The component's inner interactive element (button or link)
    Interactive,
}

/// A click travelling through a toggle item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: ClickTarget,
    pub trigger: ClickTrigger,
    /// Whether the element the click was dispatched at is disabled
    pub target_disabled: bool,
}

impl ClickEvent {
    /// A `click()` call made on the host by code
    pub fn programmatic() -> Self {
        Self {
            target: ClickTarget::Host,
            trigger: ClickTrigger::Programmatic,
            target_disabled: false,
        }
    }

    /// Mouse release over the interactive element
    pub fn pointer() -> Self {
        Self {
            target: ClickTarget::Interactive,
            trigger: ClickTrigger::Pointer,
            target_disabled: false,
        }
    }

    /// Enter/Space on the focused interactive element
    pub fn keyboard() -> Self {
        Self {
            target: ClickTarget::Interactive,
            trigger: ClickTrigger::Keyboard,
            target_disabled: false,
        }
    }

    pub fn with_target_disabled(mut self, disabled: bool) -> Self {
        self.target_disabled = disabled;
        self
    }

    /// Translate a key press into the click a native button would synthesize
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::keyboard()),
            _ => None,
        }
    }

    /// Translate a mouse release into a pointer click
    pub fn from_mouse(mouse: &MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) => Some(Self::pointer()),
            _ => None,
        }
    }
}

/// Canonical activation kinds, after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Keyboard,
    Pointer,
    Programmatic,
}

impl From<ClickTrigger> for Activation {
    fn from(trigger: ClickTrigger) -> Self {
        match trigger {
            ClickTrigger::Keyboard => Activation::Keyboard,
            ClickTrigger::Pointer => Activation::Pointer,
            ClickTrigger::Programmatic => Activation::Programmatic,
        }
    }
}

/// Decides whether a click on a component host is a genuine activation.
///
/// Re-dispatching a synthetic click to the inner element would bubble back to
/// the host; the detector squelches every host click until the current task
/// ends so that round trip cannot re-enter.
#[derive(Debug, Default)]
pub struct ActivationDetector {
    squelching: bool,
}

impl ActivationDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a click into an activation kind
    pub fn classify(event: &ClickEvent) -> Activation {
        Activation::from(event.trigger)
    }

    /// True when the click targets the host, the host is enabled and we are
    /// not inside the squelch window of a previous activation.
    /// Opens the squelch window for the remainder of the task.
    pub fn is_activation_click(&mut self, event: &ClickEvent) -> bool {
        if event.target != ClickTarget::Host {
            return false;
        }
        if event.target_disabled {
            return false;
        }
        let squelched = self.squelching;
        self.squelching = true;
        !squelched
    }

    /// Build the synthetic click sent to the interactive element
    pub fn dispatch_activation_click(event: &ClickEvent) -> ClickEvent {
        ClickEvent {
            target: ClickTarget::Interactive,
            trigger: event.trigger,
            target_disabled: event.target_disabled,
        }
    }

    /// End of the current event-loop task; closes the squelch window
    pub fn end_task(&mut self) {
        self.squelching = false;
    }

    pub fn is_squelching(&self) -> bool {
        self.squelching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_host_click_is_activation_once_per_task() {
        let mut detector = ActivationDetector::new();
        let click = ClickEvent::programmatic();

        assert!(detector.is_activation_click(&click));
        // the re-dispatched click bubbling back up is squelched
        assert!(!detector.is_activation_click(&click));

        detector.end_task();
        assert!(detector.is_activation_click(&click));
    }

    #[test]
    fn test_interactive_clicks_are_not_host_activations() {
        let mut detector = ActivationDetector::new();
        assert!(!detector.is_activation_click(&ClickEvent::pointer()));
        assert!(!detector.is_squelching());
    }

    #[test]
    fn test_disabled_target_is_rejected() {
        let mut detector = ActivationDetector::new();
        let click = ClickEvent::programmatic().with_target_disabled(true);
        assert!(!detector.is_activation_click(&click));
    }

    #[test]
    fn test_key_translation() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        let letter = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

        assert_eq!(ClickEvent::from_key(&enter), Some(ClickEvent::keyboard()));
        assert_eq!(ClickEvent::from_key(&space), Some(ClickEvent::keyboard()));
        assert_eq!(ClickEvent::from_key(&letter), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(ActivationDetector::classify(&ClickEvent::keyboard()), Activation::Keyboard);
        assert_eq!(ActivationDetector::classify(&ClickEvent::pointer()), Activation::Pointer);
        assert_eq!(
            ActivationDetector::classify(&ClickEvent::programmatic()),
            Activation::Programmatic
        );
    }
}
