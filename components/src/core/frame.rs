// Post-first-paint readiness
// A one-shot gate that opens one animation frame after the first render

/// Lifecycle of the "may animate" gate of an element.
///
/// Moves `Unrendered -> AwaitingFrame` on the first render and
/// `AwaitingFrame -> Ready` on the next frame tick. Never moves backwards,
/// so the transition to `Ready` fires at most once per element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Readiness {
    #[default]
    Unrendered,
    AwaitingFrame,
    Ready,
}

impl Readiness {
    /// First render committed. Returns true if this scheduled the frame task.
    pub fn first_updated(&mut self) -> bool {
        if *self == Readiness::Unrendered {
            *self = Readiness::AwaitingFrame;
            true
        } else {
            false
        }
    }

    /// Animation frame tick. Returns true if the gate opened on this tick.
    pub fn on_animation_frame(&mut self) -> bool {
        if *self == Readiness::AwaitingFrame {
            *self = Readiness::Ready;
            true
        } else {
            false
        }
    }

    pub fn is_ready(&self) -> bool {
        *self == Readiness::Ready
    }
}
