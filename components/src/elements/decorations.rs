// Decorations
// Opaque visual sub-widgets mounted around an interactive element

/// A monotonic activation flag: once requested it stays requested.
/// Gates lazy construction of sub-widgets such as the ripple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latch(bool);

impl Latch {
    /// Returns true if this call flipped the latch
    pub fn request(&mut self) -> bool {
        let newly = !self.0;
        self.0 = true;
        newly
    }

    /// `latch ||= condition`
    pub fn request_if(&mut self, condition: bool) -> bool {
        if condition {
            self.request()
        } else {
            false
        }
    }

    pub fn is_requested(&self) -> bool {
        self.0
    }
}

/// Focus indicator; only mounted after focus first asked for a strong ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    pub visible: bool,
}

/// Press feedback; only mounted after the first pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    pub disabled: bool,
    pub pressed: bool,
}

/// Elevation shadow and surface tint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elevation {
    pub shadow: bool,
    pub surface: bool,
}

impl Default for Elevation {
    fn default() -> Self {
        Self { shadow: true, surface: true }
    }
}

/// Decoration layers, in paint order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    FocusRing(FocusRing),
    Elevation(Elevation),
    Ripple(Ripple),
    Outline,
    TouchTarget,
}

impl Decoration {
    pub fn name(&self) -> &'static str {
        match self {
            Decoration::FocusRing(_) => "focus-ring",
            Decoration::Elevation(_) => "elevation",
            Decoration::Ripple(_) => "ripple",
            Decoration::Outline => "outline",
            Decoration::TouchTarget => "touch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = Latch::default();
        assert!(!latch.request_if(false));
        assert!(!latch.is_requested());

        assert!(latch.request_if(true));
        assert!(!latch.request());
        assert!(!latch.request_if(false));
        assert!(latch.is_requested());
    }
}
