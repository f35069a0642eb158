// Keyframes
// The handful of indicator styles selection animations move between

use std::fmt;

use super::geometry::{Axis, Transform};

/// Style snapshot an animation interpolates through.
/// `opacity: None` leaves the element's own opacity in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: Option<f32>,
    pub transform: Transform,
}

/// Fully transparent, untransformed
pub const HIDDEN: Keyframe = Keyframe {
    opacity: Some(0.0),
    transform: Transform::IDENTITY,
};

/// Fully opaque, untransformed
pub const SHOWING: Keyframe = Keyframe {
    opacity: Some(1.0),
    transform: Transform::IDENTITY,
};

/// Horizontal scale applied on the hidden side of a navigation indicator
pub const SCALED_FACTOR: f32 = 0.5;

impl Keyframe {
    /// Hidden and shrunk to half width: the resting state of a navigation
    /// indicator that is fading out or about to fade in
    pub fn hidden_scaled() -> Self {
        Self {
            transform: Transform::scale(Axis::X, SCALED_FACTOR),
            ..HIDDEN
        }
    }

    /// Transform-only frame; opacity follows the element
    pub fn transform_only(transform: Transform) -> Self {
        Self {
            opacity: None,
            transform,
        }
    }
}

impl fmt::Display for Keyframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opacity {
            Some(opacity) => write!(f, "{{opacity: {opacity}, transform: {}}}", self.transform),
            None => write!(f, "{{transform: {}}}", self.transform),
        }
    }
}
