// Animation module
// Geometry math, keyframe model and timed playback for indicator animations

pub mod geometry;
pub mod keyframes;
pub mod timeline;

pub use geometry::{slide_transform, Axis, IndicatorRect, Transform};
pub use keyframes::{Keyframe, HIDDEN, SHOWING};
pub use timeline::{
    Animation, AnimationOptions, AnimationSet, ComputedStyle, Easing, PlayState, SELECTION_DURATION,
};
