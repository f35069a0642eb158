// Animation timeline
// Two-keyframe animations sampled against explicit instants, cancellable at any time

use std::time::{Duration, Instant};

use super::geometry::Transform;
use super::keyframes::Keyframe;

/// Duration of every selection indicator animation
pub const SELECTION_DURATION: Duration = Duration::from_millis(400);

/// Timing curve of an animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `ease-out`, i.e. `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Map linear progress `t` in [0, 1] to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bezier_component(p1: f32, p2: f32, s: f32) -> f32 {
    // endpoints fixed at 0 and 1
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Newton first, bisection if the slope flattens out
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_component(x1, x2, s) - x;
        if err.abs() < 1e-6 {
            return bezier_component(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier_component(x1, x2, s);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_component(y1, y2, s)
}

/// Duration and timing curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationOptions {
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationOptions {
    /// 400ms ease-out used for indicator selection changes
    pub fn selection() -> Self {
        Self {
            duration: SELECTION_DURATION,
            easing: Easing::EaseOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Running,
    Finished,
    Cancelled,
}

/// Interpolated style at a point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedStyle {
    pub opacity: f32,
    pub transform: Transform,
}

/// A running two-keyframe animation
#[derive(Debug, Clone)]
pub struct Animation {
    keyframes: [Keyframe; 2],
    options: AnimationOptions,
    started_at: Instant,
    cancelled: bool,
}

impl Animation {
    pub fn new(keyframes: [Keyframe; 2], options: AnimationOptions, now: Instant) -> Self {
        Self {
            keyframes,
            options,
            started_at: now,
            cancelled: false,
        }
    }

    pub fn keyframes(&self) -> &[Keyframe; 2] {
        &self.keyframes
    }

    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.options.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.options.duration.as_secs_f32()).min(1.0)
    }

    pub fn play_state(&self, now: Instant) -> PlayState {
        if self.cancelled {
            PlayState::Cancelled
        } else if now.saturating_duration_since(self.started_at) >= self.options.duration {
            PlayState::Finished
        } else {
            PlayState::Running
        }
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.play_state(now) == PlayState::Running
    }

    /// Idempotent
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Style at `now`. Keyframes without an opacity use `underlying_opacity`.
    pub fn sample(&self, now: Instant, underlying_opacity: f32) -> ComputedStyle {
        let t = self.options.easing.apply(self.progress(now));
        let [from, to] = &self.keyframes;
        let from_opacity = from.opacity.unwrap_or(underlying_opacity);
        let to_opacity = to.opacity.unwrap_or(underlying_opacity);
        ComputedStyle {
            opacity: from_opacity + (to_opacity - from_opacity) * t,
            transform: from.transform.lerp(&to.transform, t),
        }
    }
}

/// The animations attached to one element (`element.getAnimations()`)
#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
    animations: Vec<Animation>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new animation on this element
    pub fn animate(&mut self, keyframes: [Keyframe; 2], options: AnimationOptions, now: Instant) -> &Animation {
        self.animations.push(Animation::new(keyframes, options, now));
        &self.animations[self.animations.len() - 1]
    }

    /// Cancel and drop every animation; returns how many were still running
    pub fn cancel_all(&mut self, now: Instant) -> usize {
        let mut running = 0;
        for animation in &mut self.animations {
            if animation.is_running(now) {
                running += 1;
            }
            animation.cancel();
        }
        self.animations.clear();
        running
    }

    /// Drop finished animations
    pub fn prune(&mut self, now: Instant) {
        self.animations.retain(|animation| animation.is_running(now));
    }

    /// Animations that have not finished or been cancelled
    pub fn running(&self, now: Instant) -> impl Iterator<Item = &Animation> {
        self.animations.iter().filter(move |animation| animation.is_running(now))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.running(now).next().is_some()
    }

    /// Composite style at `now`: the most recently started running animation wins
    pub fn sample(&self, now: Instant, underlying_opacity: f32) -> Option<ComputedStyle> {
        self.running(now)
            .last()
            .map(|animation| animation.sample(now, underlying_opacity))
    }

    pub fn all(&self) -> &[Animation] {
        &self.animations
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::geometry::Axis;
    use crate::animation::keyframes::{HIDDEN, SHOWING};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_ease_out_endpoints_and_shape() {
        let easing = Easing::EaseOut;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        // ease-out front-loads progress
        assert!(easing.apply(0.25) > 0.25);
        assert!(easing.apply(0.5) > 0.5);

        let mut last = 0.0;
        for step in 1..=20 {
            let value = easing.apply(step as f32 / 20.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_bezier_linear_control_points() {
        let linear = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            assert!(close(linear.apply(t), t));
        }
    }

    #[test]
    fn test_sample_over_time() {
        let start = Instant::now();
        let animation = Animation::new(
            [HIDDEN, SHOWING],
            AnimationOptions { duration: Duration::from_millis(400), easing: Easing::Linear },
            start,
        );

        assert!(close(animation.sample(start, 1.0).opacity, 0.0));
        assert!(close(animation.sample(start + Duration::from_millis(100), 1.0).opacity, 0.25));
        assert_eq!(animation.play_state(start + Duration::from_millis(399)), PlayState::Running);
        assert_eq!(animation.play_state(start + Duration::from_millis(400)), PlayState::Finished);
    }

    #[test]
    fn test_missing_opacity_uses_underlying() {
        let start = Instant::now();
        let animation = Animation::new(
            [Keyframe::transform_only(Transform::scale(Axis::X, 2.0)), SHOWING],
            AnimationOptions::selection(),
            start,
        );
        assert!(close(animation.sample(start, 0.3).opacity, 0.3));
    }

    #[test]
    fn test_cancel_all_is_idempotent() {
        let start = Instant::now();
        let mut set = AnimationSet::new();
        set.animate([HIDDEN, SHOWING], AnimationOptions::selection(), start);

        assert_eq!(set.cancel_all(start), 1);
        assert_eq!(set.cancel_all(start), 0);
        assert!(set.is_empty());
        assert!(set.sample(start, 1.0).is_none());
    }

    #[test]
    fn test_prune_drops_finished() {
        let start = Instant::now();
        let mut set = AnimationSet::new();
        set.animate([HIDDEN, SHOWING], AnimationOptions::selection(), start);

        set.prune(start + Duration::from_millis(10));
        assert_eq!(set.len(), 1);
        set.prune(start + SELECTION_DURATION);
        assert!(set.is_empty());
    }
}
