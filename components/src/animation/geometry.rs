// Indicator geometry
// Pure bounding-box math for sliding an indicator from one sibling to another

use std::fmt;

use crate::core::RectMetrics;

/// Axis an indicator slides along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    X,
    Y,
}

impl Axis {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Axis::Y
        } else {
            Axis::X
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
        }
    }
}

/// Floating point bounding box, like `DOMRect`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl IndicatorRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Leading edge along `axis` (left or top)
    pub fn position(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }

    /// Size along `axis` (width or height)
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

impl From<RectMetrics> for IndicatorRect {
    fn from(metrics: RectMetrics) -> Self {
        Self {
            left: f32::from(metrics.x),
            top: f32::from(metrics.y),
            width: f32::from(metrics.width),
            height: f32::from(metrics.height),
        }
    }
}

/// A one-axis translate + scale, with the transform origin at the leading edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub axis: Axis,
    pub translate: f32,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        axis: Axis::X,
        translate: 0.0,
        scale: 1.0,
    };

    pub fn scale(axis: Axis, factor: f32) -> Self {
        Self { axis, translate: 0.0, scale: factor }
    }

    pub fn is_identity(&self) -> bool {
        self.translate == 0.0 && self.scale == 1.0
    }

    /// Where `rect` ends up once this transform is applied to it
    pub fn apply(&self, rect: &IndicatorRect) -> IndicatorRect {
        let mut out = *rect;
        match self.axis {
            Axis::X => {
                out.left += self.translate;
                out.width *= self.scale;
            }
            Axis::Y => {
                out.top += self.translate;
                out.height *= self.scale;
            }
        }
        out
    }

    /// Linear interpolation; an identity end adopts the other end's axis
    pub fn lerp(&self, other: &Transform, t: f32) -> Transform {
        let axis = if self.is_identity() { other.axis } else { self.axis };
        Transform {
            axis,
            translate: self.translate + (other.translate - self.translate) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = self.axis.letter();
        match (self.translate == 0.0, self.scale == 1.0) {
            (true, true) => f.write_str("none"),
            (true, false) => write!(f, "scale{axis}({})", self.scale),
            (false, true) => write!(f, "translate{axis}({}px)", self.translate),
            (false, false) => write!(
                f,
                "translate{axis}({}px) scale{axis}({})",
                self.translate, self.scale
            ),
        }
    }
}

/// Transform that makes an indicator laid out at `to` overlay `from` exactly.
///
/// Returns `None` for degenerate geometry: a zero-extent source or target,
/// or non-finite input. Callers fade the indicator in instead.
pub fn slide_transform(from: &IndicatorRect, to: &IndicatorRect, axis: Axis) -> Option<Transform> {
    let to_extent = to.extent(axis);
    if to_extent == 0.0 || from.extent(axis) == 0.0 {
        return None;
    }
    let translate = from.position(axis) - to.position(axis);
    let scale = from.extent(axis) / to_extent;
    if !translate.is_finite() || !scale.is_finite() {
        return None;
    }
    Some(Transform { axis, translate, scale })
}
