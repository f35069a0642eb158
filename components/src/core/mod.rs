// Core infrastructure module
// Geometry registry, input normalization, focus policy and the attribute layer

pub mod attributes;
pub mod error;
pub mod focus;
pub mod frame;
pub mod input;
pub mod platform;
pub mod rect_handle;
pub mod variant;

pub use attributes::{AriaHasPopup, AttributeSync, Attributes};
pub use error::ComponentError;
pub use focus::{FocusVisibilityPolicy, StrongFocus};
pub use frame::Readiness;
pub use input::{Activation, ActivationDetector, ClickEvent, ClickTarget, ClickTrigger};
pub use platform::Platform;
pub use rect_handle::{RectHandle, RectMetrics, RectRegistry};
pub use variant::Variant;
