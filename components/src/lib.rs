// Material components for terminal UIs
// Toggle items, tabs with sliding indicators, progress bars and cards

// Core infrastructure
pub mod core;
// Indicator geometry and timed animations
pub mod animation;
// GUI elements (visual components)
pub mod elements;
// Config-driven manager wrappers
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
// Note: `tab_list` names both the element module and the manager module;
// the types inside are distinct (TabList vs TabListManager)
pub use animation::*;
pub use self::core::*;
#[allow(ambiguous_glob_reexports)]
pub use elements::*;
#[allow(ambiguous_glob_reexports)]
pub use managers::*;
pub use utilities::*;
