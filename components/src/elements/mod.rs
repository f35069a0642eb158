// GUI Elements module
// Selectable items, the selection group that owns them, and presentational components

pub mod card;
pub mod decorations;
pub mod item_view;
pub mod linear_progress;
pub mod selection_group;
pub mod tab;
pub mod tab_list;
pub mod toggle_item;

pub use card::{Card, CardType, CardWidget};
pub use decorations::{Decoration, Latch};
pub use item_view::{IndicatorWidget, ItemView, ItemViewWidget, Shape};
pub use linear_progress::{LinearProgress, LinearProgressWidget, ProgressAria};
pub use selection_group::{SelectionContext, SelectionGroup};
pub use tab::{tab_keyframes, Tab};
pub use tab_list::{TabList, TabListWidget, TAB_HEIGHT, TAB_PADDING};
pub use toggle_item::{Property, PropertyChanges, ToggleElement, ToggleItem};
