// Utilities module
// Colors and palettes shared by the elements

pub mod helpers;

pub use helpers::*;
