// Component error types
// Only the configuration boundary can fail; runtime paths absorb problems

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    #[error("tab list '{hwnd}' has no tabs")]
    EmptyTabList { hwnd: String },

    #[error("tab list '{hwnd}' selects index {index} but only has {len} tabs")]
    SelectedOutOfRange { hwnd: String, index: usize, len: usize },

    #[error("tab list '{hwnd}' declares tab id '{id}' more than once")]
    DuplicateTabId { hwnd: String, id: String },

    #[error("no tab list registered under '{0}'")]
    UnknownHandle(String),
}

pub type Result<T> = std::result::Result<T, ComponentError>;
