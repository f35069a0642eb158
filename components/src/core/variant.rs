// Variant tokens
// A styling tag string that may also carry semantic flags read by subclasses

use std::fmt;

/// Token that switches a tab to the fade/shrink indicator used by navigation bars
pub const NAVIGATION: &str = "navigation";
/// Token that lays a tab list out along the vertical axis
pub const VERTICAL: &str = "vertical";
/// Default variant for toggle items
pub const PRIMARY: &str = "primary";

/// Styling variant of a toggle item.
///
/// The raw string is kept verbatim (it is reflected back as the `variant`
/// attribute). Flags are substring checks, so unknown tokens never fail,
/// they simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant(String);

impl Variant {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring containment, same semantics as `String.prototype.includes`
    pub fn includes(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn is_navigation(&self) -> bool {
        self.includes(NAVIGATION)
    }

    pub fn is_vertical(&self) -> bool {
        self.includes(VERTICAL)
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::new(PRIMARY)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Variant {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Variant {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
