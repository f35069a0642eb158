// Attribute synchronization
// Typed component fields mirrored to/from a string attribute map

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const ATTR_VARIANT: &str = "variant";
pub const ATTR_DISABLED: &str = "disabled";
pub const ATTR_SELECTED: &str = "selected";
pub const ATTR_HREF: &str = "href";
pub const ATTR_TARGET: &str = "target";
pub const ATTR_TYPE: &str = "type";
pub const ATTR_INDETERMINATE: &str = "indeterminate";
pub const ATTR_FOUR_COLOR_ACTIVE: &str = "four-color-active";
pub const ATTR_DATA_ARIA_LABEL: &str = "data-aria-label";
pub const ATTR_DATA_ARIA_HAS_POPUP: &str = "data-aria-has-popup";

/// Attribute map of an element. Boolean attributes are present-or-absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.values.remove(name).is_some()
    }

    /// Reflect a boolean: present (empty value) when true, absent when false
    pub fn toggle(&mut self, name: &str, on: bool) {
        if on {
            self.values.insert(name.to_string(), String::new());
        } else {
            self.values.remove(name);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Components that mirror typed fields to attributes and accept attribute writes.
pub trait AttributeSync {
    /// Write every reflected field into `attributes`
    fn reflect_attributes(&self, attributes: &mut Attributes);

    /// Apply an attribute change (`None` = removed). Returns false if the
    /// attribute is not observed by this component.
    fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> bool;

    /// Convenience: a fresh map holding the reflected state
    fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        self.reflect_attributes(&mut attributes);
        attributes
    }

    /// Apply every attribute of `attributes`, as a parser would on creation
    fn apply_attributes(&mut self, attributes: &Attributes) {
        for (name, value) in attributes.iter() {
            self.attribute_changed(name, Some(value));
        }
    }
}

/// Values accepted by `aria-haspopup`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaHasPopup {
    False,
    True,
    Menu,
    Listbox,
    Tree,
    Grid,
    Dialog,
}

impl AriaHasPopup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AriaHasPopup::False => "false",
            AriaHasPopup::True => "true",
            AriaHasPopup::Menu => "menu",
            AriaHasPopup::Listbox => "listbox",
            AriaHasPopup::Tree => "tree",
            AriaHasPopup::Grid => "grid",
            AriaHasPopup::Dialog => "dialog",
        }
    }
}

impl fmt::Display for AriaHasPopup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized `aria-haspopup` tokens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized aria-haspopup value: {0}")]
pub struct ParseAriaHasPopupError(pub String);

impl FromStr for AriaHasPopup {
    type Err = ParseAriaHasPopupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "false" => Ok(AriaHasPopup::False),
            "true" => Ok(AriaHasPopup::True),
            "menu" => Ok(AriaHasPopup::Menu),
            "listbox" => Ok(AriaHasPopup::Listbox),
            "tree" => Ok(AriaHasPopup::Tree),
            "grid" => Ok(AriaHasPopup::Grid),
            "dialog" => Ok(AriaHasPopup::Dialog),
            other => Err(ParseAriaHasPopupError(other.to_string())),
        }
    }
}
