// Element Geometry Registry (HWND-like)
// Layout records where each element landed under a stable name such as
// "nav/inbox/indicator"; selection animations read the previous sibling's
// box back to compute a slide.

use ratatui::layout::{Position, Rect};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Stable id of a named box; survives re-registration under the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RectHandle(u64);

impl RectHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Cell geometry of a laid-out element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectMetrics {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl RectMetrics {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        Rect::from(*self).contains(Position::new(column, row))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<Rect> for RectMetrics {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<RectMetrics> for Rect {
    fn from(metrics: RectMetrics) -> Self {
        Rect::new(metrics.x, metrics.y, metrics.width, metrics.height)
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    handle: RectHandle,
    metrics: RectMetrics,
}

/// Boxes of the elements laid out so far, keyed by name.
/// Names are ordered, so a whole subtree ("nav/") sits in one contiguous range.
#[derive(Debug, Clone)]
pub struct RectRegistry {
    slots: BTreeMap<String, Slot>,
    next_id: u64,
}

impl RectRegistry {
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Record `rect` under `name`. A known name is moved in place and keeps its handle.
    pub fn register(&mut self, name: &str, rect: Rect) -> RectHandle {
        let metrics = RectMetrics::from(rect);
        if let Some(slot) = self.slots.get_mut(name) {
            slot.metrics = metrics;
            return slot.handle;
        }
        let handle = RectHandle(self.next_id);
        self.next_id += 1;
        self.slots.insert(name.to_string(), Slot { handle, metrics });
        handle
    }

    pub fn get_metrics_by_name(&self, name: &str) -> Option<RectMetrics> {
        self.slots.get(name).map(|slot| slot.metrics)
    }

    pub fn get_handle(&self, name: &str) -> Option<RectHandle> {
        self.slots.get(name).map(|slot| slot.handle)
    }

    pub fn name_exists(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Names under `prefix`, in order
    pub fn names_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.slots
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(name, _)| name.as_str())
            .take_while(move |name| name.starts_with(prefix))
    }

    pub fn unregister_by_name(&mut self, name: &str) -> bool {
        self.slots.remove(name).is_some()
    }

    /// Forget a whole subtree, e.g. every box of a list that left the screen.
    /// Returns how many boxes were removed.
    pub fn unregister_prefix(&mut self, prefix: &str) -> usize {
        let doomed: Vec<String> = self.names_with_prefix(prefix).map(str::to_string).collect();
        for name in &doomed {
            self.slots.remove(name);
        }
        doomed.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for RectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
