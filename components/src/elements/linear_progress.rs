// Linear Progress
// Determinate, buffered and indeterminate progress bar

use std::time::{Duration, Instant};

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use tracing::{trace, warn};

use crate::core::attributes::{ATTR_DATA_ARIA_LABEL, ATTR_FOUR_COLOR_ACTIVE, ATTR_INDETERMINATE};
use crate::core::{AttributeSync, Attributes};
use crate::utilities::Palette;

pub const ATTR_PROGRESS: &str = "progress";
pub const ATTR_BUFFER: &str = "buffer";

/// One full sweep of the indeterminate bar
pub const INDETERMINATE_CYCLE: Duration = Duration::from_millis(2000);

/// `role="progressbar"` values exposed to assistive technology
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressAria {
    pub label: Option<String>,
    pub value_min: f32,
    pub value_max: f32,
    /// Absent while indeterminate
    pub value_now: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct LinearProgress {
    indeterminate: bool,
    progress: f32,
    buffer: f32,
    four_color_active: bool,
    aria_label: Option<String>,
    animation_ready: bool,
    restart_pending: bool,
    last_width: Option<u16>,
    epoch: Option<Instant>,
}

impl Default for LinearProgress {
    fn default() -> Self {
        Self {
            indeterminate: false,
            progress: 0.0,
            buffer: 1.0,
            four_color_active: false,
            aria_label: None,
            animation_ready: true,
            restart_pending: false,
            last_width: None,
            epoch: None,
        }
    }
}

impl LinearProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indeterminate() -> Self {
        Self {
            indeterminate: true,
            ..Self::default()
        }
    }

    pub fn with_progress(mut self, progress: f32) -> Self {
        self.set_progress(progress);
        self
    }

    pub fn with_buffer(mut self, buffer: f32) -> Self {
        self.set_buffer(buffer);
        self
    }

    pub fn with_four_color(mut self, active: bool) -> Self {
        self.four_color_active = active;
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn is_indeterminate(&self) -> bool {
        self.indeterminate
    }

    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        self.indeterminate = indeterminate;
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Fraction in [0, 1]; non-finite values are ignored
    pub fn set_progress(&mut self, progress: f32) {
        if progress.is_finite() {
            self.progress = progress.clamp(0.0, 1.0);
        }
    }

    pub fn buffer(&self) -> f32 {
        self.buffer
    }

    pub fn set_buffer(&mut self, buffer: f32) {
        if buffer.is_finite() {
            self.buffer = buffer.clamp(0.0, 1.0);
        }
    }

    pub fn four_color_active(&self) -> bool {
        self.four_color_active
    }

    pub fn set_four_color_active(&mut self, active: bool) {
        self.four_color_active = active;
    }

    pub fn is_animation_ready(&self) -> bool {
        self.animation_ready
    }

    /// Rendered bar extents: indeterminate bars fill both
    pub fn fractions(&self) -> (f32, f32) {
        if self.indeterminate {
            (1.0, 1.0)
        } else {
            (self.progress, self.buffer)
        }
    }

    pub fn aria(&self) -> ProgressAria {
        ProgressAria {
            label: self.aria_label.clone(),
            value_min: 0.0,
            value_max: 1.0,
            value_now: (!self.indeterminate).then_some(self.progress),
        }
    }

    /// The bar was laid out at `width`. A size change restarts the
    /// indeterminate animation: it stops now and resumes on the next frame.
    pub fn on_resize(&mut self, width: u16) {
        let changed = self.last_width.is_some_and(|last| last != width);
        self.last_width = Some(width);
        if changed && self.indeterminate {
            trace!("linear progress resized to {width}, restarting animation");
            self.animation_ready = false;
            self.restart_pending = true;
        }
    }

    pub fn frame_tick(&mut self, now: Instant) {
        if self.restart_pending {
            self.restart_pending = false;
            self.animation_ready = true;
            self.epoch = Some(now);
        } else if self.epoch.is_none() {
            self.epoch = Some(now);
        }
    }

    /// Position of the indeterminate segment as a fraction of the cycle,
    /// plus the index of the completed cycles
    pub fn cycle_position(&self, now: Instant) -> (f32, u32) {
        let Some(epoch) = self.epoch else {
            return (0.0, 0);
        };
        let elapsed = now.saturating_duration_since(epoch).as_secs_f32();
        let cycle = INDETERMINATE_CYCLE.as_secs_f32();
        ((elapsed % cycle) / cycle, (elapsed / cycle) as u32)
    }

    pub fn widget<'a>(&'a self, palette: &'a Palette, now: Instant) -> LinearProgressWidget<'a> {
        LinearProgressWidget {
            progress: self,
            palette,
            now,
        }
    }
}

impl AttributeSync for LinearProgress {
    fn reflect_attributes(&self, attributes: &mut Attributes) {
        attributes.toggle(ATTR_INDETERMINATE, self.indeterminate);
        attributes.toggle(ATTR_FOUR_COLOR_ACTIVE, self.four_color_active);
        match &self.aria_label {
            Some(label) => attributes.set(ATTR_DATA_ARIA_LABEL, label.as_str()),
            None => {
                attributes.remove(ATTR_DATA_ARIA_LABEL);
            }
        }
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> bool {
        match name {
            ATTR_INDETERMINATE => self.indeterminate = value.is_some(),
            ATTR_FOUR_COLOR_ACTIVE => self.four_color_active = value.is_some(),
            ATTR_DATA_ARIA_LABEL => self.aria_label = value.map(str::to_string),
            ATTR_PROGRESS | ATTR_BUFFER => {
                let default = if name == ATTR_PROGRESS { 0.0 } else { 1.0 };
                let parsed = match value.map(|raw| raw.trim().parse::<f32>()) {
                    Some(Ok(parsed)) => parsed,
                    Some(Err(err)) => {
                        warn!("linear progress: bad {name} value: {err}");
                        return true;
                    }
                    None => default,
                };
                if name == ATTR_PROGRESS {
                    self.set_progress(parsed);
                } else {
                    self.set_buffer(parsed);
                }
            }
            _ => return false,
        }
        true
    }
}

pub struct LinearProgressWidget<'a> {
    progress: &'a LinearProgress,
    palette: &'a Palette,
    now: Instant,
}

impl LinearProgressWidget<'_> {
    fn bar_color(&self, cycle: u32) -> ratatui::style::Color {
        if self.progress.four_color_active {
            self.palette.four_color[cycle as usize % self.palette.four_color.len()]
        } else {
            self.palette.primary
        }
    }
}

impl Widget for LinearProgressWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = f32::from(area.width);
        let y = area.y;
        let track = Style::default().fg(self.palette.track);

        if self.progress.indeterminate {
            for x in area.left()..area.right() {
                buf[(x, y)].set_symbol("━").set_style(track);
            }
            if !self.progress.animation_ready {
                return;
            }
            // a third-width segment sweeping from off the left edge to off the right
            let (phase, cycle) = self.progress.cycle_position(self.now);
            let segment = (width / 3.0).max(1.0);
            let start = -segment + phase * (width + segment);
            let bar = Style::default().fg(self.bar_color(cycle));
            for offset in 0..area.width {
                let cell = f32::from(offset);
                if cell >= start && cell < start + segment {
                    buf[(area.x + offset, y)].set_symbol("━").set_style(bar);
                }
            }
            return;
        }

        let (progress, buffer) = self.progress.fractions();
        let progress_cells = (progress * width).round() as u16;
        let buffer_cells = (buffer * width).round() as u16;
        let bar = Style::default().fg(self.bar_color(0));
        for offset in 0..area.width {
            let (symbol, style) = if offset < progress_cells {
                ("━", bar)
            } else if offset < buffer_cells {
                ("━", track)
            } else {
                ("┄", track)
            };
            buf[(area.x + offset, y)].set_symbol(symbol).set_style(style);
        }
    }
}
