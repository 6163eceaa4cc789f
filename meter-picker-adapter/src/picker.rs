use meter_picker::{DigitScrollController, PickerOptions, Result};

use crate::VelocityTracker1D;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A vertical pointer sample as delivered by the host's input system.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Pointer position in pixels, growing downward.
    pub y: f32,
    pub time_ms: u64,
}

impl PointerEvent {
    pub fn down(y: f32, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Down,
            y,
            time_ms,
        }
    }

    pub fn moved(y: f32, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Move,
            y,
            time_ms,
        }
    }

    pub fn up(y: f32, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Up,
            y,
            time_ms,
        }
    }

    pub fn cancel(y: f32, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Cancel,
            y,
            time_ms,
        }
    }
}

/// One digit row to draw, positioned relative to the picker's resting centre row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRow {
    pub value: i32,
    /// Vertical displacement in pixels; negative is above the centre.
    pub y_offset: i32,
}

/// The render side of a host binding.
///
/// Text layout, fonts and colours live entirely in the implementation.
pub trait PickerCanvas {
    fn draw_row(&mut self, row: VisibleRow);
}

/// A framework-neutral single-digit picker.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `set_row_height` whenever the widget is measured
/// - `on_pointer` for every pointer event that targets the picker
/// - `tick(now_ms)` each frame while it returns `true`
///
/// and render it with `rows()` or `draw()`.
#[derive(Clone, Debug)]
pub struct NumberPicker {
    controller: DigitScrollController,
    tracker: VelocityTracker1D,
    row_height: i32,
    enabled: bool,
}

impl Default for NumberPicker {
    fn default() -> Self {
        Self::from_controller(DigitScrollController::default())
    }
}

impl NumberPicker {
    pub fn new(options: PickerOptions) -> Result<Self> {
        Ok(Self::from_controller(DigitScrollController::new(options)?))
    }

    pub fn from_controller(controller: DigitScrollController) -> Self {
        Self {
            controller,
            tracker: VelocityTracker1D::new(),
            row_height: 0,
            enabled: true,
        }
    }

    pub fn controller(&self) -> &DigitScrollController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DigitScrollController {
        &mut self.controller
    }

    pub fn into_controller(self) -> DigitScrollController {
        self.controller
    }

    pub fn value(&self) -> i32 {
        self.controller.value()
    }

    pub fn set_value(&mut self, value: i32) -> Result<()> {
        self.controller.set_value(value)
    }

    pub fn row_height(&self) -> i32 {
        self.row_height
    }

    pub fn set_row_height(&mut self, row_height: i32) {
        self.row_height = row_height;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Feeds a pointer event to the picker.
    ///
    /// Returns `true` when the event was consumed, in which case the host should redraw.
    pub fn on_pointer(&mut self, event: PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }
        if event.kind == PointerKind::Down {
            self.tracker.reset();
        }
        self.tracker.add_sample(event.time_ms, event.y);

        match event.kind {
            PointerKind::Down => self.controller.on_gesture_start(event.y),
            PointerKind::Move => self.controller.on_gesture_move(event.y, self.row_height),
            PointerKind::Up => {
                let max = self.controller.options().max_fling_velocity;
                let velocity = self.tracker.velocity_with_max(max);
                ptrace!(velocity, "pointer up");
                self.controller
                    .on_gesture_end(event.y, self.row_height, velocity, event.time_ms);
                self.tracker.reset();
            }
            PointerKind::Cancel => {
                self.controller
                    .on_gesture_cancel(self.row_height, event.time_ms);
                self.tracker.reset();
            }
        }
        true
    }

    /// Advances any running motion. Keep calling (and redrawing) while this returns `true`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.controller.on_animation_tick(self.row_height, now_ms)
    }

    /// The rows above, at and below the centre, in that order.
    pub fn rows(&self) -> [VisibleRow; 3] {
        let offset = self.controller.scroll_offset();
        let c = &self.controller;
        [
            VisibleRow {
                value: c.displayed_value_at(1),
                y_offset: offset - self.row_height,
            },
            VisibleRow {
                value: c.displayed_value_at(0),
                y_offset: offset,
            },
            VisibleRow {
                value: c.displayed_value_at(-1),
                y_offset: offset + self.row_height,
            },
        ]
    }

    pub fn draw(&self, canvas: &mut impl PickerCanvas) {
        for row in self.rows() {
            canvas.draw_row(row);
        }
    }
}
