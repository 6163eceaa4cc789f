use std::sync::Arc;

use crate::{
    DigitRange, Fling, Motion, PickerOptions, PickerState, Result, RowOffsets, ScrollOrder, Tween,
    WraparoundEvent, round_rows,
};

/// The scroll-to-value state machine behind a single digit picker.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects and never reads a clock.
/// - The host forwards pointer positions and release velocity, then calls
///   [`DigitScrollController::on_animation_tick`] once per frame while it returns `true`.
/// - Rendering reads [`DigitScrollController::scroll_offset`] and
///   [`DigitScrollController::displayed_value_at`] for the rows around the centre.
///
/// `row_height` is the measured height of one rendered row, passed with every call that needs it.
#[derive(Clone, Debug)]
pub struct DigitScrollController {
    options: PickerOptions,
    range: DigitRange,
    value: i32,

    scroll_offset: i32,
    value_offset: i32,

    origin_y: f32,
    last_y: f32,
    dragging: bool,

    motion: Option<Motion>,
    last_sample: i32,
}

impl Default for DigitScrollController {
    fn default() -> Self {
        Self::from_validated(PickerOptions::new(), DigitRange::default())
    }
}

impl DigitScrollController {
    /// Creates a controller after validating the range and initial value in `options`.
    pub fn new(options: PickerOptions) -> Result<Self> {
        let range = options.validate()?;
        Ok(Self::from_validated(options, range))
    }

    fn from_validated(options: PickerOptions, range: DigitRange) -> Self {
        pdebug!(
            min = range.min(),
            max = range.max(),
            value = options.value,
            "DigitScrollController::new"
        );
        Self {
            value: options.value,
            range,
            options,
            scroll_offset: 0,
            value_offset: 0,
            origin_y: 0.0,
            last_y: 0.0,
            dragging: false,
            motion: None,
            last_sample: 0,
        }
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Replaces all options. Any motion is dropped and the picker settles on `options.value`.
    pub fn set_options(&mut self, options: PickerOptions) -> Result<()> {
        let range = options.validate()?;
        self.value = options.value;
        self.range = range;
        self.options = options;
        self.reset_motion();
        Ok(())
    }

    /// Sets range, value and order together; nothing changes if any of them is invalid.
    pub fn configure(&mut self, min: i32, max: i32, value: i32, order: ScrollOrder) -> Result<()> {
        let range = DigitRange::new(min, max)?;
        range.check(value)?;
        self.range = range;
        self.value = value;
        self.options.min = min;
        self.options.max = max;
        self.options.value = value;
        self.options.order = order;
        self.reset_motion();
        Ok(())
    }

    fn reset_motion(&mut self) {
        self.dragging = false;
        self.motion = None;
        self.last_sample = 0;
        self.scroll_offset = 0;
        self.value_offset = 0;
    }

    pub fn range(&self) -> DigitRange {
        self.range
    }

    pub fn min_value(&self) -> i32 {
        self.range.min()
    }

    pub fn max_value(&self) -> i32 {
        self.range.max()
    }

    /// Sets the lower bound, raising the current value to it if needed.
    pub fn set_min_value(&mut self, min: i32) -> Result<()> {
        self.range = DigitRange::new(min, self.range.max())?;
        self.options.min = min;
        self.value = self.range.clamp(self.value);
        Ok(())
    }

    /// Sets the upper bound, lowering the current value to it if needed.
    pub fn set_max_value(&mut self, max: i32) -> Result<()> {
        self.range = DigitRange::new(self.range.min(), max)?;
        self.options.max = max;
        self.value = self.range.clamp(self.value);
        Ok(())
    }

    /// The committed value.
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) -> Result<()> {
        self.range.check(value)?;
        self.value = value;
        Ok(())
    }

    pub fn order(&self) -> ScrollOrder {
        self.options.order
    }

    pub fn set_order(&mut self, order: ScrollOrder) {
        self.options.order = order;
    }

    pub fn set_on_wraparound(
        &mut self,
        on_wraparound: Option<impl Fn(WraparoundEvent) + Send + Sync + 'static>,
    ) {
        self.options.on_wraparound = on_wraparound.map(|f| Arc::new(f) as _);
    }

    /// Sub-row pixel displacement of the centre row.
    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Full rows dragged since the gesture started (not yet committed).
    pub fn value_offset(&self) -> i32 {
        self.value_offset
    }

    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Whether a gesture started and has not been released or cancelled yet.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The value `offset` rows away from the committed value.
    pub fn value_at(&self, offset: i32) -> i32 {
        self.range.wrap(self.value, offset, self.options.order)
    }

    /// The value rendered `row` rows away from the centre, including the live drag preview.
    ///
    /// `+1` is the row above the centre, `-1` the row below.
    pub fn displayed_value_at(&self, row: i32) -> i32 {
        self.value_at(self.value_offset.saturating_add(row))
    }

    pub fn snapshot(&self) -> PickerState {
        PickerState {
            range: self.range,
            value: self.value,
            order: self.options.order,
            scroll_offset: self.scroll_offset,
            value_offset: self.value_offset,
            motion: self.motion,
        }
    }

    /// A pointer went down: stops any motion and anchors the gesture at `y`.
    pub fn on_gesture_start(&mut self, y: f32) {
        if self.motion.take().is_some() {
            ptrace!("motion cancelled by gesture start");
        }
        self.origin_y = y;
        self.last_y = y;
        self.dragging = true;
    }

    /// The pointer moved: previews the drag without committing a value.
    pub fn on_gesture_move(&mut self, y: f32, row_height: i32) {
        if !self.dragging {
            ptrace!("on_gesture_move ignored: no gesture in progress");
            return;
        }
        if row_height <= 0 {
            pwarn!(row_height, "on_gesture_move ignored: non-positive row height");
            return;
        }
        self.last_y = y;
        self.apply_preview(self.raw_offset(), row_height);
    }

    /// The pointer was released with `velocity` px/s (positive = downward).
    ///
    /// Fast releases start a fling; slow ones commit the nearest row and snap to it.
    /// Ignored unless a gesture is in progress.
    pub fn on_gesture_end(&mut self, y: f32, row_height: i32, velocity: f32, now_ms: u64) {
        if !core::mem::take(&mut self.dragging) {
            ptrace!("on_gesture_end ignored: no gesture in progress");
            return;
        }
        if row_height <= 0 {
            pwarn!(row_height, "on_gesture_end ignored: non-positive row height");
            return;
        }
        self.last_y = y;
        let raw = self.raw_offset();
        self.apply_preview(raw, row_height);

        if velocity.abs() > self.options.min_fling_velocity {
            let cap = self.options.max_fling_velocity.abs();
            self.start_fling(velocity.clamp(-cap, cap), now_ms);
        } else {
            let adjusted = round_rows(raw, row_height);
            pdebug!(raw, adjusted, "gesture end: snapping");
            self.commit(adjusted);
            self.start_adjust(row_height, adjusted, now_ms);
        }
    }

    /// The gesture was taken away from the picker: snaps to the row nearest the last position.
    ///
    /// Ignored unless a gesture is in progress, so a stray cancel never disturbs a running motion.
    pub fn on_gesture_cancel(&mut self, row_height: i32, now_ms: u64) {
        self.on_gesture_end(self.last_y, row_height, 0.0, now_ms);
    }

    /// Advances the active motion to `now_ms`.
    ///
    /// Returns `true` when this tick moved the picker, meaning the host should redraw and tick
    /// again on the next frame. With a non-positive `row_height` nothing moves and this returns
    /// `false`; the motion is kept and resumes on the next tick with a measured height.
    pub fn on_animation_tick(&mut self, row_height: i32, now_ms: u64) -> bool {
        if row_height <= 0 {
            pwarn!(row_height, "on_animation_tick ignored: non-positive row height");
            return false;
        }
        let Some(motion) = self.motion else {
            return false;
        };

        let position = motion.sample(now_ms);
        self.scroll_offset += position - self.last_sample;
        self.last_sample = position;

        let done = motion.is_done(now_ms);
        if done {
            self.motion = None;
        }
        ptrace!(
            now_ms,
            position,
            scroll_offset = self.scroll_offset,
            done,
            "on_animation_tick"
        );

        if let Motion::Fling(_) = motion {
            self.commit_crossed_rows(row_height);
            if done && self.scroll_offset != 0 {
                self.settle(row_height, now_ms);
            }
        }
        true
    }

    fn raw_offset(&self) -> i32 {
        (self.last_y - self.origin_y) as i32
    }

    fn apply_preview(&mut self, raw: i32, row_height: i32) {
        let offsets = RowOffsets::split(raw, row_height);
        self.value_offset = offsets.value_offset;
        self.scroll_offset = offsets.scroll_offset;
    }

    fn start_fling(&mut self, velocity: f32, now_ms: u64) {
        // The fling continues from the drag preview, so the previewed rows become real.
        let dragged = core::mem::take(&mut self.value_offset);
        self.commit(dragged);

        let fling = Fling::new(velocity, now_ms, self.options.fling);
        pdebug!(
            velocity,
            distance = fling.distance,
            duration_ms = fling.duration_ms,
            "gesture end: fling"
        );
        self.last_sample = 0;
        self.motion = Some(Motion::Fling(fling));
    }

    /// Moves the residual offset onto the freshly committed row and animates it to zero.
    fn start_adjust(&mut self, row_height: i32, adjusted: i32, now_ms: u64) {
        if adjusted != self.value_offset {
            if self.scroll_offset < 0 {
                self.scroll_offset += row_height;
            } else {
                self.scroll_offset -= row_height;
            }
        }
        self.value_offset = 0;
        self.last_sample = self.scroll_offset;
        self.motion = if self.scroll_offset == 0 {
            None
        } else {
            Some(Motion::Adjust(Tween::new(
                self.scroll_offset,
                0,
                now_ms,
                self.options.adjust_duration_ms,
                self.options.adjust_easing,
            )))
        };
    }

    fn commit_crossed_rows(&mut self, row_height: i32) {
        let rest = self.scroll_offset % row_height;
        if rest != self.scroll_offset {
            let rows = (self.scroll_offset - rest) / row_height;
            self.scroll_offset = rest;
            self.commit(rows);
        }
    }

    /// Picks the row the residual offset is closest to once inertia is gone.
    fn settle(&mut self, row_height: i32, now_ms: u64) {
        let adjusted = if self.scroll_offset.abs() < row_height / 2 {
            self.value_offset
        } else {
            self.value_offset + self.scroll_offset.signum()
        };
        pdebug!(
            scroll_offset = self.scroll_offset,
            adjusted,
            "fling finished: settling"
        );
        self.commit(adjusted);
        self.start_adjust(row_height, adjusted, now_ms);
    }

    fn commit(&mut self, offset: i32) {
        if offset == 0 {
            return;
        }
        let wrapped = self
            .range
            .wrap_with_event(self.value, offset, self.options.order);
        self.value = wrapped.value;
        if let Some(event) = wrapped.event {
            pdebug!(?event, value = self.value, "wraparound");
            if let Some(cb) = &self.options.on_wraparound {
                cb(event);
            }
        }
    }
}
