use std::sync::Arc;

use crate::{DigitRange, Easing, FlingPhysics, Result, ScrollOrder, WraparoundEvent};

/// A callback fired when a committed value wraps past `max` or below `min`.
pub type OnWraparoundCallback = Arc<dyn Fn(WraparoundEvent) + Send + Sync>;

/// Default minimum release velocity (px/s) that starts a fling.
pub const DEFAULT_MIN_FLING_VELOCITY: f32 = 50.0;

/// Default fling velocity cap (px/s): the platform maximum scaled down by 6.
pub const DEFAULT_MAX_FLING_VELOCITY: f32 = 8_000.0 / 6.0;

/// Default duration of the snap-to-row animation.
pub const DEFAULT_ADJUST_DURATION_MS: u64 = 800;

/// Configuration for [`crate::DigitScrollController`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
pub struct PickerOptions {
    pub min: i32,
    pub max: i32,
    /// Initial value, must lie in `[min, max]`.
    pub value: i32,
    pub order: ScrollOrder,

    /// Releases slower than this (absolute, px/s) snap instead of flinging.
    pub min_fling_velocity: f32,
    /// Release velocities are clamped to `[-max, max]` before a fling starts.
    pub max_fling_velocity: f32,

    pub adjust_duration_ms: u64,
    pub adjust_easing: Easing,
    pub fling: FlingPhysics,

    pub on_wraparound: Option<OnWraparoundCallback>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PickerOptions {
    fn clone(&self) -> Self {
        Self {
            min: self.min,
            max: self.max,
            value: self.value,
            order: self.order,
            min_fling_velocity: self.min_fling_velocity,
            max_fling_velocity: self.max_fling_velocity,
            adjust_duration_ms: self.adjust_duration_ms,
            adjust_easing: self.adjust_easing,
            fling: self.fling,
            on_wraparound: self.on_wraparound.clone(),
        }
    }
}

impl PickerOptions {
    /// A single decimal digit: range `[0, 9]`, value `0`, descending order.
    pub fn new() -> Self {
        Self {
            min: 0,
            max: 9,
            value: 0,
            order: ScrollOrder::default(),
            min_fling_velocity: DEFAULT_MIN_FLING_VELOCITY,
            max_fling_velocity: DEFAULT_MAX_FLING_VELOCITY,
            adjust_duration_ms: DEFAULT_ADJUST_DURATION_MS,
            adjust_easing: Easing::default(),
            fling: FlingPhysics::default(),
            on_wraparound: None,
        }
    }

    /// Checks bounds and the initial value, returning the validated range.
    pub fn validate(&self) -> Result<DigitRange> {
        let range = DigitRange::new(self.min, self.max)?;
        range.check(self.value)?;
        Ok(range)
    }

    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    pub fn with_order(mut self, order: ScrollOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_fling_velocity_bounds(mut self, min: f32, max: f32) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max;
        self
    }

    pub fn with_adjust_duration_ms(mut self, duration_ms: u64) -> Self {
        self.adjust_duration_ms = duration_ms;
        self
    }

    pub fn with_adjust_easing(mut self, easing: Easing) -> Self {
        self.adjust_easing = easing;
        self
    }

    pub fn with_fling_physics(mut self, fling: FlingPhysics) -> Self {
        self.fling = fling;
        self
    }

    pub fn with_on_wraparound(
        mut self,
        on_wraparound: Option<impl Fn(WraparoundEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_wraparound = on_wraparound.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PickerOptions")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value)
            .field("order", &self.order)
            .field("min_fling_velocity", &self.min_fling_velocity)
            .field("max_fling_velocity", &self.max_fling_velocity)
            .field("adjust_duration_ms", &self.adjust_duration_ms)
            .field("adjust_easing", &self.adjust_easing)
            .field("fling", &self.fling)
            .finish_non_exhaustive()
    }
}
