//! A headless scroll/fling/snap engine for odometer-style digit pickers.
//!
//! For the picker shell (pointer dispatch, velocity sampling, row rendering) and the multi-digit
//! meter composite, see the `meter-picker-adapter` crate.
//!
//! This crate focuses on the interaction math behind a vertically scrolling digit: turning drag
//! offsets into row previews, release velocity into decelerating flings, and residual offsets
//! into eased snaps, all while wrapping values around a `[min, max]` range.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - pointer positions and release velocity
//! - the measured row height
//! - a frame clock (`now_ms`) for animation ticks
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod composite;
mod controller;
mod error;
mod motion;
mod options;
mod range;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use composite::{MAX_DIGITS, check_decimal_range, compose_digits, decompose_value};
pub use controller::DigitScrollController;
pub use error::{ConfigError, Result};
pub use motion::{Easing, Fling, FlingPhysics, Motion, Tween};
pub use options::{
    DEFAULT_ADJUST_DURATION_MS, DEFAULT_MAX_FLING_VELOCITY, DEFAULT_MIN_FLING_VELOCITY,
    OnWraparoundCallback, PickerOptions,
};
pub use range::{DigitRange, Wrapped};
pub use state::PickerState;
pub use types::{RowOffsets, ScrollOrder, WraparoundEvent, round_rows};
