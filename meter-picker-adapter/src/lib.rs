//! Adapter utilities for the `meter-picker` crate.
//!
//! The `meter-picker` crate is UI-agnostic and focuses on the scroll math and state. This crate
//! provides small, framework-neutral pieces a host binding needs on top of it:
//!
//! - A picker shell that turns pointer events into gestures and exposes the rows to draw
//! - Release-velocity sampling for flings
//! - A multi-digit meter (odometer) that composes digit values into one number
//!
//! This crate is intentionally framework-agnostic (no egui/ratatui/android bindings).
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod meter;
mod picker;
mod velocity;


pub use meter::{DigitGroup, Meter, MeterOptions};
pub use picker::{NumberPicker, PickerCanvas, PointerEvent, PointerKind, VisibleRow};
pub use velocity::{ASSUME_STOPPED_MS, VelocityTracker1D};
