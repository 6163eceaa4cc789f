//! Release-velocity sampling for pointer gestures.
//!
//! Impulse strategy: the velocity is derived from the kinetic energy the pointer imparted over
//! its most recent samples.

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only use samples within the last 100ms for velocity calculation.
const HORIZON_MS: u64 = 100;

/// If no movement for this duration, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: u64,
    position: f32,
}

/// One-dimensional pointer velocity tracker (px/s).
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pointer `position` at `time_ms`.
    pub fn add_sample(&mut self, time_ms: u64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Velocity in px/s; `0.0` with fewer than two recent samples.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let mut current = self.index;
        let mut previous = newest;
        while let Some(sample) = self.samples[current] {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = previous.time_ms.abs_diff(sample.time_ms);
            previous = sample;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }

            positions[count] = sample.position;
            times[count] = -(age as f32);
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
            current = if current == 0 {
                HISTORY_SIZE - 1
            } else {
                current - 1
            };
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }

    /// Velocity in px/s clamped to `[-max_velocity, max_velocity]`.
    pub fn velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Samples are ordered newest first; times are non-positive ages in ms.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let start = positions.len() - 1;
    let mut work = 0.0f32;
    let mut next_time = times[start];

    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / (next_time - current_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// `E = v^2 / 2` with unit mass, keeping the sign.
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
