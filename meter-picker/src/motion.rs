/// Easing curves for the adjust (snap) motion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    /// `1 - (1 - t)^(2 * factor)`: starts fast and slows down toward the end.
    Decelerate(f32),
}

impl Default for Easing {
    fn default() -> Self {
        Self::Decelerate(2.5)
    }
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::Decelerate(factor) => 1.0 - (1.0 - t).powf(2.0 * factor),
        }
    }
}

/// A fixed-duration interpolation between two signed pixel positions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: i32,
    pub to: i32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: i32, to: i32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> i32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        let from = self.from as f32;
        let to = self.to as f32;
        (from + (to - from) * eased).round() as i32
    }
}

/// Tuning for the fling deceleration model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlingPhysics {
    /// Dimensionless surface friction.
    pub friction: f32,
    /// Screen density used to convert physical deceleration into pixels.
    pub pixels_per_inch: f32,
}

impl Default for FlingPhysics {
    fn default() -> Self {
        Self {
            friction: 0.015,
            pixels_per_inch: 160.0,
        }
    }
}

const GRAVITY_EARTH: f32 = 9.80665;
const INCHES_PER_METER: f32 = 39.37;
const INFLEXION: f32 = 0.35;

fn deceleration_rate() -> f32 {
    0.78f32.ln() / 0.9f32.ln()
}

impl FlingPhysics {
    fn physical_coeff(&self) -> f32 {
        GRAVITY_EARTH * INCHES_PER_METER * self.pixels_per_inch * 0.84
    }

    /// Total travel time for a fling launched at `velocity` px/s.
    pub fn duration_ms(&self, velocity: f32) -> u64 {
        let Some(l) = self.spline_deceleration(velocity) else {
            return 0;
        };
        let secs = (l / (deceleration_rate() - 1.0)).exp();
        (secs * 1000.0) as u64
    }

    /// Unsigned distance travelled by a fling launched at `velocity` px/s.
    pub fn distance(&self, velocity: f32) -> f32 {
        let duration_s = self.duration_ms(velocity) as f32 / 1000.0;
        INFLEXION * velocity.abs() * duration_s
    }

    fn spline_deceleration(&self, velocity: f32) -> Option<f32> {
        let speed = velocity.abs();
        let denom = self.friction * self.physical_coeff();
        if !speed.is_finite() || speed <= 0.0 || denom <= 0.0 {
            return None;
        }
        Some((INFLEXION * speed / denom).ln())
    }
}

/// An inertial motion that starts at `0` with a signed velocity and decelerates to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fling {
    pub velocity: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    /// Signed end position in pixels.
    pub distance: i32,
}

impl Fling {
    pub fn new(velocity: f32, start_ms: u64, physics: FlingPhysics) -> Self {
        let duration_ms = physics.duration_ms(velocity);
        let magnitude = physics.distance(velocity).round() as i32;
        let distance = if velocity < 0.0 { -magnitude } else { magnitude };
        Self {
            velocity,
            start_ms,
            duration_ms,
            distance,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> i32 {
        if self.is_done(now_ms) {
            return self.distance;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        // The exponent makes the initial slope match the launch velocity.
        let fraction = 1.0 - (1.0 - t).powf(1.0 / INFLEXION);
        (self.distance as f32 * fraction).round() as i32
    }
}

/// The single in-flight motion of a picker.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    /// Snaps the residual scroll offset back to zero.
    Adjust(Tween),
    /// Inertial scrolling after a fast release.
    Fling(Fling),
}

impl Motion {
    pub fn sample(&self, now_ms: u64) -> i32 {
        match self {
            Self::Adjust(tween) => tween.sample(now_ms),
            Self::Fling(fling) => fling.sample(now_ms),
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        match self {
            Self::Adjust(tween) => tween.is_done(now_ms),
            Self::Fling(fling) => fling.is_done(now_ms),
        }
    }

    pub fn is_fling(&self) -> bool {
        matches!(self, Self::Fling(_))
    }
}
