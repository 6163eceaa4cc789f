use crate::{ConfigError, Result, ScrollOrder, WraparoundEvent};

/// An inclusive, non-negative value range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigitRange {
    min: i32,
    max: i32,
}

impl Default for DigitRange {
    fn default() -> Self {
        Self { min: 0, max: 9 }
    }
}

/// The outcome of moving a value by a row offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wrapped {
    pub value: i32,
    pub event: Option<WraparoundEvent>,
}

impl DigitRange {
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min < 0 {
            return Err(ConfigError::NegativeMin(min));
        }
        if max < 0 {
            return Err(ConfigError::NegativeMax(max));
        }
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of distinct values in the range.
    pub fn span(&self) -> i64 {
        self.max as i64 - self.min as i64 + 1
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    pub fn check(&self, value: i32) -> Result<()> {
        if value < self.min {
            return Err(ConfigError::ValueBelowMin {
                value,
                min: self.min,
            });
        }
        if value > self.max {
            return Err(ConfigError::ValueAboveMax {
                value,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Returns the value `offset` rows away from `value`, wrapped into the range.
    ///
    /// `value` must already be inside the range.
    pub fn wrap(&self, value: i32, offset: i32, order: ScrollOrder) -> i32 {
        self.wrap_with_event(value, offset, order).value
    }

    /// Like [`DigitRange::wrap`], also reporting which boundary (if any) was crossed.
    pub fn wrap_with_event(&self, value: i32, offset: i32, order: ScrollOrder) -> Wrapped {
        debug_assert!(self.contains(value), "value {value} outside {self:?}");
        let span = self.span();
        let step = order.signed(offset as i64 % span);
        let candidate = value as i64 + step;
        let (value, event) = if candidate < self.min as i64 {
            (candidate + span, Some(WraparoundEvent::MinToMax))
        } else if candidate > self.max as i64 {
            (candidate - span, Some(WraparoundEvent::MaxToMin))
        } else {
            (candidate, None)
        };
        Wrapped {
            value: value as i32,
            event,
        }
    }
}
