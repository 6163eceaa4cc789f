use thiserror::Error;

/// A rejected configuration or value assignment.
///
/// Validating calls check everything up front and leave the previous state untouched when they
/// return one of these.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min value must be >= 0 but was {0}")]
    NegativeMin(i32),

    #[error("max value must be >= 0 but was {0}")]
    NegativeMax(i32),

    #[error("min value {min} is greater than max value {max}")]
    InvertedRange { min: i32, max: i32 },

    #[error("value must be >= {min} but was {value}")]
    ValueBelowMin { value: i32, min: i32 },

    #[error("value must be <= {max} but was {value}")]
    ValueAboveMax { value: i32, max: i32 },

    #[error("value {value} does not fit into {digits} digits")]
    CompositeOverflow { value: u64, digits: usize },

    #[error("meter digits must stay within 0..=9 but the picker range is {min}..={max}")]
    NonDecimalRange { min: i32, max: i32 },

    #[error("a meter supports at most {max} digits but {requested} were requested")]
    TooManyDigits { requested: usize, max: usize },
}

pub type Result<T> = core::result::Result<T, ConfigError>;
