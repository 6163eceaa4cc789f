use alloc::vec::Vec;

use crate::{ConfigError, Result};

/// The most digits a composite value can hold without overflowing `u64`.
pub const MAX_DIGITS: usize = 19;

/// Folds decimal digits, most significant first, into one integer.
///
/// Digits are expected to be in `0..=9`. Anything else still folds positionally (`[1, 12]` gives
/// `22`) and the sum saturates instead of overflowing.
pub fn compose_digits(digits: &[i32]) -> u64 {
    digits.iter().fold(0u64, |acc, &digit| {
        acc.saturating_mul(10).saturating_add(digit.max(0) as u64)
    })
}

/// Checks that a per-digit range only holds decimal digits.
pub fn check_decimal_range(min: i32, max: i32) -> Result<()> {
    if min < 0 || max > 9 {
        return Err(ConfigError::NonDecimalRange { min, max });
    }
    Ok(())
}

/// Splits `value` into exactly `count` decimal digits, most significant first.
///
/// Fails when `value` needs more than `count` digits.
pub fn decompose_value(value: u64, count: usize) -> Result<Vec<i32>> {
    if count > MAX_DIGITS {
        return Err(ConfigError::TooManyDigits {
            requested: count,
            max: MAX_DIGITS,
        });
    }

    let mut digits = Vec::with_capacity(count);
    let mut rest = value;
    for i in 0..count {
        let place = 10u64.pow((count - 1 - i) as u32);
        let digit = rest / place;
        if digit > 9 {
            return Err(ConfigError::CompositeOverflow {
                value,
                digits: count,
            });
        }
        rest -= digit * place;
        digits.push(digit as i32);
    }

    if rest != 0 {
        // Only reachable with zero digits.
        return Err(ConfigError::CompositeOverflow {
            value,
            digits: count,
        });
    }
    Ok(digits)
}
