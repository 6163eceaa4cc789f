/// How a row offset maps onto a value change.
///
/// A positive row offset is what a downward drag produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollOrder {
    /// A positive offset increases the value.
    Ascending,
    /// A positive offset decreases the value.
    #[default]
    Descending,
}

impl ScrollOrder {
    /// Applies the order to a row offset, returning the signed value change.
    pub fn signed(self, offset: i64) -> i64 {
        match self {
            Self::Ascending => offset,
            Self::Descending => -offset,
        }
    }
}

/// Emitted when a committed value transition crosses the range boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WraparoundEvent {
    MaxToMin,
    MinToMax,
}

/// The sub-row decomposition of a raw drag offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowOffsets {
    /// Full rows displaced, truncated toward zero.
    pub value_offset: i32,
    /// Remaining pixels, always strictly inside `(-row_height, row_height)`.
    pub scroll_offset: i32,
}

impl RowOffsets {
    /// Splits `raw` pixels into whole rows plus a remainder carrying the sign of `raw`.
    ///
    /// `row_height` must be positive.
    pub fn split(raw: i32, row_height: i32) -> Self {
        debug_assert!(row_height > 0, "row_height must be positive");
        let value_offset = raw / row_height;
        // Integer division truncates toward zero, so the remainder keeps the sign of `raw`.
        let scroll_offset = raw - value_offset * row_height;
        Self {
            value_offset,
            scroll_offset,
        }
    }
}

/// Rounds `raw / row_height` to the nearest integer, halves away from zero.
///
/// Integer-only so that results do not depend on float rounding.
pub fn round_rows(raw: i32, row_height: i32) -> i32 {
    debug_assert!(row_height > 0, "row_height must be positive");
    let raw = raw as i64;
    let row = row_height as i64;
    let half_step = if raw < 0 { -row } else { row };
    ((2 * raw + half_step) / (2 * row)) as i32
}
