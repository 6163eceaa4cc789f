use crate::{DigitRange, Motion, ScrollOrder};

/// A lightweight, serializable snapshot of a picker's scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerState {
    pub range: DigitRange,
    pub value: i32,
    pub order: ScrollOrder,
    pub scroll_offset: i32,
    pub value_offset: i32,
    pub motion: Option<Motion>,
}

impl PickerState {
    /// The value shown in the centre row right now (committed value plus drag preview).
    pub fn displayed_value(&self) -> i32 {
        self.range.wrap(self.value, self.value_offset, self.order)
    }

    pub fn is_settled(&self) -> bool {
        self.motion.is_none() && self.scroll_offset == 0 && self.value_offset == 0
    }
}
