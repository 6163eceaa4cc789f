use alloc::vec::Vec;

use meter_picker::{
    ConfigError, MAX_DIGITS, PickerOptions, Result, check_decimal_range, compose_digits,
    decompose_value,
};

use crate::{NumberPicker, PointerEvent};

/// Which of the two colour groups a digit belongs to (e.g. integer vs fractional part).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DigitGroup {
    First,
    Second,
}

/// Configuration for [`Meter`].
#[derive(Clone, Debug)]
pub struct MeterOptions {
    pub number_of_first: usize,
    pub number_of_second: usize,
    pub enabled: bool,
    /// Template every digit picker is created from.
    pub picker: PickerOptions,
}

impl Default for MeterOptions {
    fn default() -> Self {
        Self {
            number_of_first: 5,
            number_of_second: 0,
            enabled: true,
            picker: PickerOptions::new(),
        }
    }
}

impl MeterOptions {
    pub fn with_numbers_of(mut self, number_of_first: usize, number_of_second: usize) -> Self {
        self.number_of_first = number_of_first;
        self.number_of_second = number_of_second;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_picker(mut self, picker: PickerOptions) -> Self {
        self.picker = picker;
        self
    }

    pub fn digits(&self) -> usize {
        self.number_of_first.saturating_add(self.number_of_second)
    }
}

/// An odometer made of decimal digit pickers, most significant first.
///
/// The composite value only makes sense while every picker keeps the `[0, 9]` range.
#[derive(Clone, Debug)]
pub struct Meter {
    options: MeterOptions,
    pickers: Vec<NumberPicker>,
}

impl Meter {
    pub fn new(options: MeterOptions) -> Result<Self> {
        let pickers = build_pickers(&options)?;
        pdebug!(
            first = options.number_of_first,
            second = options.number_of_second,
            "Meter::new"
        );
        Ok(Self { options, pickers })
    }

    pub fn options(&self) -> &MeterOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.pickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickers.is_empty()
    }

    pub fn group(&self, index: usize) -> Option<DigitGroup> {
        if index >= self.pickers.len() {
            None
        } else if index < self.options.number_of_first {
            Some(DigitGroup::First)
        } else {
            Some(DigitGroup::Second)
        }
    }

    pub fn picker(&self, index: usize) -> Option<&NumberPicker> {
        self.pickers.get(index)
    }

    pub fn picker_mut(&mut self, index: usize) -> Option<&mut NumberPicker> {
        self.pickers.get_mut(index)
    }

    pub fn pickers(&self) -> impl Iterator<Item = &NumberPicker> {
        self.pickers.iter()
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
        for picker in &mut self.pickers {
            picker.set_enabled(enabled);
        }
    }

    /// Rebuilds all pickers with new group sizes. Digit values restart from the template.
    pub fn set_numbers_of(&mut self, number_of_first: usize, number_of_second: usize) -> Result<()> {
        let next = self
            .options
            .clone()
            .with_numbers_of(number_of_first, number_of_second);
        let row_height = self.pickers.first().map(|p| p.row_height());
        let mut pickers = build_pickers(&next)?;
        if let Some(row_height) = row_height {
            for picker in &mut pickers {
                picker.set_row_height(row_height);
            }
        }
        self.options = next;
        self.pickers = pickers;
        Ok(())
    }

    pub fn set_row_height(&mut self, row_height: i32) {
        for picker in &mut self.pickers {
            picker.set_row_height(row_height);
        }
    }

    /// The committed digits folded into one base-10 number.
    pub fn value(&self) -> u64 {
        let digits: Vec<i32> = self.pickers.iter().map(NumberPicker::value).collect();
        compose_digits(&digits)
    }

    /// Spreads `value` over the digits. Nothing changes if it does not fit.
    pub fn set_value(&mut self, value: u64) -> Result<()> {
        let digits = decompose_value(value, self.pickers.len())?;
        for (picker, &digit) in self.pickers.iter().zip(&digits) {
            picker.controller().range().check(digit)?;
        }
        for (picker, digit) in self.pickers.iter_mut().zip(digits) {
            picker.set_value(digit)?;
        }
        Ok(())
    }

    /// Routes a pointer event to the digit at `index`.
    pub fn on_pointer(&mut self, index: usize, event: PointerEvent) -> bool {
        if !self.options.enabled {
            return false;
        }
        self.pickers
            .get_mut(index)
            .is_some_and(|picker| picker.on_pointer(event))
    }

    /// Ticks every digit; returns `true` while any of them is still moving.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut moving = false;
        for picker in &mut self.pickers {
            moving |= picker.tick(now_ms);
        }
        moving
    }
}

fn build_pickers(options: &MeterOptions) -> Result<Vec<NumberPicker>> {
    let count = options.digits();
    if count > MAX_DIGITS {
        return Err(ConfigError::TooManyDigits {
            requested: count,
            max: MAX_DIGITS,
        });
    }
    check_decimal_range(options.picker.min, options.picker.max)?;
    (0..count)
        .map(|_| {
            let mut picker = NumberPicker::new(options.picker.clone())?;
            picker.set_enabled(options.enabled);
            Ok(picker)
        })
        .collect()
}
