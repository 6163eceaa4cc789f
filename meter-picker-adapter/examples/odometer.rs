use meter_picker_adapter::{Meter, MeterOptions, PickerCanvas, PointerEvent, VisibleRow};

struct TextCanvas {
    line: String,
}

impl PickerCanvas for TextCanvas {
    fn draw_row(&mut self, row: VisibleRow) {
        // Only the row nearest the centre is "visible" in this text rendering.
        if row.y_offset.abs() * 2 < 40 {
            self.line.push_str(&row.value.to_string());
        }
    }
}

fn main() {
    // Example: a 4+1 digit meter (e.g. kWh with one fractional digit).
    let mut meter = Meter::new(MeterOptions::default().with_numbers_of(4, 1))
        .expect("5 digits fit into a u64");
    meter.set_row_height(40);
    meter.set_value(4_821).expect("4821 fits into 5 digits");
    println!("initial value={}", meter.value());

    // The adapter routes pointer events to the digit under the finger.
    meter.on_pointer(3, PointerEvent::down(100.0, 0));
    meter.on_pointer(3, PointerEvent::moved(70.0, 60));
    meter.on_pointer(3, PointerEvent::up(55.0, 120));

    let mut now_ms = 120;
    while meter.tick(now_ms) {
        now_ms += 16;
    }

    let mut canvas = TextCanvas {
        line: String::new(),
    };
    for (i, picker) in meter.pickers().enumerate() {
        if meter.group(i) == Some(meter_picker_adapter::DigitGroup::Second) {
            canvas.line.push('.');
        }
        picker.draw(&mut canvas);
    }
    println!("after drag: value={} display={}", meter.value(), canvas.line);
}
