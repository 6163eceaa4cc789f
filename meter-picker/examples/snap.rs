// Example: a slow drag that snaps to the nearest row.
use meter_picker::{DigitScrollController, PickerOptions};

fn main() {
    let mut c = DigitScrollController::new(PickerOptions::new().with_value(5))
        .expect("default range accepts 5");
    let row_height = 100;

    c.on_gesture_start(0.0);
    for y in [-40.0, -120.0, -260.0] {
        c.on_gesture_move(y, row_height);
        println!(
            "drag y={y}: preview={} value_offset={} offset={}",
            c.displayed_value_at(0),
            c.value_offset(),
            c.scroll_offset()
        );
    }

    // Below the fling threshold: rounds -2.6 rows away from zero to -3.
    c.on_gesture_end(-260.0, row_height, 10.0, 0);
    println!("committed value={} offset={}", c.value(), c.scroll_offset());

    let mut now_ms = 0;
    while c.on_animation_tick(row_height, now_ms) {
        now_ms += 100;
        println!("t={now_ms}ms offset={}", c.scroll_offset());
    }
}
