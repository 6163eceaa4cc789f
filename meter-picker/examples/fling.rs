// Example: a host frame loop driving a fling until the digit settles.
use meter_picker::{DigitScrollController, PickerOptions, ScrollOrder, WraparoundEvent};

fn main() {
    let options = PickerOptions::new()
        .with_value(3)
        .with_order(ScrollOrder::Ascending)
        .with_fling_velocity_bounds(50.0, 8_000.0)
        .with_on_wraparound(Some(|event: WraparoundEvent| {
            println!("  wrapped: {event:?}");
        }));
    let mut c = DigitScrollController::new(options).expect("default range accepts 3");

    // The row height comes from the host's measure pass.
    let row_height = 48;

    // A short downward drag released quickly.
    c.on_gesture_start(200.0);
    c.on_gesture_move(230.0, row_height);
    c.on_gesture_end(260.0, row_height, 2_500.0, 0);
    println!("released: value={} offset={}", c.value(), c.scroll_offset());

    // Simulate a 60fps "tick".
    let mut now_ms = 0u64;
    let mut frame = 0u64;
    while c.on_animation_tick(row_height, now_ms) {
        if frame % 10 == 0 {
            println!(
                "t={now_ms}ms value={} offset={} rows=[{}, {}, {}]",
                c.value(),
                c.scroll_offset(),
                c.displayed_value_at(1),
                c.displayed_value_at(0),
                c.displayed_value_at(-1),
            );
        }
        now_ms += 16;
        frame += 1;
    }

    println!("settled: {:?}", c.snapshot());
}
