use crate::*;

use alloc::vec::Vec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i32(&mut self, start: i32, end_exclusive: i32) -> i32 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive as i64 - start as i64) as u64;
        (start as i64 + (self.next_u64() % span) as i64) as i32
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start))
    }

    fn gen_order(&mut self) -> ScrollOrder {
        if (self.next_u64() & 1) == 1 {
            ScrollOrder::Ascending
        } else {
            ScrollOrder::Descending
        }
    }
}

const ROW: i32 = 100;

fn controller(value: i32, order: ScrollOrder) -> DigitScrollController {
    DigitScrollController::new(PickerOptions::new().with_value(value).with_order(order)).unwrap()
}

fn recorder() -> (Arc<Mutex<Vec<WraparoundEvent>>>, impl Fn(WraparoundEvent) + Send + Sync) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    (events, move |e| sink.lock().unwrap().push(e))
}

fn run_until_idle(c: &mut DigitScrollController, mut now_ms: u64, step_ms: u64) -> u64 {
    for _ in 0..100_000 {
        now_ms += step_ms;
        if !c.on_animation_tick(ROW, now_ms) {
            return now_ms;
        }
    }
    panic!("controller never settled");
}

fn fast_fling_options(order: ScrollOrder) -> PickerOptions {
    PickerOptions::new()
        .with_order(order)
        .with_fling_velocity_bounds(50.0, 8_000.0)
}

#[test]
fn wrap_stays_in_range_for_any_offset() {
    let mut rng = Lcg::new(7);
    for _ in 0..2_000 {
        let min = rng.gen_range_i32(0, 50);
        let max = rng.gen_range_i32(min, 100);
        let range = DigitRange::new(min, max).unwrap();
        let value = rng.gen_range_i32(min, max + 1);
        let order = rng.gen_order();
        for offset in [
            rng.gen_range_i32(-1_000, 1_000),
            rng.gen_range_i32(-10, 10),
            i32::MIN,
            i32::MAX,
        ] {
            let out = range.wrap(value, offset, order);
            assert!(range.contains(out), "{value} + {offset} -> {out} in {range:?}");
        }
    }
}

#[test]
fn wrap_by_zero_is_identity() {
    let range = DigitRange::new(3, 12).unwrap();
    for value in 3..=12 {
        for order in [ScrollOrder::Ascending, ScrollOrder::Descending] {
            assert_eq!(range.wrap(value, 0, order), value);
            assert_eq!(range.wrap_with_event(value, 0, order).event, None);
        }
    }
}

#[test]
fn wrap_offsets_compose() {
    let mut rng = Lcg::new(42);
    for _ in 0..2_000 {
        let min = rng.gen_range_i32(0, 20);
        let max = rng.gen_range_i32(min, 40);
        let range = DigitRange::new(min, max).unwrap();
        let value = rng.gen_range_i32(min, max + 1);
        let order = rng.gen_order();
        let a = rng.gen_range_i32(-500, 500);
        let b = rng.gen_range_i32(-500, 500);

        let stepwise = range.wrap(range.wrap(value, a, order), b, order);
        assert_eq!(stepwise, range.wrap(value, a + b, order));
    }
}

#[test]
fn wrap_follows_scroll_order() {
    let range = DigitRange::default();
    assert_eq!(range.wrap(5, -3, ScrollOrder::Descending), 8);
    assert_eq!(range.wrap(5, -3, ScrollOrder::Ascending), 2);
    assert_eq!(range.wrap(9, 1, ScrollOrder::Ascending), 0);
    assert_eq!(range.wrap(0, 1, ScrollOrder::Descending), 9);
    assert_eq!(range.wrap(4, 23, ScrollOrder::Ascending), 7);
}

#[test]
fn wrap_reports_boundary_crossings() {
    let range = DigitRange::default();
    assert_eq!(
        range.wrap_with_event(9, 1, ScrollOrder::Ascending),
        Wrapped {
            value: 0,
            event: Some(WraparoundEvent::MaxToMin)
        }
    );
    assert_eq!(
        range.wrap_with_event(0, 1, ScrollOrder::Descending),
        Wrapped {
            value: 9,
            event: Some(WraparoundEvent::MinToMax)
        }
    );
    assert_eq!(range.wrap_with_event(3, 4, ScrollOrder::Ascending).event, None);
}

#[test]
fn split_reassembles_raw_offset() {
    let mut rng = Lcg::new(3);
    for _ in 0..5_000 {
        let raw = rng.gen_range_i32(-100_000, 100_000);
        let row = rng.gen_range_i32(1, 500);
        let o = RowOffsets::split(raw, row);

        assert_eq!(o.value_offset * row + o.scroll_offset, raw);
        assert!(o.scroll_offset > -row && o.scroll_offset < row);
        assert!(o.scroll_offset == 0 || o.scroll_offset.signum() == raw.signum());
    }
}

#[test]
fn split_truncates_toward_zero() {
    assert_eq!(
        RowOffsets::split(-260, 100),
        RowOffsets {
            value_offset: -2,
            scroll_offset: -60
        }
    );
    assert_eq!(
        RowOffsets::split(250, 100),
        RowOffsets {
            value_offset: 2,
            scroll_offset: 50
        }
    );
}

#[test]
fn round_rows_rounds_half_away_from_zero() {
    assert_eq!(round_rows(-260, 100), -3);
    assert_eq!(round_rows(250, 100), 3);
    assert_eq!(round_rows(-250, 100), -3);
    assert_eq!(round_rows(249, 100), 2);
    assert_eq!(round_rows(-49, 100), 0);
    assert_eq!(round_rows(-50, 100), -1);
    assert_eq!(round_rows(0, 100), 0);
}

#[test]
fn range_validation_rejects_bad_bounds() {
    assert_eq!(DigitRange::new(-1, 9), Err(ConfigError::NegativeMin(-1)));
    assert_eq!(DigitRange::new(0, -1), Err(ConfigError::NegativeMax(-1)));
    assert_eq!(
        DigitRange::new(5, 3),
        Err(ConfigError::InvertedRange { min: 5, max: 3 })
    );
    assert_eq!(
        PickerOptions::new().with_value(10).validate(),
        Err(ConfigError::ValueAboveMax { value: 10, max: 9 })
    );
    assert!(DigitScrollController::new(PickerOptions::new().with_range(2, 4)).is_err());
}

#[test]
fn setters_validate_and_leave_state_unchanged_on_error() {
    let mut c = controller(5, ScrollOrder::Descending);

    assert_eq!(
        c.set_value(-1),
        Err(ConfigError::ValueBelowMin { value: -1, min: 0 })
    );
    assert_eq!(c.value(), 5);

    assert_eq!(c.set_min_value(-1), Err(ConfigError::NegativeMin(-1)));
    assert_eq!(c.set_max_value(-3), Err(ConfigError::NegativeMax(-3)));
    assert_eq!(c.range(), DigitRange::default());

    let err = c.configure(0, 5, 7, ScrollOrder::Ascending).unwrap_err();
    assert_eq!(err, ConfigError::ValueAboveMax { value: 7, max: 5 });
    assert_eq!(c.range(), DigitRange::default());
    assert_eq!(c.order(), ScrollOrder::Descending);
    assert_eq!(c.value(), 5);
}

#[test]
fn narrowing_bounds_clamps_value() {
    let mut c = controller(8, ScrollOrder::Descending);
    c.set_max_value(5).unwrap();
    assert_eq!(c.value(), 5);

    c.set_min_value(4).unwrap();
    assert_eq!(c.value(), 5);
    c.set_min_value(5).unwrap();
    c.set_max_value(7).unwrap();
    c.set_min_value(7).unwrap();
    assert_eq!(c.value(), 7);
    assert_eq!(c.options().min, 7);
}

#[test]
fn drag_previews_without_committing() {
    let mut c = controller(5, ScrollOrder::Descending);
    c.on_gesture_start(10.0);
    c.on_gesture_move(260.0, ROW);

    assert_eq!(c.value(), 5);
    assert_eq!(c.value_offset(), 2);
    assert_eq!(c.scroll_offset(), 50);
    assert_eq!(c.displayed_value_at(0), 3);
    assert_eq!(c.displayed_value_at(1), 2);
    assert_eq!(c.displayed_value_at(-1), 4);
    assert!(!c.snapshot().is_settled());
    assert_eq!(c.snapshot().displayed_value(), 3);
}

#[test]
fn slow_release_commits_rounded_rows_descending() {
    let mut c = controller(5, ScrollOrder::Descending);
    c.on_gesture_start(0.0);
    c.on_gesture_move(-260.0, ROW);
    c.on_gesture_end(-260.0, ROW, 0.0, 1_000);

    assert_eq!(c.value(), 8);
    assert_eq!(c.value_offset(), 0);
    assert_eq!(c.scroll_offset(), 40);
    assert!(matches!(c.motion(), Some(Motion::Adjust(_))));

    assert!(c.on_animation_tick(ROW, 1_400));
    assert!(c.scroll_offset() > 0 && c.scroll_offset() < 40);
    assert!(c.on_animation_tick(ROW, 1_800));
    assert_eq!(c.scroll_offset(), 0);
    assert!(!c.is_animating());
    assert!(!c.on_animation_tick(ROW, 1_816));
    assert!(c.snapshot().is_settled());
}

#[test]
fn slow_release_commits_rounded_rows_ascending() {
    let mut c = controller(5, ScrollOrder::Ascending);
    c.on_gesture_start(0.0);
    c.on_gesture_move(-260.0, ROW);
    c.on_gesture_end(-260.0, ROW, 0.0, 0);
    assert_eq!(c.value(), 2);
}

#[test]
fn release_on_row_boundary_needs_no_animation() {
    let mut c = controller(9, ScrollOrder::Ascending);
    c.on_gesture_start(0.0);
    c.on_gesture_end(100.0, ROW, 0.0, 0);

    assert_eq!(c.value(), 0);
    assert_eq!(c.scroll_offset(), 0);
    assert!(!c.is_animating());
}

#[test]
fn wraparound_listener_fires_on_committed_crossings() {
    let (events, sink) = recorder();
    let mut c = DigitScrollController::new(
        PickerOptions::new()
            .with_value(9)
            .with_order(ScrollOrder::Ascending)
            .with_on_wraparound(Some(sink)),
    )
    .unwrap();

    c.on_gesture_start(0.0);
    c.on_gesture_end(100.0, ROW, 0.0, 0);
    assert_eq!(c.value(), 0);

    c.on_gesture_start(0.0);
    c.on_gesture_end(-100.0, ROW, 0.0, 0);
    assert_eq!(c.value(), 9);

    c.on_gesture_start(0.0);
    c.on_gesture_end(-300.0, ROW, 0.0, 0);
    assert_eq!(c.value(), 6);

    assert_eq!(
        *events.lock().unwrap(),
        [WraparoundEvent::MaxToMin, WraparoundEvent::MinToMax]
    );
}

#[test]
fn drag_preview_never_fires_wraparound() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = controller(0, ScrollOrder::Descending);
    c.set_on_wraparound(Some({
        let calls = Arc::clone(&calls);
        move |_| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));

    c.on_gesture_start(0.0);
    c.on_gesture_move(350.0, ROW);
    assert_eq!(c.displayed_value_at(0), 7);
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    c.on_gesture_end(350.0, ROW, 0.0, 0);
    assert_eq!(c.value(), 6);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn velocity_below_threshold_snaps_instead_of_flinging() {
    let mut c = controller(3, ScrollOrder::Descending);
    c.on_gesture_start(0.0);
    c.on_gesture_move(30.0, ROW);
    c.on_gesture_end(30.0, ROW, 40.0, 0);

    assert!(matches!(c.motion(), Some(Motion::Adjust(_))));
    assert_eq!(c.value(), 3);
}

#[test]
fn fling_velocity_is_capped() {
    let mut c = controller(0, ScrollOrder::Descending);
    c.on_gesture_start(0.0);
    c.on_gesture_end(0.0, ROW, -100_000.0, 0);

    let Some(Motion::Fling(fling)) = c.motion().copied() else {
        panic!("expected a fling");
    };
    assert_eq!(fling.velocity, -DEFAULT_MAX_FLING_VELOCITY);
    assert!(fling.distance < 0);
}

#[test]
fn fling_commits_one_row_per_row_height_regardless_of_tick_rate() {
    const T: u64 = 400;
    let mut at_t = Vec::new();
    let mut settled = Vec::new();

    for step in [1u64, 5, 16, 20, 50, 400] {
        let mut c = DigitScrollController::new(fast_fling_options(ScrollOrder::Ascending)).unwrap();
        c.on_gesture_start(0.0);
        c.on_gesture_end(0.0, ROW, 4_000.0, 0);
        let Some(Motion::Fling(fling)) = c.motion().copied() else {
            panic!("expected a fling");
        };
        assert!((2_000..3_000).contains(&fling.distance), "{fling:?}");

        let mut now = 0;
        while now < T {
            now += step;
            assert!(c.on_animation_tick(ROW, now));
        }
        let position = fling.sample(T);
        assert_eq!(c.value(), c.range().wrap(0, position / ROW, ScrollOrder::Ascending));
        assert_eq!(c.scroll_offset(), position % ROW);
        at_t.push((c.value(), c.scroll_offset()));

        run_until_idle(&mut c, now, step);
        let rest = fling.distance % ROW;
        let rows = fling.distance / ROW + if rest >= ROW / 2 { 1 } else { 0 };
        assert_eq!(c.value(), c.range().wrap(0, rows, ScrollOrder::Ascending));
        assert_eq!(c.scroll_offset(), 0);
        settled.push(c.value());
    }

    assert!(at_t.windows(2).all(|w| w[0] == w[1]), "{at_t:?}");
    assert!(settled.windows(2).all(|w| w[0] == w[1]), "{settled:?}");
}

#[test]
fn fling_fires_wraparound_live_for_each_crossing() {
    let (events, sink) = recorder();
    let mut c = DigitScrollController::new(
        fast_fling_options(ScrollOrder::Ascending).with_on_wraparound(Some(sink)),
    )
    .unwrap();
    c.on_gesture_start(0.0);
    c.on_gesture_end(0.0, ROW, 4_000.0, 0);
    run_until_idle(&mut c, 0, 1);

    // About 22 rows from 0 ascending pass 9 -> 0 exactly twice.
    assert_eq!(
        *events.lock().unwrap(),
        [WraparoundEvent::MaxToMin, WraparoundEvent::MaxToMin]
    );
}

#[test]
fn upward_fling_moves_the_other_way() {
    let mut c = DigitScrollController::new(fast_fling_options(ScrollOrder::Ascending)).unwrap();
    c.on_gesture_start(0.0);
    c.on_gesture_end(0.0, ROW, -4_000.0, 0);
    let Some(Motion::Fling(fling)) = c.motion().copied() else {
        panic!("expected a fling");
    };

    c.on_animation_tick(ROW, 100);
    assert!(c.scroll_offset() <= 0);
    run_until_idle(&mut c, 100, 16);

    let rest = fling.distance % ROW;
    let rows = fling.distance / ROW + if rest <= -ROW / 2 { -1 } else { 0 };
    assert_eq!(c.value(), c.range().wrap(0, rows, ScrollOrder::Ascending));
    assert!(c.snapshot().is_settled());
}

#[test]
fn fling_continues_from_drag_preview() {
    let mut c = DigitScrollController::new(fast_fling_options(ScrollOrder::Ascending)).unwrap();
    c.on_gesture_start(0.0);
    c.on_gesture_move(230.0, ROW);
    c.on_gesture_end(230.0, ROW, 4_000.0, 0);

    assert_eq!(c.value(), 2);
    assert_eq!(c.value_offset(), 0);
    assert_eq!(c.scroll_offset(), 30);
    assert!(c.motion().is_some_and(Motion::is_fling));
}

#[test]
fn gesture_start_cancels_motion() {
    let mut c = DigitScrollController::new(fast_fling_options(ScrollOrder::Ascending)).unwrap();
    c.on_gesture_start(0.0);
    c.on_gesture_end(0.0, ROW, 4_000.0, 0);
    c.on_animation_tick(ROW, 200);
    let value = c.value();

    c.on_gesture_start(50.0);
    assert!(!c.is_animating());
    assert!(!c.on_animation_tick(ROW, 216));
    assert_eq!(c.value(), value);
}

#[test]
fn idle_tick_leaves_drag_preview_alone() {
    let mut c = controller(4, ScrollOrder::Descending);
    c.on_gesture_start(0.0);
    c.on_gesture_move(30.0, ROW);

    assert!(!c.on_animation_tick(ROW, 16));
    assert_eq!(c.scroll_offset(), 30);
    assert_eq!(c.value(), 4);
}

#[test]
fn cancel_snaps_to_nearest_row() {
    let mut c = controller(5, ScrollOrder::Descending);
    c.on_gesture_start(0.0);
    c.on_gesture_move(70.0, ROW);
    c.on_gesture_cancel(ROW, 0);

    assert_eq!(c.value(), 4);
    assert_eq!(c.scroll_offset(), -30);
    run_until_idle(&mut c, 0, 16);
    assert!(c.snapshot().is_settled());
}

#[test]
fn non_positive_row_height_is_ignored() {
    let mut c = controller(5, ScrollOrder::Descending);
    c.on_gesture_start(0.0);
    c.on_gesture_move(70.0, 0);
    c.on_gesture_end(70.0, -5, 0.0, 0);

    assert_eq!(c.value(), 5);
    assert_eq!(c.scroll_offset(), 0);
    assert!(!c.is_animating());
}

#[test]
fn stray_cancel_after_release_changes_nothing() {
    let mut c = controller(0, ScrollOrder::Ascending);
    c.on_gesture_start(0.0);
    c.on_gesture_move(230.0, ROW);
    c.on_gesture_end(230.0, ROW, 0.0, 0);
    assert_eq!(c.value(), 2);
    assert!(!c.is_dragging());
    let now = run_until_idle(&mut c, 0, 16);

    c.on_gesture_cancel(ROW, now);
    c.on_gesture_end(230.0, ROW, 0.0, now);
    assert_eq!(c.value(), 2);
    assert!(c.snapshot().is_settled());
}

#[test]
fn stray_cancel_leaves_running_fling_alone() {
    let mut c = DigitScrollController::new(fast_fling_options(ScrollOrder::Descending)).unwrap();
    c.on_gesture_start(0.0);
    c.on_gesture_end(0.0, ROW, 4_000.0, 0);
    let mut now = 0;
    while now < 200 {
        now += 16;
        c.on_animation_tick(ROW, now);
    }
    let (value, scroll) = (c.value(), c.scroll_offset());

    c.on_gesture_cancel(ROW, now);
    assert_eq!((c.value(), c.scroll_offset()), (value, scroll));
    assert!(matches!(c.motion(), Some(Motion::Fling(_))));
}

#[test]
fn move_without_gesture_is_ignored() {
    let mut c = controller(5, ScrollOrder::Descending);
    c.on_gesture_move(70.0, ROW);
    assert_eq!(c.scroll_offset(), 0);
    assert_eq!(c.displayed_value_at(0), 5);
}

#[test]
fn tick_without_row_height_pauses_motion() {
    let mut c = controller(5, ScrollOrder::Descending);
    c.on_gesture_start(0.0);
    c.on_gesture_end(-260.0, ROW, 0.0, 0);
    assert!(c.is_animating());
    let scroll = c.scroll_offset();

    assert!(!c.on_animation_tick(0, 100));
    assert!(!c.on_animation_tick(-5, 200));
    assert!(c.is_animating());
    assert_eq!(c.scroll_offset(), scroll);

    assert!(c.on_animation_tick(ROW, 300));
    assert_ne!(c.scroll_offset(), scroll);
    run_until_idle(&mut c, 300, 16);
    assert_eq!(c.value(), 8);
    assert_eq!(c.scroll_offset(), 0);
}

#[test]
fn set_options_resets_motion() {
    let mut c = controller(5, ScrollOrder::Descending);
    c.on_gesture_start(0.0);
    c.on_gesture_end(-260.0, ROW, 0.0, 0);
    assert!(c.is_animating());

    c.set_options(PickerOptions::new().with_range(1, 6).with_value(6))
        .unwrap();
    assert_eq!(c.value(), 6);
    assert_eq!(c.range(), DigitRange::new(1, 6).unwrap());
    assert!(c.snapshot().is_settled());
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::Decelerate(2.5),
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert!((easing.sample(1.0) - 1.0).abs() < 1e-6);
    }
    assert!(Easing::default().sample(0.25) > 0.5);
}

#[test]
fn tween_ends_exactly_on_target() {
    let tween = Tween::new(40, 0, 100, 800, Easing::default());
    assert_eq!(tween.sample(100), 40);
    assert_eq!(tween.sample(900), 0);
    assert_eq!(tween.sample(5_000), 0);
    assert!(!tween.is_done(899));
    assert!(tween.is_done(900));
}

#[test]
fn fling_physics_scales_with_velocity() {
    let physics = FlingPhysics::default();
    assert_eq!(physics.duration_ms(0.0), 0);
    assert_eq!(physics.distance(0.0), 0.0);
    assert!(physics.duration_ms(2_000.0) > physics.duration_ms(500.0));
    assert!(physics.distance(2_000.0) > physics.distance(500.0));
    assert_eq!(physics.distance(-1_000.0), physics.distance(1_000.0));

    let fling = Fling::new(1_000.0, 0, physics);
    let mut last = 0;
    let mut now = 0;
    while !fling.is_done(now) {
        let pos = fling.sample(now);
        assert!(pos >= last);
        last = pos;
        now += 7;
    }
    assert_eq!(fling.sample(now), fling.distance);
}

#[test]
fn composite_helpers_round_trip() {
    assert_eq!(compose_digits(&[4, 8, 2]), 482);
    assert_eq!(decompose_value(482, 3).unwrap(), [4, 8, 2]);
    assert_eq!(decompose_value(7, 3).unwrap(), [0, 0, 7]);
    assert_eq!(decompose_value(0, 0).unwrap(), Vec::<i32>::new());

    let mut rng = Lcg::new(11);
    for digits in 1..=MAX_DIGITS {
        let capacity = 10u128.pow(digits as u32);
        for _ in 0..50 {
            let upper = capacity.min(u64::MAX as u128) as u64;
            let v = rng.gen_range_u64(0, upper);
            let parts = decompose_value(v, digits).unwrap();
            assert_eq!(parts.len(), digits);
            assert_eq!(compose_digits(&parts), v);
        }
    }
}

#[test]
fn compose_tolerates_out_of_range_digits() {
    assert_eq!(compose_digits(&[12]), 12);
    assert_eq!(compose_digits(&[1, 12]), 22);
    assert_eq!(compose_digits(&[-3, 4]), 4);
    assert_eq!(compose_digits(&[9; MAX_DIGITS + 2]), u64::MAX);

    assert_eq!(check_decimal_range(0, 9), Ok(()));
    assert_eq!(
        check_decimal_range(0, 15),
        Err(ConfigError::NonDecimalRange { min: 0, max: 15 })
    );
}

#[test]
fn composite_rejects_values_over_capacity() {
    assert_eq!(
        decompose_value(1_000, 3),
        Err(ConfigError::CompositeOverflow {
            value: 1_000,
            digits: 3
        })
    );
    assert!(decompose_value(1, 0).is_err());
    assert!(decompose_value(u64::MAX, MAX_DIGITS).is_err());
    assert_eq!(
        decompose_value(9_999_999_999_999_999_999, MAX_DIGITS).unwrap(),
        [9; MAX_DIGITS]
    );
    assert_eq!(
        decompose_value(1, MAX_DIGITS + 1),
        Err(ConfigError::TooManyDigits {
            requested: MAX_DIGITS + 1,
            max: MAX_DIGITS
        })
    );
}
