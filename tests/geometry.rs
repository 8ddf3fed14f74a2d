use badge_wasm::geometry::{BLUE_VERTICES, POSITION_SIZE, VERTEX_COUNT};
use badge_wasm::{AnimationState, Badge};

fn red_ys(badge: &Badge) -> Vec<f32> {
    badge.positions()[BLUE_VERTICES * POSITION_SIZE..]
        .chunks_exact(POSITION_SIZE)
        .map(|v| v[1])
        .collect()
}

#[test]
fn centered_at_phase_zero_has_no_wiggle() {
    let rest = Badge::new();
    let mut badge = Badge::new();
    badge.update(&AnimationState::new());
    assert_eq!(red_ys(&badge), red_ys(&rest));
}

#[test]
fn buffer_sizes_never_change() {
    let mut badge = Badge::new();
    let mut st = AnimationState::new();
    for _ in 0..1000 {
        st.tick();
        badge.update(&st);
        assert_eq!(badge.vertex_count(), VERTEX_COUNT);
        assert_eq!(badge.positions().len(), 90 * 3);
        assert_eq!(badge.colors().len(), 90 * 4);
    }
}

#[test]
fn letter_stays_put_while_stripes_move() {
    let rest = Badge::new();
    let mut badge = Badge::new();
    let mut st = AnimationState::new();
    // Off center, a few degrees into the swing.
    for _ in 0..168 + 40 {
        st.tick();
    }
    assert_eq!(st.wiggle(), 1.0);
    badge.update(&st);

    let blue = BLUE_VERTICES * POSITION_SIZE;
    assert_eq!(&badge.positions()[..blue], &rest.positions()[..blue]);

    let dy = 5.0f32.to_radians().sin();
    let moved = red_ys(&badge);
    let base = red_ys(&rest);
    // outer left stripe moves down by the full amplitude
    assert!((moved[0] - (base[0] - dy)).abs() < 1e-6);
    // innermost left stripe moves up at 0.6
    assert!((moved[12] - (base[12] + 0.6 * dy)).abs() < 1e-6);
    // innermost right stripe moves down at full amplitude
    assert!((moved[35] - (base[35] - dy)).abs() < 1e-6);
}

#[test]
fn update_is_not_cumulative() {
    let mut st = AnimationState::new();
    for _ in 0..200 {
        st.tick();
    }
    let mut once = Badge::new();
    once.update(&st);
    let mut twice = Badge::new();
    twice.update(&st);
    twice.update(&st);
    assert_eq!(once.positions(), twice.positions());
}
