//! Integration tests: algebraic laws of the resize pipeline (rz-core).
//!
//! Sweeps a handful of sizes, deltas, and angles rather than single points,
//! so a regression in one handle's table entry shows up immediately.

use pretty_assertions::assert_eq;
use rz_core::{
    Direction, ResizeOptions, Size, Vec2, clamp_min_size, preserve_aspect_ratio, reduce_size,
    resize_step, rotate_displacement,
};

const SIZES: [Size; 4] = [
    Size::new(100.0, 100.0),
    Size::new(320.0, 48.5),
    Size::new(0.0, 12.0),
    Size::new(1e6, 3.0),
];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ─── Size reducer ───────────────────────────────────────────────────────

#[test]
fn zero_displacement_is_identity_for_every_handle() {
    for s in SIZES {
        for d in Direction::ALL {
            assert_eq!(reduce_size(s, Vec2::ZERO, d), s, "{d} on {s:?}");
        }
    }
}

#[test]
fn opposite_edges_mirror_each_other() {
    let s = Size::new(100.0, 60.0);

    let top = reduce_size(s, Vec2::new(0.0, 10.0), Direction::Top);
    let bottom = reduce_size(s, Vec2::new(0.0, -10.0), Direction::Bottom);
    assert_eq!(top.height, bottom.height);

    let left = reduce_size(s, Vec2::new(10.0, 0.0), Direction::Left);
    let right = reduce_size(s, Vec2::new(-10.0, 0.0), Direction::Right);
    assert_eq!(left.width, right.width);
}

#[test]
fn dragging_outward_always_grows() {
    let s = Size::new(100.0, 100.0);
    for d in Direction::ALL {
        let effect = d.axis_effect();
        let outward = Vec2::new(f64::from(effect.width) * 5.0, f64::from(effect.height) * 5.0);
        let grown = reduce_size(s, outward, d);
        assert!(grown.width >= s.width, "{d} shrank width");
        assert!(grown.height >= s.height, "{d} shrank height");
        assert!(grown != s, "{d} did not move");
    }
}

// ─── Rotator ────────────────────────────────────────────────────────────

#[test]
fn full_turn_matches_no_turn() {
    for v in [Vec2::new(1.0, 0.0), Vec2::new(-3.5, 8.0), Vec2::new(0.0, -42.0)] {
        let a = rotate_displacement(v, 0.0);
        let b = rotate_displacement(v, 360.0);
        assert!(close(a.x, b.x) && close(a.y, b.y), "{v:?}: {a:?} vs {b:?}");
    }
}

#[test]
fn rotation_preserves_length() {
    let v = Vec2::new(30.0, -40.0);
    for deg in [15.0, 45.0, 90.0, 133.0, 270.0, -60.0] {
        let r = rotate_displacement(v, deg);
        assert!(close(r.hypot(), 50.0), "{deg}°: {r:?}");
    }
}

#[test]
fn opposite_rotations_cancel() {
    let v = Vec2::new(12.0, 7.0);
    let r = rotate_displacement(rotate_displacement(v, 37.0), -37.0);
    assert!(close(r.x, v.x) && close(r.y, v.y), "{r:?}");
}

// ─── Clamp ──────────────────────────────────────────────────────────────

#[test]
fn clamp_is_idempotent() {
    for s in SIZES {
        for (w, h) in [(0.0, 0.0), (50.0, 50.0), (200.0, 10.0), (-5.0, -5.0)] {
            let once = clamp_min_size(s, w, h);
            assert_eq!(clamp_min_size(once, w, h), once);
        }
    }
}

#[test]
fn negative_minimums_pass_through() {
    let s = Size::new(-10.0, 5.0);
    assert_eq!(clamp_min_size(s, -20.0, -20.0), s);
}

// ─── Aspect lock ────────────────────────────────────────────────────────

#[test]
fn aspect_lock_keeps_ratio_for_right() {
    let old = Size::new(80.0, 30.0);
    for new_w in [10.0, 80.0, 123.4, 500.0] {
        let r = preserve_aspect_ratio(old, Size::new(new_w, 999.0), Direction::Right);
        assert!(close(r.height, old.height * (r.width / old.width)), "{r:?}");
    }
}

#[test]
fn aspect_lock_width_driven_handles_ignore_height_delta() {
    let old = Size::new(100.0, 50.0);
    for d in Direction::ALL.into_iter().filter(|d| d.axis_effect().width != 0) {
        let r = preserve_aspect_ratio(old, Size::new(200.0, 1.0), d);
        assert_eq!(r, Size::new(200.0, 100.0), "{d}");
    }
}

// ─── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn scenario_bottom_right_plain() {
    let out = resize_step(
        Size::new(100.0, 100.0),
        Vec2::new(50.0, 30.0),
        Direction::BottomRight,
        &ResizeOptions::default(),
        false,
    );
    assert_eq!(out, Size::new(150.0, 130.0));
}

#[test]
fn scenario_left_outward_grows_width() {
    let out = resize_step(
        Size::new(100.0, 100.0),
        Vec2::new(-20.0, 0.0),
        Direction::Left,
        &ResizeOptions::default(),
        false,
    );
    assert_eq!(out, Size::new(120.0, 100.0));
}

#[test]
fn scenario_min_width_clamp() {
    let options = ResizeOptions {
        min_width: 50.0,
        ..ResizeOptions::default()
    };
    let out = resize_step(
        Size::new(100.0, 100.0),
        Vec2::new(80.0, 0.0),
        Direction::Left,
        &options,
        false,
    );
    assert_eq!(out.width, 50.0);
}

#[test]
fn scenario_aspect_lock_right() {
    let options = ResizeOptions {
        preserve_aspect_ratio: true,
        ..ResizeOptions::default()
    };
    let out = resize_step(
        Size::new(100.0, 50.0),
        Vec2::new(50.0, 0.0),
        Direction::Right,
        &options,
        false,
    );
    assert_eq!(out, Size::new(150.0, 75.0));
}

#[test]
fn rotated_element_grows_along_its_own_axis() {
    // Element turned 90° clockwise: dragging its right handle means moving
    // the pointer screen-down.
    let options = ResizeOptions {
        rotation: 90.0,
        ..ResizeOptions::default()
    };
    let out = resize_step(
        Size::new(100.0, 40.0),
        Vec2::new(0.0, 25.0),
        Direction::Right,
        &options,
        false,
    );
    assert!(close(out.width, 125.0), "{out:?}");
    assert!(close(out.height, 40.0), "{out:?}");
}
