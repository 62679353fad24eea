//! Size algebra for one resize step.
//!
//! The pipeline for a single pointer move is:
//!
//! 1. divide the raw screen delta by `scale`
//! 2. [`rotate_displacement`] into the element's unrotated frame
//! 3. [`reduce_size`] along the handle's axes
//! 4. [`clamp_min_size`]
//! 5. [`preserve_aspect_ratio`] (only when the lock is active)
//!
//! [`resize_step`] runs all five. Every function here is pure.

use crate::direction::{Axis, Direction};
use crate::options::ResizeOptions;
use kurbo::{Size, Vec2};

/// Re-express a screen-space displacement in the element's unrotated frame.
///
/// `degrees` is the element's visual rotation (clockwise on screen). Screen
/// y grows downward, so the vector is flipped into a y-up frame, rotated with
/// the standard matrix, and flipped back.
pub fn rotate_displacement(delta: Vec2, degrees: f64) -> Vec2 {
    if degrees == 0.0 {
        return delta;
    }
    let (sin, cos) = degrees.to_radians().sin_cos();
    let up = Vec2::new(delta.x, -delta.y);
    let rotated = Vec2::new(up.x * cos - up.y * sin, up.x * sin + up.y * cos);
    Vec2::new(rotated.x, -rotated.y)
}

/// Apply a local displacement to `previous` according to the handle's axes.
pub fn reduce_size(previous: Size, delta: Vec2, direction: Direction) -> Size {
    let effect = direction.axis_effect();
    Size::new(
        previous.width + f64::from(effect.width) * delta.x,
        previous.height + f64::from(effect.height) * delta.y,
    )
}

/// Floor each dimension to its minimum.
pub fn clamp_min_size(size: Size, min_width: f64, min_height: f64) -> Size {
    Size::new(size.width.max(min_width), size.height.max(min_height))
}

/// Rescale the non-authoritative axis of `next` so it keeps `baseline`'s ratio.
///
/// A zero baseline on the authoritative axis has no ratio to keep; `next` is
/// returned untouched in that case.
pub fn preserve_aspect_ratio(baseline: Size, next: Size, direction: Direction) -> Size {
    let (driver_old, driver_new, follower_old) = match direction.aspect_authority() {
        Axis::Width => (baseline.width, next.width, baseline.height),
        Axis::Height => (baseline.height, next.height, baseline.width),
    };
    let factor = driver_new / driver_old;
    if driver_old == 0.0 || !factor.is_finite() {
        log::debug!(
            "aspect lock skipped for {direction}: baseline {}x{} has no usable ratio",
            baseline.width,
            baseline.height
        );
        return next;
    }
    let follower = follower_old * factor;
    match direction.aspect_authority() {
        Axis::Width => Size::new(next.width, follower),
        Axis::Height => Size::new(follower, next.height),
    }
}

/// Run the full pipeline for one move event.
///
/// `previous` is the size currently held by the caller; it is both the
/// starting point and the aspect-ratio baseline. `shift` is the Shift key
/// state of the event being handled.
pub fn resize_step(
    previous: Size,
    raw_delta: Vec2,
    direction: Direction,
    options: &ResizeOptions,
    shift: bool,
) -> Size {
    let scaled = raw_delta / options.scale;
    let local = rotate_displacement(scaled, options.rotation);
    let reduced = reduce_size(previous, local, direction);
    let clamped = clamp_min_size(reduced, options.min_width, options.min_height);
    if options.aspect_locked(shift) {
        preserve_aspect_ratio(previous, clamped, direction)
    } else {
        clamped
    }
}
