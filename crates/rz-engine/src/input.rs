//! Input abstraction layer.
//!
//! Normalizes mouse, touch, and pen events into a single `PointerEvent`
//! consumed by the resize handles and the shared pointer source.

use rz_core::Point;
use std::cell::Cell;

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer pressed (mouse down, touch start, pen contact).
    Down,
    /// Pointer moved while pressed or hovering.
    Move,
    /// Pointer released.
    Up,
}

/// A normalized pointer event in client (viewport) coordinates.
///
/// Carries the two browser-style side channels the resize engine needs:
/// `prevent_default` and `stop_propagation`. Both are recorded on the event
/// itself so the host can forward them to the real platform event.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f64,
    pub y: f64,
    pub modifiers: Modifiers,
    /// Platform pointer id. `None` for hosts that only have one pointer.
    pub pointer_id: Option<i32>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f64, y: f64, modifiers: Modifiers) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers,
            pointer_id: None,
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
        }
    }

    pub fn from_pointer_down(x: f64, y: f64, modifiers: Modifiers) -> Self {
        Self::new(PointerEventKind::Down, x, y, modifiers)
    }

    pub fn from_pointer_move(x: f64, y: f64, modifiers: Modifiers) -> Self {
        Self::new(PointerEventKind::Move, x, y, modifiers)
    }

    pub fn from_pointer_up(x: f64, y: f64, modifiers: Modifiers) -> Self {
        Self::new(PointerEventKind::Up, x, y, modifiers)
    }

    /// Tag the event with a platform pointer id (multi-touch, pen).
    pub fn with_pointer_id(mut self, id: i32) -> Self {
        self.pointer_id = Some(id);
        self
    }

    /// Client-space position of the pointer.
    pub fn client_point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Suppress the platform's default action (text selection, native drag).
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    /// Keep the event from reaching ancestor handlers.
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

/// Sample the pointer position from an event.
pub fn sample_point(event: &PointerEvent) -> Point {
    event.client_point()
}

/// Stop a pointer-down from starting a text selection or native drag while
/// the user is dragging a handle around the document.
pub(crate) fn block_text_selection(event: &PointerEvent) {
    event.stop_propagation();
    event.prevent_default();
}
