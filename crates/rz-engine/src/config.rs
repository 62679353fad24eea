//! Caller-supplied resize configuration and the live slot that holds it.
//!
//! Hosts hand a fresh `ResizeConfig` to the resizer whenever their state
//! changes (typically after every `on_resize`). In-flight gestures never keep
//! their own copy; they read `LiveConfig` at the moment each event arrives.

use crate::input::PointerEvent;
use rz_core::{Direction, ResizeOptions, Size};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback receiving a size, the handle it came from, and the triggering event.
pub type ResizeCallback = Rc<dyn Fn(Size, Direction, &PointerEvent)>;

/// Everything a resizer needs from its host.
#[derive(Clone)]
pub struct ResizeConfig {
    /// Current element size. The resizer never stores size on its own.
    pub size: Size,
    /// Called once per move event with the new size.
    pub on_resize: ResizeCallback,
    /// Called on pointer-down with the size at gesture start.
    pub on_resize_start: Option<ResizeCallback>,
    /// Called on pointer-up with the size current at that moment.
    pub on_resize_stop: Option<ResizeCallback>,
    pub options: ResizeOptions,
}

impl ResizeConfig {
    pub fn new(size: Size, on_resize: impl Fn(Size, Direction, &PointerEvent) + 'static) -> Self {
        Self {
            size,
            on_resize: Rc::new(on_resize),
            on_resize_start: None,
            on_resize_stop: None,
            options: ResizeOptions::default(),
        }
    }

    pub fn on_resize_start(mut self, f: impl Fn(Size, Direction, &PointerEvent) + 'static) -> Self {
        self.on_resize_start = Some(Rc::new(f));
        self
    }

    pub fn on_resize_stop(mut self, f: impl Fn(Size, Direction, &PointerEvent) + 'static) -> Self {
        self.on_resize_stop = Some(Rc::new(f));
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_options(mut self, options: ResizeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.options.scale = scale;
        self
    }

    /// Visual rotation in degrees.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.options.rotation = degrees;
        self
    }

    pub fn min_size(mut self, min_width: f64, min_height: f64) -> Self {
        self.options.min_width = min_width;
        self.options.min_height = min_height;
        self
    }

    pub fn preserve_aspect_ratio(mut self, on: bool) -> Self {
        self.options.preserve_aspect_ratio = on;
        self
    }

    pub fn preserve_aspect_ratio_on_shift_key(mut self, on: bool) -> Self {
        self.options.preserve_aspect_ratio_on_shift_key = on;
        self
    }

    pub(crate) fn emit_start(&self, direction: Direction, event: &PointerEvent) {
        if let Some(f) = &self.on_resize_start {
            f(self.size, direction, event);
        }
    }

    pub(crate) fn emit_stop(&self, direction: Direction, event: &PointerEvent) {
        if let Some(f) = &self.on_resize_stop {
            f(self.size, direction, event);
        }
    }
}

impl fmt::Debug for ResizeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeConfig")
            .field("size", &self.size)
            .field("on_resize_start", &self.on_resize_start.is_some())
            .field("on_resize_stop", &self.on_resize_stop.is_some())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Single-writer, many-reader slot holding the latest `ResizeConfig`.
///
/// Clones share the same slot.
#[derive(Clone)]
pub struct LiveConfig(Rc<RefCell<ResizeConfig>>);

impl LiveConfig {
    pub fn new(config: ResizeConfig) -> Self {
        Self(Rc::new(RefCell::new(config)))
    }

    /// Overwrite the slot with the caller's latest configuration.
    pub fn replace(&self, config: ResizeConfig) {
        *self.0.borrow_mut() = config;
    }

    /// Copy out the current configuration.
    ///
    /// The copy is cheap (callbacks are reference-counted) and holds no
    /// borrow, so callbacks invoked with it may call [`LiveConfig::replace`].
    pub fn snapshot(&self) -> ResizeConfig {
        self.0.borrow().clone()
    }

    pub fn size(&self) -> Size {
        self.0.borrow().size
    }

    pub fn options(&self) -> ResizeOptions {
        self.0.borrow().options
    }
}
