//! The resizer façade: one element, eight handles, one live configuration.

use crate::config::{LiveConfig, ResizeConfig};
use crate::controller::Controller;
use crate::handles::{HandleMap, HandlerCache};
use crate::source::PointerSource;
use rz_core::{Direction, Size};
use std::cell::Cell;
use std::rc::Rc;

/// Resize engine for a single element.
///
/// Hosts attach `handles()[direction].on_pointer_down` to each handle
/// element, deliver document-level move/up events through the
/// [`PointerSource`], and call [`Resizer::update`] whenever their own state
/// (size, options, callbacks) changes.
///
/// Dropping the resizer removes any listeners still registered on the source.
pub struct Resizer {
    controller: Rc<Controller>,
    cache: HandlerCache,
    /// `Controller::finished_gestures` as of the last idle `handles()` call.
    seen_finished: Cell<u64>,
}

impl Resizer {
    pub fn new(config: ResizeConfig, source: Rc<dyn PointerSource>) -> Self {
        Self {
            controller: Controller::new(LiveConfig::new(config), source),
            cache: HandlerCache::new(),
            seen_finished: Cell::new(0),
        }
    }

    /// Props for all eight handles.
    ///
    /// While a gesture is running this returns the same `Rc` on every call,
    /// however many times the configuration changes in between. The first
    /// call after the resizer goes idle again builds a fresh map.
    pub fn handles(&self) -> Rc<HandleMap> {
        if !self.controller.is_resizing() {
            let finished = self.controller.finished_gestures();
            if self.seen_finished.replace(finished) != finished {
                self.cache.invalidate();
            }
        }
        self.cache.get_or_build(|generation| {
            HandleMap::build(generation, |direction| {
                self.controller.pointer_down_handler(direction)
            })
        })
    }

    /// `true` between a handle's pointer-down and its pointer-up.
    pub fn is_resizing(&self) -> bool {
        self.controller.is_resizing()
    }

    pub fn is_handle_active(&self, direction: Direction) -> bool {
        self.controller.is_handle_active(direction)
    }

    /// Replace the configuration. In-flight gestures see it on their next event.
    pub fn update(&self, config: ResizeConfig) {
        self.controller.config().replace(config);
        if !self.controller.is_resizing() {
            self.cache.invalidate();
        }
    }

    /// Replace only the size, keeping callbacks and options.
    pub fn update_size(&self, size: Size) {
        self.update(self.config().with_size(size));
    }

    /// Copy of the current configuration.
    pub fn config(&self) -> ResizeConfig {
        self.controller.config().snapshot()
    }

    /// End every running gesture, firing `on_resize_stop` for each.
    pub fn cancel(&self) {
        self.controller.cancel_all();
    }
}

impl Drop for Resizer {
    fn drop(&mut self) {
        self.controller.detach_all();
    }
}

/// Create a resizer for one element.
pub fn create_resizer(config: ResizeConfig, source: Rc<dyn PointerSource>) -> Resizer {
    Resizer::new(config, source)
}
