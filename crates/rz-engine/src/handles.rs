//! Per-direction handle props and their memoization.
//!
//! A drag can push sixty size updates a second. If every update produced a
//! new set of pointer-down handlers, the presentation layer would detach and
//! reattach eight listeners each frame. `HandlerCache` hands out the same
//! `HandleMap` for as long as a gesture is running and only rebuilds it when
//! the configuration changes while idle.

use crate::controller::PointerDownHandler;
use crate::input::PointerEvent;
use rz_core::Direction;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::ops::Index;
use std::rc::Rc;

/// What the presentation layer attaches to one handle element.
#[derive(Clone)]
pub struct HandleProps {
    pub direction: Direction,
    /// Build number of the map this entry belongs to.
    pub generation: u64,
    handler: PointerDownHandler,
}

impl HandleProps {
    pub fn new(direction: Direction, generation: u64, handler: PointerDownHandler) -> Self {
        Self {
            direction,
            generation,
            handler,
        }
    }

    /// Forward a pointer-down on this handle to the resizer.
    pub fn on_pointer_down(&self, event: &PointerEvent) {
        (self.handler)(event);
    }

    /// The underlying handler, for hosts that register it directly.
    pub fn handler(&self) -> &PointerDownHandler {
        &self.handler
    }
}

impl fmt::Debug for HandleProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleProps")
            .field("direction", &self.direction)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

/// Handle props for all eight directions, indexable by [`Direction`].
#[derive(Debug, Clone)]
pub struct HandleMap {
    generation: u64,
    props: [HandleProps; 8],
}

impl HandleMap {
    /// Build a map by asking `factory` for each direction's handler.
    pub fn build(generation: u64, mut factory: impl FnMut(Direction) -> PointerDownHandler) -> Self {
        Self {
            generation,
            props: Direction::ALL.map(|d| HandleProps::new(d, generation, factory(d))),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, direction: Direction) -> &HandleProps {
        &self.props[direction.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &HandleProps> {
        self.props.iter()
    }
}

impl Index<Direction> for HandleMap {
    type Output = HandleProps;

    fn index(&self, direction: Direction) -> &HandleProps {
        self.get(direction)
    }
}

/// Single-slot cache for one resizer's `HandleMap`.
#[derive(Default)]
pub struct HandlerCache {
    slot: RefCell<Option<Rc<HandleMap>>>,
    builds: Cell<u64>,
}

impl HandlerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached map, building it with `build` if the slot is empty.
    pub fn get_or_build(&self, build: impl FnOnce(u64) -> HandleMap) -> Rc<HandleMap> {
        if let Some(map) = self.slot.borrow().as_ref() {
            return map.clone();
        }
        let generation = self.builds.get() + 1;
        self.builds.set(generation);
        let map = Rc::new(build(generation));
        *self.slot.borrow_mut() = Some(map.clone());
        log::trace!("handle map rebuilt (generation {generation})");
        map
    }

    /// Empty the slot so the next lookup rebuilds.
    pub fn invalidate(&self) {
        self.slot.borrow_mut().take();
    }

    /// How many maps this cache has built so far.
    pub fn builds(&self) -> u64 {
        self.builds.get()
    }
}
