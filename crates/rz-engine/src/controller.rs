//! Interaction lifecycle: pointer-down → moves → pointer-up, per handle.
//!
//! Each of the eight handles runs its own two-state machine (idle/resizing).
//! A session subscribes one move listener and one up listener on the shared
//! pointer source when it starts and removes both when it ends.
//!
//! All callbacks run with no internal borrow held, so a host may call back
//! into the resizer (most commonly to push the new size) from inside them.

use crate::config::LiveConfig;
use crate::input::{PointerEvent, PointerEventKind, block_text_selection, sample_point};
use crate::source::{ListenerId, PointerSource};
use rz_core::{Direction, Point, resize_step};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handler attached to a handle's pointer-down.
pub type PointerDownHandler = Rc<dyn Fn(&PointerEvent)>;

/// State of one in-progress gesture.
#[derive(Debug, Clone)]
struct GestureSession {
    /// Last sampled pointer position; deltas are measured from here.
    anchor: Point,
    pointer_id: Option<i32>,
    move_listener: ListenerId,
    up_listener: ListenerId,
}

impl GestureSession {
    /// Whether `event` belongs to this session's pointer.
    ///
    /// A session started without a pointer id takes every event. One bound
    /// to an id only takes events carrying that same id.
    fn accepts(&self, event: &PointerEvent) -> bool {
        match self.pointer_id {
            Some(ours) => event.pointer_id == Some(ours),
            None => true,
        }
    }
}

/// Drives gestures for all eight handles of one resizer.
pub struct Controller {
    config: LiveConfig,
    source: Rc<dyn PointerSource>,
    sessions: RefCell<[Option<GestureSession>; 8]>,
    /// Bumped each time the last active session ends.
    finished: Cell<u64>,
}

impl Controller {
    pub fn new(config: LiveConfig, source: Rc<dyn PointerSource>) -> Rc<Self> {
        Rc::new(Self {
            config,
            source,
            sessions: RefCell::new(Default::default()),
            finished: Cell::new(0),
        })
    }

    pub fn config(&self) -> &LiveConfig {
        &self.config
    }

    /// `true` while any handle has a gesture in progress.
    pub fn is_resizing(&self) -> bool {
        self.sessions.borrow().iter().any(Option::is_some)
    }

    pub fn is_handle_active(&self, direction: Direction) -> bool {
        self.sessions.borrow()[direction.index()].is_some()
    }

    /// How many times the controller has gone from resizing back to idle.
    pub fn finished_gestures(&self) -> u64 {
        self.finished.get()
    }

    /// Build the pointer-down handler for one handle.
    ///
    /// The handler holds only a weak reference; once the controller is gone
    /// it does nothing.
    pub fn pointer_down_handler(self: &Rc<Self>, direction: Direction) -> PointerDownHandler {
        let weak = Rc::downgrade(self);
        Rc::new(move |event: &PointerEvent| {
            if let Some(controller) = weak.upgrade() {
                controller.pointer_down(direction, event);
            }
        })
    }

    /// Start a gesture on `direction`.
    ///
    /// A handle that is already resizing has its old session stopped first
    /// (listeners removed, `on_resize_stop` fired) so listeners never pile up.
    pub fn pointer_down(self: &Rc<Self>, direction: Direction, event: &PointerEvent) {
        block_text_selection(event);

        let previous = self.sessions.borrow()[direction.index()].clone();
        if let Some(previous) = previous {
            log::warn!("pointer-down on {direction} while its gesture is still active; restarting");
            self.detach(&previous);
            self.config.snapshot().emit_stop(direction, event);
        }

        let anchor = sample_point(event);
        let pointer_id = event.pointer_id;

        let weak = Rc::downgrade(self);
        let move_listener = self.source.subscribe(
            PointerEventKind::Move,
            Rc::new(move |e: &PointerEvent| {
                if let Some(controller) = weak.upgrade() {
                    controller.pointer_move(direction, e);
                }
            }),
            false,
        );
        // Mouse-style sessions take any up event, so the listener can retire
        // itself. Sessions bound to a pointer id must outlive foreign ups.
        let weak = Rc::downgrade(self);
        let up_listener = self.source.subscribe(
            PointerEventKind::Up,
            Rc::new(move |e: &PointerEvent| {
                if let Some(controller) = weak.upgrade() {
                    controller.pointer_up(direction, e);
                }
            }),
            pointer_id.is_none(),
        );

        self.sessions.borrow_mut()[direction.index()] = Some(GestureSession {
            anchor,
            pointer_id,
            move_listener,
            up_listener,
        });

        let config = self.config.snapshot();
        log::debug!(
            "resize start {direction} at ({}, {}) size {}x{}",
            anchor.x,
            anchor.y,
            config.size.width,
            config.size.height
        );
        config.emit_start(direction, event);
    }

    /// Apply one move event to the session on `direction`.
    pub fn pointer_move(&self, direction: Direction, event: &PointerEvent) {
        let raw = {
            let mut sessions = self.sessions.borrow_mut();
            let Some(session) = sessions[direction.index()].as_mut() else {
                return;
            };
            if !session.accepts(event) {
                return;
            }
            let current = sample_point(event);
            let raw = current - session.anchor;
            session.anchor = current;
            raw
        };

        let config = self.config.snapshot();
        let size = resize_step(
            config.size,
            raw,
            direction,
            &config.options,
            event.modifiers.shift,
        );
        log::trace!(
            "resize {direction} delta ({}, {}) -> {}x{}",
            raw.x,
            raw.y,
            size.width,
            size.height
        );
        (config.on_resize)(size, direction, event);
    }

    /// End the session on `direction`.
    pub fn pointer_up(&self, direction: Direction, event: &PointerEvent) {
        let session = {
            let sessions = self.sessions.borrow();
            match &sessions[direction.index()] {
                Some(session) if session.accepts(event) => session.clone(),
                _ => return,
            }
        };
        self.detach(&session);

        let config = self.config.snapshot();
        log::debug!(
            "resize stop {direction} size {}x{}",
            config.size.width,
            config.size.height
        );
        config.emit_stop(direction, event);

        // The stop callback may already have started a fresh session here.
        let idle = {
            let mut sessions = self.sessions.borrow_mut();
            let slot = &mut sessions[direction.index()];
            if slot
                .as_ref()
                .is_some_and(|s| s.move_listener == session.move_listener)
            {
                *slot = None;
            }
            sessions.iter().all(Option::is_none)
        };
        if idle {
            self.finished.set(self.finished.get() + 1);
        }
    }

    /// Stop every active gesture as if its pointer had been released at the
    /// last sampled position.
    pub fn cancel_all(&self) {
        for direction in Direction::ALL {
            let session = self.sessions.borrow()[direction.index()].clone();
            if let Some(session) = session {
                let mut event = PointerEvent::from_pointer_up(
                    session.anchor.x,
                    session.anchor.y,
                    Default::default(),
                );
                event.pointer_id = session.pointer_id;
                self.pointer_up(direction, &event);
            }
        }
    }

    /// Drop every active gesture without notifying the host.
    pub fn detach_all(&self) {
        let sessions = std::mem::take(&mut *self.sessions.borrow_mut());
        for session in sessions.iter().flatten() {
            self.detach(session);
        }
    }

    fn detach(&self, session: &GestureSession) {
        self.source.unsubscribe(session.move_listener);
        self.source.unsubscribe(session.up_listener);
    }
}
