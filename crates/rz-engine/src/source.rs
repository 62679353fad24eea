//! Shared pointer-event source.
//!
//! Gestures listen for move and up events at document scope rather than on
//! the handle, so the pointer can leave the handle mid-drag. `PointerSource`
//! is the subscribe/unsubscribe capability the engine needs from the host;
//! `SharedPointerSource` is a ready-made listener table for hosts (and tests)
//! that deliver events themselves.

use crate::input::{PointerEvent, PointerEventKind};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A listener registered on a pointer source.
pub type PointerListener = Rc<dyn Fn(&PointerEvent)>;

/// Handle returned by [`PointerSource::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Subscribe/unsubscribe capability for document-level pointer events.
pub trait PointerSource {
    /// Register `listener` for events of `kind`.
    ///
    /// A `once` listener is removed right before its first invocation.
    fn subscribe(&self, kind: PointerEventKind, listener: PointerListener, once: bool)
    -> ListenerId;

    /// Remove a listener. Unknown or already-removed ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}

struct Registration {
    id: ListenerId,
    kind: PointerEventKind,
    once: bool,
    listener: PointerListener,
}

/// In-process listener table with explicit dispatch.
#[derive(Default)]
pub struct SharedPointerSource {
    next_id: Cell<u64>,
    listeners: RefCell<SmallVec<[Registration; 4]>>,
}

impl SharedPointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every listener registered for its kind.
    ///
    /// Listeners run with no internal borrow held, so they may subscribe or
    /// unsubscribe freely. A listener removed by an earlier listener in the
    /// same dispatch is skipped. Returns the number of listeners invoked.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let batch: SmallVec<[(ListenerId, bool, PointerListener); 4]> = self
            .listeners
            .borrow()
            .iter()
            .filter(|r| r.kind == event.kind)
            .map(|r| (r.id, r.once, r.listener.clone()))
            .collect();

        let mut invoked = 0;
        for (id, once, listener) in batch {
            if !self.is_registered(id) {
                continue;
            }
            if once {
                self.unsubscribe(id);
            }
            listener(event);
            invoked += 1;
        }
        invoked
    }

    /// Number of live listeners for `kind`.
    pub fn listener_count(&self, kind: PointerEventKind) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|r| r.kind == kind)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|r| r.id == id)
    }
}

impl PointerSource for SharedPointerSource {
    fn subscribe(
        &self,
        kind: PointerEventKind,
        listener: PointerListener,
        once: bool,
    ) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push(Registration {
            id,
            kind,
            once,
            listener,
        });
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|r| r.id != id);
    }
}
