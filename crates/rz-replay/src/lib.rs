//! Headless gesture replay.
//!
//! A script names a starting size, a set of options, and a sequence of
//! pointer events. [`replay`] feeds the events through a real [`Resizer`]
//! wired to a [`SharedPointerSource`] and records every callback it fires.
//! The resizer is driven as a controlled component: each `on_resize` size is
//! pushed back through [`Resizer::update_size`] before the next event.

use rz_engine::{
    Direction, Modifiers, PointerEvent, PointerEventKind, ResizeConfig, ResizeOptions, Resizer,
    SharedPointerSource, Size,
};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ─── Script ──────────────────────────────────────────────────────────────

/// A recorded gesture session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    pub size: Size,
    #[serde(default)]
    pub options: ResizeOptions,
    pub events: Vec<ScriptEvent>,
}

/// One pointer event in a script.
///
/// `down` targets a handle directly; `move` and `up` go through the shared
/// source the way document-level listeners would receive them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScriptEvent {
    Down {
        direction: Direction,
        x: f64,
        y: f64,
        #[serde(default)]
        shift: bool,
        #[serde(default, rename = "pointerId")]
        pointer_id: Option<i32>,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        shift: bool,
        #[serde(default, rename = "pointerId")]
        pointer_id: Option<i32>,
    },
    Up {
        x: f64,
        y: f64,
        #[serde(default)]
        shift: bool,
        #[serde(default, rename = "pointerId")]
        pointer_id: Option<i32>,
    },
}

impl ScriptEvent {
    /// Build the engine event this step stands for.
    pub fn to_pointer_event(&self) -> PointerEvent {
        let (kind, x, y, shift, pointer_id) = match *self {
            Self::Down {
                x,
                y,
                shift,
                pointer_id,
                ..
            } => (PointerEventKind::Down, x, y, shift, pointer_id),
            Self::Move {
                x,
                y,
                shift,
                pointer_id,
            } => (PointerEventKind::Move, x, y, shift, pointer_id),
            Self::Up {
                x,
                y,
                shift,
                pointer_id,
            } => (PointerEventKind::Up, x, y, shift, pointer_id),
        };
        let modifiers = Modifiers {
            shift,
            ..Modifiers::NONE
        };
        let mut event = PointerEvent::new(kind, x, y, modifiers);
        event.pointer_id = pointer_id;
        event
    }
}

/// Parse a JSON script.
pub fn parse_script(text: &str) -> Result<Script, String> {
    serde_json::from_str(text).map_err(|e| format!("invalid replay script: {e}"))
}

// ─── Records ─────────────────────────────────────────────────────────────

/// Which callback produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Start,
    Resize,
    Stop,
}

/// One callback invocation observed during replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub event: Phase,
    pub direction: Direction,
    pub size: Size,
}

impl Record {
    pub fn new(event: Phase, direction: Direction, size: Size) -> Self {
        Self {
            event,
            direction,
            size,
        }
    }
}

/// Result of replaying a script.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub records: Vec<Record>,
    /// Size held by the resizer after the last event.
    pub size: Size,
    /// Whether a gesture was still open when the script ran out.
    pub unfinished: bool,
}

impl Replay {
    /// Records as newline-terminated JSON lines.
    pub fn to_json_lines(&self) -> Result<String, String> {
        let mut out = String::new();
        for record in &self.records {
            let line = serde_json::to_string(record).map_err(|e| format!("serialize error: {e}"))?;
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }
}

// ─── Driver ──────────────────────────────────────────────────────────────

type Journal = Rc<RefCell<Vec<Record>>>;

fn recorder(phase: Phase, journal: &Journal) -> impl Fn(Size, Direction, &PointerEvent) + 'static {
    let journal = journal.clone();
    move |size: Size, direction: Direction, _: &PointerEvent| {
        journal.borrow_mut().push(Record::new(phase, direction, size));
    }
}

/// Run `script` against a fresh resizer and collect every callback.
pub fn replay(script: &Script) -> Replay {
    let source = Rc::new(SharedPointerSource::new());
    let journal: Journal = Rc::new(RefCell::new(Vec::new()));
    let pending: Rc<Cell<Option<Size>>> = Rc::new(Cell::new(None));

    let on_resize = {
        let record = recorder(Phase::Resize, &journal);
        let pending = pending.clone();
        move |size: Size, direction: Direction, event: &PointerEvent| {
            record(size, direction, event);
            pending.set(Some(size));
        }
    };
    let config = ResizeConfig::new(script.size, on_resize)
        .on_resize_start(recorder(Phase::Start, &journal))
        .on_resize_stop(recorder(Phase::Stop, &journal))
        .with_options(script.options);
    let resizer = Resizer::new(config, source.clone());

    for (index, step) in script.events.iter().enumerate() {
        let event = step.to_pointer_event();
        match step {
            ScriptEvent::Down { direction, .. } => {
                resizer.handles()[*direction].on_pointer_down(&event);
            }
            ScriptEvent::Move { .. } | ScriptEvent::Up { .. } => {
                if source.dispatch(&event) == 0 {
                    log::debug!("event {index} ({:?}) had no listener", event.kind);
                }
            }
        }
        if let Some(size) = pending.take() {
            resizer.update_size(size);
        }
    }

    let unfinished = resizer.is_resizing();
    if unfinished {
        log::warn!("script ended with a gesture still in progress");
    }
    let size = resizer.config().size;
    drop(resizer);

    let records = std::mem::take(&mut *journal.borrow_mut());
    Replay {
        records,
        size,
        unfinished,
    }
}

/// Parse and replay in one step.
pub fn replay_str(text: &str) -> Result<Replay, String> {
    parse_script(text).map(|script| replay(&script))
}
