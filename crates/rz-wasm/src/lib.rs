//! WASM bridge for RZ. Exposes the resize engine to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards the
//! handles' `pointerdown` and the document's `pointermove`/`pointerup` to a
//! `WasmResizer` and applies the sizes it reports.

use rz_engine::{
    Direction, Modifiers, PointerEvent, ResizeConfig, Resizer, SharedPointerSource, Size,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// The main WASM-facing resize controller for one element.
///
/// Sizes reported through `on_resize` are committed back into the engine
/// after every forwarded event, so a page that only renders what it is told
/// stays in sync. `set_size` overrides the committed size at any time.
#[wasm_bindgen]
pub struct WasmResizer {
    source: Rc<SharedPointerSource>,
    resizer: Resizer,
    /// Size from the latest `on_resize`, not yet committed.
    pending: Rc<Cell<Option<Size>>>,
}

#[wasm_bindgen]
impl WasmResizer {
    /// Create a resizer for an element of the given size.
    ///
    /// `on_event(kind, direction, width, height)` is called with `kind` one
    /// of `"start"`, `"resize"`, `"stop"` and a camelCase direction name.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, on_event: js_sys::Function) -> Self {
        // Set up panic hook for better error messages in console
        console_error_panic_hook_setup();

        let on_event = Rc::new(on_event);
        let pending = Rc::new(Cell::new(None));
        let source = Rc::new(SharedPointerSource::new());

        let on_resize = {
            let on_event = on_event.clone();
            let pending = pending.clone();
            move |size: Size, direction: Direction, _: &PointerEvent| {
                pending.set(Some(size));
                emit(&on_event, "resize", direction, size);
            }
        };
        let config = ResizeConfig::new(Size::new(width, height), on_resize)
            .on_resize_start(notifier(&on_event, "start"))
            .on_resize_stop(notifier(&on_event, "stop"));

        Self {
            resizer: Resizer::new(config, source.clone()),
            source,
            pending,
        }
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.pending.set(None);
        self.resizer.update_size(Size::new(width, height));
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.resizer.update(self.resizer.config().scale(scale));
    }

    /// Rotation in degrees, clockwise.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.resizer.update(self.resizer.config().rotation(degrees));
    }

    pub fn set_min_size(&mut self, min_width: f64, min_height: f64) {
        self.resizer
            .update(self.resizer.config().min_size(min_width, min_height));
    }

    pub fn set_preserve_aspect_ratio(&mut self, on: bool) {
        self.resizer
            .update(self.resizer.config().preserve_aspect_ratio(on));
    }

    pub fn set_preserve_aspect_ratio_on_shift_key(&mut self, on: bool) {
        self.resizer
            .update(self.resizer.config().preserve_aspect_ratio_on_shift_key(on));
    }

    /// Handle pointer down on the handle named `direction`.
    /// Returns `false` if the name is not one of the eight handles.
    #[allow(clippy::too_many_arguments)]
    pub fn pointer_down(
        &mut self,
        direction: &str,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        let direction = match parse_direction(direction) {
            Ok(direction) => direction,
            Err(e) => {
                log::warn!("{e}");
                return false;
            }
        };
        let mods = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        let event = PointerEvent::from_pointer_down(x, y, mods);
        self.resizer.handles()[direction].on_pointer_down(&event);
        self.commit();
        true
    }

    /// Handle a document-level pointer move. Returns true if a gesture used it.
    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        let mods = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        let handled = self
            .source
            .dispatch(&PointerEvent::from_pointer_move(x, y, mods))
            > 0;
        self.commit();
        handled
    }

    /// Handle a document-level pointer up. Returns true if a gesture ended.
    pub fn pointer_up(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        let mods = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        let handled = self
            .source
            .dispatch(&PointerEvent::from_pointer_up(x, y, mods))
            > 0;
        self.commit();
        handled
    }

    /// End any running gesture (e.g. on `pointercancel` or blur).
    pub fn cancel(&mut self) {
        self.resizer.cancel();
        self.commit();
    }

    pub fn is_resizing(&self) -> bool {
        self.resizer.is_resizing()
    }

    /// Current size as JSON: `{"width":…,"height":…}`.
    pub fn size_json(&self) -> String {
        size_to_json(self.resizer.config().size)
    }
}

impl WasmResizer {
    fn commit(&self) {
        if let Some(size) = self.pending.take() {
            self.resizer.update_size(size);
        }
    }
}

// ─── Callback plumbing ───────────────────────────────────────────────────

fn notifier(
    on_event: &Rc<js_sys::Function>,
    kind: &'static str,
) -> impl Fn(Size, Direction, &PointerEvent) + 'static {
    let on_event = on_event.clone();
    move |size: Size, direction: Direction, _: &PointerEvent| {
        emit(&on_event, kind, direction, size);
    }
}

fn emit(on_event: &js_sys::Function, kind: &str, direction: Direction, size: Size) {
    let args = js_sys::Array::of4(
        &JsValue::from_str(kind),
        &JsValue::from_str(direction.name()),
        &JsValue::from_f64(size.width),
        &JsValue::from_f64(size.height),
    );
    if let Err(e) = on_event.apply(&JsValue::NULL, &args) {
        web_sys::console::error_2(&"RZ on_event callback threw:".into(), &e);
    }
}

fn parse_direction(name: &str) -> Result<Direction, String> {
    name.parse()
}

fn size_to_json(size: Size) -> String {
    match serde_json::to_string(&size) {
        Ok(json) => json,
        Err(e) => format!(r#"{{"error":"Serialization error: {e}"}}"#),
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("RZ WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
