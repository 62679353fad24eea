//! Directional resize interaction engine.
//!
//! Turns pointer gestures on eight compass handles into element sizes.
//! See [`Resizer`] for the host-facing entry point.

pub mod config;
pub mod controller;
pub mod handles;
pub mod input;
pub mod resizer;
pub mod source;

pub use config::{LiveConfig, ResizeCallback, ResizeConfig};
pub use controller::{Controller, PointerDownHandler};
pub use handles::{HandleMap, HandleProps, HandlerCache};
pub use input::{Modifiers, PointerEvent, PointerEventKind, sample_point};
pub use resizer::{Resizer, create_resizer};
pub use source::{ListenerId, PointerListener, PointerSource, SharedPointerSource};

// Re-export core types so hosts only need this crate
pub use rz_core::{Direction, Point, ResizeOptions, Size, Vec2};
