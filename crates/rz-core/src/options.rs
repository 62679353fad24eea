//! Plain-data resize settings.

use serde::{Deserialize, Serialize};

/// Numeric and boolean knobs that shape every resize step.
///
/// Deserializes from camelCase JSON; any missing field takes its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResizeOptions {
    /// Visual zoom applied to the element. Screen deltas are divided by this.
    pub scale: f64,
    /// Visual rotation of the element, in degrees (clockwise on screen).
    pub rotation: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Always keep the width/height ratio.
    pub preserve_aspect_ratio: bool,
    /// Keep the width/height ratio only while Shift is held.
    pub preserve_aspect_ratio_on_shift_key: bool,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            min_width: 0.0,
            min_height: 0.0,
            preserve_aspect_ratio: false,
            preserve_aspect_ratio_on_shift_key: false,
        }
    }
}

impl ResizeOptions {
    /// Whether the aspect lock applies to a move event with the given Shift state.
    pub fn aspect_locked(&self, shift: bool) -> bool {
        self.preserve_aspect_ratio || (self.preserve_aspect_ratio_on_shift_key && shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = ResizeOptions::default();
        assert_eq!(o.scale, 1.0);
        assert_eq!(o.rotation, 0.0);
        assert_eq!(o.min_width, 0.0);
        assert_eq!(o.min_height, 0.0);
        assert!(!o.preserve_aspect_ratio);
        assert!(!o.preserve_aspect_ratio_on_shift_key);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let o: ResizeOptions = serde_json::from_str(r#"{"scale":2,"minWidth":40}"#).unwrap();
        assert_eq!(o.scale, 2.0);
        assert_eq!(o.min_width, 40.0);
        assert_eq!(o.rotation, 0.0);
    }

    #[test]
    fn shift_only_locks_when_enabled() {
        let mut o = ResizeOptions::default();
        assert!(!o.aspect_locked(true));

        o.preserve_aspect_ratio_on_shift_key = true;
        assert!(o.aspect_locked(true));
        assert!(!o.aspect_locked(false));

        o.preserve_aspect_ratio = true;
        assert!(o.aspect_locked(false));
    }
}
