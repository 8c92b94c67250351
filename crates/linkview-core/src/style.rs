//! Display attributes carried by every subset

use serde::{Deserialize, Serialize};

/// How a subset is drawn by viewers that render it
///
/// Changing a subset's style through [`crate::Subset::set_style`] notifies
/// every linked view, so highlight colors stay consistent across an
/// application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsetStyle {
    /// Fill/marker color as a hex string, e.g. `"#e31a1c"`
    pub color: String,
    /// Opacity in `[0, 1]`
    pub alpha: f32,
    /// Marker size in points
    pub marker_size: f32,
}

impl SubsetStyle {
    /// Create a style with the given color and default opacity/size
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }
}

impl Default for SubsetStyle {
    fn default() -> Self {
        Self {
            color: "#e31a1c".to_string(),
            alpha: 0.5,
            marker_size: 3.0,
        }
    }
}
