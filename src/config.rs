//! Surface configuration: default size, scale and draw style.
//!
//! Every field has a default, so a config document only needs the fields it
//! overrides:
//!
//! ```json
//! { "width": 640, "height": 480, "scale": 2.0, "fill_color": "black" }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::{
    DEFAULT_BORDER, DEFAULT_ELEMENT_ID, DEFAULT_FILL_COLOR, DEFAULT_HEIGHT, DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH,
    DEFAULT_SCALE, DEFAULT_WIDTH,
};
use crate::error::DrawError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Width used by `create_default_surface`.
    pub width: u32,
    /// Height used by `create_default_surface`.
    pub height: u32,
    /// Initial uniform scale factor. Must be finite and positive.
    #[serde(deserialize_with = "positive_scale")]
    pub scale: f64,
    /// Initial stroke width, before scaling.
    pub line_width: f64,
    pub line_color: String,
    pub fill_color: String,
    /// DOM id for the created canvas element.
    pub element_id: String,
    /// CSS border for the created canvas element.
    pub border: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            line_width: DEFAULT_LINE_WIDTH,
            line_color: DEFAULT_LINE_COLOR.to_owned(),
            fill_color: DEFAULT_FILL_COLOR.to_owned(),
            element_id: DEFAULT_ELEMENT_ID.to_owned(),
            border: DEFAULT_BORDER.to_owned(),
        }
    }
}

impl SurfaceConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Config`] if the document is not valid JSON or a
    /// field has the wrong type, or if `scale` is not finite and positive.
    pub fn from_json(raw: &str) -> Result<Self, DrawError> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn positive_scale<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    let scale = f64::deserialize(de)?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(D::Error::custom(format!("scale must be finite and positive, got {scale}")))
    }
}
