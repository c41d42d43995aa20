//! Shared default values for the sketchpad crate.

// ── Surface ─────────────────────────────────────────────────────

/// Default surface width in pixels.
pub const DEFAULT_WIDTH: u32 = 320;

/// Default surface height in pixels.
pub const DEFAULT_HEIGHT: u32 = 240;

/// Uniform scale factor applied to every draw call.
pub const DEFAULT_SCALE: f64 = 1.0;

/// DOM id given to the created `<canvas>` element.
pub const DEFAULT_ELEMENT_ID: &str = "sketchpad_surface";

/// CSS border applied to the created `<canvas>` element.
pub const DEFAULT_BORDER: &str = "1px solid white";

// ── Style ───────────────────────────────────────────────────────

/// Stroke width before scaling.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

pub const DEFAULT_LINE_COLOR: &str = "#000000";

pub const DEFAULT_FILL_COLOR: &str = "#000000";

// ── Sprites ─────────────────────────────────────────────────────

/// Logical sprite edge length when none is given.
pub const DEFAULT_SPRITE_SIZE: f64 = 128.0;
