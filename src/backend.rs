//! Collaborator seams between the engine and its host environment.
//!
//! The engine never touches the DOM directly. It talks to three traits:
//!
//! - [`Canvas2d`]: the 2D drawing primitives (blit, stroke, fill, clear).
//! - [`Host`]: creates drawing surfaces and makes them visible.
//! - [`ImageSource`]: resolves an image identifier to an already-loaded image.
//!
//! [`crate::web`] implements all three on top of `web-sys`. Coordinates handed
//! to a [`Canvas2d`] are already scaled; implementations pass them through.

use crate::config::SurfaceConfig;
use crate::error::DrawError;
use crate::geom::Rect;

/// A 2D drawing context bound to one surface.
pub trait Canvas2d {
    /// Image handle accepted by the blit operations.
    type Image;

    /// Set the backing pixel dimensions of the surface.
    fn set_size(&mut self, width: u32, height: u32);

    fn set_stroke_style(&mut self, color: &str);

    fn set_fill_style(&mut self, color: &str);

    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Stroke the current path with the current stroke style and width.
    fn stroke(&mut self);

    /// Fill `rect` with the current fill style.
    fn fill_rect(&mut self, rect: Rect);

    /// Reset `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Draw the whole image stretched into `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Host`] if the backend rejects the image.
    fn draw_image(&mut self, image: &Self::Image, dest: Rect) -> Result<(), DrawError>;

    /// Draw the `src` region of the image stretched into `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Host`] if the backend rejects the image or region.
    fn draw_image_region(&mut self, image: &Self::Image, src: Rect, dest: Rect) -> Result<(), DrawError>;

    /// Push the current transform and style onto the state stack.
    fn save(&mut self);

    /// Pop the state stack pushed by [`Canvas2d::save`].
    fn restore(&mut self);

    /// # Errors
    ///
    /// Returns [`DrawError::Host`] if the backend rejects the transform.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), DrawError>;

    /// Rotate the current transform clockwise by `radians`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Host`] if the backend rejects the transform.
    fn rotate(&mut self, radians: f64) -> Result<(), DrawError>;
}

/// The embedding environment: allocates surfaces and displays them.
pub trait Host {
    type Canvas: Canvas2d;

    /// Allocate a surface of `width` x `height` pixels with its 2D context.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Host`] if the environment cannot create the surface.
    fn create_canvas(&mut self, config: &SurfaceConfig, width: u32, height: u32) -> Result<Self::Canvas, DrawError>;

    /// Make `canvas` visible.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Host`] if the environment has nowhere to attach it.
    fn show(&mut self, canvas: &Self::Canvas) -> Result<(), DrawError>;
}

/// Lookup of already-loaded image resources by identifier.
///
/// Loading and decoding are the provider's concern; this only resolves.
pub trait ImageSource {
    type Image;

    /// The image registered under `id`, if any.
    fn image(&self, id: &str) -> Option<Self::Image>;
}

/// Image type drawn by the canvases a [`Host`] creates.
pub type ImageOf<H> = <<H as Host>::Canvas as Canvas2d>::Image;
