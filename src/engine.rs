//! The drawing engine: one surface, its style state, and every draw operation.
//!
//! `Engine` is generic over a [`Host`], so the same code drives the browser
//! (see [`crate::web::WebHost`]) and the recording fake the tests use.
//!
//! Scaling happens here and only here: every coordinate, size and line width a
//! draw operation receives is multiplied by [`Engine::scale`] right before it
//! goes to the [`Canvas2d`]. Crop regions are in source-image pixels and are
//! not scaled. Style fields are pushed to the canvas immediately before the
//! call that uses them, so changing them between draws always takes effect.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::backend::{Canvas2d, Host, ImageOf, ImageSource};
use crate::config::SurfaceConfig;
use crate::error::DrawError;
use crate::geom::{CropRegion, Point, Rect};
use crate::keyboard::Keyboard;
use crate::object::Drawable;
use crate::sprite::Sprite;

/// A created surface: the canvas plus its pixel size and derived center.
struct Surface<C> {
    canvas: C,
    width: u32,
    height: u32,
    center: Point,
}

impl<C: Canvas2d> Surface<C> {
    fn new(canvas: C, width: u32, height: u32) -> Self {
        Self { canvas, width, height, center: center_of(width, height) }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_size(width, height);
        self.width = width;
        self.height = height;
        self.center = center_of(width, height);
    }
}

fn center_of(width: u32, height: u32) -> Point {
    Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0)
}

pub struct Engine<H: Host> {
    host: H,
    config: SurfaceConfig,
    surface: Option<Surface<H::Canvas>>,
    crop: Option<CropRegion>,
    keyboard: Keyboard,
    /// Uniform factor applied to every coordinate, size and line width.
    pub scale: f64,
    /// Stroke width before scaling.
    pub line_width: f64,
    pub line_color: String,
    /// Fill color used by [`Engine::fill_rect`].
    pub fill_color: String,
}

impl<H: Host> Engine<H> {
    /// Create an engine with default style and no surface.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_config(host, SurfaceConfig::default())
    }

    /// Create an engine whose style and default surface size come from `config`.
    #[must_use]
    pub fn with_config(host: H, config: SurfaceConfig) -> Self {
        Self {
            host,
            surface: None,
            crop: None,
            keyboard: Keyboard::new(),
            scale: config.scale,
            line_width: config.line_width,
            line_color: config.line_color.clone(),
            fill_color: config.fill_color.clone(),
            config,
        }
    }

    // --- Surface lifecycle ---

    /// Allocate the drawing surface and its 2D context.
    ///
    /// Calling it again replaces the previous surface.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Host`] if the host cannot allocate the surface.
    pub fn create_surface(&mut self, width: u32, height: u32) -> Result<(), DrawError> {
        let canvas = self.host.create_canvas(&self.config, width, height)?;
        self.surface = Some(Surface::new(canvas, width, height));
        log::debug!("surface created: {width}x{height}");
        Ok(())
    }

    /// [`Engine::create_surface`] with the configured size (320x240 by default).
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Host`] if the host cannot allocate the surface.
    pub fn create_default_surface(&mut self) -> Result<(), DrawError> {
        self.create_surface(self.config.width, self.config.height)
    }

    /// Make the surface visible in the host environment.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UninitializedSurface`] before `create_surface`, or
    /// [`DrawError::Host`] if the host cannot display it.
    pub fn show(&mut self) -> Result<(), DrawError> {
        let surface = self.surface.as_ref().ok_or(DrawError::UninitializedSurface)?;
        self.host.show(&surface.canvas)?;
        log::debug!("surface shown");
        Ok(())
    }

    /// Change the surface size and recompute its center. `None` keeps the
    /// current value for that dimension.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UninitializedSurface`] before `create_surface`.
    pub fn resize(&mut self, width: Option<u32>, height: Option<u32>) -> Result<(), DrawError> {
        let surface = self.surface.as_mut().ok_or(DrawError::UninitializedSurface)?;
        let width = width.unwrap_or(surface.width);
        let height = height.unwrap_or(surface.height);
        surface.resize(width, height);
        log::debug!("surface resized: {width}x{height}");
        Ok(())
    }

    // --- Crop ---

    /// Draw only the `(ux, uy, uw, uh)` region of sprite images until the crop
    /// is changed or cleared. Handy for sprite sheets.
    pub fn set_crop(&mut self, ux: f64, uy: f64, uw: f64, uh: f64) {
        self.set_crop_region(Some(CropRegion::new(ux, uy, uw, uh)));
    }

    /// Replace the crop region; `None` reverts to whole-image draws.
    pub fn set_crop_region(&mut self, crop: Option<CropRegion>) {
        log::debug!("crop set: {crop:?}");
        self.crop = crop;
    }

    /// Revert to drawing whole sprite images.
    pub fn clear_crop(&mut self) {
        self.set_crop_region(None);
    }

    // --- Drawing ---

    /// Draw `sprite` with its top-left corner at `(x, y)`, stretched to the
    /// sprite's logical size. With a crop set, only the cropped region of the
    /// image is drawn, stretched the same way.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UninitializedSurface`] before `create_surface`, or
    /// [`DrawError::Host`] if the backend rejects the image.
    pub fn draw_sprite(&mut self, sprite: &Sprite<ImageOf<H>>, x: f64, y: f64) -> Result<(), DrawError> {
        let surface = self.surface.as_mut().ok_or(DrawError::UninitializedSurface)?;
        let dest = Rect::new(x, y, sprite.width, sprite.height).scaled(self.scale);
        log::trace!("draw_sprite at {dest:?}");
        blit(&mut surface.canvas, sprite.image(), self.crop, dest)
    }

    /// Draw a drawable's sprite at its position.
    ///
    /// A non-zero rotation turns the sprite about its scaled center; otherwise
    /// this is exactly [`Engine::draw_sprite`].
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::MissingSprite`] if no sprite is attached, plus the
    /// errors of [`Engine::draw_sprite`].
    pub fn draw_object<D>(&mut self, object: &D) -> Result<(), DrawError>
    where
        D: Drawable<Image = ImageOf<H>>,
    {
        let sprite = object.sprite().ok_or(DrawError::MissingSprite)?.borrow();
        let pos = object.position();
        let rotation = object.rotation();
        if rotation.abs() < f64::EPSILON {
            return self.draw_sprite(&sprite, pos.x, pos.y);
        }

        let surface = self.surface.as_mut().ok_or(DrawError::UninitializedSurface)?;
        let dest = Rect::new(pos.x, pos.y, sprite.width, sprite.height).scaled(self.scale);
        let center = dest.center();
        let local = Rect::new(-dest.width / 2.0, -dest.height / 2.0, dest.width, dest.height);
        log::trace!("draw_object at {dest:?} rotated {rotation}");

        let canvas = &mut surface.canvas;
        canvas.save();
        let result = blit_rotated(canvas, sprite.image(), self.crop, center, rotation, local);
        canvas.restore();
        result
    }

    /// Stroke a segment from `(x0, y0)` to `(x1, y1)` with the current line
    /// color and width.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UninitializedSurface`] before `create_surface`.
    pub fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<(), DrawError> {
        let surface = self.surface.as_mut().ok_or(DrawError::UninitializedSurface)?;
        let s = self.scale;
        log::trace!("draw_line ({x0}, {y0}) -> ({x1}, {y1})");

        let canvas = &mut surface.canvas;
        canvas.set_stroke_style(&self.line_color);
        canvas.set_line_width(self.line_width * s);
        canvas.begin_path();
        canvas.move_to(x0 * s, y0 * s);
        canvas.line_to(x1 * s, y1 * s);
        canvas.stroke();
        Ok(())
    }

    /// Stroke a segment of `length` from `(x, y)` in direction `angle`.
    ///
    /// The angle is measured from the vertical axis: the endpoint is
    /// `(x + sin(angle) * length, y + cos(angle) * length)`, so `0` points
    /// down the y axis and `π/2` points along +x.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UninitializedSurface`] before `create_surface`.
    pub fn draw_angled_line(&mut self, x: f64, y: f64, angle: f64, length: f64) -> Result<(), DrawError> {
        let end = angled_endpoint(x, y, angle, length);
        self.draw_line(x, y, end.x, end.y)
    }

    /// Fill a single logical pixel at `(x, y)` with `color`. The global fill
    /// color is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UninitializedSurface`] before `create_surface`.
    pub fn draw_pixel(&mut self, x: f64, y: f64, color: &str) -> Result<(), DrawError> {
        let surface = self.surface.as_mut().ok_or(DrawError::UninitializedSurface)?;
        surface.canvas.set_fill_style(color);
        surface.canvas.fill_rect(Rect::new(x, y, 1.0, 1.0).scaled(self.scale));
        Ok(())
    }

    /// Fill a rectangle with the current fill color.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UninitializedSurface`] before `create_surface`.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), DrawError> {
        let surface = self.surface.as_mut().ok_or(DrawError::UninitializedSurface)?;
        log::trace!("fill_rect ({x}, {y}) {width}x{height}");
        surface.canvas.set_fill_style(&self.fill_color);
        surface.canvas.fill_rect(Rect::new(x, y, width, height).scaled(self.scale));
        Ok(())
    }

    /// Clear the whole surface to transparent.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::UninitializedSurface`] before `create_surface`.
    pub fn clear(&mut self) -> Result<(), DrawError> {
        let surface = self.surface.as_mut().ok_or(DrawError::UninitializedSurface)?;
        let full = Rect::new(0.0, 0.0, f64::from(surface.width), f64::from(surface.height));
        surface.canvas.clear_rect(full);
        Ok(())
    }

    // --- Queries ---

    /// Surface `(width, height)` in pixels, if created.
    #[must_use]
    pub fn size(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(|s| (s.width, s.height))
    }

    /// Surface center `(width / 2, height / 2)`, if created.
    #[must_use]
    pub fn center(&self) -> Option<Point> {
        self.surface.as_ref().map(|s| s.center)
    }

    #[must_use]
    pub fn is_created(&self) -> bool {
        self.surface.is_some()
    }

    #[must_use]
    pub fn crop(&self) -> Option<CropRegion> {
        self.crop
    }

    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// The key state fed by this engine's event sources.
    #[must_use]
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Shorthand for `self.keyboard().is_pressed(key)`.
    #[must_use]
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keyboard.is_pressed(key)
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H> Engine<H>
where
    H: Host + ImageSource<Image = ImageOf<H>>,
{
    /// Resolve `id` through the host into a default-size sprite.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::ResourceNotFound`] if the host has no such image.
    pub fn load_sprite(&self, id: &str) -> Result<Sprite<ImageOf<H>>, DrawError> {
        Sprite::load(&self.host, id)
    }
}

/// Endpoint of an angled line, angle measured from the vertical axis.
#[must_use]
pub fn angled_endpoint(x: f64, y: f64, angle: f64, length: f64) -> Point {
    Point::new(angle.sin().mul_add(length, x), angle.cos().mul_add(length, y))
}

fn blit<C: Canvas2d>(canvas: &mut C, image: &C::Image, crop: Option<CropRegion>, dest: Rect) -> Result<(), DrawError> {
    match crop {
        Some(crop) => canvas.draw_image_region(image, crop.as_rect(), dest),
        None => canvas.draw_image(image, dest),
    }
}

fn blit_rotated<C: Canvas2d>(
    canvas: &mut C,
    image: &C::Image,
    crop: Option<CropRegion>,
    center: Point,
    rotation: f64,
    local: Rect,
) -> Result<(), DrawError> {
    canvas.translate(center.x, center.y)?;
    canvas.rotate(rotation)?;
    blit(canvas, image, crop, local)
}
