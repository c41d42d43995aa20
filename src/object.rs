//! Game objects: positioned entities that draw through an attached sprite.

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;

use crate::error::DrawError;
use crate::geom::Point;
use crate::sprite::SharedSprite;

/// Anything the engine can draw by position and sprite.
pub trait Drawable {
    type Image;

    /// Top-left draw position, before the surface scale.
    fn position(&self) -> Point;

    /// The sprite to draw, if one is attached.
    fn sprite(&self) -> Option<&SharedSprite<Self::Image>>;

    /// Clockwise rotation in radians about the sprite's center.
    fn rotation(&self) -> f64 {
        0.0
    }
}

/// The main building block of a game: a player, a box, an enemy.
#[derive(Debug)]
pub struct GameObject<I> {
    pub x: f64,
    pub y: f64,
    /// Clockwise rotation in radians.
    pub rotation: f64,
    sprite: Option<SharedSprite<I>>,
}

impl<I> Default for GameObject<I> {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, rotation: 0.0, sprite: None }
    }
}

impl<I> GameObject<I> {
    /// An object at the origin with no sprite.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute position.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Set the absolute rotation in radians.
    pub fn rotate_to(&mut self, radians: f64) {
        self.rotation = radians;
    }

    /// Attach `sprite`, replacing any previous one.
    pub fn set_sprite(&mut self, sprite: SharedSprite<I>) {
        self.sprite = Some(sprite);
    }

    /// Detach and return the current sprite.
    pub fn take_sprite(&mut self) -> Option<SharedSprite<I>> {
        self.sprite.take()
    }

    /// Resize the attached sprite's logical dimensions.
    ///
    /// The sprite is shared: every object holding the same sprite sees the
    /// new size.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::MissingSprite`] if no sprite is attached.
    pub fn scale_to(&mut self, width: f64, height: f64) -> Result<(), DrawError> {
        let sprite = self.sprite.as_ref().ok_or(DrawError::MissingSprite)?;
        let mut sprite = sprite.borrow_mut();
        sprite.width = width;
        sprite.height = height;
        Ok(())
    }
}

impl<I> Drawable for GameObject<I> {
    type Image = I;

    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn sprite(&self) -> Option<&SharedSprite<I>> {
        self.sprite.as_ref()
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }
}
