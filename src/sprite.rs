//! Sprites: an externally-owned image plus the logical size it is drawn at.
//!
//! The logical `width`/`height` are independent of the image's native pixel
//! size; the engine stretches the image to them at draw time.
//!
//! Sprites are usually held as [`SharedSprite`] so several game objects can
//! draw the same sprite. Resizing through any holder (for example
//! [`crate::object::GameObject::scale_to`]) is visible to every other holder.
//! Clone the [`Sprite`] itself when independent sizes are wanted.

#[cfg(test)]
#[path = "sprite_test.rs"]
mod sprite_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::ImageSource;
use crate::consts::DEFAULT_SPRITE_SIZE;
use crate::error::DrawError;

/// A sprite shared between several owners. Mutations are seen by all of them.
pub type SharedSprite<I> = Rc<RefCell<Sprite<I>>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite<I> {
    image: I,
    /// Logical draw width, before the surface scale.
    pub width: f64,
    /// Logical draw height, before the surface scale.
    pub height: f64,
}

impl<I> Sprite<I> {
    /// Wrap an already-resolved image at the default 128x128 logical size.
    #[must_use]
    pub fn new(image: I) -> Self {
        Self { image, width: DEFAULT_SPRITE_SIZE, height: DEFAULT_SPRITE_SIZE }
    }

    /// Resolve `id` through `source` and wrap it at the default logical size.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::ResourceNotFound`] if `source` has no image for `id`.
    pub fn load<S>(source: &S, id: &str) -> Result<Self, DrawError>
    where
        S: ImageSource<Image = I>,
    {
        match source.image(id) {
            Some(image) => {
                log::debug!("sprite loaded: {id}");
                Ok(Self::new(image))
            }
            None => Err(DrawError::ResourceNotFound { id: id.to_owned() }),
        }
    }

    /// Set the logical size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Wrap into a [`SharedSprite`].
    #[must_use]
    pub fn shared(self) -> SharedSprite<I> {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn image(&self) -> &I {
        &self.image
    }
}
