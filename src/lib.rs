//! Minimal 2D drawing surface and game-object helpers for the browser canvas.
//!
//! The crate wraps a 2D drawing context with a small immediate-mode API: create
//! a surface, set a few style fields, then draw sprites, lines, pixels and
//! rectangles. Every coordinate passes through one uniform scale factor before
//! it reaches the drawing backend. There is no frame loop; callers drive
//! drawing themselves.
//!
//! The browser is only one implementation of the [`backend`] traits. The
//! [`engine::Engine`] is generic over them so all drawing contracts are testable
//! without a DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Surface state, style, crop and all draw operations |
//! | [`backend`] | `Canvas2d`, `Host` and `ImageSource` collaborator traits |
//! | [`web`] | `web-sys` implementation of the backend traits and key listener |
//! | [`sprite`] | Image reference plus logical draw size, shared via `Rc` |
//! | [`object`] | Positioned game objects and the [`object::Drawable`] capability |
//! | [`keyboard`] | Pressed-key map fed by press/release events |
//! | [`geom`] | `Point`, `Rect` and `CropRegion` |
//! | [`angle`] | Degree/radian conversion |
//! | [`config`] | Serde-backed surface defaults |
//! | [`error`] | [`error::DrawError`] |
//! | [`consts`] | Shared default values |

pub mod angle;
pub mod backend;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod keyboard;
pub mod object;
pub mod sprite;
pub mod web;

#[cfg(test)]
mod recording;

pub use engine::Engine;
pub use error::DrawError;
