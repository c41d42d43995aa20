//! Error type shared by every fallible sketchpad operation.

/// Errors returned by surface, sprite and object operations.
///
/// All variants are caller-usage errors or host failures surfaced as-is; none
/// are retried internally.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// A draw, show or resize call was made before `create_surface`.
    #[error("surface not initialized: call create_surface first")]
    UninitializedSurface,
    /// A game object was scaled or drawn without an attached sprite.
    #[error("no sprite attached to object")]
    MissingSprite,
    /// No loaded image resource matches the requested identifier.
    #[error("image resource not found: {id}")]
    ResourceNotFound { id: String },
    /// The host environment rejected a call (a JS exception, a missing DOM node).
    #[error("host error: {0}")]
    Host(String),
    /// A surface configuration document could not be parsed.
    #[error("invalid surface config: {0}")]
    Config(#[from] serde_json::Error),
}
