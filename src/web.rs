//! Browser implementation of the backend traits.
//!
//! This module is the only place that touches `web_sys`. [`WebHost`] creates
//! `<canvas>` elements in the page document and resolves `<img>` elements by
//! id; [`WebCanvas`] forwards draw calls to the element's 2D context;
//! [`KeyListener`] feeds DOM key and focus events into a [`Keyboard`].
//!
//! JS exceptions are stringified into [`DrawError::Host`].

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Event, EventTarget, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

use crate::backend::{Canvas2d, Host, ImageSource};
use crate::config::SurfaceConfig;
use crate::engine::Engine;
use crate::error::DrawError;
use crate::geom::Rect;
use crate::keyboard::{FOCUS_LOST_EVENT_TYPE, KEY_EVENT_TYPES, KeyEvent, Keyboard};

/// An engine drawing into the page.
pub type WebEngine = Engine<WebHost>;

fn host_err(err: JsValue) -> DrawError {
    DrawError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl From<DrawError> for JsValue {
    fn from(err: DrawError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

// =============================================================
// Host
// =============================================================

/// The page document as a [`Host`] and [`ImageSource`].
#[derive(Debug, Clone)]
pub struct WebHost {
    document: Document,
}

impl WebHost {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Bind to the current window's document.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Host`] outside a browser window context.
    pub fn from_window() -> Result<Self, DrawError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DrawError::Host("no window document".into()))?;
        Ok(Self::new(document))
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Host for WebHost {
    type Canvas = WebCanvas;

    fn create_canvas(&mut self, config: &SurfaceConfig, width: u32, height: u32) -> Result<WebCanvas, DrawError> {
        let element = self
            .document
            .create_element("canvas")
            .map_err(host_err)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DrawError::Host("created element is not a canvas".into()))?;
        element.set_id(&config.element_id);
        element.set_width(width);
        element.set_height(height);
        element.style().set_property("border", &config.border).map_err(host_err)?;

        let ctx = element
            .get_context("2d")
            .map_err(host_err)?
            .ok_or_else(|| DrawError::Host("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DrawError::Host("context is not a CanvasRenderingContext2d".into()))?;

        Ok(WebCanvas { element, ctx })
    }

    fn show(&mut self, canvas: &WebCanvas) -> Result<(), DrawError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| DrawError::Host("document has no body".into()))?;
        body.append_child(&canvas.element).map_err(host_err)?;
        Ok(())
    }
}

impl ImageSource for WebHost {
    type Image = HtmlImageElement;

    /// The `<img>` element with DOM id `id`. Elements that exist but are not
    /// images do not resolve.
    fn image(&self, id: &str) -> Option<HtmlImageElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_ref::<HtmlImageElement>().cloned())
    }
}

// =============================================================
// Canvas
// =============================================================

/// A `<canvas>` element and its 2D context.
#[derive(Debug, Clone)]
pub struct WebCanvas {
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    #[must_use]
    pub fn element(&self) -> &HtmlCanvasElement {
        &self.element
    }
}

impl Canvas2d for WebCanvas {
    type Image = HtmlImageElement;

    fn set_size(&mut self, width: u32, height: u32) {
        self.element.set_width(width);
        self.element.set_height(height);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, dest: Rect) -> Result<(), DrawError> {
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, dest.x, dest.y, dest.width, dest.height)
            .map_err(host_err)
    }

    fn draw_image_region(&mut self, image: &HtmlImageElement, src: Rect, dest: Rect) -> Result<(), DrawError> {
        self.ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                src.x,
                src.y,
                src.width,
                src.height,
                dest.x,
                dest.y,
                dest.width,
                dest.height,
            )
            .map_err(host_err)
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), DrawError> {
        self.ctx.translate(x, y).map_err(host_err)
    }

    fn rotate(&mut self, radians: f64) -> Result<(), DrawError> {
        self.ctx.rotate(radians).map_err(host_err)
    }
}

// =============================================================
// Keyboard
// =============================================================

type EventCallback = Closure<dyn FnMut(Event)>;

/// DOM listeners feeding a [`Keyboard`]: key transitions from one target and
/// focus loss from another.
///
/// The listeners stay attached while this value lives and are removed when it
/// is dropped.
pub struct KeyListener {
    handler: EventCallback,
    registered: Vec<(EventTarget, &'static str)>,
}

impl KeyListener {
    /// Attach `keydown`/`keyup` listeners to `keys` (usually the document) and
    /// a `blur` listener to `focus` (usually the window). Blur releases every
    /// held key.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Host`] if a target rejects a listener. Listeners
    /// already added are removed again.
    pub fn attach(keys: &EventTarget, focus: &EventTarget, keyboard: &Keyboard) -> Result<Self, DrawError> {
        let state = keyboard.clone();
        let handler: EventCallback = Closure::wrap(Box::new(move |ev: Event| {
            let key = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key);
            if let Some(event) = KeyEvent::from_dom(&ev.type_(), key.as_deref()) {
                state.apply(&event);
            }
        }) as Box<dyn FnMut(Event)>);

        let mut listener = Self { handler, registered: Vec::with_capacity(KEY_EVENT_TYPES.len() + 1) };
        for kind in KEY_EVENT_TYPES {
            listener.listen(keys, kind)?;
        }
        listener.listen(focus, FOCUS_LOST_EVENT_TYPE)?;
        log::debug!("key listeners attached");

        Ok(listener)
    }

    /// Attach to the page document and window for `engine`'s keyboard.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Host`] outside a browser window or if a target
    /// rejects a listener.
    pub fn for_engine(engine: &WebEngine) -> Result<Self, DrawError> {
        let window = web_sys::window().ok_or_else(|| DrawError::Host("no window".into()))?;
        Self::attach(engine.host().document(), &window, engine.keyboard())
    }

    fn listen(&mut self, target: &EventTarget, kind: &'static str) -> Result<(), DrawError> {
        target
            .add_event_listener_with_callback(kind, self.handler.as_ref().unchecked_ref())
            .map_err(host_err)?;
        self.registered.push((target.clone(), kind));
        Ok(())
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        for (target, kind) in &self.registered {
            if let Err(err) = target.remove_event_listener_with_callback(kind, self.handler.as_ref().unchecked_ref()) {
                log::warn!("failed to remove {kind} listener: {err:?}");
            }
        }
    }
}
