//! Recording host for tests: logs every backend call instead of drawing.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::backend::{Canvas2d, Host, ImageSource};
use crate::config::SurfaceConfig;
use crate::error::DrawError;
use crate::geom::Rect;

/// Image handle used by the fake: the resource id it was resolved from.
pub type FakeImage = String;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateCanvas { element_id: String, width: u32, height: u32 },
    Show,
    SetSize(u32, u32),
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    FillRect(Rect),
    ClearRect(Rect),
    DrawImage { image: FakeImage, dest: Rect },
    DrawImageRegion { image: FakeImage, src: Rect, dest: Rect },
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
}

type Log = Rc<RefCell<Vec<Call>>>;

#[derive(Debug, Default)]
pub struct RecordingHost {
    log: Log,
    images: HashMap<String, FakeImage>,
    /// When set, `create_canvas` and `show` fail with this message.
    pub fail_with: Option<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image resource under `id`.
    pub fn with_image(mut self, id: &str) -> Self {
        self.images.insert(id.to_owned(), id.to_owned());
        self
    }

    /// Every call recorded so far, host calls included.
    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.log.borrow_mut().clear();
    }

    fn check(&self) -> Result<(), DrawError> {
        match &self.fail_with {
            Some(msg) => Err(DrawError::Host(msg.clone())),
            None => Ok(()),
        }
    }
}

impl Host for RecordingHost {
    type Canvas = RecordingCanvas;

    fn create_canvas(&mut self, config: &SurfaceConfig, width: u32, height: u32) -> Result<RecordingCanvas, DrawError> {
        self.check()?;
        self.log.borrow_mut().push(Call::CreateCanvas {
            element_id: config.element_id.clone(),
            width,
            height,
        });
        Ok(RecordingCanvas { log: Rc::clone(&self.log) })
    }

    fn show(&mut self, _canvas: &RecordingCanvas) -> Result<(), DrawError> {
        self.check()?;
        self.log.borrow_mut().push(Call::Show);
        Ok(())
    }
}

impl ImageSource for RecordingHost {
    type Image = FakeImage;

    fn image(&self, id: &str) -> Option<FakeImage> {
        self.images.get(id).cloned()
    }
}

#[derive(Debug)]
pub struct RecordingCanvas {
    log: Log,
}

impl RecordingCanvas {
    fn push(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl Canvas2d for RecordingCanvas {
    type Image = FakeImage;

    fn set_size(&mut self, width: u32, height: u32) {
        self.push(Call::SetSize(width, height));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.push(Call::StrokeStyle(color.to_owned()));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.push(Call::FillStyle(color.to_owned()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(Call::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.push(Call::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(Call::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(Call::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.push(Call::Stroke);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.push(Call::FillRect(rect));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.push(Call::ClearRect(rect));
    }

    fn draw_image(&mut self, image: &FakeImage, dest: Rect) -> Result<(), DrawError> {
        self.push(Call::DrawImage { image: image.clone(), dest });
        Ok(())
    }

    fn draw_image_region(&mut self, image: &FakeImage, src: Rect, dest: Rect) -> Result<(), DrawError> {
        self.push(Call::DrawImageRegion { image: image.clone(), src, dest });
        Ok(())
    }

    fn save(&mut self) {
        self.push(Call::Save);
    }

    fn restore(&mut self) {
        self.push(Call::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), DrawError> {
        self.push(Call::Translate(x, y));
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> Result<(), DrawError> {
        self.push(Call::Rotate(radians));
        Ok(())
    }
}
