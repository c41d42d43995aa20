//! Sample page: a black surface with a rotated logo.
//!
//! The page must contain `<img id="logo">` and load this module. Keys held on
//! the page are tracked by the engine's keyboard.

use sketchpad::angle::to_radians;
use sketchpad::object::GameObject;
use sketchpad::web::{KeyListener, WebEngine, WebHost};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut engine = WebEngine::new(WebHost::from_window()?);
    engine.create_default_surface()?;
    engine.show()?;

    // Listeners live for the lifetime of the page.
    std::mem::forget(KeyListener::for_engine(&engine)?);

    engine.fill_color = "black".into();
    engine.fill_rect(0.0, 0.0, 320.0, 240.0)?;

    let mut logo = GameObject::new();
    logo.set_sprite(engine.load_sprite("logo")?.with_size(225.0, 225.0).shared());
    logo.move_to(50.0, 0.0);
    logo.scale_to(225.0, 225.0)?;
    logo.rotate_to(to_radians(45.0));
    engine.draw_object(&logo)?;

    log::info!("demo drawn");
    Ok(())
}
