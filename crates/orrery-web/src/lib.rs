use std::cell::RefCell;

use orrery_core::{InputEvent, OrreryConfig, OrreryError};
use wasm_bindgen::prelude::*;

pub mod runner;

pub use runner::OrreryRunner;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Orrery not initialized. Call orrery_init() first.");
        f(runner)
    })
}

fn init_error(err: OrreryError) -> JsValue {
    let msg = JsValue::from_str(&format!("orrery_init failed: {err}"));
    web_sys::console::error_1(&msg);
    msg
}

/// Build the orrery from a JSON config (`"{}"` for defaults) and size the viewport.
#[wasm_bindgen]
pub fn orrery_init(config_json: &str, width: u32, height: u32) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = OrreryConfig::from_json(config_json).map_err(init_error)?;
    let mut runner = OrreryRunner::new(config).map_err(init_error)?;
    runner.resize(width, height);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized at {width}x{height}");
    Ok(())
}

#[wasm_bindgen]
pub fn orrery_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn orrery_resize(width: u32, height: u32) {
    with_runner(|r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn orrery_load_manifest(json: &str) {
    with_runner(|r| r.load_manifest(json));
}

#[wasm_bindgen]
pub fn orrery_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn orrery_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(dx: f32, dy: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { dx, dy }));
}

#[wasm_bindgen]
pub fn orrery_scroll(dy: f32) {
    with_runner(|r| r.push_input(InputEvent::Scroll { dy }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_buffer_ptr() -> *const f32 {
    with_runner(|r| r.buffer_ptr())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}

#[wasm_bindgen]
pub fn get_draw_count() -> u32 {
    with_runner(|r| r.draw_count())
}

#[wasm_bindgen]
pub fn get_ring_split() -> u32 {
    with_runner(|r| r.ring_split())
}

#[wasm_bindgen]
pub fn get_max_draws() -> u32 {
    with_runner(|r| r.max_draws())
}

#[wasm_bindgen]
pub fn get_draw_data_offset() -> u32 {
    with_runner(|r| r.draw_data_offset())
}

#[wasm_bindgen]
pub fn get_elapsed() -> f32 {
    with_runner(|r| r.elapsed())
}

#[wasm_bindgen]
pub fn get_quit_requested() -> bool {
    with_runner(|r| r.quit_requested())
}
