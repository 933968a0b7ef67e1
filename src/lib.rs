#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod intro;
pub mod noise_source;
pub mod overlay;
pub mod scene;
pub mod scroll;
pub mod wave;

pub use error::ConfigError;
pub use scene::{FrameInput, Scene};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod dom;
    mod gl;
    mod render;
    mod shaders;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("c")
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let overlay = document
            .get_element_by_id("overlay")
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if overlay.is_none() {
            log::warn!("#overlay not found; overlay fades disabled");
        }

        render::start(canvas, overlay)?;
        Ok(())
    }
}
