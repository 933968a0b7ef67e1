#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use wavefield_wasm::config::SceneConfig;
use wavefield_wasm::scroll::OverlayStyle;
use wavefield_wasm::{FrameInput, Scene};

wasm_bindgen_test_configure!(run_in_browser);

fn element(tag: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element(tag).unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el.dyn_into::<web_sys::HtmlElement>().unwrap()
}

#[wasm_bindgen_test]
fn webgl2_context_is_available() {
    let canvas = element("canvas")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    let ctx = canvas.get_context("webgl2").unwrap();
    assert!(ctx.is_some());
}

#[wasm_bindgen_test]
fn overlay_style_is_valid_css() {
    let el = element("div");
    let style = OverlayStyle::from_opacity(0.9);
    let css = el.style();
    css.set_property("transform", &style.css_transform()).unwrap();
    css.set_property("pointer-events", style.css_pointer_events()).unwrap();
    // The browser drops declarations it cannot parse.
    assert!(!css.get_property_value("transform").unwrap().is_empty());
    assert_eq!(css.get_property_value("pointer-events").unwrap(), "auto");
}

#[wasm_bindgen_test]
fn scene_updates_in_the_browser() {
    let mut scene = Scene::new(SceneConfig::default()).unwrap();
    scene.update(FrameInput {
        time: 1.0,
        scroll_progress: 1.0,
    });
    assert!(scene.field().is_visible());
}
