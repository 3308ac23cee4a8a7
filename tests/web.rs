//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use particle_field_background::{mount_background, FieldConfig, ParticleBackground};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas_count(id: &str) -> usize {
    let document = web_sys::window().unwrap().document().unwrap();
    if document.get_element_by_id(id).is_some() {
        1
    } else {
        0
    }
}

#[wasm_bindgen_test]
fn mount_creates_and_sizes_the_canvas() {
    let mut background = ParticleBackground::mount(JsValue::UNDEFINED).unwrap();
    assert!(background.is_running());
    assert_eq!(canvas_count("particle-canvas"), 1);

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(background.width(), width);
    let body = window.document().unwrap().body().unwrap();
    assert_eq!(background.height(), body.scroll_height().max(0) as u32);
    let expected = (background.width() as u64 * background.height() as u64 / 9000) as usize;
    assert_eq!(background.particle_count(), expected);

    background.unmount();
    assert!(!background.is_running());
    assert_eq!(canvas_count("particle-canvas"), 0);
}

#[wasm_bindgen_test]
fn unmount_twice_is_harmless() {
    let config = FieldConfig {
        canvas_id: "twice-canvas".to_owned(),
        seed: Some(1),
        ..FieldConfig::default()
    };
    let mut background = ParticleBackground::mount_with(config).unwrap();
    background.unmount();
    background.unmount();
    assert_eq!(background.particle_count(), 0);
    assert_eq!(canvas_count("twice-canvas"), 0);
}

#[wasm_bindgen_test]
fn dropping_the_handle_removes_the_canvas() {
    let config = FieldConfig {
        canvas_id: "dropped-canvas".to_owned(),
        ..FieldConfig::default()
    };
    let background = ParticleBackground::mount_with(config).unwrap();
    assert_eq!(canvas_count("dropped-canvas"), 1);
    drop(background);
    assert_eq!(canvas_count("dropped-canvas"), 0);
}

#[wasm_bindgen_test]
fn invalid_options_do_not_mount() {
    let config = FieldConfig {
        min_radius: 5.0,
        max_radius: 1.0,
        ..FieldConfig::default()
    };
    assert!(ParticleBackground::mount_with(config).is_err());
    assert!(mount_background(JsValue::from_str("not an options object")).is_none());
}
