//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use wasm_bindgen_test::*;
use wasm_particle_demos::config::{Variant, VariantConfig};
use wasm_particle_demos::simulation::ParticleSystem;
use wasm_particle_demos::viewport::Viewport;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn canvas_starfield_starts_and_stops() {
    wasm_particle_demos::initialize();
    let demo = wasm_particle_demos::start("starfield").expect("starfield should start");
    assert!(demo.running());
    assert_eq!(demo.particle_count(), 500);
    demo.stop();
    assert!(!demo.running());
}

#[wasm_bindgen_test]
fn webgl_starfield_starts_and_stops() {
    let demo = wasm_particle_demos::start("webgl-starfield").expect("webgl-starfield should start");
    assert!(demo.running());
    assert_eq!(demo.particle_count(), 5000);
    demo.stop();
    assert!(!demo.running());
}

#[wasm_bindgen_test]
fn squares_start_and_stop() {
    let demo = wasm_particle_demos::start("squares").expect("squares should start");
    assert!(demo.running());
    assert_eq!(demo.particle_count(), 500);
    demo.stop();
    assert!(!demo.running());
}

#[wasm_bindgen_test]
fn options_override_particle_count() {
    let demo = wasm_particle_demos::start_with_options("starfield", r#"{"particleCount": 64}"#)
        .expect("starfield should start");
    assert_eq!(demo.particle_count(), 64);
    demo.stop();
}

#[wasm_bindgen_test]
fn unknown_variant_is_rejected() {
    assert!(wasm_particle_demos::start("fireworks").is_err());
}

#[wasm_bindgen_test]
fn invalid_options_are_rejected() {
    assert!(wasm_particle_demos::start_with_options("starfield", r#"{"maxVelocity": 0}"#).is_err());
    assert!(
        wasm_particle_demos::start_with_options("squares", r#"{"particleCount": 1000000}"#)
            .is_err()
    );
}

#[wasm_bindgen_test]
fn simulation_runs_under_wasm_entropy() {
    let config = VariantConfig::for_variant(Variant::WebGlStarfield);
    let mut system = ParticleSystem::new(&config, Viewport::new(640, 480));
    let mut now = 0.0;
    for _ in 0..60 {
        now += 16.0;
        system.advance(now);
    }
    let bounds = system.bounds();
    assert_eq!(system.len(), 5000);
    assert!(system.particles().iter().all(|p| bounds.contains(p.pos)));
}
