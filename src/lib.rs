#[macro_use]
mod utils;
mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod factory;
pub mod frame_driver;
pub mod host;
pub mod particle;
pub mod renderer;
pub mod simulation;
pub mod viewport;
mod webgl_helpers;

use crate::animation::AnimationLoop;
use crate::config::{DemoOptions, Variant, VariantConfig};
use crate::error::RenderError;
use crate::frame_driver::FrameDriver;
use crate::simulation::ParticleSystem;
use crate::viewport::Viewport;
use wasm_bindgen::prelude::*;
use web_sys::console;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Handle to a running demo. Dropping it (or calling `free()` from JS) stops the loop.
#[wasm_bindgen]
pub struct Demo {
    variant: Variant,
    particle_count: usize,
    animation: AnimationLoop,
}

#[wasm_bindgen]
impl Demo {
    pub fn stop(&self) {
        self.animation.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.animation.is_running()
    }

    #[wasm_bindgen(getter = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> String {
        format!("{:?}", self.variant)
    }
}

#[wasm_bindgen]
pub fn start(variant: &str) -> Result<Demo, JsValue> {
    start_with_options(variant, "")
}

#[wasm_bindgen(js_name = startWithOptions)]
pub fn start_with_options(variant: &str, options_json: &str) -> Result<Demo, JsValue> {
    launch(variant, options_json).map_err(|err| {
        console::error_1(&format!("failed to start `{}`: {}", variant, err).into());
        JsValue::from(err)
    })
}

fn launch(variant: &str, options_json: &str) -> Result<Demo, RenderError> {
    let variant: Variant = variant.parse()?;
    let options = DemoOptions::from_json(options_json)?;
    let config = VariantConfig::for_variant(variant).with_options(&options)?;

    let window = host::window()?;
    let document = host::document(&window)?;
    let canvas = host::create_canvas(&document)?;
    let renderer = renderer::for_variant(variant, canvas)?;

    let (width, height) = host::inner_size(&window)?;
    let system = ParticleSystem::new(&config, Viewport::new(width, height));
    let driver = FrameDriver::new(system, renderer);
    let animation = AnimationLoop::start(window, driver)?;

    log!(
        "started {:?} with {} particles at {}x{}",
        variant,
        config.particle_count,
        width,
        height
    );

    Ok(Demo {
        variant,
        particle_count: config.particle_count,
        animation,
    })
}
