mod utils;

pub mod background;
pub mod canvas_helpers;
pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod field;
pub mod particle;
pub mod renderer;
pub mod store;
pub mod surface;

use wasm_bindgen::prelude::*;

pub use background::{mount_background, ParticleBackground};
pub use color::Color;
pub use config::FieldConfig;
pub use driver::{DriverState, FrameDriver};
pub use error::FieldError;
pub use field::ParticleField;
pub use particle::Particle;
pub use renderer::{DrawCommand, DrawContext, LinkRenderer};
pub use store::{particle_count, ParticleStore};
pub use surface::{FixedViewport, Surface, SurfaceManager, Viewport};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logger(log::LevelFilter::Info);
}
