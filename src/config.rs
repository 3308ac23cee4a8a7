// Tuning constants for the particle field. Every field has a default, so the
// host page can pass a partial options object (or nothing at all).

use crate::color::Color;
use crate::error::FieldError;
use serde::Deserialize;
use wasm_bindgen::JsValue;

// Below this the quadratic link pass stalls the page on tall documents
pub const MIN_AREA_PER_PARTICLE: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Surface area, in square pixels, that accounts for one particle.
    pub area_per_particle: u32,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Upper bound of each velocity component, in pixels per frame.
    pub max_speed: f64,
    /// Links are drawn while the squared distance is below
    /// `(width / link_divisor) * (height / link_divisor)`.
    pub link_divisor: f64,
    /// Squared distance at which a link's opacity reaches zero.
    pub opacity_falloff: f64,
    pub line_width: f64,
    pub accent: [u8; 3],
    pub particle_alpha: f64,
    pub canvas_id: String,
    pub z_index: i32,
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            area_per_particle: 9000,
            min_radius: 1.0,
            max_radius: 3.0,
            max_speed: 0.2,
            link_divisor: 7.0,
            opacity_falloff: 20000.0,
            line_width: 1.0,
            accent: [34, 211, 238],
            particle_alpha: 0.5,
            canvas_id: "particle-canvas".to_owned(),
            z_index: 1,
            seed: None,
        }
    }
}

impl FieldConfig {
    // `undefined` and `null` both mean "use the defaults"
    pub fn from_js(options: JsValue) -> Result<FieldConfig, FieldError> {
        if options.is_undefined() || options.is_null() {
            return Ok(FieldConfig::default());
        }
        let config: FieldConfig = serde_wasm_bindgen::from_value(options)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        let invalid = |msg: &str| Err(FieldError::InvalidConfig(msg.to_owned()));
        if self.area_per_particle < MIN_AREA_PER_PARTICLE {
            return invalid("areaPerParticle must be at least 1000");
        }
        let finite = [
            self.min_radius,
            self.max_radius,
            self.max_speed,
            self.link_divisor,
            self.opacity_falloff,
            self.line_width,
            self.particle_alpha,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return invalid("numeric options must be finite");
        }
        if !(self.min_radius > 0.0 && self.max_radius > self.min_radius) {
            return invalid("radius range must be positive and non-empty");
        }
        if !(self.max_speed >= 0.0) {
            return invalid("maxSpeed must not be negative");
        }
        if !(self.link_divisor > 0.0) {
            return invalid("linkDivisor must be positive");
        }
        if !(self.opacity_falloff > 0.0) {
            return invalid("opacityFalloff must be positive");
        }
        if !(self.line_width > 0.0) {
            return invalid("lineWidth must be positive");
        }
        Ok(())
    }

    pub fn particle_color(&self) -> Color {
        Color::from_rgb(self.accent).with_alpha(self.particle_alpha)
    }

    pub fn link_color(&self) -> Color {
        Color::from_rgb(self.accent)
    }
}
