// Simple color struct: 8-bit rgb channels plus a floating alpha,
// formatted as a css rgba() string for the 2d canvas api

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Color {
        Color { r, g, b, a }
    }

    pub fn from_rgb(rgb: [u8; 3]) -> Color {
        Color::new(rgb[0], rgb[1], rgb[2], 1.0)
    }

    // Same channels, alpha replaced and clamped to [0, 1]
    pub fn with_alpha(self, alpha: f64) -> Color {
        let a = if alpha.is_nan() { 0.0 } else { alpha.max(0.0).min(1.0) };
        Color { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
