// Renderer that draws the particle field: one filled circle per particle and a
// line between every pair closer than a surface-relative threshold, fading with distance.
// Drawing goes through the `DrawContext` trait so the same code targets the browser's
// 2d canvas and the headless command recorder used in tests.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::particle::Particle;
use crate::surface::Surface;
use vecmath::{vec2_square_len, vec2_sub, Vector2};

pub trait DrawContext {
    /// Resize the backing pixel buffer.
    fn set_size(&mut self, width: u32, height: u32);
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), FieldError>;
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, line_width: f64, color: Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetSize {
        width: u32,
        height: u32,
    },
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    },
    Line {
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
    },
}

// Headless backend: records every call in order
impl DrawContext for Vec<DrawCommand> {
    fn set_size(&mut self, width: u32, height: u32) {
        self.push(DrawCommand::SetSize { width, height });
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), FieldError> {
        self.push(DrawCommand::Circle { center, radius, color });
        Ok(())
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, line_width: f64, color: Color) {
        self.push(DrawCommand::Line {
            from,
            to,
            width: line_width,
            color,
        });
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkRenderer {
    pub link_color: Color,
    pub line_width: f64,
    pub link_divisor: f64,
    pub opacity_falloff: f64,
}

impl LinkRenderer {
    pub fn new(config: &FieldConfig) -> Self {
        LinkRenderer {
            link_color: config.link_color(),
            line_width: config.line_width,
            link_divisor: config.link_divisor,
            opacity_falloff: config.opacity_falloff,
        }
    }

    // Squared distance below which two particles are linked
    pub fn link_threshold(&self, surface: Surface) -> f64 {
        (surface.width as f64 / self.link_divisor) * (surface.height as f64 / self.link_divisor)
    }

    pub fn link_opacity(&self, distance_sq: f64) -> f64 {
        (1.0 - distance_sq / self.opacity_falloff).max(0.0).min(1.0)
    }

    pub fn render<C>(&self, particles: &[Particle], surface: Surface, ctx: &mut C) -> Result<(), FieldError>
    where
        C: DrawContext + ?Sized,
    {
        ctx.clear(surface.width as f64, surface.height as f64);
        for p in particles {
            ctx.fill_circle(p.pos, p.radius, p.color)?;
        }
        self.render_links(particles, surface, ctx);
        Ok(())
    }

    fn render_links<C>(&self, particles: &[Particle], surface: Surface, ctx: &mut C)
    where
        C: DrawContext + ?Sized,
    {
        let threshold = self.link_threshold(surface);
        for (i, a) in particles.iter().enumerate() {
            for b in &particles[i + 1..] {
                let distance_sq = vec2_square_len(vec2_sub(a.pos, b.pos));
                if distance_sq < threshold {
                    let color = self.link_color.with_alpha(self.link_opacity(distance_sq));
                    ctx.stroke_line(a.pos, b.pos, self.line_width, color);
                }
            }
        }
    }
}
