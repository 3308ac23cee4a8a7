// Simple particle struct to keep track of individual position, velocity, radius and color.
// `advance` is the whole per-frame physics: bounce off the surface edges, then move.

use crate::color::Color;
use crate::surface::Surface;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // The edge check runs before the move, so a particle can sit just past
    // an edge for one frame before coming back.
    pub fn advance(&mut self, surface: Surface) {
        let width = surface.width as f64;
        let height = surface.height as f64;
        if self.pos[0] > width || self.pos[0] < 0.0 {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] > height || self.pos[1] < 0.0 {
            self.vel[1] = -self.vel[1];
        }
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
    }
}
