// Owns the particle collection. Seeding always throws the old collection away,
// so the count tracks the current surface area exactly.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;

#[derive(Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

/// Number of particles a surface holds: one per `area_per_particle` square pixels, rounded down.
pub fn particle_count(surface: Surface, area_per_particle: u32) -> usize {
    (surface.area() / area_per_particle.max(1) as u64) as usize
}

// Uniform in [low, high]; collapses to `fallback` when the range is empty
fn sample_within<R: Rng>(rng: &mut R, low: f64, high: f64, fallback: f64) -> f64 {
    if high > low {
        rng.gen_range(low, high)
    } else {
        fallback
    }
}

impl ParticleStore {
    pub fn new() -> Self {
        ParticleStore::default()
    }

    pub fn seed<R: Rng>(&mut self, surface: Surface, config: &FieldConfig, rng: &mut R) {
        let count = particle_count(surface, config.area_per_particle);
        let width = surface.width as f64;
        let height = surface.height as f64;
        let color = config.particle_color();
        let speed = config.max_speed;

        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let radius = rng.gen_range(config.min_radius, config.max_radius);
            let margin = radius * 2.0;
            let pos_x = sample_within(rng, margin, width - margin, width / 2.0);
            let pos_y = sample_within(rng, margin, height - margin, height / 2.0);
            let vel_x = sample_within(rng, -speed, speed, 0.0);
            let vel_y = sample_within(rng, -speed, speed, 0.0);
            particles.push(Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color));
        }
        self.particles = particles;
    }

    pub fn advance_all(&mut self, surface: Surface) {
        for particle in &mut self.particles {
            particle.advance(surface);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(surface: Surface, seed: u64) -> ParticleStore {
        let mut store = ParticleStore::new();
        let mut rng = StdRng::seed_from_u64(seed);
        store.seed(surface, &FieldConfig::default(), &mut rng);
        store
    }

    #[test]
    fn count_is_floor_of_area_over_9000() {
        let cases = [
            (700, 700, 54),
            (1920, 1080, 230),
            (1280, 5000, 711),
            (94, 95, 0),
            (90, 100, 1),
            (0, 800, 0),
        ];
        for &(w, h, expected) in cases.iter() {
            let surface = Surface::new(w, h);
            assert_eq!(particle_count(surface, 9000), expected, "{}x{}", w, h);
            assert_eq!(seeded(surface, 7).len(), expected, "{}x{}", w, h);
        }
    }

    #[test]
    fn particles_spawn_inside_their_margins() {
        let surface = Surface::new(1024, 768);
        let store = seeded(surface, 42);
        assert!(!store.is_empty());
        for p in store.particles() {
            let margin = p.radius * 2.0;
            assert!(p.radius >= 1.0 && p.radius < 3.0);
            assert!(p.pos[0] >= margin && p.pos[0] <= 1024.0 - margin);
            assert!(p.pos[1] >= margin && p.pos[1] <= 768.0 - margin);
            assert!(p.vel[0].abs() <= 0.2 && p.vel[1].abs() <= 0.2);
            assert_eq!(p.color.to_css(), "rgba(34, 211, 238, 0.5)");
        }
    }

    #[test]
    fn narrow_surface_centers_particles() {
        // 4px wide cannot fit a doubled radius on both sides
        let surface = Surface::new(4, 90_000);
        let store = seeded(surface, 3);
        assert_eq!(store.len(), 40);
        for p in store.particles() {
            assert_eq!(p.pos[0], 2.0);
        }
    }

    #[test]
    fn reseed_replaces_the_collection() {
        let mut store = seeded(Surface::new(900, 900), 1);
        assert_eq!(store.len(), 90);
        let before = store.particles().to_vec();

        let mut rng = StdRng::seed_from_u64(2);
        store.seed(Surface::new(300, 300), &FieldConfig::default(), &mut rng);
        assert_eq!(store.len(), 10);
        assert!(store.particles().iter().all(|p| !before.contains(p)));
    }

    #[test]
    fn advance_all_moves_every_particle() {
        let surface = Surface::new(600, 600);
        let mut store = seeded(surface, 9);
        let before = store.particles().to_vec();
        store.advance_all(surface);
        for (old, new) in before.iter().zip(store.particles()) {
            assert_eq!(new.pos[0], old.pos[0] + old.vel[0]);
            assert_eq!(new.pos[1], old.pos[1] + old.vel[1]);
        }
    }
}
