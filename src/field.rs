// Simulation state for one mounted background: the surface, the particles living on it,
// the renderer and the rng used to reseed. Owned by the component instance, never global.

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::renderer::{DrawContext, LinkRenderer};
use crate::store::ParticleStore;
use crate::surface::{Surface, SurfaceManager, Viewport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ParticleField<R = StdRng> {
    config: FieldConfig,
    surface: SurfaceManager,
    store: ParticleStore,
    renderer: LinkRenderer,
    rng: R,
}

impl ParticleField<StdRng> {
    // Deterministic when the config carries a seed, entropy-seeded otherwise
    pub fn new(config: FieldConfig) -> Result<Self, FieldError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ParticleField::with_rng(config, rng)
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(config: FieldConfig, rng: R) -> Result<Self, FieldError> {
        config.validate()?;
        let renderer = LinkRenderer::new(&config);
        Ok(ParticleField {
            config,
            surface: SurfaceManager::new(),
            store: ParticleStore::new(),
            renderer,
            rng,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface(&self) -> Surface {
        self.surface.surface()
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    // Measures the viewport, resizes the target and reseeds only when the
    // dimensions actually changed. Returns whether a reseed happened.
    pub fn resize<V, C>(&mut self, viewport: &V, target: &mut C) -> Result<bool, FieldError>
    where
        V: Viewport + ?Sized,
        C: DrawContext + ?Sized,
    {
        let changed = self.surface.resize(viewport, target)?;
        if changed {
            self.reseed();
        }
        Ok(changed)
    }

    pub fn reseed(&mut self) {
        let surface = self.surface.surface();
        self.store.seed(surface, &self.config, &mut self.rng);
        log::debug!(
            "seeded {} particles for a {}x{} surface",
            self.store.len(),
            surface.width,
            surface.height
        );
    }

    pub fn step(&mut self) {
        self.store.advance_all(self.surface.surface());
    }

    pub fn render<C: DrawContext + ?Sized>(&self, ctx: &mut C) -> Result<(), FieldError> {
        self.renderer
            .render(self.store.particles(), self.surface.surface(), ctx)
    }

    // One animation frame: simulate every particle, then draw them all
    pub fn tick<C: DrawContext + ?Sized>(&mut self, ctx: &mut C) -> Result<(), FieldError> {
        self.step();
        self.render(ctx)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }
}
