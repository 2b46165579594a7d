// Renderer struct that owns everything one animation frame needs: the particle
// field, the tracked pointer, the config and the rng used to (re)generate particles.
// It never touches the DOM itself; drawing goes through a `Surface`.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::pointer::PointerState;
use crate::surface::{self, Surface};
use rand::rngs::StdRng;

pub struct Renderer {
    pub field: ParticleField,
    pub pointer: PointerState,
    config: FieldConfig,
    rng: StdRng,
}

impl Renderer {
    pub fn new(config: FieldConfig, width: f64, height: f64, mut rng: StdRng) -> Self {
        let field = ParticleField::init(&mut rng, width, height, config.count, &config);
        let pointer = PointerState::new(config.pointer_radius);
        Renderer {
            field,
            pointer,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    // One animation frame: clear, move and draw each particle, then draw the
    // links on top using the updated positions.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let (width, height) = (self.field.width(), self.field.height());
        surface.clear(width, height)?;
        for particle in &mut self.field.particles {
            particle.step(width, height);
            surface::draw_particle(surface, particle)?;
        }
        surface::draw_links(surface, &self.field, &self.config)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if self.config.regenerate_on_resize {
            self.field = ParticleField::init(&mut self.rng, width, height, self.config.count, &self.config);
        } else {
            self.field.resize(width, height);
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.leave();
    }
}
