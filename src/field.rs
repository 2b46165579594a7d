// The full set of particles plus the surface bounds they bounce inside.
//
// Bounds are stored here rather than read from the canvas every frame, so the
// update and connection math stays testable without a browser.

use crate::config::FieldConfig;
use crate::particle::Particle;
use rand::Rng;
use vecmath::Vector2;

pub struct ParticleField {
    pub particles: Vec<Particle>,
    width: f64,
    height: f64,
}

/// A line to draw between two particles that are close enough.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub alpha: f64,
}

impl ParticleField {
    pub fn init<R: Rng>(rng: &mut R, width: f64, height: f64, count: usize, config: &FieldConfig) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height, config))
            .collect();
        ParticleField::from_particles(particles, width, height)
    }

    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        ParticleField {
            particles,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // Only the bounds change. Particles left outside a smaller surface find
    // their way back through the normal reflection in `step`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    pub fn max_link_distance(&self, config: &FieldConfig) -> f64 {
        max_link_distance(self.width, self.height, config.link_divisor)
    }

    // Every pair i < j closer than the link threshold, in pair order.
    pub fn links<'a>(&'a self, config: &'a FieldConfig) -> impl Iterator<Item = Link> + 'a {
        let max_distance = self.max_link_distance(config);
        let particles = &self.particles;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                let d2 = squared_distance(a.pos, b.pos);
                if is_linked(d2, max_distance) {
                    Some(Link {
                        from: a.pos,
                        to: b.pos,
                        alpha: link_alpha(d2, config.link_fade),
                    })
                } else {
                    None
                }
            })
        })
    }
}

pub fn squared_distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    vecmath::vec2_square_len(vecmath::vec2_sub(a, b))
}

// The threshold is a squared distance; it is not derived from `link_fade`.
pub fn max_link_distance(width: f64, height: f64, divisor: f64) -> f64 {
    (width / divisor) * (height / divisor)
}

pub fn is_linked(d2: f64, max_distance: f64) -> bool {
    d2 < max_distance
}

pub fn link_alpha(d2: f64, fade: f64) -> f64 {
    let alpha = 1.0 - d2 / fade;
    alpha.max(0.0).min(1.0)
}
