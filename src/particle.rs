// Simple particle struct to keep track of individual position, velocity, size, and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    radius: f64,
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

    // Radius is fixed for the particle's whole lifetime, so it has no setter
    pub fn radius(&self) -> f64 {
        self.radius
    }

    // Samples a particle that fits entirely inside a width x height surface.
    // Degenerate sizes collapse the sampling range instead of producing NaN.
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let radius = rng.gen::<f64>() * (config.radius_max - config.radius_min) + config.radius_min;
        let pos_x = sample_axis(rng, radius, width);
        let pos_y = sample_axis(rng, radius, height);
        let vel_x = rng.gen::<f64>() * config.max_speed * 2.0 - config.max_speed;
        let vel_y = rng.gen::<f64>() * config.max_speed * 2.0 - config.max_speed;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, config.particle_color)
    }

    // Reflect off any wall the particle currently touches, then move.
    // The check uses the position from before the move.
    pub fn step(&mut self, width: f64, height: f64) {
        let [x, y] = self.pos;
        if x + self.radius > width || x - self.radius < 0.0 {
            self.vel[0] = -self.vel[0];
        }
        if y + self.radius > height || y - self.radius < 0.0 {
            self.vel[1] = -self.vel[1];
        }
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
    }
}

fn sample_axis<R: Rng>(rng: &mut R, radius: f64, extent: f64) -> f64 {
    let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
    let span = extent - radius * 2.0;
    if span <= 0.0 {
        return extent / 2.0;
    }
    rng.gen::<f64>() * span + radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn color() -> Color {
        FieldConfig::PARTICLE_COLOR
    }

    #[test]
    fn inner_step_moves_by_velocity() {
        let mut p = Particle::new(400.0, 300.0, 0.15, -0.1, 2.0, color());
        p.step(800.0, 600.0);
        assert_eq!(p.pos, [400.0 + 0.15, 300.0 - 0.1]);
        assert_eq!(p.vel, [0.15, -0.1]);
    }

    #[test]
    fn reflects_off_right_wall() {
        let mut p = Particle::new(799.5, 300.0, 0.2, 0.0, 1.0, color());
        p.step(800.0, 600.0);
        assert_eq!(p.vel[0], -0.2);
        assert_eq!(p.pos[0], 799.5 + -0.2);
        assert_eq!(p.pos[1], 300.0);
    }

    #[test]
    fn reflects_off_top_wall() {
        let mut p = Particle::new(100.0, 0.5, 0.0, -0.1, 1.0, color());
        p.step(800.0, 600.0);
        assert_eq!(p.vel, [0.0, 0.1]);
        assert_eq!(p.pos[1], 0.5 + 0.1);
    }

    #[test]
    fn overshoot_reflects_only_on_detection() {
        // Already past the wall and heading back in: the check flips it outward again.
        let mut p = Particle::new(-2.0, 300.0, 0.1, 0.0, 1.0, color());
        p.step(800.0, 600.0);
        assert_eq!(p.vel[0], -0.1);
    }

    #[test]
    fn random_particles_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = FieldConfig::default();
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0, &config);
            let r = p.radius();
            assert!(r >= 1.0 && r < 3.0);
            assert!(p.pos[0] >= r && p.pos[0] <= 800.0 - r);
            assert!(p.pos[1] >= r && p.pos[1] <= 600.0 - r);
            assert!(p.vel[0] >= -0.2 && p.vel[0] <= 0.2);
            assert!(p.vel[1] >= -0.2 && p.vel[1] <= 0.2);
            assert_eq!(p.color, config.particle_color);
        }
    }

    #[test]
    fn degenerate_surface_gives_finite_positions() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = FieldConfig::default();
        for &(w, h) in &[(0.0, 0.0), (-50.0, 10.0), (f64::NAN, f64::INFINITY), (2.0, 4.0)] {
            let p = Particle::random(&mut rng, w, h, &config);
            assert!(p.pos[0].is_finite() && p.pos[1].is_finite());
            assert!(p.radius() > 0.0);
        }
    }
}
