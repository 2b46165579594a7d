// Drawing sink for the particle field. The canvas 2d context is the real
// implementation; tests record calls instead.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::particle::Particle;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), Self::Error>;
}

pub fn draw_particle<S: Surface>(surface: &mut S, particle: &Particle) -> Result<(), S::Error> {
    surface.fill_circle(particle.pos, particle.radius(), particle.color)
}

// Lines go on top of the discs, so this runs after every particle is drawn.
pub fn draw_links<S: Surface>(surface: &mut S, field: &ParticleField, config: &FieldConfig) -> Result<(), S::Error> {
    for link in field.links(config) {
        surface.stroke_line(link.from, link.to, config.link_color, link.alpha, config.link_width)?;
    }
    Ok(())
}

// Full redraw of the current state without advancing it.
pub fn draw<S: Surface>(surface: &mut S, field: &ParticleField, config: &FieldConfig) -> Result<(), S::Error> {
    surface.clear(field.width(), field.height())?;
    for particle in &field.particles {
        draw_particle(surface, particle)?;
    }
    draw_links(surface, field, config)
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.fill();
        Ok(())
    }

    #[allow(deprecated)]
    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), JsValue> {
        self.set_stroke_style(&JsValue::from_str(&color.with_alpha(alpha)));
        self.set_line_width(width);
        self.begin_path();
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.stroke();
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    #[derive(Debug, PartialEq)]
    pub enum Call {
        Clear(f64, f64),
        Circle(Vector2<f64>, f64),
        Line(Vector2<f64>, Vector2<f64>, f64),
    }

    #[derive(Default)]
    pub struct Recorder {
        pub calls: Vec<Call>,
    }

    impl Surface for Recorder {
        type Error = ();

        fn clear(&mut self, width: f64, height: f64) -> Result<(), ()> {
            self.calls.push(Call::Clear(width, height));
            Ok(())
        }

        fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, _color: Color) -> Result<(), ()> {
            self.calls.push(Call::Circle(center, radius));
            Ok(())
        }

        fn stroke_line(
            &mut self,
            from: Vector2<f64>,
            to: Vector2<f64>,
            _color: Color,
            alpha: f64,
            _width: f64,
        ) -> Result<(), ()> {
            assert!(alpha >= 0.0 && alpha <= 1.0);
            self.calls.push(Call::Line(from, to, alpha));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{Call, Recorder};
    use super::*;

    fn field() -> ParticleField {
        let color = FieldConfig::PARTICLE_COLOR;
        let particles = vec![
            Particle::new(10.0, 10.0, 0.1, 0.1, 2.0, color),
            Particle::new(20.0, 10.0, 0.1, 0.1, 1.5, color),
            Particle::new(600.0, 600.0, 0.1, 0.1, 1.0, color),
        ];
        ParticleField::from_particles(particles, 700.0, 700.0)
    }

    #[test]
    fn draws_clear_then_discs_then_links() {
        let field = field();
        let mut surface = Recorder::default();
        draw(&mut surface, &field, &FieldConfig::default()).unwrap();
        assert_eq!(
            surface.calls,
            vec![
                Call::Clear(700.0, 700.0),
                Call::Circle([10.0, 10.0], 2.0),
                Call::Circle([20.0, 10.0], 1.5),
                Call::Circle([600.0, 600.0], 1.0),
                Call::Line([10.0, 10.0], [20.0, 10.0], 1.0 - 100.0 / 20000.0),
            ]
        );
    }

    #[test]
    fn draw_does_not_move_particles() {
        let field = field();
        let before = field.particles.clone();
        draw(&mut Recorder::default(), &field, &FieldConfig::default()).unwrap();
        assert_eq!(field.particles, before);
    }
}
