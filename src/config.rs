// Tunables for the particle field. Defaults give the page's standard look.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Each velocity component is sampled from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    pub particle_color: Color,
    pub link_color: Color,
    /// Squared distance at which a link's alpha reaches zero.
    pub link_fade: f64,
    /// Links form below `(width / link_divisor) * (height / link_divisor)`.
    pub link_divisor: f64,
    pub link_width: f64,
    /// Tracked alongside the pointer but not applied to particles.
    pub pointer_radius: f64,
    pub regenerate_on_resize: bool,
}

impl FieldConfig {
    pub const DEFAULT_COUNT: usize = 200;
    pub const PARTICLE_COLOR: Color = Color::from_u32(0xa32742ff);

    pub fn with_count(count: usize) -> Self {
        FieldConfig {
            count,
            ..FieldConfig::default()
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: FieldConfig::DEFAULT_COUNT,
            radius_min: 1.0,
            radius_max: 3.0,
            max_speed: 0.2,
            particle_color: FieldConfig::PARTICLE_COLOR,
            link_color: FieldConfig::PARTICLE_COLOR,
            link_fade: 20000.0,
            link_divisor: 7.0,
            link_width: 1.0,
            pointer_radius: 150.0,
            regenerate_on_resize: false,
        }
    }
}
