//! Shadow presets and rounded corner radii.

use iced::{Color, Shadow, Vector};

/// Rounded corner radii.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 6.0;
    pub const LARGE: f32 = 8.0;
}

pub fn none() -> Shadow {
    Shadow::default()
}

pub const fn subtle() -> Shadow {
    Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    }
}

pub const fn large() -> Shadow {
    Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.18),
        offset: Vector::new(0.0, 8.0),
        blur_radius: 24.0,
    }
}

/// Colored aura around primary buttons.
pub const fn glow(color: Color) -> Shadow {
    Shadow {
        color: Color::from_rgba(color.r, color.g, color.b, 0.3),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 12.0,
    }
}
