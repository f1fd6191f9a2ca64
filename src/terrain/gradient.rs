//! Height-gradient colors for flat-shaded terrain

use serde::{Deserialize, Serialize};

/// Linear RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Piecewise-linear color gradient over [0, 1].
///
/// Evaluation clamps at both ends: positions before the first key return the
/// first color, positions past the last key return the last color.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorGradient {
    keys: Vec<(f32, Color)>,
}

impl ColorGradient {
    /// Build from (position, color) keys; keys are sorted by position
    pub fn new(mut keys: Vec<(f32, Color)>) -> Self {
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    /// Sand-to-snow palette used by the demo catalog
    pub fn island() -> Self {
        Self::new(vec![
            (0.0, Color::rgb(0.76, 0.70, 0.50)),
            (0.3, Color::rgb(0.33, 0.53, 0.27)),
            (0.7, Color::rgb(0.45, 0.42, 0.40)),
            (1.0, Color::rgb(0.93, 0.95, 0.96)),
        ])
    }

    pub fn evaluate(&self, t: f32) -> Color {
        let Some((first, last)) = self.keys.first().zip(self.keys.last()) else {
            return Color::WHITE;
        };
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }

        for pair in self.keys.windows(2) {
            let (t0, c0) = pair[0];
            let (t1, c1) = pair[1];
            if t <= t1 {
                let span = t1 - t0;
                let local = if span > f32::EPSILON { (t - t0) / span } else { 0.0 };
                return c0.lerp(c1, local);
            }
        }
        last.1
    }
}
