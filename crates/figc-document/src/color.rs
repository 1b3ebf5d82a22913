//! RGBA color in the Figma representation: unit-interval channels.

use serde::Deserialize;

use crate::format_scalar;

/// A color with red/green/blue/alpha channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgba {
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub g: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    /// Render as a CSS `rgba()` value with 8-bit channels.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            format_scalar(clamp_unit(self.a)),
        )
    }

    /// The same color with its alpha multiplied by `factor`.
    /// Used to fold a paint layer's own opacity into its color.
    pub fn scale_alpha(self, factor: f64) -> Self {
        Self {
            a: clamp_unit(self.a * factor),
            ..self
        }
    }
}

fn channel(v: f64) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}

fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}
