//! Paint layers (fills and strokes), effects, and blend modes.

use serde::Deserialize;

use crate::color::Rgba;
use crate::geometry::Vec2;

/// One ordered paint layer on a node's background or border.
///
/// The Figma API tags paints with a `type` field; anything beyond the
/// solid/gradient/image family decodes as [`Paint::Unsupported`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    #[serde(rename_all = "camelCase")]
    Solid {
        #[serde(default = "default_visible")]
        visible: bool,
        #[serde(default = "default_opacity")]
        opacity: f64,
        color: Rgba,
    },
    GradientLinear(Gradient),
    GradientRadial(Gradient),
    GradientAngular(Gradient),
    #[serde(rename_all = "camelCase")]
    Image {
        #[serde(default = "default_visible")]
        visible: bool,
        #[serde(default)]
        image_ref: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

impl Paint {
    /// Whether this layer participates in rendering at all.
    pub fn is_visible(&self) -> bool {
        match self {
            Paint::Solid { visible, .. } | Paint::Image { visible, .. } => *visible,
            Paint::GradientLinear(g) | Paint::GradientRadial(g) | Paint::GradientAngular(g) => {
                g.visible
            }
            Paint::Unsupported => false,
        }
    }
}

/// Shared payload of the three gradient paint kinds.
///
/// `gradient_handle_positions` holds the start and end handles in the
/// node's normalized coordinate space; `gradient_stops` are ordered
/// along that axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub gradient_handle_positions: Vec<Vec2>,
    #[serde(default)]
    pub gradient_stops: Vec<GradientStop>,
}

/// One color stop at a normalized position along the gradient axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GradientStop {
    #[serde(default)]
    pub position: f64,
    pub color: Rgba,
}

/// One ordered visual effect on a node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    #[serde(rename_all = "camelCase")]
    DropShadow {
        #[serde(default = "default_visible")]
        visible: bool,
        color: Rgba,
        #[serde(default)]
        offset: Vec2,
        #[serde(default)]
        radius: f64,
        #[serde(default)]
        spread: f64,
    },
    #[serde(rename_all = "camelCase")]
    InnerShadow {
        #[serde(default = "default_visible")]
        visible: bool,
        color: Rgba,
        #[serde(default)]
        offset: Vec2,
        #[serde(default)]
        radius: f64,
        #[serde(default)]
        spread: f64,
    },
    #[serde(rename_all = "camelCase")]
    LayerBlur {
        #[serde(default = "default_visible")]
        visible: bool,
        #[serde(default)]
        radius: f64,
    },
    #[serde(rename_all = "camelCase")]
    BackgroundBlur {
        #[serde(default = "default_visible")]
        visible: bool,
        #[serde(default)]
        radius: f64,
    },
    #[serde(other)]
    Unsupported,
}

/// Node blend mode. `PassThrough` and `Normal` are the CSS default and
/// emit nothing; unrecognized values fall back to normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
    #[default]
    PassThrough,
    Normal,
    Darken,
    Multiply,
    ColorBurn,
    Lighten,
    Screen,
    ColorDodge,
    Overlay,
    SoftLight,
    HardLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
    #[serde(other)]
    Unrecognized,
}

impl BlendMode {
    /// CSS `mix-blend-mode` keyword, or `None` when the mode is the
    /// default (or falls back to it).
    pub fn to_css(self) -> Option<&'static str> {
        match self {
            BlendMode::PassThrough | BlendMode::Normal | BlendMode::Unrecognized => None,
            BlendMode::Darken => Some("darken"),
            BlendMode::Multiply => Some("multiply"),
            BlendMode::ColorBurn => Some("color-burn"),
            BlendMode::Lighten => Some("lighten"),
            BlendMode::Screen => Some("screen"),
            BlendMode::ColorDodge => Some("color-dodge"),
            BlendMode::Overlay => Some("overlay"),
            BlendMode::SoftLight => Some("soft-light"),
            BlendMode::HardLight => Some("hard-light"),
            BlendMode::Difference => Some("difference"),
            BlendMode::Exclusion => Some("exclusion"),
            BlendMode::Hue => Some("hue"),
            BlendMode::Saturation => Some("saturation"),
            BlendMode::Color => Some("color"),
            BlendMode::Luminosity => Some("luminosity"),
        }
    }
}

fn default_visible() -> bool {
    true
}

fn default_opacity() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_solid_paint() {
        let p: Paint = serde_json::from_str(
            r#"{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0, "a": 1}}"#,
        )
        .unwrap();
        assert!(matches!(p, Paint::Solid { visible: true, .. }));
    }

    #[test]
    fn test_decode_linear_gradient() {
        let p: Paint = serde_json::from_str(
            r#"{
                "type": "GRADIENT_LINEAR",
                "gradientHandlePositions": [{"x": 0, "y": 0}, {"x": 1, "y": 0}],
                "gradientStops": [
                    {"position": 0, "color": {"r": 0, "g": 0, "b": 0, "a": 1}},
                    {"position": 1, "color": {"r": 1, "g": 1, "b": 1, "a": 1}}
                ]
            }"#,
        )
        .unwrap();
        match p {
            Paint::GradientLinear(g) => {
                assert_eq!(g.gradient_stops.len(), 2);
                assert_eq!(g.gradient_handle_positions.len(), 2);
            }
            other => panic!("expected linear gradient, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_unknown_paint_type() {
        let p: Paint = serde_json::from_str(r#"{"type": "VIDEO"}"#).unwrap();
        assert_eq!(p, Paint::Unsupported);
        assert!(!p.is_visible());
    }

    #[test]
    fn test_decode_invisible_paint() {
        let p: Paint = serde_json::from_str(
            r#"{"type": "SOLID", "visible": false, "color": {"r": 0, "g": 0, "b": 0}}"#,
        )
        .unwrap();
        assert!(!p.is_visible());
    }

    #[test]
    fn test_decode_drop_shadow() {
        let e: Effect = serde_json::from_str(
            r#"{
                "type": "DROP_SHADOW",
                "color": {"r": 0, "g": 0, "b": 0, "a": 0.25},
                "offset": {"x": 0, "y": 4},
                "radius": 8
            }"#,
        )
        .unwrap();
        match e {
            Effect::DropShadow { offset, radius, spread, .. } => {
                assert_eq!(offset.y, 4.0);
                assert_eq!(radius, 8.0);
                assert_eq!(spread, 0.0);
            }
            other => panic!("expected drop shadow, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_unknown_effect_type() {
        let e: Effect = serde_json::from_str(r#"{"type": "NOISE"}"#).unwrap();
        assert_eq!(e, Effect::Unsupported);
    }

    #[test]
    fn test_decode_blend_mode() {
        let m: BlendMode = serde_json::from_str(r#""COLOR_DODGE""#).unwrap();
        assert_eq!(m.to_css(), Some("color-dodge"));
    }

    #[test]
    fn test_unknown_blend_mode_falls_back_to_normal() {
        let m: BlendMode = serde_json::from_str(r#""PLASMA""#).unwrap();
        assert_eq!(m, BlendMode::Unrecognized);
        assert_eq!(m.to_css(), None);
    }

    #[test]
    fn test_pass_through_emits_nothing() {
        assert_eq!(BlendMode::PassThrough.to_css(), None);
        assert_eq!(BlendMode::Normal.to_css(), None);
    }
}
