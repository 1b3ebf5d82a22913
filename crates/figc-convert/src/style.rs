//! Visual style resolver.
//!
//! Maps a node's fills, strokes, corner radii, effects, opacity, and
//! blend mode onto CSS declarations. Unsupported paints and effects are
//! skipped with a warning; they never abort a conversion.

use figc_document::{
    format_scalar, gradient_angle, DesignNode, Effect, Gradient, Paint, StrokeAlign,
};
use log::warn;

use crate::{px, Declaration, StyleFragment};

/// A fill resolved to one CSS background layer.
enum Layer {
    Color(String),
    Image(String),
}

/// Background declarations from the node's ordered fill list.
///
/// Fills are recorded back-to-front (later entries paint over earlier
/// ones). A single solid fill becomes `background-color`; anything else
/// becomes one layered `background` value with the topmost fill listed
/// first, solids expressed as two-stop gradients so they can stack.
pub fn background_fragment(node: &DesignNode) -> StyleFragment {
    let mut layers: Vec<Layer> = node
        .fills
        .iter()
        .filter(|p| p.is_visible())
        .filter_map(|p| fill_layer(node, p))
        .collect();

    match layers.len() {
        0 => Vec::new(),
        1 => match layers.remove(0) {
            Layer::Color(color) => vec![Declaration::new("background-color", color)],
            Layer::Image(image) => vec![Declaration::new("background", image)],
        },
        _ => {
            let stacked: Vec<String> = layers
                .into_iter()
                .rev()
                .map(|layer| match layer {
                    Layer::Color(color) => format!("linear-gradient({color}, {color})"),
                    Layer::Image(image) => image,
                })
                .collect();
            vec![Declaration::new("background", stacked.join(", "))]
        }
    }
}

fn fill_layer(node: &DesignNode, paint: &Paint) -> Option<Layer> {
    match paint {
        Paint::Solid { color, opacity, .. } => {
            Some(Layer::Color(color.scale_alpha(*opacity).to_css()))
        }
        Paint::GradientLinear(g) => linear_gradient_css(g).map(Layer::Image),
        Paint::GradientRadial(g) => radial_gradient_css(g).map(Layer::Image),
        Paint::GradientAngular(g) => conic_gradient_css(g).map(Layer::Image),
        Paint::Image { image_ref, .. } => {
            warn!(
                "node {}: image fill {} skipped (asset download not supported)",
                node.id,
                image_ref.as_deref().unwrap_or("<unresolved>"),
            );
            None
        }
        Paint::Unsupported => {
            warn!("node {}: unsupported fill type skipped", node.id);
            None
        }
    }
}

/// `linear-gradient()` with the angle derived from the gradient handles
/// via `atan2`. Missing handles use the downward default.
pub(crate) fn linear_gradient_css(gradient: &Gradient) -> Option<String> {
    let stops = percent_stops(gradient)?;
    let angle = handle_angle(gradient).unwrap_or(180.0);
    Some(format!(
        "linear-gradient({}deg, {stops})",
        format_scalar(angle)
    ))
}

/// `radial-gradient()` with center at the first handle and radii from
/// the distance to the second, all proportional to the node's box.
pub(crate) fn radial_gradient_css(gradient: &Gradient) -> Option<String> {
    let stops = percent_stops(gradient)?;
    let handles = &gradient.gradient_handle_positions;
    let (center, edge) = match (handles.first(), handles.get(1)) {
        (Some(c), Some(e)) => (*c, *e),
        _ => return Some(format!("radial-gradient(circle, {stops})")),
    };
    let radius = ((edge.x - center.x).powi(2) + (edge.y - center.y).powi(2)).sqrt() * 100.0;
    Some(format!(
        "radial-gradient({r}% {r}% at {cx}% {cy}%, {stops})",
        r = format_scalar(radius),
        cx = format_scalar(center.x * 100.0),
        cy = format_scalar(center.y * 100.0),
    ))
}

/// `conic-gradient()` with the starting angle derived like the linear
/// case and stops in degrees.
pub(crate) fn conic_gradient_css(gradient: &Gradient) -> Option<String> {
    if gradient.gradient_stops.is_empty() {
        return None;
    }
    let stops: Vec<String> = gradient
        .gradient_stops
        .iter()
        .map(|stop| {
            format!(
                "{} {}deg",
                stop.color.scale_alpha(gradient.opacity).to_css(),
                format_scalar(stop.position * 360.0),
            )
        })
        .collect();
    let stops = stops.join(", ");

    match handle_angle(gradient) {
        Some(angle) => Some(format!(
            "conic-gradient(from {}deg, {stops})",
            format_scalar(angle)
        )),
        None => Some(format!("conic-gradient({stops})")),
    }
}

fn handle_angle(gradient: &Gradient) -> Option<f64> {
    let handles = &gradient.gradient_handle_positions;
    Some(gradient_angle(*handles.first()?, *handles.get(1)?))
}

fn percent_stops(gradient: &Gradient) -> Option<String> {
    if gradient.gradient_stops.is_empty() {
        return None;
    }
    let stops: Vec<String> = gradient
        .gradient_stops
        .iter()
        .map(|stop| {
            format!(
                "{} {}%",
                stop.color.scale_alpha(gradient.opacity).to_css(),
                format_scalar(stop.position * 100.0),
            )
        })
        .collect();
    Some(stops.join(", "))
}

/// Border declarations from the node's strokes.
///
/// The first visible stroke paint wins. Alignment adjusts an auxiliary
/// box-sizing rather than the node's declared geometry: inside keeps
/// the border within the declared box, outside grows around it, center
/// straddles the edge via an outline with negative offset. A gradient
/// stroke renders as a uniform `border-image`; per-edge weights are
/// ignored for gradients.
pub fn border_fragment(node: &DesignNode) -> StyleFragment {
    let paint = match node.strokes.iter().find(|p| p.is_visible()) {
        Some(p) => p,
        None => return Vec::new(),
    };
    let weight = node.stroke_weight;
    if weight <= 0.0 && node.individual_stroke_weights.is_none() {
        return Vec::new();
    }

    let gradient = match paint {
        Paint::Solid { color, opacity, .. } => {
            return solid_border(node, color.scale_alpha(*opacity).to_css(), weight);
        }
        Paint::GradientLinear(g) => linear_gradient_css(g),
        Paint::GradientRadial(g) => radial_gradient_css(g),
        Paint::GradientAngular(g) => conic_gradient_css(g),
        Paint::Image { .. } | Paint::Unsupported => {
            warn!("node {}: unsupported stroke paint skipped", node.id);
            return Vec::new();
        }
    };
    let gradient = match gradient {
        Some(g) => g,
        None => return Vec::new(),
    };

    if node.individual_stroke_weights.is_some() {
        warn!(
            "node {}: per-edge stroke weights ignored for gradient stroke, using uniform border",
            node.id
        );
    }
    let mut fragment = vec![
        Declaration::new("border", format!("{} solid", px(weight))),
        Declaration::new("border-image", format!("{gradient} 1")),
    ];
    fragment.extend(stroke_box_sizing(node));
    fragment
}

fn solid_border(node: &DesignNode, color: String, weight: f64) -> StyleFragment {
    if node.stroke_align == StrokeAlign::Center {
        // An outline with negative offset straddles the box edge
        // without changing the box's dimensions.
        if node.individual_stroke_weights.is_some() {
            warn!(
                "node {}: per-edge stroke weights ignored for center-aligned stroke",
                node.id
            );
        }
        return vec![
            Declaration::new("outline", format!("{} solid {color}", px(weight))),
            Declaration::new("outline-offset", px(-(weight / 2.0))),
        ];
    }

    let mut fragment = vec![Declaration::new(
        "border",
        format!("{} solid {color}", px(weight)),
    )];
    fragment.extend(stroke_box_sizing(node));

    if let Some(weights) = node.individual_stroke_weights {
        fragment.push(Declaration::new("border-top-width", px(weights.top)));
        fragment.push(Declaration::new("border-right-width", px(weights.right)));
        fragment.push(Declaration::new("border-bottom-width", px(weights.bottom)));
        fragment.push(Declaration::new("border-left-width", px(weights.left)));
    }

    fragment
}

fn stroke_box_sizing(node: &DesignNode) -> StyleFragment {
    match node.stroke_align {
        StrokeAlign::Inside => vec![Declaration::new("box-sizing", "border-box")],
        StrokeAlign::Outside => vec![Declaration::new("box-sizing", "content-box")],
        StrokeAlign::Center => Vec::new(),
        StrokeAlign::Unrecognized => {
            warn!(
                "node {}: unrecognized stroke alignment, treating as inside",
                node.id
            );
            vec![Declaration::new("box-sizing", "border-box")]
        }
    }
}

/// Corner rounding: uniform radius or four explicit values in
/// top-left, top-right, bottom-right, bottom-left order.
pub fn corner_fragment(node: &DesignNode) -> StyleFragment {
    let mut fragment = Vec::new();
    if let Some(radius) = node.corner_radius {
        if radius > 0.0 {
            fragment.push(Declaration::new("border-radius", px(radius)));
        }
    }
    if let Some([tl, tr, br, bl]) = node.rectangle_corner_radii {
        fragment.push(Declaration::new(
            "border-radius",
            format!("{} {} {} {}", px(tl), px(tr), px(br), px(bl)),
        ));
    }
    fragment
}

/// Effect declarations. Shadows accumulate into one `box-shadow` list
/// in recorded order; blurs map to filter/backdrop-filter.
pub fn effect_fragment(node: &DesignNode) -> StyleFragment {
    let mut fragment = Vec::new();
    let mut shadows = Vec::new();

    for effect in &node.effects {
        match effect {
            Effect::DropShadow { visible: true, color, offset, radius, spread } => {
                shadows.push(format!(
                    "{} {} {} {} {}",
                    px(offset.x),
                    px(offset.y),
                    px(*radius),
                    px(*spread),
                    color.to_css(),
                ));
            }
            Effect::InnerShadow { visible: true, color, offset, radius, spread } => {
                shadows.push(format!(
                    "inset {} {} {} {} {}",
                    px(offset.x),
                    px(offset.y),
                    px(*radius),
                    px(*spread),
                    color.to_css(),
                ));
            }
            Effect::LayerBlur { visible: true, radius } if *radius > 0.0 => {
                fragment.push(Declaration::new("filter", format!("blur({})", px(*radius))));
            }
            Effect::BackgroundBlur { visible: true, radius } if *radius > 0.0 => {
                fragment.push(Declaration::new(
                    "backdrop-filter",
                    format!("blur({})", px(*radius)),
                ));
            }
            Effect::Unsupported => {
                warn!("node {}: unsupported effect type skipped", node.id);
            }
            _ => {}
        }
    }

    if !shadows.is_empty() {
        fragment.push(Declaration::new("box-shadow", shadows.join(", ")));
    }
    fragment
}

/// Whole-node opacity, when below fully opaque.
pub fn opacity_fragment(node: &DesignNode) -> StyleFragment {
    if node.opacity < 1.0 {
        vec![Declaration::new("opacity", format_scalar(node.opacity))]
    } else {
        Vec::new()
    }
}

/// `mix-blend-mode` through the fixed mode table; unrecognized modes
/// fall back to normal.
pub fn blend_fragment(node: &DesignNode) -> StyleFragment {
    use figc_document::BlendMode;
    if node.blend_mode == BlendMode::Unrecognized {
        warn!("node {}: unrecognized blend mode, falling back to normal", node.id);
    }
    match node.blend_mode.to_css() {
        Some(mode) => vec![Declaration::new("mix-blend-mode", mode)],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(json: serde_json::Value) -> DesignNode {
        serde_json::from_value(json).unwrap()
    }

    fn get<'a>(fragment: &'a [Declaration], property: &str) -> Option<&'a str> {
        fragment
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    // =========================================================================
    // Fills
    // =========================================================================

    #[test]
    fn test_single_solid_fill() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "fills": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0, "a": 1}}]
        }));
        assert_eq!(
            get(&background_fragment(&n), "background-color"),
            Some("rgba(255, 0, 0, 1)")
        );
    }

    #[test]
    fn test_fill_opacity_folds_into_alpha() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "fills": [{"type": "SOLID", "opacity": 0.5,
                       "color": {"r": 0, "g": 0, "b": 0, "a": 1}}]
        }));
        assert_eq!(
            get(&background_fragment(&n), "background-color"),
            Some("rgba(0, 0, 0, 0.5)")
        );
    }

    #[test]
    fn test_invisible_fill_skipped() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "fills": [{"type": "SOLID", "visible": false,
                       "color": {"r": 1, "g": 0, "b": 0, "a": 1}}]
        }));
        assert_eq!(background_fragment(&n), Vec::new());
    }

    #[test]
    fn test_image_fill_degrades_gracefully() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "fills": [{"type": "IMAGE", "imageRef": "abc123"}]
        }));
        assert_eq!(background_fragment(&n), Vec::new());
    }

    #[test]
    fn test_linear_gradient_rightward_is_90deg() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "fills": [{
                "type": "GRADIENT_LINEAR",
                "gradientHandlePositions": [{"x": 0, "y": 0}, {"x": 1, "y": 0}],
                "gradientStops": [
                    {"position": 0, "color": {"r": 0, "g": 0, "b": 0, "a": 1}},
                    {"position": 1, "color": {"r": 1, "g": 1, "b": 1, "a": 1}}
                ]
            }]
        }));
        assert_eq!(
            get(&background_fragment(&n), "background"),
            Some("linear-gradient(90deg, rgba(0, 0, 0, 1) 0%, rgba(255, 255, 255, 1) 100%)")
        );
    }

    #[test]
    fn test_linear_gradient_downward_is_180deg() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "fills": [{
                "type": "GRADIENT_LINEAR",
                "gradientHandlePositions": [{"x": 0.5, "y": 0}, {"x": 0.5, "y": 1}],
                "gradientStops": [
                    {"position": 0, "color": {"r": 0, "g": 0, "b": 0, "a": 1}},
                    {"position": 1, "color": {"r": 1, "g": 1, "b": 1, "a": 1}}
                ]
            }]
        }));
        let fragment = background_fragment(&n);
        let background = get(&fragment, "background").unwrap();
        assert!(background.starts_with("linear-gradient(180deg,"));
    }

    #[test]
    fn test_radial_gradient_center_and_radius() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "fills": [{
                "type": "GRADIENT_RADIAL",
                "gradientHandlePositions": [{"x": 0.5, "y": 0.5}, {"x": 1, "y": 0.5}],
                "gradientStops": [
                    {"position": 0, "color": {"r": 1, "g": 1, "b": 1, "a": 1}},
                    {"position": 1, "color": {"r": 0, "g": 0, "b": 0, "a": 1}}
                ]
            }]
        }));
        let fragment = background_fragment(&n);
        let background = get(&fragment, "background").unwrap();
        assert!(background.starts_with("radial-gradient(50% 50% at 50% 50%,"));
    }

    #[test]
    fn test_radial_gradient_without_handles_falls_back() {
        let g = Gradient {
            visible: true,
            opacity: 1.0,
            gradient_handle_positions: Vec::new(),
            gradient_stops: vec![figc_document::GradientStop {
                position: 0.0,
                color: figc_document::Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 },
            }],
        };
        assert_eq!(
            radial_gradient_css(&g).unwrap(),
            "radial-gradient(circle, rgba(0, 0, 0, 1) 0%)"
        );
    }

    #[test]
    fn test_conic_gradient_stops_in_degrees() {
        let n = node(serde_json::json!({
            "id": "1", "type": "ELLIPSE",
            "fills": [{
                "type": "GRADIENT_ANGULAR",
                "gradientHandlePositions": [{"x": 0.5, "y": 0.5}, {"x": 1, "y": 0.5}],
                "gradientStops": [
                    {"position": 0, "color": {"r": 1, "g": 0, "b": 0, "a": 1}},
                    {"position": 0.5, "color": {"r": 0, "g": 1, "b": 0, "a": 1}}
                ]
            }]
        }));
        assert_eq!(
            get(&background_fragment(&n), "background"),
            Some("conic-gradient(from 90deg, rgba(255, 0, 0, 1) 0deg, rgba(0, 255, 0, 1) 180deg)")
        );
    }

    #[test]
    fn test_multiple_fills_stack_last_on_top() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "fills": [
                {"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0, "a": 1}},
                {"type": "SOLID", "color": {"r": 0, "g": 0, "b": 1, "a": 0.5}}
            ]
        }));
        // The blue fill was recorded last, so it paints on top: first
        // in the CSS background list.
        assert_eq!(
            get(&background_fragment(&n), "background"),
            Some(
                "linear-gradient(rgba(0, 0, 255, 0.5), rgba(0, 0, 255, 0.5)), \
                 linear-gradient(rgba(255, 0, 0, 1), rgba(255, 0, 0, 1))"
            )
        );
    }

    // =========================================================================
    // Strokes
    // =========================================================================

    fn stroked(align: &str) -> DesignNode {
        node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "absoluteBoundingBox": {"x": 0, "y": 0, "width": 100, "height": 100},
            "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 1}}],
            "strokeWeight": 10,
            "strokeAlign": align
        }))
    }

    #[test]
    fn test_inside_stroke_keeps_declared_box() {
        let f = border_fragment(&stroked("INSIDE"));
        assert_eq!(get(&f, "border"), Some("10px solid rgba(0, 0, 0, 1)"));
        // Border drawn inside: declared 100px box, 80px content.
        assert_eq!(get(&f, "box-sizing"), Some("border-box"));
    }

    #[test]
    fn test_outside_stroke_grows_visual_box() {
        let f = border_fragment(&stroked("OUTSIDE"));
        // Border added around the declared 100px box: 120px visual.
        assert_eq!(get(&f, "box-sizing"), Some("content-box"));
    }

    #[test]
    fn test_center_stroke_straddles_edge() {
        let f = border_fragment(&stroked("CENTER"));
        assert_eq!(get(&f, "outline"), Some("10px solid rgba(0, 0, 0, 1)"));
        assert_eq!(get(&f, "outline-offset"), Some("-5px"));
        // Box dimensions untouched: no border, no box-sizing change.
        assert_eq!(get(&f, "border"), None);
        assert_eq!(get(&f, "box-sizing"), None);
    }

    #[test]
    fn test_per_edge_stroke_weights() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 1}}],
            "strokeWeight": 2,
            "individualStrokeWeights": {"top": 1, "right": 2, "bottom": 3, "left": 4}
        }));
        let f = border_fragment(&n);
        assert_eq!(get(&f, "border-top-width"), Some("1px"));
        assert_eq!(get(&f, "border-left-width"), Some("4px"));
    }

    #[test]
    fn test_gradient_stroke_uses_border_image() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "strokes": [{
                "type": "GRADIENT_LINEAR",
                "gradientHandlePositions": [{"x": 0, "y": 0}, {"x": 1, "y": 0}],
                "gradientStops": [
                    {"position": 0, "color": {"r": 1, "g": 0, "b": 0, "a": 1}},
                    {"position": 1, "color": {"r": 0, "g": 0, "b": 1, "a": 1}}
                ]
            }],
            "strokeWeight": 3,
            "individualStrokeWeights": {"top": 1, "right": 2, "bottom": 3, "left": 4}
        }));
        let f = border_fragment(&n);
        assert_eq!(get(&f, "border"), Some("3px solid"));
        let border_image = get(&f, "border-image").unwrap();
        assert!(border_image.starts_with("linear-gradient(90deg,"));
        assert!(border_image.ends_with(" 1"));
        // Per-edge weights are ignored for gradient strokes.
        assert_eq!(get(&f, "border-top-width"), None);
    }

    #[test]
    fn test_zero_weight_no_border() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 1}}]
        }));
        assert_eq!(border_fragment(&n), Vec::new());
    }

    // =========================================================================
    // Corner radii
    // =========================================================================

    #[test]
    fn test_uniform_corner_radius() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE", "cornerRadius": 8
        }));
        assert_eq!(get(&corner_fragment(&n), "border-radius"), Some("8px"));
    }

    #[test]
    fn test_per_corner_radii() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "rectangleCornerRadii": [1, 2, 3, 4]
        }));
        assert_eq!(
            get(&corner_fragment(&n), "border-radius"),
            Some("1px 2px 3px 4px")
        );
    }

    // =========================================================================
    // Effects
    // =========================================================================

    #[test]
    fn test_shadows_accumulate_in_order() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "effects": [
                {"type": "DROP_SHADOW", "color": {"r": 0, "g": 0, "b": 0, "a": 0.25},
                 "offset": {"x": 0, "y": 4}, "radius": 8},
                {"type": "INNER_SHADOW", "color": {"r": 1, "g": 1, "b": 1, "a": 1},
                 "offset": {"x": 0, "y": 1}, "radius": 2, "spread": 1}
            ]
        }));
        assert_eq!(
            get(&effect_fragment(&n), "box-shadow"),
            Some(
                "0px 4px 8px 0px rgba(0, 0, 0, 0.25), \
                 inset 0px 1px 2px 1px rgba(255, 255, 255, 1)"
            )
        );
    }

    #[test]
    fn test_layer_blur() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "effects": [{"type": "LAYER_BLUR", "radius": 6}]
        }));
        assert_eq!(get(&effect_fragment(&n), "filter"), Some("blur(6px)"));
    }

    #[test]
    fn test_background_blur() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "effects": [{"type": "BACKGROUND_BLUR", "radius": 12}]
        }));
        assert_eq!(
            get(&effect_fragment(&n), "backdrop-filter"),
            Some("blur(12px)")
        );
    }

    #[test]
    fn test_invisible_effect_skipped() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE",
            "effects": [{"type": "LAYER_BLUR", "visible": false, "radius": 6}]
        }));
        assert_eq!(effect_fragment(&n), Vec::new());
    }

    // =========================================================================
    // Opacity and blend mode
    // =========================================================================

    #[test]
    fn test_opacity_below_one() {
        let n = node(serde_json::json!({"id": "1", "type": "RECTANGLE", "opacity": 0.4}));
        assert_eq!(get(&opacity_fragment(&n), "opacity"), Some("0.4"));
    }

    #[test]
    fn test_full_opacity_omitted() {
        let n = node(serde_json::json!({"id": "1", "type": "RECTANGLE"}));
        assert_eq!(opacity_fragment(&n), Vec::new());
    }

    #[test]
    fn test_blend_mode_mapped() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE", "blendMode": "MULTIPLY"
        }));
        assert_eq!(get(&blend_fragment(&n), "mix-blend-mode"), Some("multiply"));
    }

    #[test]
    fn test_unrecognized_blend_mode_falls_back_to_normal() {
        let n = node(serde_json::json!({
            "id": "1", "type": "RECTANGLE", "blendMode": "PLASMA"
        }));
        assert_eq!(blend_fragment(&n), Vec::new());
    }

    #[test]
    fn test_pass_through_blend_mode_omitted() {
        let n = node(serde_json::json!({"id": "1", "type": "RECTANGLE"}));
        assert_eq!(blend_fragment(&n), Vec::new());
    }
}
