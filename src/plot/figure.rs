use std::ops::Range;

pub const X_LABEL: &str = "x";
pub const Y_LABEL: &str = "f(x)";
pub const CURVE_LABEL: &str = "Function f(x)";

/// One drawable element of a figure, in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Region between the polyline and the x-axis.
    FilledArea(Vec<(f64, f64)>),
    /// Rectangle over [x0, x1] from the x-axis up (or down) to `height`.
    Bar {
        x0: f64,
        x1: f64,
        height: f64
    },
    /// Polyline broken into segments wherever the function is undefined.
    Curve {
        segments: Vec<Vec<(f64, f64)>>,
        label: String,
        stroke_width: u32
    }
}

impl Layer {
    fn points(&self) -> Vec<(f64, f64)> {
        match self {
            Layer::FilledArea(points) => points.clone(),
            Layer::Bar { x0, x1, height } => vec![(*x0, *height), (*x1, *height)],
            Layer::Curve { segments, .. } => segments.concat()
        }
    }
}

/// An explicitly owned figure.
///
/// Layers are drawn in insertion order, so callers add fills and bars before
/// the curve that should stay visible on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    x_label: String,
    y_label: String,
    layers: Vec<Layer>
}

impl Figure {
    pub fn new(title: &str) -> Figure {
        Figure {
            title: title.to_owned(),
            x_label: X_LABEL.to_owned(),
            y_label: Y_LABEL.to_owned(),
            layers: Vec::new()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn has_legend(&self) -> bool {
        self.layers.iter().any(|layer| match layer {
            Layer::Curve { segments, .. } => segments.iter().any(|segment| !segment.is_empty()),
            _ => false
        })
    }

    /// Data ranges covering every layer. The y range always contains 0 so
    /// that fills and bars show their base; empty spans are widened.
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = 0.0_f64;
        let mut y_max = 0.0_f64;
        for (x, y) in self.layers.iter().flat_map(|layer| layer.points()) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
        }
        (pad(x_min, x_max, 0.0), pad(y_min, y_max, 0.05))
    }
}

fn pad(min: f64, max: f64, fraction: f64) -> Range<f64> {
    let span = max - min;
    if span > 0.0 {
        let margin = span * fraction;
        (min - margin)..(max + margin)
    } else {
        (min - 0.5)..(max + 0.5)
    }
}
