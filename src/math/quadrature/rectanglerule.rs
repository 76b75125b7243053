use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::math::function::realfunction::RealFunction;
use crate::math::quadrature::quadrature::{
    QuadratureResult,
    check_subdivisions,
    linspace,
    step_size
};
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::plot::figure::{
    CURVE_LABEL,
    Figure,
    Layer
};
use crate::plot::plotconfig::PlotConfig;
use crate::plot::plotrenderer::PlotRenderer;

/// Where each subinterval is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectangleMethod {
    Left,
    Right,
    Midpoint
}

impl RectangleMethod {
    pub fn name(&self) -> &'static str {
        match self {
            RectangleMethod::Left => "left",
            RectangleMethod::Right => "right",
            RectangleMethod::Midpoint => "midpoint"
        }
    }

    pub fn title_name(&self) -> &'static str {
        match self {
            RectangleMethod::Left => "Left",
            RectangleMethod::Right => "Right",
            RectangleMethod::Midpoint => "Midpoint"
        }
    }

    /// Sample abscissa for the subinterval [lhs, rhs].
    pub fn sample_point(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            RectangleMethod::Left => lhs,
            RectangleMethod::Right => rhs,
            RectangleMethod::Midpoint => (lhs + rhs) / 2.0
        }
    }

    pub fn title(&self) -> String {
        format!("Integral Approximation using the Rectangle Method ({})", self.title_name())
    }
}

impl fmt::Display for RectangleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RectangleMethod {
    type Err = QuadratureError;

    /// Case-insensitive; the Spanish names `izquierdo`, `derecho` and
    /// `punto_medio` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "izquierdo" => Ok(RectangleMethod::Left),
            "right" | "derecho" => Ok(RectangleMethod::Right),
            "midpoint" | "mid" | "punto_medio" => Ok(RectangleMethod::Midpoint),
            _ => Err(QuadratureError::UnknownMethodError(s.to_owned()))
        }
    }
}

/// Abscissas where each of the `n` rectangles is sampled.
fn sample_points(a: f64, b: f64, n: usize, method: RectangleMethod) -> Vec<f64> {
    let nodes = linspace(a, b, n + 1);
    (0..n)
        .map(|i| method.sample_point(nodes[i], nodes[i + 1]))
        .collect()
}

pub fn rectangle_estimate<F>(f: &F,
                             a: f64,
                             b: f64,
                             n: usize,
                             method: RectangleMethod) -> Result<f64, QuadratureError> where
    F: RealFunction + ?Sized {
    check_subdivisions(n, false)?;
    let h = step_size(a, b, n);
    let mut sum = 0.0;
    for x in sample_points(a, b, n, method) {
        sum += f.value(x)?;
    }
    let estimate = h * sum;
    debug!("rectangle ({}): a={} b={} n={} h={} estimate={}", method, a, b, n, h, estimate);
    Ok(estimate)
}

/// One bar of width h per subinterval, then the reference curve on top.
/// Bar heights must be defined; the curve skips points where `f` is not.
pub fn rectangle_figure<F>(f: &F,
                           a: f64,
                           b: f64,
                           n: usize,
                           method: RectangleMethod,
                           config: &PlotConfig) -> Result<Figure, QuadratureError> where
    F: RealFunction + ?Sized {
    check_subdivisions(n, false)?;
    let h = step_size(a, b, n);
    let nodes = linspace(a, b, n + 1);
    let mut figure = Figure::new(&method.title());

    for i in 0..n {
        let height = f.value(method.sample_point(nodes[i], nodes[i + 1]))?;
        figure.push(Layer::Bar { x0: nodes[i], x1: nodes[i] + h, height });
    }

    let xs = linspace(a, b, config.curve_samples());
    figure.push(Layer::Curve {
        segments: f.finite_segments(&xs),
        label: CURVE_LABEL.to_owned(),
        stroke_width: config.rectangle_curve_width()
    });
    Ok(figure)
}

pub fn integrate_rectangle<F>(f: &F,
                              a: f64,
                              b: f64,
                              n: usize,
                              method: RectangleMethod,
                              renderer: &PlotRenderer) -> Result<QuadratureResult, QuadratureError> where
    F: RealFunction + ?Sized {
    let estimate = rectangle_estimate(f, a, b, n, method)?;
    let figure = rectangle_figure(f, a, b, n, method, renderer.config())?;
    let image = renderer.render(&figure)?;
    Ok(QuadratureResult::new(estimate, image))
}
