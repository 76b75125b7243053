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

pub const SIMPSON_TITLE: &str = "Integral Approximation using Simpson's Method";

// ─────────────────────────────────────────────
// Composite Simpson's rule
// ─────────────────────────────────────────────
//
//   h = (b - a) / n,  x_i = a + i*h,  y_i = f(x_i)
//
//   S = h/3 * Σ_{k=0}^{n/2-1} ( y_{2k} + 4*y_{2k+1} + y_{2k+2} )
//
// n must be even: each parabola spans a pair of subintervals.

pub fn simpson_estimate<F>(f: &F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError> where
    F: RealFunction + ?Sized {
    check_subdivisions(n, true)?;
    let h = step_size(a, b, n);
    let ys = f.values(&linspace(a, b, n + 1))?;
    let sum: f64 = (0..n / 2)
        .map(|k| ys[2 * k] + 4.0 * ys[2 * k + 1] + ys[2 * k + 2])
        .sum();
    let estimate = h / 3.0 * sum;
    debug!("simpson: a={} b={} n={} h={} estimate={}", a, b, n, h, estimate);
    Ok(estimate)
}

/// One shaded region per subinterval pair, then the reference curve on top.
///
/// Only the Simpson nodes must be defined; dense display samples where the
/// function is undefined are left out and split the region or curve there.
pub fn simpson_figure<F>(f: &F,
                         a: f64,
                         b: f64,
                         n: usize,
                         config: &PlotConfig) -> Result<Figure, QuadratureError> where
    F: RealFunction + ?Sized {
    check_subdivisions(n, true)?;
    let nodes = linspace(a, b, n + 1);
    let mut figure = Figure::new(SIMPSON_TITLE);

    for k in 0..n / 2 {
        let xs = linspace(nodes[2 * k], nodes[2 * k + 2], config.region_samples());
        for segment in f.finite_segments(&xs) {
            figure.push(Layer::FilledArea(segment));
        }
    }

    let xs = linspace(a, b, config.curve_samples());
    figure.push(Layer::Curve {
        segments: f.finite_segments(&xs),
        label: CURVE_LABEL.to_owned(),
        stroke_width: config.simpson_curve_width()
    });
    Ok(figure)
}

/// Simpson estimate plus its rendered visualization. The figure is only
/// built once the estimate has succeeded.
pub fn integrate_simpson<F>(f: &F,
                            a: f64,
                            b: f64,
                            n: usize,
                            renderer: &PlotRenderer) -> Result<QuadratureResult, QuadratureError> where
    F: RealFunction + ?Sized {
    let estimate = simpson_estimate(f, a, b, n)?;
    let figure = simpson_figure(f, a, b, n, renderer.config())?;
    let image = renderer.render(&figure)?;
    Ok(QuadratureResult::new(estimate, image))
}
