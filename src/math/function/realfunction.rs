use nalgebra::DVector;

use crate::math::quadrature::quadratureerror::QuadratureError;

/// A real function of one real variable.
///
/// Implementors only provide `evaluate`; `value` and `values` add the
/// finiteness check every quadrature sample goes through.
pub trait RealFunction {
    fn evaluate(&self, x: f64) -> f64;

    fn value(&self, x: f64) -> Result<f64, QuadratureError> {
        let y = self.evaluate(x);
        if y.is_finite() {
            Ok(y)
        } else {
            Err(QuadratureError::EvaluationError { x, value: y })
        }
    }

    /// Vectorized evaluation, stops at the first undefined sample.
    fn values(&self, xs: &DVector<f64>) -> Result<DVector<f64>, QuadratureError> {
        let mut ys = DVector::zeros(xs.len());
        for (y, &x) in ys.iter_mut().zip(xs.iter()) {
            *y = self.value(x)?;
        }
        Ok(ys)
    }

    /// Display sampling: runs of consecutive finite points, split wherever
    /// the function is undefined. Never fails.
    fn finite_segments(&self, xs: &DVector<f64>) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for &x in xs.iter() {
            let y = self.evaluate(x);
            if y.is_finite() {
                current.push((x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

impl<F> RealFunction for F where
    F: Fn(f64) -> f64 {
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}
