use nalgebra::DVector;
use serde::Serialize;

use crate::math::quadrature::quadratureerror::QuadratureError;

/// `count` equally spaced points from `a` to `b`, both ends included.
///
/// The last point is `b` itself rather than `a + (count - 1) * step`, so the
/// grid never overshoots the interval through rounding.
pub fn linspace(a: f64, b: f64, count: usize) -> DVector<f64> {
    match count {
        0 => DVector::zeros(0),
        1 => DVector::from_element(1, a),
        _ => {
            let step = (b - a) / (count - 1) as f64;
            DVector::from_fn(count, |i, _| {
                if i == count - 1 { b } else { a + i as f64 * step }
            })
        }
    }
}

/// Width of one of `n` equal subintervals of [a, b].
pub fn step_size(a: f64, b: f64, n: usize) -> f64 {
    (b - a) / n as f64
}

pub fn check_subdivisions(n: usize, require_even: bool) -> Result<(), QuadratureError> {
    if n == 0 {
        return Err(QuadratureError::InvalidSubdivisionError {
            n,
            reason: "must be positive"
        });
    }
    if require_even && n % 2 != 0 {
        return Err(QuadratureError::InvalidSubdivisionError {
            n,
            reason: "must be even"
        });
    }
    Ok(())
}

/// Integral estimate together with its base64-encoded PNG visualization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadratureResult {
    estimate: f64,
    image: String
}

impl QuadratureResult {
    pub fn new(estimate: f64, image: String) -> QuadratureResult {
        QuadratureResult { estimate, image }
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    /// Base64 text of the PNG bytes.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn data_uri(&self) -> String {
        let mut uri = "data:image/png;base64,".to_owned();
        uri.push_str(&self.image);
        uri
    }
}
