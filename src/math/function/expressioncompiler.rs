use crate::math::function::realfunction::RealFunction;
use crate::math::quadrature::quadratureerror::QuadratureError;

/// Turns expression text into a callable function of a single free variable.
///
/// Any parsing technology can sit behind this seam; the quadrature engines
/// only ever see the resulting `RealFunction`.
pub trait ExpressionCompiler {
    fn compile(&self, expression: &str) -> Result<Box<dyn RealFunction>, QuadratureError>;
}
