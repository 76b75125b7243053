use crate::math::function::expressioncompiler::ExpressionCompiler;
use crate::math::function::mevalcompiler::MevalCompiler;
use crate::math::quadrature::quadrature::{
    QuadratureResult,
    check_subdivisions
};
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::rectanglerule::{
    RectangleMethod,
    integrate_rectangle
};
use crate::math::quadrature::simpsonrule::integrate_simpson;
use crate::plot::plotrenderer::PlotRenderer;

/// Entry point for callers holding an expression string: compiles it,
/// integrates it and renders the approximation.
pub struct Integrator<C = MevalCompiler> where
    C: ExpressionCompiler {
    compiler: C,
    renderer: PlotRenderer
}

impl Integrator<MevalCompiler> {
    pub fn new(renderer: PlotRenderer) -> Integrator<MevalCompiler> {
        Integrator::with_compiler(MevalCompiler::new(), renderer)
    }
}

impl Default for Integrator<MevalCompiler> {
    fn default() -> Self {
        Integrator::new(PlotRenderer::default())
    }
}

impl <C> Integrator<C> where
    C: ExpressionCompiler {
    pub fn with_compiler(compiler: C, renderer: PlotRenderer) -> Integrator<C> {
        Integrator { compiler, renderer }
    }

    pub fn simpson_rule(&self,
                        expression: &str,
                        a: f64,
                        b: f64,
                        n: usize) -> Result<QuadratureResult, QuadratureError> {
        check_subdivisions(n, true)?;
        let f = self.compiler.compile(expression)?;
        integrate_simpson(f.as_ref(), a, b, n, &self.renderer)
    }

    pub fn rectangle_rule(&self,
                          expression: &str,
                          a: f64,
                          b: f64,
                          n: usize,
                          method: &str) -> Result<QuadratureResult, QuadratureError> {
        let method: RectangleMethod = method.parse()?;
        check_subdivisions(n, false)?;
        let f = self.compiler.compile(expression)?;
        integrate_rectangle(f.as_ref(), a, b, n, method, &self.renderer)
    }
}

/// Composite Simpson's rule over `n` (even) subintervals with default styling.
pub fn simpson_rule(expression: &str, a: f64, b: f64, n: usize) -> Result<QuadratureResult, QuadratureError> {
    Integrator::default().simpson_rule(expression, a, b, n)
}

/// Left, right or midpoint rectangle rule with default styling.
pub fn rectangle_rule(expression: &str,
                      a: f64,
                      b: f64,
                      n: usize,
                      method: &str) -> Result<QuadratureResult, QuadratureError> {
    Integrator::default().rectangle_rule(expression, a, b, n, method)
}
