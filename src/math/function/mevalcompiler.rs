use log::debug;

use crate::math::function::expressioncompiler::ExpressionCompiler;
use crate::math::function::realfunction::RealFunction;
use crate::math::quadrature::quadratureerror::QuadratureError;

pub const DEFAULT_VARIABLE: &str = "x";

/// Expression compiler backed by `meval`.
///
/// Supports `+ - * / ^`, unary minus, parentheses, the constants `pi` and
/// `e`, and the usual functions (`sqrt`, `exp`, `ln`, `abs`, `sin`, `cos`,
/// `tan`, `asin`, `acos`, `atan`, `sinh`, `cosh`, `tanh`, `floor`, `ceil`,
/// `round`, `signum`, `max`, `min`, `atan2`). `**` is accepted as `^` and
/// `log` as the natural logarithm.
pub struct MevalCompiler {
    variable: String
}

impl MevalCompiler {
    pub fn new() -> MevalCompiler {
        MevalCompiler::with_variable(DEFAULT_VARIABLE)
    }

    pub fn with_variable(variable: &str) -> MevalCompiler {
        MevalCompiler { variable: variable.to_owned() }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl Default for MevalCompiler {
    fn default() -> Self {
        MevalCompiler::new()
    }
}

impl ExpressionCompiler for MevalCompiler {
    fn compile(&self, expression: &str) -> Result<Box<dyn RealFunction>, QuadratureError> {
        let normalized = expression.trim().replace("**", "^");
        if normalized.is_empty() {
            return Err(QuadratureError::parse_error(expression, "empty expression"));
        }
        let expr: meval::Expr = normalized
            .parse()
            .map_err(|error| QuadratureError::parse_error(expression, error))?;
        let mut ctx = meval::Context::new();
        ctx.func("log", f64::ln);
        // binding rejects unknown variables and functions up front
        let function = expr
            .bind_with_context(ctx, &self.variable)
            .map_err(|error| QuadratureError::parse_error(expression, error))?;
        debug!("compiled '{}' as a function of {}", expression, self.variable);
        Ok(Box::new(CompiledExpression {
            function: Box::new(function)
        }))
    }
}

pub struct CompiledExpression {
    function: Box<dyn Fn(f64) -> f64>
}

impl RealFunction for CompiledExpression {
    fn evaluate(&self, x: f64) -> f64 {
        (self.function)(x)
    }
}
