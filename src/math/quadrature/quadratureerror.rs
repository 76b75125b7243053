use thiserror::Error;

/// Every way a quadrature request can fail.
///
/// All variants are terminal for the request: nothing is retried and no
/// partial plot is produced once one of them has been raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("cannot parse expression '{expression}': {reason}")]
    ParseError {
        expression: String,
        reason: String
    },

    #[error("function evaluates to {value} at x = {x}")]
    EvaluationError {
        x: f64,
        value: f64
    },

    #[error("invalid subdivision count {n}: {reason}")]
    InvalidSubdivisionError {
        n: usize,
        reason: &'static str
    },

    #[error("unknown rectangle method '{0}' (expected left, right or midpoint)")]
    UnknownMethodError(String),

    #[error("cannot render plot: {0}")]
    RenderError(String)
}

impl QuadratureError {
    pub fn parse_error(expression: &str, reason: impl ToString) -> QuadratureError {
        QuadratureError::ParseError {
            expression: expression.to_owned(),
            reason: reason.to_string()
        }
    }

    pub fn render_error(error: impl std::fmt::Display) -> QuadratureError {
        QuadratureError::RenderError(error.to_string())
    }

    /// `true` for failures caused by the request parameters rather than by
    /// the numeric behaviour of the integrand.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            QuadratureError::ParseError { .. }
                | QuadratureError::InvalidSubdivisionError { .. }
                | QuadratureError::UnknownMethodError(_)
        )
    }
}
