use thiserror::Error;

use crate::math::integration::quadratureruleerror::QuadratureRuleError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvergenceError {
    #[error(transparent)]
    Quadrature(#[from] QuadratureRuleError),

    #[error("at least 2 points with finite non-zero error are required, got {0}")]
    InsufficientData(usize),

    #[error("least-squares fit failed: {0}")]
    FitFailed(&'static str)
}
