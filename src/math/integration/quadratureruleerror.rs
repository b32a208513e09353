use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadratureRuleError {
    #[error("subdivision count must be positive")]
    ZeroPointsCount,

    #[error("subdivision count must be even, got {0}")]
    OddPointsCount(usize)
}
