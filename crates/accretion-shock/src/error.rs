use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    #[error("population should be \"warm\" or \"cold\" but given \"{0}\"")]
    InvalidPopulation(String),

    #[error("sweep axis should be \"mdot\" or \"mp\" but given \"{0}\"")]
    InvalidSweepAxis(String),

    #[error("array operands disagree in length: expected {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
}

pub type FitResult<T> = Result<T, FitError>;
