use thiserror::Error;

pub type Result<T, E = RegressionError> = std::result::Result<T, E>;

/// Invalid hyperparameters, rejected when a model is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("learning rate must be positive and finite, got {0}")]
    LearningRate(f64),
    #[error("iteration count must be at least 1, got {0}")]
    Iterations(usize),
    #[error("regularization strength must be non-negative and finite, got {0}")]
    RegularizationStrength(f64),
    #[error("polynomial degree must be at least 1, got {0}")]
    Degree(usize),
    #[error("noise standard deviation must be non-negative and finite, got {0}")]
    Noise(f64),
    #[error("test_size must be between 0 and 1, got {0}")]
    TestSize(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("X must have at least one sample")]
    EmptyInput,

    #[error("model not fitted, call fit() first")]
    Untrained,

    #[error("R² is undefined when every target value is identical")]
    DegenerateMetric,

    #[error("training cancelled after {completed} iterations")]
    Cancelled { completed: usize },
}

impl RegressionError {
    pub(crate) fn samples(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            context: "number of samples",
            expected,
            got,
        }
    }

    pub(crate) fn features(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            context: "number of features",
            expected,
            got,
        }
    }
}
