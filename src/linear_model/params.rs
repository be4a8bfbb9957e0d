use super::objective::Penalty;
use crate::error::{ConfigError, RegressionError, Result};
use crate::{Matrix, Vector};

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Training settings, validated once and never changed by `fit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hyperparameters {
    learning_rate: f64,
    iterations: usize,
    penalty: Penalty,
}

impl Hyperparameters {
    pub fn new(learning_rate: f64, iterations: usize, penalty: Penalty) -> Result<Self> {
        if !(learning_rate > 0.0 && learning_rate.is_finite()) {
            return Err(ConfigError::LearningRate(learning_rate).into());
        }
        if iterations == 0 {
            return Err(ConfigError::Iterations(iterations).into());
        }
        let strength = penalty.strength();
        if !(strength >= 0.0 && strength.is_finite()) {
            return Err(ConfigError::RegularizationStrength(strength).into());
        }

        Ok(Self {
            learning_rate,
            iterations,
            penalty,
        })
    }

    /// Default learning rate and iteration count with the given penalty.
    /// `penalty` must carry a valid strength.
    pub(crate) fn defaults_with(penalty: Penalty) -> Self {
        Self {
            penalty,
            ..Self::default()
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn penalty(&self) -> Penalty {
        self.penalty
    }
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
            penalty: Penalty::None,
        }
    }
}

/// Weights, bias and per-iteration loss of one training run.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterState {
    pub(crate) weights: Vector,
    pub(crate) bias: f64,
    pub(crate) loss_history: Vec<f64>,
}

impl ParameterState {
    /// The starting point of every run: all weights and the bias at zero.
    pub fn zeroed(n_features: usize, capacity: usize) -> Self {
        Self {
            weights: Vector::zeros(n_features),
            bias: 0.0,
            loss_history: Vec::with_capacity(capacity),
        }
    }

    pub fn weights(&self) -> &Vector {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn loss_history(&self) -> &[f64] {
        &self.loss_history
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// `ŷ = X·w + b`, with `b` broadcast over every row.
    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        if x.ncols() != self.weights.len() {
            return Err(RegressionError::features(self.weights.len(), x.ncols()));
        }

        Ok(x.dot(&self.weights) + self.bias)
    }
}
