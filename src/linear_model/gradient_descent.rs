use super::observer::TrainingObserver;
use super::params::{Hyperparameters, ParameterState};
use crate::error::{RegressionError, Result};
use crate::{Matrix, Vector};
use tracing::warn;

/// Full-batch gradient descent shared by every estimator.
///
/// Runs exactly `iterations` steps from zeroed parameters. Both parameters
/// are updated from the same gradient, evaluated before either changes.
#[derive(Clone, Copy, Debug)]
pub struct GradientDescent {
    hyperparameters: Hyperparameters,
}

impl GradientDescent {
    pub fn new(hyperparameters: Hyperparameters) -> Self {
        Self { hyperparameters }
    }

    pub fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyperparameters
    }

    pub fn run<O>(&self, x: &Matrix, y: &Vector, observer: &mut O) -> Result<ParameterState>
    where
        O: TrainingObserver + ?Sized,
    {
        check_sample(x, y)?;

        let iterations = self.hyperparameters.iterations();
        let learning_rate = self.hyperparameters.learning_rate();
        let penalty = self.hyperparameters.penalty();

        let mut state = ParameterState::zeroed(x.ncols(), iterations);
        let mut diverged = false;

        for iteration in 1..=iterations {
            let gradient = penalty.evaluate(&state, x, y);

            state.weights.scaled_add(-learning_rate, &gradient.weights);
            state.bias -= learning_rate * gradient.bias;
            state.loss_history.push(gradient.loss);

            if !diverged && !gradient.loss.is_finite() {
                diverged = true;
                warn!(iteration, learning_rate, "loss is no longer finite");
            }

            if observer.on_iteration(iteration, gradient.loss).is_break() {
                return Err(RegressionError::Cancelled {
                    completed: iteration,
                });
            }
        }

        Ok(state)
    }
}

pub(crate) fn check_sample(x: &Matrix, y: &Vector) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(RegressionError::samples(x.nrows(), y.len()));
    }
    if x.nrows() == 0 {
        return Err(RegressionError::EmptyInput);
    }
    Ok(())
}
