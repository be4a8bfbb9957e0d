use std::borrow::Cow;

use super::gradient_descent::{GradientDescent, check_sample};
use super::observer::{ProgressLog, TrainingObserver};
use super::params::{Hyperparameters, ParameterState};
use crate::error::{RegressionError, Result};
use crate::metrics;
use crate::preprocessing::StandardScaler;
use crate::{Matrix, Vector};
use tracing::debug;

/// The contract shared by every gradient-descent regressor.
///
/// A model is unusable for prediction until `fit` has completed once. Every
/// `fit` starts again from zeroed parameters; a failed or cancelled `fit`
/// leaves the previously trained parameters in place.
pub trait Regressor {
    /// Trains on `x` (one row per observation) and `y`, reporting progress
    /// every 20 iterations through `tracing`.
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        self.fit_with_observer(x, y, &mut ProgressLog::default())
    }

    fn fit_with_observer(
        &mut self,
        x: &Matrix,
        y: &Vector,
        observer: &mut dyn TrainingObserver,
    ) -> Result<()>;

    fn predict(&self, x: &Matrix) -> Result<Vector>;

    fn hyperparameters(&self) -> &Hyperparameters;

    /// Trained parameters, `None` before the first successful `fit`.
    fn parameters(&self) -> Option<&ParameterState>;

    fn is_fitted(&self) -> bool {
        self.parameters().is_some()
    }

    /// One objective value per iteration of the last `fit`, in order.
    fn loss_history(&self) -> &[f64] {
        match self.parameters() {
            Some(state) => state.loss_history(),
            None => &[],
        }
    }

    fn weights(&self) -> Result<&Vector> {
        self.parameters()
            .map(ParameterState::weights)
            .ok_or(RegressionError::Untrained)
    }

    fn bias(&self) -> Result<f64> {
        self.parameters()
            .map(ParameterState::bias)
            .ok_or(RegressionError::Untrained)
    }

    /// Prediction for a single observation of a single-feature model.
    fn predict_one(&self, x: f64) -> Result<f64> {
        let predictions = self.predict(&Matrix::from_elem((1, 1), x))?;
        Ok(predictions[0])
    }

    /// R² of the model's predictions for `x` against `y`.
    fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x)?;
        metrics::r2_score(y, &y_pred)
    }

    fn mean_squared_error(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x)?;
        metrics::mean_squared_error(y, &y_pred)
    }
}

/// Training and prediction on an already expanded design matrix, with
/// optional z-score scaling in front.
#[derive(Clone, Debug)]
pub(crate) struct GradientModel {
    hyperparameters: Hyperparameters,
    normalize: bool,
    scaler: Option<StandardScaler>,
    state: Option<ParameterState>,
}

impl GradientModel {
    pub(crate) fn new(hyperparameters: Hyperparameters) -> Self {
        Self {
            hyperparameters,
            normalize: false,
            scaler: None,
            state: None,
        }
    }

    pub(crate) fn set_normalize(&mut self, normalize: bool) {
        self.normalize = normalize;
    }

    pub(crate) fn normalizes(&self) -> bool {
        self.normalize
    }

    pub(crate) fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyperparameters
    }

    pub(crate) fn parameters(&self) -> Option<&ParameterState> {
        self.state.as_ref()
    }

    pub(crate) fn scaler(&self) -> Option<&StandardScaler> {
        self.scaler.as_ref()
    }

    pub(crate) fn fit(
        &mut self,
        x: &Matrix,
        y: &Vector,
        observer: &mut dyn TrainingObserver,
    ) -> Result<()> {
        check_sample(x, y)?;

        debug!(
            samples = x.nrows(),
            features = x.ncols(),
            iterations = self.hyperparameters.iterations(),
            penalty = ?self.hyperparameters.penalty(),
            normalize = self.normalize,
            "fitting"
        );

        let (design, scaler) = if self.normalize {
            let mut scaler = StandardScaler::new();
            let scaled = scaler.fit_transform(x)?;
            (Cow::Owned(scaled), Some(scaler))
        } else {
            (Cow::Borrowed(x), None)
        };

        let state = GradientDescent::new(self.hyperparameters).run(&design, y, observer)?;

        debug!(
            final_loss = ?state.loss_history().last(),
            bias = state.bias(),
            "fit complete"
        );

        self.scaler = scaler;
        self.state = Some(state);
        Ok(())
    }

    pub(crate) fn predict(&self, x: &Matrix) -> Result<Vector> {
        let state = self.state.as_ref().ok_or(RegressionError::Untrained)?;

        match &self.scaler {
            Some(scaler) => state.predict(&scaler.transform(x)?),
            None => state.predict(x),
        }
    }
}
