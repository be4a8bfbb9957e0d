use super::base::{GradientModel, Regressor};
use super::objective::Penalty;
use super::observer::TrainingObserver;
use super::params::{Hyperparameters, ParameterState};
use crate::error::Result;
use crate::preprocessing::StandardScaler;
use crate::{Matrix, Vector};

/// Least-squares regression fitted by batch gradient descent.
#[derive(Clone, Debug)]
pub struct LinearRegression {
    model: GradientModel,
}

impl LinearRegression {
    pub fn new(learning_rate: f64, iterations: usize) -> Result<Self> {
        let hyperparameters = Hyperparameters::new(learning_rate, iterations, Penalty::None)?;
        Ok(Self {
            model: GradientModel::new(hyperparameters),
        })
    }

    /// Standardize each feature with the training mean and spread before
    /// fitting. The learned weights then refer to the standardized features.
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.model.set_normalize(normalize);
        self
    }

    pub fn normalizes(&self) -> bool {
        self.model.normalizes()
    }

    pub fn scaler(&self) -> Option<&StandardScaler> {
        self.model.scaler()
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self {
            model: GradientModel::new(Hyperparameters::default()),
        }
    }
}

impl Regressor for LinearRegression {
    fn fit_with_observer(
        &mut self,
        x: &Matrix,
        y: &Vector,
        observer: &mut dyn TrainingObserver,
    ) -> Result<()> {
        self.model.fit(x, y, observer)
    }

    fn predict(&self, x: &Matrix) -> Result<Vector> {
        self.model.predict(x)
    }

    fn hyperparameters(&self) -> &Hyperparameters {
        self.model.hyperparameters()
    }

    fn parameters(&self) -> Option<&ParameterState> {
        self.model.parameters()
    }
}
