use super::base::{GradientModel, Regressor};
use super::objective::Penalty;
use super::observer::TrainingObserver;
use super::params::{Hyperparameters, ParameterState};
use crate::error::Result;
use crate::preprocessing::StandardScaler;
use crate::{Matrix, Vector};

/// Linear regression with an L1 penalty `λ·Σ|w|` on the weights.
///
/// Trained with the subgradient `λ·sign(w)` where `sign(0) = 0`, so a weight
/// sitting exactly at zero feels no penalty pull. No smoothing of `|w|` is
/// applied.
#[derive(Clone, Debug)]
pub struct Lasso {
    model: GradientModel,
}

impl Lasso {
    pub fn new(learning_rate: f64, iterations: usize, regularization_strength: f64) -> Result<Self> {
        let hyperparameters = Hyperparameters::new(
            learning_rate,
            iterations,
            Penalty::L1(regularization_strength),
        )?;
        Ok(Self {
            model: GradientModel::new(hyperparameters),
        })
    }

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

    pub fn regularization_strength(&self) -> f64 {
        self.model.hyperparameters().penalty().strength()
    }
}

impl Default for Lasso {
    fn default() -> Self {
        Self {
            model: GradientModel::new(Hyperparameters::defaults_with(Penalty::L1(1.0))),
        }
    }
}

impl Regressor for Lasso {
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
