use super::base::{GradientModel, Regressor};
use super::objective::Penalty;
use super::observer::TrainingObserver;
use super::params::{Hyperparameters, ParameterState};
use crate::error::Result;
use crate::preprocessing::{PolynomialFeatures, StandardScaler};
use crate::{Matrix, Vector};

/// Least squares on the powers `[x, x², …, x^degree]` of a single feature.
///
/// Both `fit` and `predict` take the raw single-column input and expand it
/// themselves, so the degree used for prediction is always the one used for
/// training. The weights are indexed by power, starting at `x¹`.
#[derive(Clone, Debug)]
pub struct PolynomialRegression {
    features: PolynomialFeatures,
    model: GradientModel,
}

impl PolynomialRegression {
    pub fn new(degree: usize, learning_rate: f64, iterations: usize) -> Result<Self> {
        let features = PolynomialFeatures::new(degree)?;
        let hyperparameters = Hyperparameters::new(learning_rate, iterations, Penalty::None)?;
        Ok(Self {
            features,
            model: GradientModel::new(hyperparameters),
        })
    }

    /// Standardize the expanded columns before fitting. High powers of
    /// unscaled inputs otherwise need a very small learning rate.
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

    pub fn degree(&self) -> usize {
        self.features.degree()
    }

    pub fn features(&self) -> &PolynomialFeatures {
        &self.features
    }

    /// The expanded design matrix the model trains and predicts on.
    pub fn transform(&self, x: &Matrix) -> Result<Matrix> {
        self.features.transform_matrix(x)
    }
}

impl Default for PolynomialRegression {
    /// Quadratic, with the default learning rate and iteration count.
    fn default() -> Self {
        Self {
            features: PolynomialFeatures::quadratic(),
            model: GradientModel::new(Hyperparameters::default()),
        }
    }
}

impl Regressor for PolynomialRegression {
    fn fit_with_observer(
        &mut self,
        x: &Matrix,
        y: &Vector,
        observer: &mut dyn TrainingObserver,
    ) -> Result<()> {
        let expanded = self.transform(x)?;
        self.model.fit(&expanded, y, observer)
    }

    fn predict(&self, x: &Matrix) -> Result<Vector> {
        let expanded = self.transform(x)?;
        self.model.predict(&expanded)
    }

    fn hyperparameters(&self) -> &Hyperparameters {
        self.model.hyperparameters()
    }

    fn parameters(&self) -> Option<&ParameterState> {
        self.model.parameters()
    }
}
