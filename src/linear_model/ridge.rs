use super::base::{GradientModel, Regressor};
use super::objective::Penalty;
use super::observer::TrainingObserver;
use super::params::{Hyperparameters, ParameterState};
use crate::error::Result;
use crate::preprocessing::StandardScaler;
use crate::{Matrix, Vector};

/// Linear regression with an L2 penalty `λ·Σw²` on the weights.
#[derive(Clone, Debug)]
pub struct Ridge {
    model: GradientModel,
}

impl Ridge {
    pub fn new(learning_rate: f64, iterations: usize, regularization_strength: f64) -> Result<Self> {
        let hyperparameters = Hyperparameters::new(
            learning_rate,
            iterations,
            Penalty::L2(regularization_strength),
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

impl Default for Ridge {
    fn default() -> Self {
        Self {
            model: GradientModel::new(Hyperparameters::defaults_with(Penalty::L2(1.0))),
        }
    }
}

impl Regressor for Ridge {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, RegressionError};
    use crate::linear_model::LinearRegression;
    use ndarray::array;

    fn line() -> (Matrix, Vector) {
        (
            array![[1.0], [2.0], [3.0], [4.0], [5.0]],
            array![7.0, 9.0, 11.0, 13.0, 15.0],
        )
    }

    #[test]
    fn test_ridge_zero_strength_matches_linear() {
        let x = array![[1.0, 0.5], [2.0, -1.0], [3.0, 2.0], [4.0, 0.0]];
        let y = array![2.1, 3.9, 6.5, 8.2];

        let mut ridge = Ridge::new(0.01, 400, 0.0).unwrap();
        let mut linear = LinearRegression::new(0.01, 400).unwrap();
        ridge.fit(&x, &y).unwrap();
        linear.fit(&x, &y).unwrap();

        for (a, b) in ridge.loss_history().iter().zip(linear.loss_history()) {
            assert!((a - b).abs() < 1e-12);
        }
        for (a, b) in ridge.weights().unwrap().iter().zip(linear.weights().unwrap()) {
            assert!((a - b).abs() < 1e-12);
        }
        assert!((ridge.bias().unwrap() - linear.bias().unwrap()).abs() < 1e-12);
    }

    #[test]
    fn test_ridge_shrinks_weights() {
        let (x, y) = line();

        let mut ridge = Ridge::new(0.01, 1000, 1.0).unwrap();
        let mut linear = LinearRegression::new(0.01, 1000).unwrap();
        ridge.fit(&x, &y).unwrap();
        linear.fit(&x, &y).unwrap();

        let ridge_weight = ridge.weights().unwrap()[0];
        assert!(ridge_weight.abs() < linear.weights().unwrap()[0].abs());
        assert!((ridge_weight - 1.3477).abs() < 1e-3);
        // the unpenalized bias absorbs what the weight gives up
        assert!(ridge.bias().unwrap() > linear.bias().unwrap());
    }

    #[test]
    fn test_ridge_loss_includes_penalty() {
        let (x, y) = line();

        let mut ridge = Ridge::new(0.01, 2, 0.5).unwrap();
        let mut linear = LinearRegression::new(0.01, 2).unwrap();
        ridge.fit(&x, &y).unwrap();
        linear.fit(&x, &y).unwrap();

        // zero weights at the first step, so no penalty yet
        assert_eq!(ridge.loss_history()[0], linear.loss_history()[0]);

        // both took the same first step: w = 0.74, b = 0.22
        let penalty = 0.5 * 0.74 * 0.74;
        assert!((ridge.loss_history()[1] - (linear.loss_history()[1] + penalty)).abs() < 1e-9);
    }

    #[test]
    fn test_ridge_loss_history_decreases() {
        let (x, y) = line();

        let mut model = Ridge::new(0.01, 600, 0.1).unwrap();
        model.fit(&x, &y).unwrap();

        // steps descend (1/n)·SSE + λΣw²; the recorded SSE + λΣw² starts
        // rising again past iteration 840 at this strength
        let history = model.loss_history();
        assert_eq!(history.len(), 600);
        assert!(history.windows(2).all(|pair| pair[1] <= pair[0]));
    }

    #[test]
    fn test_ridge_multivariate() {
        let x = array![[1.0, 2.0], [2.0, 3.0], [3.0, 4.0], [4.0, 5.0]];
        let y = array![5.0, 8.0, 11.0, 14.0];

        let mut model = Ridge::new(0.01, 2000, 0.1).unwrap();
        model.fit(&x, &y).unwrap();

        let score = model.score(&x, &y).unwrap();
        assert!(score > 0.8);
    }

    #[test]
    fn test_ridge_invalid_strength() {
        assert_eq!(
            Ridge::new(0.01, 10, -1.0).unwrap_err(),
            RegressionError::Configuration(ConfigError::RegularizationStrength(-1.0))
        );
        assert!(Ridge::new(0.01, 10, f64::NAN).is_err());
    }

    #[test]
    fn test_ridge_predict_without_fit() {
        let x = array![[1.0], [2.0]];
        let model = Ridge::default();

        assert_eq!(model.regularization_strength(), 1.0);
        assert!(model.predict(&x).is_err());
    }

    #[test]
    fn test_ridge_dimension_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];

        let mut model = Ridge::default();
        assert!(model.fit(&x, &y).is_err());
    }
}
