use super::params::ParameterState;
use crate::{Matrix, Vector};

/// Regularization term added to the sum of squared errors.
///
/// The bias is never penalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Penalty {
    /// Plain least squares.
    None,
    /// Ridge: `λ·Σw²`.
    L2(f64),
    /// Lasso: `λ·Σ|w|`.
    L1(f64),
}

/// Gradient of the objective at one parameter state, and the objective value
/// itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub weights: Vector,
    pub bias: f64,
    pub loss: f64,
}

impl Penalty {
    pub fn strength(&self) -> f64 {
        match *self {
            Penalty::None => 0.0,
            Penalty::L2(lambda) | Penalty::L1(lambda) => lambda,
        }
    }

    /// Evaluates the full-batch gradient at `state`:
    ///
    /// - `∂L/∂w = (2/n)·Xᵀ(ŷ − y) + penalty'(w)`
    /// - `∂L/∂b = (2/n)·Σ(ŷ − y)`
    ///
    /// The reported loss is `Σ(ŷ − y)² + penalty(w)` at the same, pre-update
    /// state. `x` and `y` must already agree in their number of rows.
    pub fn evaluate(&self, state: &ParameterState, x: &Matrix, y: &Vector) -> Gradient {
        let scale = 2.0 / x.nrows() as f64;
        let residual = x.dot(&state.weights) + state.bias - y;

        let mut weights = x.t().dot(&residual) * scale;
        let bias = residual.sum() * scale;
        let mut loss = residual.mapv(|r| r * r).sum();

        match *self {
            Penalty::None => {}
            Penalty::L2(lambda) => {
                weights.scaled_add(2.0 * lambda, &state.weights);
                loss += lambda * state.weights.mapv(|w| w * w).sum();
            }
            Penalty::L1(lambda) => {
                weights.scaled_add(lambda, &state.weights.mapv(subgradient_sign));
                loss += lambda * state.weights.mapv(f64::abs).sum();
            }
        }

        Gradient {
            weights,
            bias,
            loss,
        }
    }
}

/// Subgradient of `|w|`, taking 0 at the kink. `f64::signum` would give ±1
/// for ±0.0 and push untouched weights away from zero.
fn subgradient_sign(w: f64) -> f64 {
    if w > 0.0 {
        1.0
    } else if w < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn state(weights: Vector, bias: f64) -> ParameterState {
        ParameterState {
            weights,
            bias,
            loss_history: Vec::new(),
        }
    }

    #[test]
    fn test_unpenalized_gradient() {
        let x = array![[1.0], [2.0]];
        let y = array![3.0, 5.0];
        let at = state(array![1.0], 0.0);

        // residuals: [-2, -3]
        let grad = Penalty::None.evaluate(&at, &x, &y);
        assert!((grad.weights[0] - -8.0).abs() < 1e-12);
        assert!((grad.bias - -5.0).abs() < 1e-12);
        assert!((grad.loss - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_ridge_gradient_adds_shrinkage() {
        let x = array![[1.0], [2.0]];
        let y = array![3.0, 5.0];
        let at = state(array![1.0], 0.0);

        let plain = Penalty::None.evaluate(&at, &x, &y);
        let ridge = Penalty::L2(0.5).evaluate(&at, &x, &y);

        assert!((ridge.weights[0] - (plain.weights[0] + 1.0)).abs() < 1e-12);
        assert_eq!(ridge.bias, plain.bias);
        assert!((ridge.loss - (plain.loss + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_lasso_gradient_uses_sign() {
        let x = array![[1.0, 0.0], [2.0, 1.0]];
        let y = array![3.0, 5.0];
        let at = state(array![-2.0, 0.0], 1.0);

        let plain = Penalty::None.evaluate(&at, &x, &y);
        let lasso = Penalty::L1(3.0).evaluate(&at, &x, &y);

        assert!((lasso.weights[0] - (plain.weights[0] - 3.0)).abs() < 1e-12);
        // sign(0) contributes nothing
        assert_eq!(lasso.weights[1], plain.weights[1]);
        assert_eq!(lasso.bias, plain.bias);
        assert!((lasso.loss - (plain.loss + 6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_strength_matches_unpenalized() {
        let x = array![[1.0, 2.0], [3.0, -1.0], [0.5, 0.5]];
        let y = array![1.0, 2.0, 3.0];
        let at = state(array![0.3, -0.7], 0.2);

        let plain = Penalty::None.evaluate(&at, &x, &y);
        assert_eq!(Penalty::L2(0.0).evaluate(&at, &x, &y), plain);
        assert_eq!(Penalty::L1(0.0).evaluate(&at, &x, &y), plain);
    }

    #[test]
    fn test_subgradient_sign() {
        assert_eq!(subgradient_sign(2.5), 1.0);
        assert_eq!(subgradient_sign(-0.1), -1.0);
        assert_eq!(subgradient_sign(0.0), 0.0);
        assert_eq!(subgradient_sign(-0.0), 0.0);
    }
}
