//! Linear models trained by full-batch gradient descent.
//!
//! This module provides:
//! - `LinearRegression`: least squares
//! - `Ridge`: least squares with an L2 penalty on the weights
//! - `Lasso`: least squares with an L1 penalty on the weights
//! - `PolynomialRegression`: least squares on the powers of a single feature
//!
//! All four share one training loop (`GradientDescent`) and differ only in
//! their `Penalty` and, for the polynomial model, the feature expansion.
//! They are used through the `Regressor` trait.
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use descent::{LinearRegression, Regressor};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
//! let y = array![7.0, 9.0, 11.0, 13.0, 15.0];
//!
//! let mut model = LinearRegression::new(0.01, 3000).unwrap();
//! model.fit(&x, &y).unwrap();
//!
//! assert_eq!(model.loss_history().len(), 3000);
//! assert!((model.predict_one(6.0).unwrap() - 17.0).abs() < 1e-2);
//! ```
//!
//! ## Polynomial Regression
//! ```rust
//! use descent::{PolynomialRegression, Regressor};
//! use ndarray::array;
//!
//! let x = array![[-2.0], [-1.0], [0.0], [1.0], [2.0]];
//! let y = array![5.0, 2.0, 1.0, 2.0, 5.0];
//!
//! let mut model = PolynomialRegression::new(2, 0.01, 5000).unwrap();
//! model.fit(&x, &y).unwrap();
//!
//! let predictions = model.predict(&array![[3.0]]).unwrap();
//! assert!((predictions[0] - 10.0).abs() < 1e-3);
//! ```
//!
//! ## Stopping early
//! ```rust
//! use std::ops::ControlFlow;
//! use descent::{Lasso, RegressionError, Regressor};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0]];
//! let y = array![2.0, 4.0, 6.0];
//!
//! let mut model = Lasso::new(0.01, 1000, 0.1).unwrap();
//! let result = model.fit_with_observer(&x, &y, &mut |iteration: usize, _loss: f64| {
//!     if iteration == 5 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
//! });
//!
//! assert_eq!(result, Err(RegressionError::Cancelled { completed: 5 }));
//! assert!(!model.is_fitted());
//! ```

mod base;
mod gradient_descent;
mod lasso;
mod linear_regression;
mod objective;
mod observer;
mod params;
mod polynomial;
mod ridge;

pub use base::Regressor;
pub use gradient_descent::GradientDescent;
pub use lasso::Lasso;
pub use linear_regression::LinearRegression;
pub use objective::{Gradient, Penalty};
pub use observer::{DEFAULT_PROGRESS_INTERVAL, Deadline, ProgressLog, Silent, TrainingObserver};
pub use params::{DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE, Hyperparameters, ParameterState};
pub use polynomial::PolynomialRegression;
pub use ridge::Ridge;
