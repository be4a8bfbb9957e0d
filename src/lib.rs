pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;

pub use dataset::Dataset;
pub use error::{ConfigError, RegressionError, Result};
pub use linear_model::{
    Deadline, GradientDescent, Hyperparameters, Lasso, LinearRegression, ParameterState, Penalty,
    PolynomialRegression, ProgressLog, Regressor, Ridge, Silent, TrainingObserver,
};
pub use preprocessing::{PolynomialFeatures, StandardScaler};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
