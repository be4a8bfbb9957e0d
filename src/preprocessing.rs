use crate::error::{ConfigError, RegressionError, Result};
use crate::{ArrayView1, Matrix, Vector};
use ndarray::Axis;

/// Z-score scaling fitted on a training design matrix.
///
/// Columns with zero spread are centered but left unscaled.
#[derive(Clone, Debug, Default)]
pub struct StandardScaler {
    mean: Option<Vector>,
    std: Option<Vector>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
        }
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        let mean = data.mean_axis(Axis(0)).ok_or(RegressionError::EmptyInput)?;
        let std = data
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s > 1e-12 { s } else { 1.0 });

        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let (mean, std) = match (self.mean.as_ref(), self.std.as_ref()) {
            (Some(mean), Some(std)) => (mean, std),
            _ => return Err(RegressionError::Untrained),
        };
        if data.ncols() != mean.len() {
            return Err(RegressionError::features(mean.len(), data.ncols()));
        }

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row -= mean;
            row /= std;
        }

        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }

    pub fn mean(&self) -> Option<&Vector> {
        self.mean.as_ref()
    }

    pub fn std(&self) -> Option<&Vector> {
        self.std.as_ref()
    }
}

/// Expands one raw feature `x` into the columns `[x, x², …, x^degree]`.
///
/// Stateless: there is nothing to fit, so the same value can be used for
/// training and prediction inputs alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolynomialFeatures {
    degree: usize,
}

impl PolynomialFeatures {
    pub fn new(degree: usize) -> Result<Self> {
        if degree == 0 {
            return Err(ConfigError::Degree(degree).into());
        }
        Ok(Self { degree })
    }

    pub(crate) fn quadratic() -> Self {
        Self { degree: 2 }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of columns produced by [`transform`](Self::transform).
    pub fn n_output_features(&self) -> usize {
        self.degree
    }

    pub fn transform(&self, x: ArrayView1<f64>) -> Matrix {
        let mut expanded = Matrix::zeros((x.len(), self.degree));
        let mut power = x.to_owned();

        for (d, mut column) in expanded.axis_iter_mut(Axis(1)).enumerate() {
            if d > 0 {
                power *= &x;
            }
            column.assign(&power);
        }

        expanded
    }

    /// Like [`transform`](Self::transform) for a design matrix, which must
    /// hold exactly one column.
    pub fn transform_matrix(&self, x: &Matrix) -> Result<Matrix> {
        if x.ncols() != 1 {
            return Err(RegressionError::features(1, x.ncols()));
        }
        Ok(self.transform(x.column(0)))
    }
}
