use crate::error::{RegressionError, Result};
use crate::Vector;

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(RegressionError::samples(y_true.len(), y_pred.len()));
    }
    if y_true.is_empty() {
        return Err(RegressionError::EmptyInput);
    }
    Ok(())
}

/// Σ(ŷ − y)², the unpenalized training objective.
pub fn sum_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    Ok((y_true - y_pred).mapv(|x| x * x).sum())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    Ok(sum_squared_error(y_true, y_pred)? / y_true.len() as f64)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let total = (y_true - y_pred).mapv(f64::abs).sum();
    Ok(total / y_true.len() as f64)
}

/// Coefficient of determination, `1 - SS_res / SS_tot`.
///
/// A constant target has no variance to explain, so the statistic is
/// undefined there and [`RegressionError::DegenerateMetric`] is returned
/// instead of a made-up 0 or 1.
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    // compared exactly; a rounded mean leaves ss_tot just above zero
    let first = y_true[0];
    if y_true.iter().all(|&v| v == first) {
        return Err(RegressionError::DegenerateMetric);
    }

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    Ok(1.0 - ss_res / ss_tot)
}
