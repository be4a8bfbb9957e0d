use crate::error::{ConfigError, RegressionError, Result};
use crate::{Matrix, Vector};
use ndarray::{Array, Axis};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::{Normal, Uniform};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// A training sample: one feature row per observation and one target each.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(RegressionError::samples(features.nrows(), labels.len()));
        }
        if features.nrows() == 0 {
            return Err(RegressionError::EmptyInput);
        }

        Ok(Self { features, labels })
    }

    /// Builds a single-feature sample from two equally long columns.
    pub fn from_column(x: Vector, y: Vector) -> Result<Self> {
        let n = x.len();
        let features = x
            .into_shape_with_order((n, 1))
            .map_err(|_| RegressionError::features(1, 0))?;
        Self::new(features, y)
    }

    /// Draws `n_samples` rows uniformly from `[-1, 1)` and labels them with
    /// `X·weights + bias` plus Gaussian noise of standard deviation `noise`.
    pub fn linear(
        n_samples: usize,
        weights: &Vector,
        bias: f64,
        noise: f64,
        seed: u64,
    ) -> Result<Self> {
        if !(noise >= 0.0 && noise.is_finite()) {
            return Err(ConfigError::Noise(noise).into());
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let features = Array::random_using(
            (n_samples, weights.len()),
            Uniform::new(-1.0, 1.0),
            &mut rng,
        );

        let mut labels = features.dot(weights) + bias;
        if noise > 0.0 {
            let normal = Normal::new(0.0, noise).map_err(|_| ConfigError::Noise(noise))?;
            labels += &Array::random_using(n_samples, normal, &mut rng);
        }

        Self::new(features, labels)
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Shuffles the rows with a seeded generator and holds out
    /// `test_size` of them. Both halves keep at least one row.
    pub fn train_test_split(&self, test_size: f64, seed: u64) -> Result<(Self, Self)> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(ConfigError::TestSize(test_size).into());
        }

        let n_samples = self.n_samples();
        if n_samples < 2 {
            return Err(RegressionError::samples(2, n_samples));
        }

        let n_test = ((n_samples as f64 * test_size).round() as usize).clamp(1, n_samples - 1);

        let mut indices: Vec<usize> = (0..n_samples).collect();
        indices.shuffle(&mut StdRng::seed_from_u64(seed));
        let (test_idx, train_idx) = indices.split_at(n_test);

        let train = Dataset::new(
            self.features.select(Axis(0), train_idx),
            self.labels.select(Axis(0), train_idx),
        )?;
        let test = Dataset::new(
            self.features.select(Axis(0), test_idx),
            self.labels.select(Axis(0), test_idx),
        )?;

        Ok((train, test))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let targets = array![1.0, 2.0, 3.0];

        let dataset = Dataset::new(features, targets).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
    }

    #[test]
    fn test_dataset_rejects_mismatch() {
        let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = array![3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 17.0];

        assert_eq!(
            Dataset::from_column(x, y).unwrap_err(),
            RegressionError::samples(5, 8)
        );
        assert_eq!(
            Dataset::new(Matrix::zeros((0, 1)), Vector::zeros(0)).unwrap_err(),
            RegressionError::EmptyInput
        );
    }

    #[test]
    fn test_from_column() {
        let dataset = Dataset::from_column(array![1.0, 2.0], array![3.0, 4.0]).unwrap();
        assert_eq!(dataset.features, array![[1.0], [2.0]]);
    }

    #[test]
    fn test_train_test_split() {
        let features = Matrix::from_shape_fn((100, 5), |(i, j)| (i * 5 + j) as f64);
        let targets = Vector::from_shape_fn(100, |i| i as f64);
        let dataset = Dataset::new(features, targets).unwrap();

        let (train, test) = dataset.train_test_split(0.2, 7).unwrap();
        assert_eq!(train.n_samples(), 80);
        assert_eq!(test.n_samples(), 20);

        // every row keeps its own label
        for (row, label) in train.features.axis_iter(Axis(0)).zip(train.labels.iter()) {
            assert_eq!(row[0], label * 5.0);
        }

        let mut seen: Vec<f64> = train.labels.iter().chain(test.labels.iter()).copied().collect();
        seen.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(seen, (0..100).map(|i| i as f64).collect::<Vec<_>>());

        let (again, _) = dataset.train_test_split(0.2, 7).unwrap();
        assert_eq!(again.labels, train.labels);
    }

    #[test]
    fn test_train_test_split_invalid() {
        let dataset = Dataset::from_column(array![1.0, 2.0], array![1.0, 2.0]).unwrap();
        assert!(dataset.train_test_split(0.0, 1).is_err());
        assert!(dataset.train_test_split(1.0, 1).is_err());

        let single = Dataset::from_column(array![1.0], array![1.0]).unwrap();
        assert!(single.train_test_split(0.5, 1).is_err());
    }

    #[test]
    fn test_linear_generator() {
        let weights = array![2.0, -1.0];
        let dataset = Dataset::linear(50, &weights, 0.5, 0.0, 3).unwrap();

        assert_eq!(dataset.n_samples(), 50);
        assert_eq!(dataset.n_features(), 2);
        assert!(dataset.features.iter().all(|v| (-1.0..1.0).contains(v)));

        let expected = dataset.features.dot(&weights) + 0.5;
        for (a, b) in expected.iter().zip(dataset.labels.iter()) {
            assert!((a - b).abs() < 1e-12);
        }

        let noisy = Dataset::linear(50, &weights, 0.5, 0.1, 3).unwrap();
        assert_eq!(noisy.features, dataset.features);
        assert_ne!(noisy.labels, dataset.labels);

        assert!(Dataset::linear(10, &weights, 0.0, -1.0, 3).is_err());
    }
}
