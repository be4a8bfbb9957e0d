use descent::{
    Dataset, Lasso, LinearRegression, PolynomialRegression, Regressor, Ridge, metrics,
};
use ndarray::array;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=descent=debug shows progress every 20 iterations
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Gradient Descent Regression Comparison ===\n");

    // y = 3*x1 + 2*x2 - 1 + noise, x3 is irrelevant
    let dataset = Dataset::linear(200, &array![3.0, 2.0, 0.0], -1.0, 0.1, 42)?;
    let (train, test) = dataset.train_test_split(0.3, 7)?;

    println!(
        "Training samples: {}, Test samples: {}, Features: {}\n",
        train.n_samples(),
        test.n_samples(),
        train.n_features()
    );

    let models: Vec<(&str, Box<dyn Regressor>)> = vec![
        ("Linear", Box::new(LinearRegression::new(0.05, 1000)?)),
        ("Ridge (λ=0.1)", Box::new(Ridge::new(0.05, 1000, 0.1)?)),
        ("Ridge (λ=1.0)", Box::new(Ridge::new(0.05, 1000, 1.0)?)),
        ("Lasso (λ=0.1)", Box::new(Lasso::new(0.05, 1000, 0.1)?)),
        ("Lasso (λ=0.5)", Box::new(Lasso::new(0.05, 1000, 0.5)?)),
    ];

    println!(
        "{:<16} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Model", "Train R²", "Test R²", "Test MSE", "w1", "w2", "w3"
    );
    println!("{}", "-".repeat(84));

    for (name, mut model) in models {
        model.fit(&train.features, &train.labels)?;

        let train_score = model.score(&train.features, &train.labels)?;
        let test_score = model.score(&test.features, &test.labels)?;
        let test_mse = model.mean_squared_error(&test.features, &test.labels)?;
        let w = model.weights()?;

        println!(
            "{:<16} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            name, train_score, test_score, test_mse, w[0], w[1], w[2]
        );
    }

    println!("\n=== Polynomial Regression ===");

    let x = array![[-3.0], [-2.0], [-1.0], [0.0], [1.0], [2.0], [3.0]];
    let y = x.column(0).mapv(|v| 0.5 * v * v - v + 2.0);

    for degree in 1..=3 {
        let mut model = PolynomialRegression::new(degree, 0.1, 2000)?.normalize(true);
        model.fit(&x, &y)?;

        let predictions = model.predict(&x)?;
        println!(
            "degree {}: MSE = {:.6}, prediction at x=4: {:.4} (true {:.4})",
            degree,
            metrics::mean_squared_error(&y, &predictions)?,
            model.predict_one(4.0)?,
            0.5 * 16.0 - 4.0 + 2.0
        );
    }

    let mut linear = LinearRegression::new(0.01, 100)?;
    linear.fit(&x, &y)?;
    let history = linear.loss_history();
    println!(
        "\nLinear loss after 1, 50 and 100 iterations: {:.3}, {:.3}, {:.3}",
        history[0], history[49], history[99]
    );

    Ok(())
}
