//! fancast CLI: assemble a dataset, fit the baseline estimator, backtest
//! it, and render prediction-interval fan charts.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fancast_core::Seed;
use fancast_data::{recipe, train_test_datasets};
use fancast_predict::{make_evaluation_predictions, EmpiricalEstimator, Estimator, TrainerConfig};
use fancast_render::{render_to_file, PlotConfig};

#[derive(Parser)]
#[command(name = "fancast")]
#[command(author, version)]
#[command(about = "Probabilistic forecast backtest with fan-chart output")]
#[command(long_about = "fancast: backtest a probabilistic forecaster on a synthetic \
multivariate dataset and render prediction-interval fan charts.

EXAMPLES:
  # Default run (4x4 grid, 50%/90% intervals)
  fancast --save backtest.png

  # Smaller dataset, more verbose logging
  fancast --dataset synthetic_normal_small -vv")]
struct Cli {
    /// Dataset recipe name
    #[arg(long, default_value = "synthetic_normal", value_name = "NAME")]
    dataset: String,

    /// Output image path (.png or .svg)
    #[arg(long, default_value = "backtest.png", value_name = "PATH")]
    save: String,

    /// Model context width (ignored by the empirical baseline)
    #[arg(long, default_value = "404", value_name = "N")]
    input_size: usize,

    /// Number of training epochs
    #[arg(long, default_value = "2", value_name = "N")]
    epochs: usize,

    /// Learning rate for the training procedure
    #[arg(long, default_value = "0.001", value_name = "LR")]
    learning_rate: f64,

    /// Batches per training epoch
    #[arg(long, default_value = "100", value_name = "N")]
    num_batches_per_epoch: usize,

    /// Batch size for training
    #[arg(long, default_value = "64", value_name = "SIZE")]
    batch_size: usize,

    /// Data-loading workers
    #[arg(long, default_value = "8", value_name = "N")]
    num_workers: usize,

    /// Sample paths drawn per forecast
    #[arg(long, default_value = "100", value_name = "N")]
    num_samples: usize,

    /// Override the recipe's forecast horizon
    #[arg(long, value_name = "STEPS")]
    prediction_length: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long, default_value = "1", value_name = "SEED")]
    seed: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::from_level(log_level))
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let recipe = recipe(&cli.dataset).context("unknown dataset")?;
    let seed = Seed::new(cli.seed);

    let mut metadata = recipe.metadata();
    if let Some(horizon) = cli.prediction_length {
        metadata.prediction_length = horizon;
    }

    println!("=== fancast backtest ===\n");
    println!("Configuration:");
    println!("  Dataset: {}", recipe.name);
    println!("  Target dimensions: {}", recipe.target_dim);
    println!("  Series length: {}", recipe.length);
    println!("  Prediction length: {}", metadata.prediction_length);
    println!("  Frequency: {}", metadata.freq);
    println!("  Input size: {}", cli.input_size);
    println!("  Epochs: {}", cli.epochs);
    println!("  Learning rate: {}", cli.learning_rate);
    println!("  Batches per epoch: {}", cli.num_batches_per_epoch);
    println!("  Batch size: {}", cli.batch_size);
    println!("  Forecast samples: {}", cli.num_samples);
    println!("  Seed: {}\n", cli.seed);

    let target = recipe.generate(seed.derive("target"));
    let (train, test) =
        train_test_datasets(&target, &metadata).context("failed to build dataset split")?;

    let trainer = TrainerConfig {
        epochs: cli.epochs,
        learning_rate: cli.learning_rate,
        num_batches_per_epoch: cli.num_batches_per_epoch,
        batch_size: cli.batch_size,
        num_workers: cli.num_workers,
    };
    let estimator = EmpiricalEstimator::new(
        metadata.prediction_length,
        trainer,
        seed.derive("estimator"),
    );

    println!("Fitting estimator...");
    let predictor = estimator.train(&train).context("training failed")?;

    println!("Running backtest predictions...");
    let pairs = make_evaluation_predictions(&test, predictor.as_ref(), cli.num_samples)
        .context("backtest failed")?;
    let (truth, forecast) = pairs.first().context("backtest produced no forecasts")?;

    println!("Rendering fan charts to {}...", cli.save);
    let figure = render_to_file(
        truth,
        forecast,
        metadata.prediction_length,
        &PlotConfig::default(),
        &cli.save,
    )
    .context("rendering failed")?;

    println!("\nSaved {} subplot(s) to {}", figure.subplots().len(), cli.save);
    println!("\n=== Backtest finished successfully! ===");
    Ok(())
}
