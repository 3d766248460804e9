//! Integration tests for the backtest-and-render pipeline.
//!
//! These tests verify end-to-end behavior with synthetic data, from
//! dataset assembly through figure persistence.

use std::fs;
use std::path::PathBuf;

use fancast::prelude::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("fancast_test_{name}"))
}

fn run_pipeline(seed: u64) -> (MultivariateSeries, SampleForecast, usize) {
    let recipe = recipe("synthetic_normal_small").expect("registered recipe");
    let metadata = recipe.metadata();
    let target = recipe.generate(Seed::new(seed).derive("target"));
    let (train, test) = train_test_datasets(&target, &metadata).expect("split");

    let estimator = EmpiricalEstimator::new(
        metadata.prediction_length,
        TrainerConfig::default(),
        Seed::new(seed).derive("estimator"),
    );
    let predictor = estimator.train(&train).expect("training");
    let mut pairs =
        make_evaluation_predictions(&test, predictor.as_ref(), 100).expect("backtest");
    let (truth, forecast) = pairs.remove(0);
    (truth, forecast, metadata.prediction_length)
}

#[test]
fn test_pipeline_produces_expected_figure_structure() {
    let (truth, forecast, horizon) = run_pipeline(7);
    let figure = render(&truth, &forecast, horizon, &PlotConfig::default()).expect("render");

    // The small recipe has 8 dimensions, all below the 4x4 capacity.
    assert_eq!(figure.subplots().len(), 8);
    for subplot in figure.subplots() {
        assert_eq!(subplot.line_count(), 2);
        assert_eq!(subplot.band_count(), 2);
    }
    let labels: Vec<&str> = figure.legend().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "observations",
            "median prediction",
            "90% prediction interval",
            "50% prediction interval"
        ]
    );
}

#[test]
fn test_pipeline_save_writes_nonempty_file() {
    let (truth, forecast, horizon) = run_pipeline(11);
    let path = temp_path("pipeline_smoke.png");
    let _ = fs::remove_file(&path);

    render_to_file(&truth, &forecast, horizon, &PlotConfig::default(), &path).expect("render");

    let meta = fs::metadata(&path).expect("output file exists");
    assert!(meta.len() > 0);
    let _ = fs::remove_file(&path);
}

#[test]
fn test_identical_inputs_produce_identical_files() {
    let (truth, forecast, horizon) = run_pipeline(13);
    let path_a = temp_path("determinism_a.png");
    let path_b = temp_path("determinism_b.png");
    let _ = fs::remove_file(&path_a);
    let _ = fs::remove_file(&path_b);

    render_to_file(&truth, &forecast, horizon, &PlotConfig::default(), &path_a).expect("render a");
    render_to_file(&truth, &forecast, horizon, &PlotConfig::default(), &path_b).expect("render b");

    let bytes_a = fs::read(&path_a).expect("read a");
    let bytes_b = fs::read(&path_b).expect("read b");
    assert_eq!(bytes_a, bytes_b);
    let _ = fs::remove_file(&path_a);
    let _ = fs::remove_file(&path_b);
}

#[test]
fn test_svg_backend_selected_by_extension() {
    let (truth, forecast, horizon) = run_pipeline(17);
    let path = temp_path("pipeline_vector.svg");
    let _ = fs::remove_file(&path);

    render_to_file(&truth, &forecast, horizon, &PlotConfig::default(), &path).expect("render");

    let content = fs::read_to_string(&path).expect("svg is text");
    assert!(content.contains("<svg"));
    assert!(content.contains("observations"));
    let _ = fs::remove_file(&path);
}

#[test]
fn test_short_target_fails_before_touching_disk() {
    let (truth, forecast, horizon) = run_pipeline(19);
    let short = truth.tail(2 * horizon - 1).expect("shorten");
    let path = temp_path("never_written.png");
    let _ = fs::remove_file(&path);

    let result = render_to_file(&short, &forecast, horizon, &PlotConfig::default(), &path);
    assert!(result.is_err());
    assert!(!path.exists());
}
