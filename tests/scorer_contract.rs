//! End-to-end contract tests for the image scorer.

use waste_classifier::config::init_tracing;
use waste_classifier::{ImageScorer, InputShape, Label, ScoreError, ScorerConfig};

fn default_scorer() -> ImageScorer {
    let config = ScorerConfig::default();
    init_tracing(&config.logging).ok();
    ImageScorer::new(&config)
}

fn frame(value: u8, shape: InputShape) -> Vec<u8> {
    vec![value; shape.byte_len()]
}

#[test]
fn matching_buffer_always_yields_a_label() {
    let shapes = [(96, 96, 3), (1, 1, 1), (32, 16, 3), (8, 8, 1)];

    for (w, h, ch) in shapes {
        let mut scorer = default_scorer();
        scorer.set_input_shape(w, h, ch);
        let pixels = frame(100, scorer.input_shape());

        let result = scorer.classify(Some(&pixels), w, h, ch).unwrap();
        assert!(matches!(result.label, Label::Paper | Label::Plastic));
        assert!(result.score > 0.0 && result.score < 1.0);
    }
}

#[test]
fn any_dimension_mismatch_rejects_and_resets() {
    let mut scorer = default_scorer();
    let pixels = frame(180, scorer.input_shape());

    scorer.classify(Some(&pixels), 96, 96, 3).unwrap();
    assert!(scorer.last_score() > 0.0);

    for (w, h, ch) in [(95, 96, 3), (96, 95, 3), (96, 96, 1)] {
        scorer.classify(Some(&pixels), 96, 96, 3).unwrap();
        let err = scorer.classify(Some(&pixels), w, h, ch).unwrap_err();
        assert!(matches!(err, ScoreError::ShapeMismatch { .. }));
        assert_eq!(scorer.last_score(), 0.0);
    }
}

#[test]
fn missing_buffer_rejects_regardless_of_claimed_shape() {
    let mut scorer = default_scorer();
    let pixels = frame(200, scorer.input_shape());
    scorer.classify(Some(&pixels), 96, 96, 3).unwrap();

    let err = scorer.classify(None, 96, 96, 3).unwrap_err();
    assert_eq!(err, ScoreError::MissingBuffer);
    assert_eq!(scorer.last_score(), 0.0);
}

#[test]
fn last_score_reads_are_idempotent() {
    let mut scorer = default_scorer();
    let pixels = frame(77, scorer.input_shape());
    scorer.classify(Some(&pixels), 96, 96, 3).unwrap();

    let first = scorer.last_score();
    for _ in 0..5 {
        assert_eq!(scorer.last_score(), first);
    }
}

#[test]
fn score_is_monotonic_in_brightness() {
    let mut scorer = default_scorer();
    let shape = scorer.input_shape();

    let mut prev = -1.0_f64;
    for value in [0u8, 32, 64, 96, 128, 160, 192, 224, 255] {
        let pixels = frame(value, shape);
        let result = scorer.classify(Some(&pixels), 96, 96, 3).unwrap();
        assert!(result.score >= prev);
        prev = result.score;
    }
}

#[test]
fn all_zero_frame_hits_the_lower_boundary() {
    let mut scorer = default_scorer();
    let pixels = frame(0, scorer.input_shape());

    let result = scorer.classify(Some(&pixels), 96, 96, 3).unwrap();

    // feature 0 -> logit -3.0 -> p = 1 / (1 + e^3)
    assert!((result.score - 0.047425873177566781).abs() < 1e-9);
    assert_eq!(result.label, Label::Paper);
    assert!((scorer.last_score() as f64 - 0.0474258731).abs() < 1e-6);
}

#[test]
fn all_max_frame_hits_the_upper_boundary() {
    let mut scorer = default_scorer();
    let pixels = frame(255, scorer.input_shape());

    let result = scorer.classify(Some(&pixels), 96, 96, 3).unwrap();

    // feature 1 -> logit 3.0 -> p = 1 / (1 + e^-3)
    assert!((result.score - 0.952574126822433219).abs() < 1e-9);
    assert_eq!(result.label, Label::Plastic);
    assert!((scorer.last_score() as f64 - 0.9525741268).abs() < 1e-6);
}

#[test]
fn invalid_configure_leaves_old_shape_usable() {
    let mut scorer = default_scorer();
    scorer.set_input_shape(96, 96, 2);
    scorer.set_input_shape(-4, 96, 3);
    scorer.set_input_shape(96, 0, 1);

    let pixels = frame(50, InputShape::default());
    assert!(scorer.classify(Some(&pixels), 96, 96, 3).is_ok());
}

#[test]
fn grayscale_frames_score_through_the_same_pipeline() {
    let mut scorer = default_scorer();
    scorer.set_input_shape(96, 96, 1);

    let pixels = frame(255, scorer.input_shape());
    let result = scorer.classify(Some(&pixels), 96, 96, 1).unwrap();

    assert!((result.score - 0.952574126822433219).abs() < 1e-9);
    assert_eq!(result.label.code(), 1);
}
