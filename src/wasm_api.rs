//! wasm-bindgen boundary for browser hosts.
//!
//! Exported names and return codes mirror what the host glue calls:
//! `set_input_shape`, `classify_image` (-1 on any invalid input, else
//! the 0/1 label) and `get_last_score`.

use crate::models::inference::ImageScorer;
use std::sync::{Mutex, OnceLock};
use wasm_bindgen::prelude::*;

// One scorer per module instance. The mutex guards both the configured
// shape and the stored score; browser callers are single-threaded today
// but the contract must hold if the module ever lands on a threaded
// host.
static SCORER: OnceLock<Mutex<ImageScorer>> = OnceLock::new();

fn scorer() -> &'static Mutex<ImageScorer> {
    SCORER.get_or_init(|| Mutex::new(ImageScorer::default()))
}

/// Replace the expected input shape. Invalid dimensions are ignored.
#[wasm_bindgen]
pub fn set_input_shape(width: i32, height: i32, channels: i32) {
    if let Ok(mut scorer) = scorer().lock() {
        scorer.set_input_shape(width, height, channels);
    }
}

/// Classify a pixel buffer claimed to have the given dimensions.
///
/// Returns -1 when the buffer is absent or the dimensions disagree with
/// the configured shape, otherwise 0 (paper) or 1 (plastic).
#[wasm_bindgen]
pub fn classify_image(pixels: Option<Vec<u8>>, width: i32, height: i32, channels: i32) -> i32 {
    let Ok(mut scorer) = scorer().lock() else {
        return -1;
    };

    match scorer.classify(pixels.as_deref(), width, height, channels) {
        Ok(result) => result.label.code(),
        Err(_) => -1,
    }
}

/// Probability stored by the most recent classification attempt.
#[wasm_bindgen]
pub fn get_last_score() -> f32 {
    scorer().lock().map(|s| s.last_score()).unwrap_or(0.0)
}
