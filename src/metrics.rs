//! Scoring counters and score distribution tracking.
//!
//! Deliberately avoids wall-clock types so the same collector runs on
//! wasm32 and native targets.

use crate::types::classification::Label;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use tracing::info;

/// Counters for classification activity.
pub struct ScorerMetrics {
    /// Frames scored successfully
    pub frames_scored: AtomicU64,
    /// Frames rejected before scoring (shape or buffer errors)
    pub frames_rejected: AtomicU64,
    /// Frames labeled paper
    paper_frames: AtomicU64,
    /// Frames labeled plastic
    plastic_frames: AtomicU64,
    /// Score distribution buckets (0.0-0.1 through 0.9-1.0)
    score_buckets: RwLock<[u64; 10]>,
}

impl ScorerMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            frames_scored: AtomicU64::new(0),
            frames_rejected: AtomicU64::new(0),
            paper_frames: AtomicU64::new(0),
            plastic_frames: AtomicU64::new(0),
            score_buckets: RwLock::new([0; 10]),
        }
    }

    /// Record a successfully scored frame.
    pub fn record_frame(&self, score: f64, label: Label) {
        self.frames_scored.fetch_add(1, Ordering::Relaxed);

        match label {
            Label::Paper => self.paper_frames.fetch_add(1, Ordering::Relaxed),
            Label::Plastic => self.plastic_frames.fetch_add(1, Ordering::Relaxed),
        };

        let bucket = ((score * 10.0).min(9.0).max(0.0)) as usize;
        if let Ok(mut buckets) = self.score_buckets.write() {
            buckets[bucket] += 1;
        }
    }

    /// Record a rejected frame.
    pub fn record_reject(&self) {
        self.frames_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Frame counts by label (paper, plastic).
    pub fn label_counts(&self) -> (u64, u64) {
        (
            self.paper_frames.load(Ordering::Relaxed),
            self.plastic_frames.load(Ordering::Relaxed),
        )
    }

    /// Score distribution histogram.
    pub fn score_distribution(&self) -> [u64; 10] {
        *self.score_buckets.read().unwrap()
    }

    /// Fraction of attempts that were rejected.
    pub fn reject_rate(&self) -> f64 {
        let scored = self.frames_scored.load(Ordering::Relaxed);
        let rejected = self.frames_rejected.load(Ordering::Relaxed);
        let total = scored + rejected;
        if total > 0 {
            rejected as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Log a summary of scoring activity.
    pub fn print_summary(&self) {
        let scored = self.frames_scored.load(Ordering::Relaxed);
        let rejected = self.frames_rejected.load(Ordering::Relaxed);
        let (paper, plastic) = self.label_counts();

        info!(
            frames_scored = scored,
            frames_rejected = rejected,
            reject_rate = format!("{:.1}%", self.reject_rate() * 100.0),
            paper,
            plastic,
            "scorer metrics summary"
        );

        let distribution = self.score_distribution();
        let total: u64 = distribution.iter().sum();
        for (i, &count) in distribution.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let pct = count as f64 / total as f64 * 100.0;
            info!(
                bucket = format!("{:.1}-{:.1}", i as f64 / 10.0, (i + 1) as f64 / 10.0),
                count,
                pct = format!("{pct:.1}%"),
                "score bucket"
            );
        }
    }
}

impl Default for ScorerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
