//! Review Aggregator — reduces a candidate's review history into the scalar
//! summaries the score composer consumes.
//!
//! Missing data resolves to explicit neutral defaults, never to zero: a
//! dimension nobody rated is "unknown", not "bad".

use crate::config::RATING_SCALE_MIDPOINT;
use crate::models::review::{FlagKind, MetricKind, Review};

/// Arithmetic mean of `rating_overall` across all reviews, full precision.
/// Returns the scale midpoint when the candidate has no reviews.
pub fn average_overall_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return RATING_SCALE_MIDPOINT;
    }
    let sum: f64 = reviews.iter().map(|r| r.rating_overall).sum();
    sum / reviews.len() as f64
}

/// Mean of one named metric, taken only over the reviews that recorded it.
/// Reviews without the metric are excluded from the divisor, not counted as
/// zero. Returns the scale midpoint when no review supplies the metric.
pub fn average_metric(reviews: &[Review], metric: MetricKind) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for review in reviews {
        if let Some(value) = review.metrics.get(metric) {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        return RATING_SCALE_MIDPOINT;
    }
    sum / count as f64
}

/// Share of reviews answering "would work again" with an explicit yes.
/// `None` when there are no reviews — the composer resolves that to its
/// neutral default rather than treating it as a 0% rate.
pub fn repeat_hire_rate(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let yes = reviews
        .iter()
        .filter(|r| r.would_work_again == Some(true))
        .count();
    Some(yes as f64 / reviews.len() as f64)
}

/// True if any review in the history raised the flag. A single report
/// suffices — this is a logical OR, not a majority.
pub fn has_flag(reviews: &[Review], flag: FlagKind) -> bool {
    reviews.iter().any(|r| r.flags.is_raised(flag))
}
