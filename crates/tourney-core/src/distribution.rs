// ─────────────────────────────────────────────────────────────────
// Prize Distribution: Weighted Decay with Largest-Remainder Rounding
// ─────────────────────────────────────────────────────────────────
// Share:     available * (1 - i / positions) ^ weight, i = 0 for rank 1
// Weight:    0 = flat, larger = concentrated toward the top ranks
// Rounding:  floor every share, then hand the leftover whole points to
//            the positions with the largest fractional parts
// Ties:      equal fractional parts go to the lower index (higher rank)
//
// Never fails. Degenerate input (no positions, fees eating the whole
// pool, non-finite floats) degrades to an empty or all-zero result so a
// slider mid-drag can always be rendered.
// ─────────────────────────────────────────────────────────────────

use tracing::{debug, trace};

use crate::PERCENT_TOTAL;

/// Percentage left for ranked positions after the creator and game fees.
/// Negative when the fees exceed the whole pool.
pub fn available_percentage(creator_fee_percent: f64, game_fee_percent: f64) -> f64 {
    f64::from(PERCENT_TOTAL) - creator_fee_percent - game_fee_percent
}

/// Fee-free distribution of 100 points across `positions` ranks.
pub fn calculate_distribution(positions: u32, weight: f64) -> Vec<u32> {
    calculate_distribution_with_fees(positions, weight, 0.0, 0.0)
}

/// Distribute the percentage left after fees across `positions` ranks.
///
/// Index 0 of the result is rank 1. For `weight >= 0` the result is
/// non-increasing, and it sums to `100 - creator - game` whenever that is
/// positive. Zero positions yield an empty vec; a fully consumed pool yields
/// `positions` zeros.
pub fn calculate_distribution_with_fees(
    positions: u32,
    weight: f64,
    creator_fee_percent: f64,
    game_fee_percent: f64,
) -> Vec<u32> {
    if positions == 0 {
        return Vec::new();
    }

    let slots = positions as usize;
    let available = available_percentage(creator_fee_percent, game_fee_percent);

    // Written as a negated comparison so a NaN fee lands here as well.
    if !(available > 0.0) {
        debug!(
            creator_fee_percent,
            game_fee_percent, "fees leave nothing to distribute"
        );
        return vec![0; slots];
    }

    let divisor = f64::from(positions);
    let raw: Vec<f64> = (0..slots)
        .map(|i| available * (1.0 - i as f64 / divisor).powf(weight))
        .collect();

    let total: f64 = raw.iter().sum();
    if total == 0.0 || !total.is_finite() {
        debug!(positions, weight, total, "raw shares are not distributable");
        return vec![0; slots];
    }

    let normalized: Vec<f64> = raw.iter().map(|share| share / total * available).collect();
    let decimals: Vec<f64> = normalized.iter().map(|share| share - share.floor()).collect();
    let mut floored: Vec<u32> = normalized.iter().map(|share| share.floor() as u32).collect();

    let allocated: f64 = floored.iter().map(|&points| f64::from(points)).sum();
    let remainder = available - allocated;

    if remainder > 0.0 {
        // ceil() only matters for fractional fees; integer fees give an exact count.
        let points = (remainder.ceil() as usize).min(slots);

        let mut order: Vec<usize> = (0..slots).collect();
        // sort_by is stable, so equal decimals keep ascending index order.
        order.sort_by(|&a, &b| decimals[b].total_cmp(&decimals[a]));

        for &index in order.iter().take(points) {
            floored[index] = floored[index].saturating_add(1);
        }
    }

    trace!(positions, weight, available, distribution = ?floored, "calculated distribution");
    floored
}
