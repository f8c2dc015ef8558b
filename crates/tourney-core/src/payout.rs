// ─────────────────────────────────────────────────────────────────
// Payouts: percentage shares to token amounts
// ─────────────────────────────────────────────────────────────────
// amount = floor(total * percentage / 100), per position.
// Whatever the floors and uncovered percentage leave behind is reported
// as `undistributed` so that distributed + undistributed == total.
// ─────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::distribution::calculate_distribution;
use crate::error::PrizeError;
use crate::position::ordinal_label;
use crate::PERCENT_TOTAL;

/// Token amount for `percentage` points of `total_amount`, rounded down.
///
/// Split as `(total / 100) * p + (total % 100) * p / 100` so the full u128
/// range works without an intermediate overflow.
pub fn amount_for_percentage(total_amount: u128, percentage: u32) -> Result<u128, PrizeError> {
    if percentage > PERCENT_TOTAL {
        return Err(PrizeError::PercentageOutOfRange(u64::from(percentage)));
    }
    let divisor = u128::from(PERCENT_TOTAL);
    let pct = u128::from(percentage);
    Ok((total_amount / divisor) * pct + (total_amount % divisor) * pct / divisor)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PositionPayout {
    pub rank: u32,
    pub label: String,
    pub percentage: u32,
    pub amount: u128,
}

/// Token amounts for every ranked position of a prize.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrizeBreakdown {
    pub total_amount: u128,
    pub positions: Vec<PositionPayout>,
    /// Sum of all position amounts
    pub distributed: u128,
    /// total_amount - distributed (rounding dust and any share not assigned to a rank)
    pub undistributed: u128,
}

impl PrizeBreakdown {
    /// Apply a percentage distribution to `total_amount`.
    /// Fails if the distribution claims more than 100% of the total.
    pub fn from_distribution(distribution: &[u32], total_amount: u128) -> Result<Self, PrizeError> {
        let claimed: u64 = distribution.iter().map(|&p| u64::from(p)).sum();
        if claimed > u64::from(PERCENT_TOTAL) {
            return Err(PrizeError::DistributionSum {
                expected: PERCENT_TOTAL,
                actual: claimed,
            });
        }

        let mut positions = Vec::with_capacity(distribution.len());
        let mut distributed: u128 = 0;
        for (&percentage, rank) in distribution.iter().zip(1u32..) {
            let amount = amount_for_percentage(total_amount, percentage)?;
            distributed += amount;
            positions.push(PositionPayout {
                rank,
                label: ordinal_label(rank),
                percentage,
                amount,
            });
        }

        trace!(total_amount = %total_amount, distributed = %distributed, "built prize breakdown");

        Ok(Self {
            total_amount,
            positions,
            distributed,
            undistributed: total_amount - distributed,
        })
    }

    /// Bonus prize: fee-free distribution of `total_amount` over `positions` ranks.
    pub fn bonus(total_amount: u128, positions: u32, weight: f64) -> Result<Self, PrizeError> {
        let distribution = calculate_distribution(positions, weight);
        Self::from_distribution(&distribution, total_amount)
    }

    pub fn amounts(&self) -> Vec<u128> {
        self.positions.iter().map(|p| p.amount).collect()
    }

    pub fn percentages(&self) -> Vec<u32> {
        self.positions.iter().map(|p| p.percentage).collect()
    }
}
