// ─────────────────────────────────────────────────────────────────
// Entry Fee Split
// ─────────────────────────────────────────────────────────────────
// Gross pool = entry fee × entrants.
// Creator and game fees are taken off the top as whole percentages of
// the gross pool; ranked positions share the rest. Every amount is a
// floor of its percentage of the gross pool, so
//   creator + game + prizes.distributed <= gross_pool
// and the difference is rounding dust kept by the pool.
// ─────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{validate_distribution, validate_fees};
use crate::distribution::calculate_distribution_with_fees;
use crate::error::PrizeError;
use crate::payout::{amount_for_percentage, PrizeBreakdown};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EntryFeeSplit {
    pub entry_fee: u128,
    pub entrants: u32,
    pub gross_pool: u128,
    pub creator_fee_percent: u32,
    pub game_fee_percent: u32,
    pub creator_amount: u128,
    pub game_amount: u128,
    pub prizes: PrizeBreakdown,
}

impl EntryFeeSplit {
    /// Split the pool using the weighted distribution for `positions` ranks.
    pub fn compute(
        entry_fee: u128,
        entrants: u32,
        positions: u32,
        weight: f64,
        creator_fee_percent: u32,
        game_fee_percent: u32,
    ) -> Result<Self, PrizeError> {
        validate_fees(creator_fee_percent, game_fee_percent)?;
        let distribution = calculate_distribution_with_fees(
            positions,
            weight,
            f64::from(creator_fee_percent),
            f64::from(game_fee_percent),
        );
        Self::build(
            entry_fee,
            entrants,
            &distribution,
            creator_fee_percent,
            game_fee_percent,
        )
    }

    /// Split the pool using a hand-edited distribution. The distribution must
    /// sum to exactly what the fees leave.
    pub fn with_distribution(
        entry_fee: u128,
        entrants: u32,
        distribution: &[u32],
        creator_fee_percent: u32,
        game_fee_percent: u32,
    ) -> Result<Self, PrizeError> {
        validate_fees(creator_fee_percent, game_fee_percent)?;
        validate_distribution(
            distribution,
            distribution.len(),
            creator_fee_percent,
            game_fee_percent,
        )?;
        Self::build(
            entry_fee,
            entrants,
            distribution,
            creator_fee_percent,
            game_fee_percent,
        )
    }

    fn build(
        entry_fee: u128,
        entrants: u32,
        distribution: &[u32],
        creator_fee_percent: u32,
        game_fee_percent: u32,
    ) -> Result<Self, PrizeError> {
        let gross_pool = entry_fee
            .checked_mul(u128::from(entrants))
            .ok_or(PrizeError::Overflow("entry fee pool"))?;

        let creator_amount = amount_for_percentage(gross_pool, creator_fee_percent)?;
        let game_amount = amount_for_percentage(gross_pool, game_fee_percent)?;
        let prizes = PrizeBreakdown::from_distribution(distribution, gross_pool)?;

        debug!(
            entrants,
            gross_pool = %gross_pool,
            creator_amount = %creator_amount,
            game_amount = %game_amount,
            "split entry fee pool"
        );

        Ok(Self {
            entry_fee,
            entrants,
            gross_pool,
            creator_fee_percent,
            game_fee_percent,
            creator_amount,
            game_amount,
            prizes,
        })
    }

    /// Part of the gross pool that no one receives because of rounding.
    pub fn dust(&self) -> u128 {
        self.gross_pool - self.creator_amount - self.game_amount - self.prizes.distributed
    }
}
