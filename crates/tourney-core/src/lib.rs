// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TOURNEY - CORE MODULE
//
// Prize distribution engine for on-chain gaming tournaments.
// Turns a leaderboard size and a decay weight into integer percentage shares,
// then into token amounts for bonus prizes and entry-fee pools.
// Percentages are computed in f64; every token amount is u128 atomic units.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub mod config;
pub mod distribution;
pub mod entry_fee;
pub mod error;
pub mod payout;
pub mod position;

pub use config::{validate_distribution, BonusPrizeConfig, EntryFeeConfig, PrizeConfig};
pub use distribution::{
    available_percentage, calculate_distribution, calculate_distribution_with_fees,
};
pub use entry_fee::EntryFeeSplit;
pub use error::PrizeError;
pub use payout::{amount_for_percentage, PositionPayout, PrizeBreakdown};
pub use position::{label_distribution, ordinal_label, ordinal_suffix, PositionShare};

// ─────────────────────────────────────────────────────────────────
// DISTRIBUTION CONSTANTS
// ─────────────────────────────────────────────────────────────────
// Percentages are whole points out of PERCENT_TOTAL.
// Leaderboard and weight bounds mirror the tournament creation form:
// size 1..=1000, weight slider 0.0..=5.0 in 0.1 steps.
// ─────────────────────────────────────────────────────────────────

/// Whole pool, in percentage points.
pub const PERCENT_TOTAL: u32 = 100;

/// Largest leaderboard a tournament can pay out.
pub const MAX_LEADERBOARD_SIZE: u32 = 1_000;

/// Upper bound of the distribution weight slider.
pub const MAX_DISTRIBUTION_WEIGHT: f64 = 5.0;

/// Granularity of the distribution weight slider.
pub const WEIGHT_STEP: f64 = 0.1;

/// Weight used when a config does not set one (linear decay).
pub const DEFAULT_DISTRIBUTION_WEIGHT: f64 = 1.0;

/// Leaderboard size used when a config does not set one.
pub const DEFAULT_LEADERBOARD_SIZE: u32 = 3;
