//! Fuzz target: prize distribution calculator
//!
//! Verifies:
//! 1. calculate_distribution_with_fees() never panics, whatever the floats
//! 2. Result length always equals the position count
//! 3. Result is deterministic
//! 4. Integer fees leaving a positive pool are distributed exactly
//!
//! Run: cargo +nightly fuzz run fuzz_distribution

#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tourney_core::{calculate_distribution_with_fees, PrizeBreakdown};

#[derive(Arbitrary, Debug)]
struct FuzzDistributionInput {
    positions: u16,
    weight: f64,
    creator_fee: f64,
    game_fee: f64,
    total_amount: u128,
}

fuzz_target!(|input: FuzzDistributionInput| {
    // Keep allocations bounded; the form caps leaderboards at 1000.
    let positions = u32::from(input.positions % 2_048);

    let d1 = calculate_distribution_with_fees(
        positions,
        input.weight,
        input.creator_fee,
        input.game_fee,
    );
    let d2 = calculate_distribution_with_fees(
        positions,
        input.weight,
        input.creator_fee,
        input.game_fee,
    );
    assert_eq!(d1.len(), positions as usize);
    assert_eq!(d1, d2, "distribution must be deterministic");

    // Slider-range weight with whole-percent fees: exact sum.
    let weight = (input.weight.abs() % 5.0 * 10.0).round() / 10.0;
    let creator = (input.creator_fee.abs() % 50.0).floor();
    let game = (input.game_fee.abs() % 50.0).floor();
    if positions > 0 && weight.is_finite() && creator.is_finite() && game.is_finite() {
        let dist = calculate_distribution_with_fees(positions, weight, creator, game);
        let sum: u32 = dist.iter().sum();
        assert_eq!(sum as f64, 100.0 - creator - game);

        let breakdown = PrizeBreakdown::from_distribution(&dist, input.total_amount)
            .expect("distribution never claims more than 100%");
        assert_eq!(
            breakdown.distributed + breakdown.undistributed,
            input.total_amount
        );
    }
});
