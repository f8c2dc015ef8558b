use crate::{print_info, DistributionArgs};
use colored::*;
use serde::Serialize;
use tourney_core::config::{validate_fees, validate_leaderboard_size, validate_weight};
use tourney_core::{
    available_percentage, calculate_distribution_with_fees, label_distribution, PositionShare,
    PrizeError,
};

#[derive(Serialize)]
struct DistributionReport {
    positions: u32,
    weight: f64,
    creator_fee_percent: u32,
    game_fee_percent: u32,
    available_percentage: f64,
    shares: Vec<PositionShare>,
}

/// Same rules the tournament creation form applies before calling the calculator.
pub fn validate_args(dist: &DistributionArgs) -> Result<(), PrizeError> {
    validate_leaderboard_size(dist.positions)?;
    validate_weight(dist.weight)?;
    validate_fees(dist.creator_fee, dist.game_fee)
}

/// Percentages for the given arguments; call after `validate_args`.
pub fn distribution_for(dist: &DistributionArgs) -> Vec<u32> {
    calculate_distribution_with_fees(
        dist.positions,
        dist.weight,
        f64::from(dist.creator_fee),
        f64::from(dist.game_fee),
    )
}

pub fn handle(dist: &DistributionArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    validate_args(dist)?;

    let shares = label_distribution(&distribution_for(dist));

    if json {
        let report = DistributionReport {
            positions: dist.positions,
            weight: dist.weight,
            creator_fee_percent: dist.creator_fee,
            game_fee_percent: dist.game_fee,
            available_percentage: available_percentage(
                f64::from(dist.creator_fee),
                f64::from(dist.game_fee),
            ),
            shares,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_info(&format!(
        "Distributing across {} positions (weight {:.1})",
        dist.positions, dist.weight
    ));
    print_fees(dist.creator_fee, dist.game_fee);
    println!();
    print_shares(&shares);

    Ok(())
}

pub(crate) fn print_fees(creator_fee: u32, game_fee: u32) {
    if creator_fee == 0 && game_fee == 0 {
        return;
    }
    println!("{} {}%", "Creator fee:".bold(), creator_fee);
    println!("{} {}%", "Game fee:".bold(), game_fee);
}

pub(crate) fn print_shares(shares: &[PositionShare]) {
    println!("{}", "═══ DISTRIBUTION ═══".cyan().bold());
    for share in shares {
        println!(
            "  {:>6}  {:>4}  {}",
            share.label.bold(),
            format!("{}%", share.percentage).cyan(),
            "█".repeat((share.percentage / 2) as usize).green()
        );
    }
}
