use crate::commands::distribute::{distribution_for, print_fees, validate_args};
use crate::{print_info, DistributionArgs};
use colored::*;
use tourney_core::PrizeBreakdown;

pub fn handle(
    amount: u128,
    dist: &DistributionArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    validate_args(dist)?;

    let breakdown = PrizeBreakdown::from_distribution(&distribution_for(dist), amount)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    print_info(&format!(
        "Paying {} across {} positions (weight {:.1})",
        amount, dist.positions, dist.weight
    ));
    print_fees(dist.creator_fee, dist.game_fee);
    println!();
    print_breakdown(&breakdown);

    Ok(())
}

pub(crate) fn print_breakdown(breakdown: &PrizeBreakdown) {
    println!("{}", "═══ PAYOUTS ═══".cyan().bold());
    for position in &breakdown.positions {
        println!(
            "  {:>6}  {:>4}  {}",
            position.label.bold(),
            format!("{}%", position.percentage),
            position.amount.to_string().green()
        );
    }
    println!();
    println!(
        "{} {}",
        "Distributed:".bold(),
        breakdown.distributed.to_string().cyan()
    );
    if breakdown.undistributed > 0 {
        println!(
            "{} {}",
            "Undistributed:".bold(),
            breakdown.undistributed.to_string().yellow()
        );
    }
}
