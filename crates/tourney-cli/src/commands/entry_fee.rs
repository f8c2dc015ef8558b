use crate::commands::distribute::validate_args;
use crate::commands::payout::print_breakdown;
use crate::{print_info, print_success, DistributionArgs};
use colored::*;
use tourney_core::EntryFeeSplit;

pub fn handle(
    entry_fee: u128,
    entrants: u32,
    dist: &DistributionArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    validate_args(dist)?;

    let split = EntryFeeSplit::compute(
        entry_fee,
        entrants,
        dist.positions,
        dist.weight,
        dist.creator_fee,
        dist.game_fee,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&split)?);
        return Ok(());
    }

    print_info(&format!(
        "{} entrants × {} entry fee",
        entrants, entry_fee
    ));
    print_split(&split);
    print_success("Entry fee pool fully accounted for.");

    Ok(())
}

pub(crate) fn print_split(split: &EntryFeeSplit) {
    println!();
    println!(
        "{} {}",
        "Gross pool:".bold(),
        split.gross_pool.to_string().cyan().bold()
    );
    println!(
        "{} {} ({}%)",
        "Creator share:".bold(),
        split.creator_amount,
        split.creator_fee_percent
    );
    println!(
        "{} {} ({}%)",
        "Game share:".bold(),
        split.game_amount,
        split.game_fee_percent
    );
    if split.dust() > 0 {
        println!("{} {}", "Rounding dust:".bold(), split.dust().to_string().yellow());
    }
    println!();
    print_breakdown(&split.prizes);
}
