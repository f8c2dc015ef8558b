use crate::commands::distribute::{print_fees, print_shares};
use crate::commands::entry_fee::print_split;
use crate::commands::payout::print_breakdown;
use crate::{print_info, print_success, ConfigCommands};
use colored::*;
use serde::Serialize;
use std::path::Path;
use tourney_core::{
    label_distribution, EntryFeeConfig, EntryFeeSplit, PositionShare, PrizeBreakdown, PrizeConfig,
};

#[derive(Serialize)]
struct CheckReport {
    config: PrizeConfig,
    distribution: Vec<PositionShare>,
    entry_fee_split: Option<EntryFeeSplit>,
    bonus_prize: Option<PrizeBreakdown>,
}

pub fn handle(
    action: ConfigCommands,
    config_path: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigCommands::Init { output, force } => init(&output, force)?,
        ConfigCommands::Check { entrants } => check(config_path, entrants, json)?,
        ConfigCommands::Show => show(config_path, json)?,
    }
    Ok(())
}

/// Config from the given file, or from TOURNEY_* variables when no file is set.
fn load(config_path: Option<&Path>) -> Result<PrizeConfig, Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading prize config");
            PrizeConfig::load_from_file(path)?
        }
        None => PrizeConfig::load_from_env()?,
    };
    Ok(config)
}

/// Starter config: linear decay over three places, 1 STRK entry fee.
fn starter_config() -> PrizeConfig {
    PrizeConfig {
        entry_fee: Some(EntryFeeConfig {
            token: "STRK".to_string(),
            amount: 1_000_000_000_000_000_000,
        }),
        ..PrizeConfig::default()
    }
}

fn init(output: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if output.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            output.display()
        )
        .into());
    }

    starter_config().save_to_file(output)?;
    print_success(&format!("Prize config written to {}", output.display()));
    Ok(())
}

fn check(
    config_path: Option<&Path>,
    entrants: u32,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load(config_path)?;
    config.validate()?;

    let distribution = label_distribution(&config.distribution());
    let entry_fee_split = if entrants > 0 {
        config.entry_fee_split(entrants)?
    } else {
        None
    };
    let bonus_prize = config.bonus_breakdown()?;

    if json {
        let report = CheckReport {
            config,
            distribution,
            entry_fee_split,
            bonus_prize,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_success("Prize config is valid.");
    print_info(&format!(
        "{} paid positions, weight {:.1}{}",
        config.leaderboard_size,
        config.weight,
        if config.custom_distribution.is_some() {
            " (custom distribution)"
        } else {
            ""
        }
    ));
    print_fees(config.creator_fee_percent, config.game_fee_percent);
    println!();
    print_shares(&distribution);

    if let (Some(entry_fee), Some(split)) = (&config.entry_fee, &entry_fee_split) {
        println!();
        println!(
            "{} {} {} × {} entrants",
            "Entry fee:".bold(),
            entry_fee.amount,
            entry_fee.token.yellow(),
            entrants
        );
        print_split(split);
    } else if config.entry_fee.is_some() {
        print_info("Pass --entrants to preview the entry fee pool.");
    }

    if let (Some(bonus), Some(breakdown)) = (&config.bonus_prize, &bonus_prize) {
        println!();
        println!(
            "{} {} {}",
            "Bonus prize:".bold(),
            bonus.amount,
            bonus.token.yellow()
        );
        print_breakdown(breakdown);
    }

    Ok(())
}

fn show(config_path: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = load(config_path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
