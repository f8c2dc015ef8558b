// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TOURNEY CLI - Prize distribution previews for tournament operators
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tourney-cli")]
#[command(about = "Tourney CLI - Prize Distribution & Entry Fee Planning", long_about = None)]
#[command(version)]
struct Cli {
    /// Prize config file (reads TOURNEY_CONFIG env var; falls back to TOURNEY_* variables)
    #[arg(short, long, env = "TOURNEY_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Percentage per leaderboard position
    Distribute {
        #[command(flatten)]
        dist: DistributionArgs,
    },

    /// Token amounts per position for a prize (bonus prizes pay no fees)
    Payout {
        /// Total prize amount (atomic units)
        #[arg(short, long)]
        amount: u128,

        #[command(flatten)]
        dist: DistributionArgs,
    },

    /// Split an entry fee pool between creator, game and ranked positions
    EntryFees {
        /// Entry fee per player (atomic units)
        #[arg(short, long)]
        entry_fee: u128,

        /// Number of entrants
        #[arg(short = 'n', long)]
        entrants: u32,

        #[command(flatten)]
        dist: DistributionArgs,
    },

    /// Prize config file operations
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Args, Debug, Clone)]
struct DistributionArgs {
    /// Number of paid leaderboard positions (1-1000)
    #[arg(short, long)]
    positions: u32,

    /// Decay weight (0.0-5.0 in 0.1 steps, 0 = flat)
    #[arg(short, long, default_value_t = tourney_core::DEFAULT_DISTRIBUTION_WEIGHT)]
    weight: f64,

    /// Creator fee percentage
    #[arg(long, default_value_t = 0)]
    creator_fee: u32,

    /// Game fee percentage
    #[arg(long, default_value_t = 0)]
    game_fee: u32,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a default prize config
    Init {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate the prize config and preview its payouts
    Check {
        /// Entrant count used for the entry fee preview
        #[arg(short = 'n', long, default_value_t = 0)]
        entrants: u32,
    },

    /// Print the resolved prize config as TOML
    Show,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing();

    if !cli.json {
        print_banner();
    }

    let result = match cli.command {
        Commands::Distribute { dist } => commands::distribute::handle(&dist, cli.json),
        Commands::Payout { amount, dist } => commands::payout::handle(amount, &dist, cli.json),
        Commands::EntryFees {
            entry_fee,
            entrants,
            dist,
        } => commands::entry_fee::handle(entry_fee, entrants, &dist, cli.json),
        Commands::Config { action } => {
            commands::config::handle(action, cli.config.as_deref(), cli.json)
        }
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

/// Diagnostics go to stderr, filtered by TOURNEY_LOG (default: warn).
fn init_tracing() {
    let filter = std::env::var("TOURNEY_LOG").unwrap_or_else(|_| "warn".into());
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_banner() {
    println!(
        "{}",
        "╔═══════════════════════════════════════════════╗".cyan()
    );
    println!(
        "{}",
        "║      TOURNEY - PRIZE DISTRIBUTION CLI         ║"
            .cyan()
            .bold()
    );
    println!(
        "{}",
        "╚═══════════════════════════════════════════════╝".cyan()
    );
    println!();
}

fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

fn print_info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // ── CLI Argument Parsing ────────────────────────────────────

    #[test]
    fn test_cli_distribute() {
        let cli = Cli::try_parse_from([
            "tourney-cli",
            "distribute",
            "--positions",
            "4",
            "--weight",
            "1.5",
            "--creator-fee",
            "10",
            "--game-fee",
            "5",
        ]);
        assert!(cli.is_ok(), "Failed to parse: {:?}", cli.err());
        match cli.unwrap().command {
            Commands::Distribute { dist } => {
                assert_eq!(dist.positions, 4);
                assert_eq!(dist.weight, 1.5);
                assert_eq!(dist.creator_fee, 10);
                assert_eq!(dist.game_fee, 5);
            }
            _ => panic!("Expected Distribute"),
        }
    }

    #[test]
    fn test_cli_distribute_defaults() {
        let cli = Cli::try_parse_from(["tourney-cli", "distribute", "-p", "3"]).unwrap();
        assert!(!cli.json);
        match cli.command {
            Commands::Distribute { dist } => {
                assert_eq!(dist.weight, tourney_core::DEFAULT_DISTRIBUTION_WEIGHT);
                assert_eq!(dist.creator_fee, 0);
                assert_eq!(dist.game_fee, 0);
            }
            _ => panic!("Expected Distribute"),
        }
    }

    #[test]
    fn test_cli_distribute_requires_positions() {
        assert!(Cli::try_parse_from(["tourney-cli", "distribute"]).is_err());
    }

    #[test]
    fn test_cli_payout_large_amount() {
        let cli = Cli::try_parse_from([
            "tourney-cli",
            "--json",
            "payout",
            "--amount",
            "340282366920938463463374607431768211455",
            "--positions",
            "10",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Payout { amount, dist } => {
                assert_eq!(amount, u128::MAX);
                assert_eq!(dist.positions, 10);
            }
            _ => panic!("Expected Payout"),
        }
    }

    #[test]
    fn test_cli_entry_fees() {
        let cli = Cli::try_parse_from([
            "tourney-cli",
            "entry-fees",
            "--entry-fee",
            "1000",
            "-n",
            "64",
            "--positions",
            "8",
            "--weight",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::EntryFees {
                entry_fee,
                entrants,
                dist,
            } => {
                assert_eq!(entry_fee, 1000);
                assert_eq!(entrants, 64);
                assert_eq!(dist.positions, 8);
                assert_eq!(dist.weight, 2.0);
            }
            _ => panic!("Expected EntryFees"),
        }
    }

    #[test]
    fn test_cli_config_init() {
        let cli = Cli::try_parse_from([
            "tourney-cli",
            "config",
            "init",
            "--output",
            "/tmp/prizes.toml",
        ])
        .unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigCommands::Init { output, force },
            } => {
                assert_eq!(output, PathBuf::from("/tmp/prizes.toml"));
                assert!(!force);
            }
            _ => panic!("Expected Config::Init"),
        }
    }

    #[test]
    fn test_cli_config_check_with_global_config() {
        let cli = Cli::try_parse_from([
            "tourney-cli",
            "config",
            "check",
            "--config",
            "/tmp/prizes.toml",
            "-n",
            "32",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/prizes.toml")));
        match cli.command {
            Commands::Config {
                action: ConfigCommands::Check { entrants },
            } => assert_eq!(entrants, 32),
            _ => panic!("Expected Config::Check"),
        }
    }

    #[test]
    fn test_cli_config_show() {
        let cli = Cli::try_parse_from(["tourney-cli", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigCommands::Show
            }
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["tourney-cli", "stake"]).is_err());
    }
}
