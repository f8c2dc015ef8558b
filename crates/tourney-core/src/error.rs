use thiserror::Error;

/// Errors raised around the distribution calculator: form validation,
/// payout arithmetic and config loading. The calculator itself never fails.
#[derive(Error, Debug)]
pub enum PrizeError {
    #[error("Leaderboard size must be between 1 and {max}, got {size}")]
    InvalidLeaderboardSize { size: u32, max: u32 },
    #[error("Distribution weight must be a multiple of 0.1 between 0 and {max}, got {weight}")]
    InvalidWeight { weight: f64, max: f64 },
    #[error("{fee} fee must be between 0 and 100 percent, got {percent}")]
    FeeOutOfRange { fee: &'static str, percent: u32 },
    #[error("Creator and game fees take {total}% of the pool, leaving nothing to distribute")]
    FeesExceedPool { total: u32 },
    #[error("Distribution has {actual} positions, expected {expected}")]
    DistributionLength { expected: usize, actual: usize },
    #[error("Distribution sums to {actual}%, expected {expected}%")]
    DistributionSum { expected: u32, actual: u64 },
    #[error("Percentage {0} is above 100")]
    PercentageOutOfRange(u64),
    #[error("Arithmetic overflow computing {0}")]
    Overflow(&'static str),
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("Failed to write config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
