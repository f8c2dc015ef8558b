use serde::{Deserialize, Serialize};

/// One ranked slot of a distribution, ready for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PositionShare {
    /// 1-based leaderboard rank
    pub rank: u32,
    /// Ordinal label ("1st", "2nd", ...)
    pub label: String,
    /// Percentage points of the pool
    pub percentage: u32,
}

/// English ordinal suffix for a 1-based rank. 11, 12 and 13 (mod 100) take "th".
pub fn ordinal_suffix(rank: u32) -> &'static str {
    match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

pub fn ordinal_label(rank: u32) -> String {
    format!("{}{}", rank, ordinal_suffix(rank))
}

/// Pair each percentage with its rank and label. Index 0 is rank 1.
pub fn label_distribution(distribution: &[u32]) -> Vec<PositionShare> {
    distribution
        .iter()
        .zip(1u32..)
        .map(|(&percentage, rank)| PositionShare {
            rank,
            label: ordinal_label(rank),
            percentage,
        })
        .collect()
}
