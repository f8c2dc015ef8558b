use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::distribution::calculate_distribution_with_fees;
use crate::entry_fee::EntryFeeSplit;
use crate::error::PrizeError;
use crate::payout::PrizeBreakdown;
use crate::{
    DEFAULT_DISTRIBUTION_WEIGHT, DEFAULT_LEADERBOARD_SIZE, MAX_DISTRIBUTION_WEIGHT,
    MAX_LEADERBOARD_SIZE, PERCENT_TOTAL, WEIGHT_STEP,
};

/// Serde adapter for u128 ↔ TOML: serialize as string, deserialize from string or integer.
/// TOML integers are 64-bit, token amounts routinely are not.
mod u128_toml {
    use super::*;

    pub fn serialize<S: Serializer>(val: &u128, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&val.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<u128, D::Error> {
        use serde::de::{self, Visitor};
        struct U128Visitor;

        impl<'de> Visitor<'de> for U128Visitor {
            type Value = u128;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a token amount as a string or integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
                v.trim().parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
                Ok(u128::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<u128, E> {
                u128::try_from(v).map_err(|_| E::custom("negative token amount"))
            }
        }

        d.deserialize_any(U128Visitor)
    }
}

// ─────────────────────────────────────────────────────────────────
// VALIDATION RULES (tournament creation form)
// ─────────────────────────────────────────────────────────────────

pub fn validate_leaderboard_size(size: u32) -> Result<(), PrizeError> {
    if size == 0 || size > MAX_LEADERBOARD_SIZE {
        return Err(PrizeError::InvalidLeaderboardSize {
            size,
            max: MAX_LEADERBOARD_SIZE,
        });
    }
    Ok(())
}

/// Weight must sit on the slider: finite, 0.0..=5.0, a multiple of 0.1.
pub fn validate_weight(weight: f64) -> Result<(), PrizeError> {
    let invalid = PrizeError::InvalidWeight {
        weight,
        max: MAX_DISTRIBUTION_WEIGHT,
    };
    if !weight.is_finite() || !(0.0..=MAX_DISTRIBUTION_WEIGHT).contains(&weight) {
        return Err(invalid);
    }
    let steps = weight / WEIGHT_STEP;
    if (steps - steps.round()).abs() > 1e-9 {
        return Err(invalid);
    }
    Ok(())
}

/// Each fee at most 100%, and together they must leave something for the ranks.
pub fn validate_fees(creator_fee_percent: u32, game_fee_percent: u32) -> Result<(), PrizeError> {
    if creator_fee_percent > PERCENT_TOTAL {
        return Err(PrizeError::FeeOutOfRange {
            fee: "Creator",
            percent: creator_fee_percent,
        });
    }
    if game_fee_percent > PERCENT_TOTAL {
        return Err(PrizeError::FeeOutOfRange {
            fee: "Game",
            percent: game_fee_percent,
        });
    }
    let total = creator_fee_percent + game_fee_percent;
    if total >= PERCENT_TOTAL {
        return Err(PrizeError::FeesExceedPool { total });
    }
    Ok(())
}

/// Check a hand-edited distribution: one entry per position, summing to
/// exactly the percentage the fees leave.
pub fn validate_distribution(
    distribution: &[u32],
    positions: usize,
    creator_fee_percent: u32,
    game_fee_percent: u32,
) -> Result<(), PrizeError> {
    if distribution.len() != positions {
        return Err(PrizeError::DistributionLength {
            expected: positions,
            actual: distribution.len(),
        });
    }
    let expected = PERCENT_TOTAL
        .saturating_sub(creator_fee_percent)
        .saturating_sub(game_fee_percent);
    let actual: u64 = distribution.iter().map(|&p| u64::from(p)).sum();
    if actual != u64::from(expected) {
        return Err(PrizeError::DistributionSum { expected, actual });
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────
// PRIZE CONFIGURATION
// ─────────────────────────────────────────────────────────────────

/// Entry fee charged to every entrant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryFeeConfig {
    pub token: String,
    #[serde(with = "u128_toml")]
    pub amount: u128,
}

/// Sponsored prize on top of the entry fee pool. Paid without fees; may use
/// its own leaderboard size and weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BonusPrizeConfig {
    pub token: String,
    #[serde(with = "u128_toml")]
    pub amount: u128,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Prize setup of a single tournament.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrizeConfig {
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: u32,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub creator_fee_percent: u32,
    #[serde(default)]
    pub game_fee_percent: u32,
    /// Overrides the weighted distribution when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_distribution: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<EntryFeeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_prize: Option<BonusPrizeConfig>,
}

fn default_leaderboard_size() -> u32 {
    DEFAULT_LEADERBOARD_SIZE
}

fn default_weight() -> f64 {
    DEFAULT_DISTRIBUTION_WEIGHT
}

impl Default for PrizeConfig {
    fn default() -> Self {
        Self {
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
            weight: DEFAULT_DISTRIBUTION_WEIGHT,
            creator_fee_percent: 0,
            game_fee_percent: 0,
            custom_distribution: None,
            entry_fee: None,
            bonus_prize: None,
        }
    }
}

fn env_parse<T>(var: &'static str) -> Result<Option<T>, PrizeError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| PrizeError::InvalidEnv {
                var,
                reason: e.to_string(),
            }),
        _ => Ok(None),
    }
}

impl PrizeConfig {
    /// Load prize config from TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, PrizeError> {
        let content = fs::read_to_string(path)?;
        let config: PrizeConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load prize config from environment variables.
    /// Unset variables fall back to the defaults; entry fee and bonus prize
    /// are only configured when their amount is set.
    pub fn load_from_env() -> Result<Self, PrizeError> {
        let defaults = Self::default();

        let leaderboard_size =
            env_parse("TOURNEY_LEADERBOARD_SIZE")?.unwrap_or(defaults.leaderboard_size);
        let weight = env_parse("TOURNEY_WEIGHT")?.unwrap_or(defaults.weight);
        let creator_fee_percent =
            env_parse("TOURNEY_CREATOR_FEE")?.unwrap_or(defaults.creator_fee_percent);
        let game_fee_percent = env_parse("TOURNEY_GAME_FEE")?.unwrap_or(defaults.game_fee_percent);
        let token = std::env::var("TOURNEY_TOKEN").unwrap_or_else(|_| "STRK".to_string());

        let entry_fee = env_parse::<u128>("TOURNEY_ENTRY_FEE")?.map(|amount| EntryFeeConfig {
            token: token.clone(),
            amount,
        });
        let bonus_prize = env_parse::<u128>("TOURNEY_BONUS_PRIZE")?.map(|amount| BonusPrizeConfig {
            token,
            amount,
            positions: None,
            weight: None,
        });

        Ok(Self {
            leaderboard_size,
            weight,
            creator_fee_percent,
            game_fee_percent,
            custom_distribution: None,
            entry_fee,
            bonus_prize,
        })
    }

    pub fn to_toml(&self) -> Result<String, PrizeError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save prize config to TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<(), PrizeError> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), PrizeError> {
        validate_leaderboard_size(self.leaderboard_size)?;
        validate_weight(self.weight)?;
        validate_fees(self.creator_fee_percent, self.game_fee_percent)?;

        if let Some(custom) = &self.custom_distribution {
            validate_distribution(
                custom,
                self.leaderboard_size as usize,
                self.creator_fee_percent,
                self.game_fee_percent,
            )?;
        }

        if let Some(bonus) = &self.bonus_prize {
            if let Some(positions) = bonus.positions {
                validate_leaderboard_size(positions)?;
            }
            if let Some(weight) = bonus.weight {
                validate_weight(weight)?;
            }
        }

        Ok(())
    }

    /// Percentages per rank for the entry fee pool: the custom distribution
    /// if one is set, otherwise the weighted one.
    pub fn distribution(&self) -> Vec<u32> {
        match &self.custom_distribution {
            Some(custom) => custom.clone(),
            None => calculate_distribution_with_fees(
                self.leaderboard_size,
                self.weight,
                f64::from(self.creator_fee_percent),
                f64::from(self.game_fee_percent),
            ),
        }
    }

    /// Entry fee split for `entrants` players, if the tournament charges one.
    pub fn entry_fee_split(&self, entrants: u32) -> Result<Option<EntryFeeSplit>, PrizeError> {
        let Some(entry_fee) = &self.entry_fee else {
            return Ok(None);
        };
        let split = match &self.custom_distribution {
            Some(custom) => EntryFeeSplit::with_distribution(
                entry_fee.amount,
                entrants,
                custom,
                self.creator_fee_percent,
                self.game_fee_percent,
            )?,
            None => EntryFeeSplit::compute(
                entry_fee.amount,
                entrants,
                self.leaderboard_size,
                self.weight,
                self.creator_fee_percent,
                self.game_fee_percent,
            )?,
        };
        Ok(Some(split))
    }

    /// Bonus prize breakdown, if the tournament has one.
    pub fn bonus_breakdown(&self) -> Result<Option<PrizeBreakdown>, PrizeError> {
        let Some(bonus) = &self.bonus_prize else {
            return Ok(None);
        };
        let positions = bonus.positions.unwrap_or(self.leaderboard_size);
        let weight = bonus.weight.unwrap_or(self.weight);
        PrizeBreakdown::bonus(bonus.amount, positions, weight).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> PrizeConfig {
        PrizeConfig {
            leaderboard_size: 4,
            weight: 1.0,
            creator_fee_percent: 10,
            game_fee_percent: 5,
            custom_distribution: None,
            entry_fee: Some(EntryFeeConfig {
                token: "STRK".to_string(),
                amount: 5_000_000_000_000_000_000,
            }),
            bonus_prize: Some(BonusPrizeConfig {
                token: "LORDS".to_string(),
                amount: 1_000_000,
                positions: Some(3),
                weight: Some(2.0),
            }),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = PrizeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.distribution(), vec![50, 33, 17]);
    }

    #[test]
    fn test_config_validation() {
        let mut config = sample_config();
        assert!(config.validate().is_ok());

        config.leaderboard_size = 0;
        assert!(matches!(
            config.validate(),
            Err(PrizeError::InvalidLeaderboardSize { size: 0, .. })
        ));

        config.leaderboard_size = 1_001;
        assert!(config.validate().is_err());

        config.leaderboard_size = 4;
        config.weight = 0.35;
        assert!(matches!(config.validate(), Err(PrizeError::InvalidWeight { .. })));

        config.weight = 5.1;
        assert!(config.validate().is_err());

        config.weight = 0.3;
        assert!(config.validate().is_ok());

        config.creator_fee_percent = 60;
        config.game_fee_percent = 40;
        assert!(matches!(
            config.validate(),
            Err(PrizeError::FeesExceedPool { total: 100 })
        ));
    }

    #[test]
    fn test_weight_slider_values() {
        for step in 0..=50 {
            assert!(validate_weight(step as f64 * 0.1).is_ok(), "step={}", step);
        }
        assert!(validate_weight(-0.1).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_distribution() {
        assert!(validate_distribution(&[50, 35], 2, 10, 5).is_ok());
        assert!(matches!(
            validate_distribution(&[50, 35], 3, 10, 5),
            Err(PrizeError::DistributionLength {
                expected: 3,
                actual: 2
            })
        ));
        assert!(matches!(
            validate_distribution(&[50, 50], 2, 10, 5),
            Err(PrizeError::DistributionSum {
                expected: 85,
                actual: 100
            })
        ));
    }

    #[test]
    fn test_custom_distribution_overrides_weight() {
        let mut config = sample_config();
        config.custom_distribution = Some(vec![45, 20, 15, 5]);
        assert!(config.validate().is_ok());
        assert_eq!(config.distribution(), vec![45, 20, 15, 5]);

        let split = config.entry_fee_split(2).unwrap().unwrap();
        assert_eq!(split.prizes.percentages(), vec![45, 20, 15, 5]);

        config.custom_distribution = Some(vec![45, 20, 15]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_entry_fee_split_and_bonus() {
        let config = sample_config();

        let split = config.entry_fee_split(10).unwrap().unwrap();
        assert_eq!(split.gross_pool, 50_000_000_000_000_000_000);
        assert_eq!(split.creator_amount, 5_000_000_000_000_000_000);
        assert_eq!(split.game_amount, 2_500_000_000_000_000_000);

        let bonus = config.bonus_breakdown().unwrap().unwrap();
        assert_eq!(bonus.positions.len(), 3);
        assert_eq!(bonus.distributed + bonus.undistributed, 1_000_000);

        let bare = PrizeConfig::default();
        assert!(bare.entry_fee_split(10).unwrap().is_none());
        assert!(bare.bonus_breakdown().unwrap().is_none());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("prizes.toml");

        let config = sample_config();
        config.save_to_file(&config_path).unwrap();
        let loaded = PrizeConfig::load_from_file(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_accepts_integer_amounts_and_defaults() {
        let toml_src = r#"
            creator_fee_percent = 5

            [entry_fee]
            token = "STRK"
            amount = 250
        "#;
        let config: PrizeConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.leaderboard_size, DEFAULT_LEADERBOARD_SIZE);
        assert_eq!(config.weight, DEFAULT_DISTRIBUTION_WEIGHT);
        assert_eq!(config.entry_fee.unwrap().amount, 250);
    }

    #[test]
    fn test_config_rejects_negative_amount() {
        let toml_src = r#"
            [bonus_prize]
            token = "STRK"
            amount = -5
        "#;
        assert!(toml::from_str::<PrizeConfig>(toml_src).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(matches!(
            PrizeConfig::load_from_file(&missing),
            Err(PrizeError::Io(_))
        ));
    }

    #[test]
    fn test_load_from_env() {
        std::env::set_var("TOURNEY_LEADERBOARD_SIZE", "5");
        std::env::set_var("TOURNEY_WEIGHT", "2.5");
        std::env::set_var("TOURNEY_CREATOR_FEE", "3");
        std::env::set_var("TOURNEY_ENTRY_FEE", "1000");

        let config = PrizeConfig::load_from_env().unwrap();
        assert_eq!(config.leaderboard_size, 5);
        assert_eq!(config.weight, 2.5);
        assert_eq!(config.creator_fee_percent, 3);
        assert_eq!(config.game_fee_percent, 0);
        assert_eq!(config.entry_fee.as_ref().map(|e| e.amount), Some(1000));
        assert!(config.bonus_prize.is_none());

        std::env::set_var("TOURNEY_WEIGHT", "steep");
        assert!(matches!(
            PrizeConfig::load_from_env(),
            Err(PrizeError::InvalidEnv {
                var: "TOURNEY_WEIGHT",
                ..
            })
        ));

        for var in [
            "TOURNEY_LEADERBOARD_SIZE",
            "TOURNEY_WEIGHT",
            "TOURNEY_CREATOR_FEE",
            "TOURNEY_ENTRY_FEE",
        ] {
            std::env::remove_var(var);
        }
    }
}
