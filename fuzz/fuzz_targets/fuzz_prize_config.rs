//! Fuzz target: prize config parsing
//!
//! Feeds arbitrary TOML to PrizeConfig to ensure:
//! 1. Parsing never panics
//! 2. Any config that validates can be previewed without panicking
//!
//! Run: cargo +nightly fuzz run fuzz_prize_config -- -max_len=1024

#![no_main]
use libfuzzer_sys::fuzz_target;
use tourney_core::PrizeConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = toml::from_str::<PrizeConfig>(source) else {
        return;
    };
    if config.validate().is_err() {
        return;
    }

    let dist = config.distribution();
    assert_eq!(dist.len(), config.leaderboard_size as usize);

    let _ = config.entry_fee_split(64);
    let _ = config.bonus_breakdown();
});
