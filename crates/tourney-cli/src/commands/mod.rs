pub mod config;
pub mod distribute;
pub mod entry_fee;
pub mod payout;
