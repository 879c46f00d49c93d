pub mod analysis;
pub mod common;
pub mod meal;
pub mod profile;
pub mod stats;
pub mod storage;
pub mod streak;
