pub mod analytics;
pub mod health;
pub mod meal;
pub mod profile;
pub mod server;
pub mod storage;
pub mod streak;
