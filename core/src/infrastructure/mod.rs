pub mod clock;
pub mod db;
pub mod llm;
pub mod meal;
pub mod media;
pub mod memory;
pub mod object_storage;
pub mod profile;
pub mod stats;
pub mod streak;
