pub mod streak_repository;

pub use streak_repository::PostgresStreakRepository;
