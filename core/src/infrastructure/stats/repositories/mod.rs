pub mod weekly_stat_repository;

pub use weekly_stat_repository::PostgresWeeklyStatRepository;
