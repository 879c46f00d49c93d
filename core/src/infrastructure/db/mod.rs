pub mod postgres;

pub use postgres::Postgres;
