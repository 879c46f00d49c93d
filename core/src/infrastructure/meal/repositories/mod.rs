pub mod meal_repository;

pub use meal_repository::PostgresMealRepository;
