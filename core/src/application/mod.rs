use crate::{
    domain::common::{EatUpConfig, calendar::Calendar, services::Service},
    infrastructure::{
        clock::SystemClock,
        db::Postgres,
        llm::AnthropicClient,
        meal::PostgresMealRepository,
        object_storage::{ImageBackend, ObjectMealImageStore},
        profile::PostgresProfileRepository,
        stats::PostgresWeeklyStatRepository,
        streak::PostgresStreakRepository,
    },
};

pub type EatUpService = Service<
    PostgresProfileRepository,
    PostgresMealRepository,
    PostgresStreakRepository,
    PostgresWeeklyStatRepository,
    AnthropicClient,
    ObjectMealImageStore<ImageBackend>,
    SystemClock,
>;

pub async fn create_service(config: EatUpConfig) -> Result<EatUpService, anyhow::Error> {
    let calendar = Calendar::from_offset_minutes(config.calendar.utc_offset_minutes)?;
    let analysis_client = AnthropicClient::new(config.llm)?;
    let image_store = ObjectMealImageStore::new(ImageBackend::from_config(config.image_storage));

    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresProfileRepository::new(db.clone()),
        PostgresMealRepository::new(db.clone()),
        PostgresStreakRepository::new(db.clone()),
        PostgresWeeklyStatRepository::new(db),
        analysis_client,
        image_store,
        SystemClock,
        calendar,
    ))
}
