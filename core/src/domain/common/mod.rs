use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod calendar;
pub mod entities;
pub mod ports;
pub mod services;

#[derive(Clone, Debug)]
pub struct EatUpConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub image_storage: ImageStorageConfig,
    pub calendar: CalendarConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub anthropic_api_key: String,
    pub anthropic_model: String,
    pub anthropic_version: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub request_timeout: Duration,
    /// JPEG quality used when re-encoding the photo for the request, 1-100
    pub upload_jpeg_quality: u8,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: String::new(),
            anthropic_model: "claude-3-5-sonnet-20241022".to_string(),
            anthropic_version: "2023-06-01".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            max_tokens: 1024,
            request_timeout: Duration::from_secs(30),
            upload_jpeg_quality: 80,
        }
    }
}

#[derive(Clone, Debug)]
pub enum ImageStorageConfig {
    Local(LocalStorageConfig),
    S3(ObjectStorageConfig),
}

#[derive(Clone, Debug)]
pub struct LocalStorageConfig {
    pub root_dir: String,
}

#[derive(Clone, Debug)]
pub struct ObjectStorageConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
}

#[derive(Clone, Debug, Default)]
pub struct CalendarConfig {
    /// Offset from UTC, in minutes, of the zone that defines calendar days
    pub utc_offset_minutes: i32,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
