use std::time::Duration;

use clap::{Args as ClapArgs, Parser, ValueEnum};
use eatup_core::domain::common::{
    CalendarConfig, DatabaseConfig, EatUpConfig, ImageStorageConfig, LLMConfig,
    LocalStorageConfig, ObjectStorageConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "eatup-api", version, about = "EatUp meal analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub calendar: CalendarArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server-host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server-port", long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix of every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres",
        hide_env_values = true
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "eatup")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    /// Required. The server refuses to start without it.
    #[arg(
        long = "anthropic-api-key",
        env = "ANTHROPIC_API_KEY",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub api_key: String,

    #[arg(
        long = "anthropic-model",
        env = "ANTHROPIC_MODEL",
        default_value = "claude-3-5-sonnet-20241022"
    )]
    pub model: String,

    #[arg(long = "anthropic-version", env = "ANTHROPIC_VERSION", default_value = "2023-06-01")]
    pub api_version: String,

    #[arg(
        long = "anthropic-base-url",
        env = "ANTHROPIC_BASE_URL",
        default_value = "https://api.anthropic.com"
    )]
    pub base_url: String,

    #[arg(long = "anthropic-max-tokens", env = "ANTHROPIC_MAX_TOKENS", default_value_t = 1024)]
    pub max_tokens: u32,

    #[arg(
        long = "analysis-timeout-secs",
        env = "ANALYSIS_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,

    #[arg(
        long = "upload-jpeg-quality",
        env = "UPLOAD_JPEG_QUALITY",
        default_value_t = 80,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub upload_jpeg_quality: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    Local,
    S3,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    #[arg(
        long = "image-storage",
        env = "IMAGE_STORAGE",
        value_enum,
        default_value_t = StorageBackend::Local
    )]
    pub backend: StorageBackend,

    #[arg(long = "image-dir", env = "IMAGE_DIR", default_value = "./data/images")]
    pub local_dir: String,

    #[arg(long = "s3-endpoint", env = "S3_ENDPOINT", default_value = "http://localhost:9000")]
    pub s3_endpoint: String,

    #[arg(long = "s3-region", env = "S3_REGION", default_value = "us-east-1")]
    pub s3_region: String,

    #[arg(long = "s3-access-key", env = "S3_ACCESS_KEY", default_value = "minioadmin")]
    pub s3_access_key: String,

    #[arg(
        long = "s3-secret-key",
        env = "S3_SECRET_KEY",
        default_value = "minioadmin",
        hide_env_values = true
    )]
    pub s3_secret_key: String,

    #[arg(long = "s3-bucket", env = "S3_BUCKET", default_value = "eatup")]
    pub s3_bucket: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CalendarArgs {
    /// Offset from UTC in minutes of the zone calendar days are counted in
    #[arg(
        long = "utc-offset-minutes",
        env = "UTC_OFFSET_MINUTES",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub format: LogFormat,
}

impl From<Args> for EatUpConfig {
    fn from(args: Args) -> Self {
        let image_storage = match args.storage.backend {
            StorageBackend::Local => ImageStorageConfig::Local(LocalStorageConfig {
                root_dir: args.storage.local_dir,
            }),
            StorageBackend::S3 => ImageStorageConfig::S3(ObjectStorageConfig {
                endpoint: args.storage.s3_endpoint,
                region: args.storage.s3_region,
                access_key: args.storage.s3_access_key,
                secret_key: args.storage.s3_secret_key,
                bucket: args.storage.s3_bucket,
            }),
        };

        EatUpConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                anthropic_api_key: args.llm.api_key,
                anthropic_model: args.llm.model,
                anthropic_version: args.llm.api_version,
                base_url: args.llm.base_url,
                max_tokens: args.llm.max_tokens,
                request_timeout: Duration::from_secs(args.llm.timeout_secs),
                upload_jpeg_quality: args.llm.upload_jpeg_quality,
            },
            image_storage,
            calendar: CalendarConfig {
                utc_offset_minutes: args.calendar.utc_offset_minutes,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_local_storage_in_utc() {
        let args = Args::try_parse_from(["eatup-api", "--anthropic-api-key", "sk-test"]).unwrap();
        let config = EatUpConfig::from(args);

        assert_eq!(config.llm.anthropic_api_key, "sk-test");
        assert_eq!(config.llm.request_timeout, Duration::from_secs(30));
        assert_eq!(config.calendar.utc_offset_minutes, 0);
        assert!(matches!(
            config.image_storage,
            ImageStorageConfig::Local(LocalStorageConfig { ref root_dir }) if root_dir == "./data/images"
        ));
    }

    #[test]
    fn s3_backend_and_negative_offset() {
        let args = Args::try_parse_from([
            "eatup-api",
            "--image-storage",
            "s3",
            "--s3-bucket",
            "meals",
            "--utc-offset-minutes",
            "-300",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(args.server.allowed_origins.len(), 2);
        let config = EatUpConfig::from(args);
        assert_eq!(config.calendar.utc_offset_minutes, -300);
        assert!(matches!(
            config.image_storage,
            ImageStorageConfig::S3(ObjectStorageConfig { ref bucket, .. }) if bucket == "meals"
        ));
    }

    #[test]
    fn jpeg_quality_is_bounded() {
        assert!(Args::try_parse_from(["eatup-api", "--upload-jpeg-quality", "0"]).is_err());
        assert!(Args::try_parse_from(["eatup-api", "--upload-jpeg-quality", "101"]).is_err());
    }
}
