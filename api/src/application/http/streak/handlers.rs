pub mod get_streak;
pub mod get_upload_days;
