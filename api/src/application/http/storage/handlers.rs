pub mod get_storage_usage;
