pub mod backend;
pub mod local;
pub mod meal_images;
pub mod memory;
pub mod minio;

pub use backend::ImageBackend;
pub use local::LocalObjectStorage;
pub use meal_images::ObjectMealImageStore;
pub use memory::InMemoryObjectStorage;
pub use minio::MinioObjectStorage;
