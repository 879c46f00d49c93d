use bytes::Bytes;
use image::{DynamicImage, codecs::jpeg::JpegEncoder, imageops::FilterType};

use crate::domain::common::entities::app_errors::CoreError;

pub const FULL_IMAGE_QUALITY: u8 = 70;
pub const THUMBNAIL_QUALITY: u8 = 50;
pub const THUMBNAIL_SIZE: u32 = 200;

#[derive(Debug, Clone)]
pub struct CompressedMealImages {
    pub full: Bytes,
    pub thumbnail: Bytes,
}

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, CoreError> {
    image::load_from_memory(bytes).map_err(|e| {
        tracing::warn!("Failed to decode image: {}", e);
        CoreError::InvalidImage(e.to_string())
    })
}

/// Baseline JPEG of `image` at `quality` (1-100). Alpha is dropped.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Bytes, CoreError> {
    let rgb = image.to_rgb8();
    let mut buffer = Vec::new();

    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .encode_image(&rgb)
        .map_err(|e| {
            tracing::error!("Failed to encode JPEG: {}", e);
            CoreError::InvalidImage(e.to_string())
        })?;

    Ok(Bytes::from(buffer))
}

/// Any decodable image re-encoded as JPEG
pub fn reencode_jpeg(bytes: &[u8], quality: u8) -> Result<Bytes, CoreError> {
    encode_jpeg(&decode_image(bytes)?, quality)
}

pub fn compress_meal_image(bytes: &[u8]) -> Result<CompressedMealImages, CoreError> {
    let image = decode_image(bytes)?;
    let full = encode_jpeg(&image, FULL_IMAGE_QUALITY)?;
    let thumbnail = encode_jpeg(
        &image.resize_exact(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Triangle),
        THUMBNAIL_QUALITY,
    )?;

    Ok(CompressedMealImages { full, thumbnail })
}

/// `reencode_jpeg` on the blocking pool
pub async fn spawn_reencode_jpeg(bytes: Bytes, quality: u8) -> Result<Bytes, CoreError> {
    run_codec(move || reencode_jpeg(&bytes, quality)).await
}

/// `compress_meal_image` on the blocking pool
pub async fn spawn_compress_meal_image(bytes: Bytes) -> Result<CompressedMealImages, CoreError> {
    run_codec(move || compress_meal_image(&bytes)).await
}

// decoding and encoding a phone photo takes long enough to stall a runtime worker
async fn run_codec<T, F>(work: F) -> Result<T, CoreError>
where
    F: FnOnce() -> Result<T, CoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        tracing::error!("Image codec task failed: {}", e);
        CoreError::InternalServerError
    })?
}
