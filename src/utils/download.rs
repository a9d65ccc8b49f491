//! Image download over HTTP.

use image::RgbImage;

/// Download an image and decode it to 8-bit RGB.
///
/// Issues a single GET with no retries and no caching. Network and decode
/// errors are returned as-is.
pub async fn download_image(url: &str) -> crate::Result<RgbImage> {
    tracing::info!("Downloading image from {}", url);

    let client = reqwest::Client::new();
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(crate::ImgUtilsError::HttpStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let content = response.bytes().await?;
    tracing::debug!("Downloaded {} bytes", content.len());

    decode_image(&content)
}

/// Decode raw bytes into an RGB image, guessing the format from its signature.
pub fn decode_image(bytes: &[u8]) -> crate::Result<RgbImage> {
    let image = image::load_from_memory(bytes)?.to_rgb8();
    tracing::debug!("Decoded image {}x{}", image.width(), image.height());
    Ok(image)
}
