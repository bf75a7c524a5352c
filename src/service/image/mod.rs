use std::io::Cursor;

use anyhow::Context;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::ImageFormat;
use lambda_runtime::tracing;

/// Quality factor applied when re-encoding lossy formats.
const JPEG_QUALITY: u8 = 60;

/// Re-encodes the image at reduced quality, preserving the source format.
///
/// JPEG input is re-encoded at the fixed quality factor. PNG input is
/// re-encoded with the strongest compression the encoder offers. Any other
/// decodable format goes through its default encoder.
#[tracing::instrument(skip(bytes), fields(byte_count = bytes.len()))]
pub fn compress_image(bytes: &[u8]) -> anyhow::Result<Vec<u8>> {
    let format = image::guess_format(bytes).context("unrecognized image format")?;
    let img =
        image::load_from_memory_with_format(bytes, format).context("could not decode image")?;

    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);

    match format {
        ImageFormat::Jpeg => img
            .write_with_encoder(JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY))
            .context("could not re-encode jpeg")?,
        ImageFormat::Png => img
            .write_with_encoder(PngEncoder::new_with_quality(
                &mut cursor,
                CompressionType::Best,
                FilterType::Adaptive,
            ))
            .context("could not re-encode png")?,
        other => img
            .write_to(&mut cursor, other)
            .context("could not re-encode image")?,
    }

    Ok(buffer)
}
