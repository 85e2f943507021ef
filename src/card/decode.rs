//! Picture decoding

use image::{DynamicImage, ImageFormat};

use crate::constants::{JPEG_CONTENT_TYPE, PNG_CONTENT_TYPE};
use crate::error::CardError;

/// Decodes a picture using the codec for `content_type`.
///
/// Only `image/png` and `image/jpeg` are accepted; the content type is
/// expected to come from [`crate::fetch::sniff_content_type`].
pub fn decode_picture(bytes: &[u8], content_type: &str) -> Result<DynamicImage, CardError> {
    let format = match content_type {
        PNG_CONTENT_TYPE => ImageFormat::Png,
        JPEG_CONTENT_TYPE => ImageFormat::Jpeg,
        other => {
            return Err(CardError::ImageDecode(format!(
                "unsupported content type {other}"
            )));
        }
    };
    image::load_from_memory_with_format(bytes, format)
        .map_err(|err| CardError::ImageDecode(err.to_string()))
}
