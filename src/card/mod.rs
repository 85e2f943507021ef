//! Card rendering: picture decoding, compositing, labels and JPEG output.

use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage, RgbaImage};
use rand::Rng;

use crate::error::CardError;

pub mod compose;
pub mod decode;
pub mod fonts;
pub mod label;

pub use decode::decode_picture;
pub use fonts::{CardFonts, FontCache};

/// Renders the full card for `name` around `picture`.
///
/// The background colour is the only random part, taken from `rng`.
pub fn render_card<R: Rng + ?Sized>(
    picture: &DynamicImage,
    name: &str,
    fonts: &CardFonts,
    rng: &mut R,
) -> RgbaImage {
    let mut canvas = compose::blank_canvas(compose::background_color(rng));
    compose::place_picture(&mut canvas, picture);
    label::draw_card_labels(&mut canvas, name, fonts);
    canvas
}

/// Encodes the card as a JPEG with the encoder's default quality.
pub fn encode_jpeg(canvas: &RgbaImage) -> Result<Vec<u8>, CardError> {
    // the canvas is opaque, jpeg has no alpha channel
    let rgb: RgbImage = canvas.convert();
    let mut output = Vec::new();
    JpegEncoder::new(&mut output)
        .encode_image(&rgb)
        .map_err(|err| CardError::Encode(err.to_string()))?;
    Ok(output)
}
