//! Background generation and picture placement

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, MAX_BACKGROUND_CHANNEL, PICTURE_SIZE, PICTURE_X, PICTURE_Y,
};

/// Draws one channel value uniformly from `0..=MAX_BACKGROUND_CHANNEL`.
fn sample_channel<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    loop {
        let value: u8 = StandardUniform.sample(rng);
        if value <= MAX_BACKGROUND_CHANNEL {
            return value;
        }
    }
}

/// Picks an opaque background colour with independently sampled channels.
pub fn background_color<R: Rng + ?Sized>(rng: &mut R) -> Rgba<u8> {
    let red = sample_channel(rng);
    let green = sample_channel(rng);
    let blue = sample_channel(rng);
    Rgba([red, green, blue, u8::MAX])
}

/// A canvas of the card's size filled with `color`.
pub fn blank_canvas(color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, color)
}

/// Resizes `picture` to the picture square and blends it over its region.
pub fn place_picture(canvas: &mut RgbaImage, picture: &DynamicImage) {
    let resized = imageops::resize(picture, PICTURE_SIZE, PICTURE_SIZE, FilterType::Lanczos3);
    imageops::overlay(canvas, &resized, i64::from(PICTURE_X), i64::from(PICTURE_Y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn close(a: Rgba<u8>, b: Rgba<u8>) -> bool {
        a.0.iter()
            .zip(b.0.iter())
            .all(|(x, y)| x.abs_diff(*y) <= 2)
    }

    #[test]
    fn background_channels_stay_in_range() {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let color = background_color(&mut rng);
            assert!(color.0[..3].iter().all(|c| *c <= MAX_BACKGROUND_CHANNEL));
            assert_eq!(color.0[3], 255);
        }
    }

    #[test]
    fn background_is_deterministic_per_seed() {
        let first = background_color(&mut StdRng::seed_from_u64(42));
        let second = background_color(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn canvas_is_card_sized() {
        let canvas = blank_canvas(Rgba([10, 20, 30, 255]));
        assert_eq!(canvas.dimensions(), (1000, 400));
        assert!(canvas.pixels().all(|p| *p == Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn picture_fills_exactly_its_region() {
        let background = Rgba([0, 0, 255, 255]);
        let red = Rgba([255, 0, 0, 255]);
        let mut canvas = blank_canvas(background);
        let picture = DynamicImage::ImageRgba8(RgbaImage::from_pixel(640, 480, red));
        place_picture(&mut canvas, &picture);

        assert_eq!(canvas.dimensions(), (1000, 400));
        for (x, y) in [(400, 50), (599, 50), (400, 249), (599, 249), (500, 150)] {
            assert!(close(*canvas.get_pixel(x, y), red), "inside at {x},{y}");
        }
        for (x, y) in [(399, 50), (600, 50), (400, 49), (400, 250), (0, 0), (999, 399)] {
            assert_eq!(*canvas.get_pixel(x, y), background, "outside at {x},{y}");
        }
    }

    #[test]
    fn small_pictures_are_scaled_up() {
        let green = Rgba([0, 255, 0, 255]);
        let mut canvas = blank_canvas(Rgba([0, 0, 0, 255]));
        let picture = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, green));
        place_picture(&mut canvas, &picture);
        assert!(close(*canvas.get_pixel(401, 51), green));
        assert!(close(*canvas.get_pixel(598, 248), green));
    }

    #[test]
    fn transparent_pictures_show_the_background() {
        let background = Rgba([12, 34, 56, 255]);
        let mut canvas = blank_canvas(background);
        let picture = DynamicImage::ImageRgba8(RgbaImage::from_pixel(200, 200, Rgba([255, 255, 255, 0])));
        place_picture(&mut canvas, &picture);
        assert!(close(*canvas.get_pixel(500, 150), background));
        assert_eq!(canvas.get_pixel(500, 150).0[3], 255);
    }
}
