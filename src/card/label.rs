//! Text labels

use image::RgbaImage;
use rusttype::{Font, Scale, point};

use crate::constants::{
    CANVAS_WIDTH, CAPTION, CAPTION_BASELINE, CAPTION_POINTS, CAPTION_X, JOB_TITLE,
    JOB_TITLE_BASELINE, LABEL_POINTS, NAME_BASELINE, TEXT_DPI,
};

use super::fonts::CardFonts;

/// Left edge that roughly centres `text`, assuming every byte is `points` wide.
///
/// Long text gives a negative value and is clipped on the left.
pub fn centered_x(text: &str, points: u16) -> i32 {
    let text_width = i64::try_from(text.len())
        .unwrap_or(i64::MAX)
        .saturating_mul(i64::from(points));
    let x = (i64::from(CANVAS_WIDTH) - text_width) / 2;
    i32::try_from(x).unwrap_or(i32::MIN)
}

/// Rusttype scales by line height, point sizes are per em.
fn scale_for_points(font: &Font<'_>, points: u16) -> Scale {
    let pixels_per_em = f32::from(points) * TEXT_DPI / 72.0;
    let units_per_em = f32::from(font.units_per_em());
    if units_per_em <= 0.0 {
        return Scale::uniform(pixels_per_em);
    }
    let metrics = font.v_metrics_unscaled();
    Scale::uniform(pixels_per_em * (metrics.ascent - metrics.descent) / units_per_em)
}

/// Draws `text` in black with its baseline starting at (`x`, `baseline`).
pub fn draw_label(
    canvas: &mut RgbaImage,
    font: &Font<'_>,
    text: &str,
    x: i32,
    baseline: i32,
    points: u16,
) {
    let scale = scale_for_points(font, points);
    let origin = point(x as f32, baseline as f32);

    for glyph in font.layout(text, scale, origin) {
        let Some(bounds) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = i64::from(bounds.min.x) + i64::from(gx);
            let py = i64::from(bounds.min.y) + i64::from(gy);
            let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) else {
                return;
            };
            let Some(pixel) = canvas.get_pixel_mut_checked(px, py) else {
                return;
            };
            let keep = 1.0 - coverage.clamp(0.0, 1.0);
            for channel in pixel.0.iter_mut().take(3) {
                *channel = (f32::from(*channel) * keep).round() as u8;
            }
        });
    }
}

/// Draws the name, the job title and the caption.
pub fn draw_card_labels(canvas: &mut RgbaImage, name: &str, fonts: &CardFonts) {
    draw_label(
        canvas,
        &fonts.name,
        name,
        centered_x(name, LABEL_POINTS),
        NAME_BASELINE,
        LABEL_POINTS,
    );
    draw_label(
        canvas,
        &fonts.job_title,
        JOB_TITLE,
        centered_x(JOB_TITLE, LABEL_POINTS),
        JOB_TITLE_BASELINE,
        LABEL_POINTS,
    );
    draw_label(
        canvas,
        &fonts.caption,
        CAPTION,
        CAPTION_X,
        CAPTION_BASELINE,
        CAPTION_POINTS,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::fonts::{FontCache, test_font_dir};
    use crate::constants::NAME_FONT_FILE;
    use image::Rgba;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn white_canvas() -> RgbaImage {
        RgbaImage::from_pixel(CANVAS_WIDTH, 400, WHITE)
    }

    fn dark_pixels(canvas: &RgbaImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> usize {
        let mut count = 0;
        for y in ys {
            for x in xs.clone() {
                let pixel = canvas.get_pixel(x, y);
                if pixel.0[..3].iter().all(|c| *c < 100) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn centering_matches_byte_width() {
        assert_eq!(centered_x("Mona", 16), 468);
        assert_eq!(centered_x("", 16), 500);
        assert_eq!(centered_x(JOB_TITLE, 16), (1000 - 16 * 29) / 2);
        // multi-byte characters count per byte
        assert_eq!(centered_x("é", 16), 484);
    }

    #[test]
    fn long_text_starts_off_canvas() {
        let long = "x".repeat(100);
        assert_eq!(centered_x(&long, 16), -300);
        assert_eq!(centered_x(&"x".repeat(63), 16), -4);
    }

    #[tokio::test]
    async fn name_is_drawn_above_its_baseline() {
        let font = FontCache::new(test_font_dir())
            .load(NAME_FONT_FILE)
            .await
            .expect("load font");
        let mut canvas = white_canvas();
        draw_label(&mut canvas, &font, "Mona", centered_x("Mona", 16), 300, 16);

        assert!(dark_pixels(&canvas, 460..620, 270..301) > 50);
        assert_eq!(dark_pixels(&canvas, 0..1000, 0..250), 0);
        assert_eq!(dark_pixels(&canvas, 0..1000, 310..400), 0);
        assert!(canvas.pixels().all(|p| p.0[3] == 255));
    }

    #[tokio::test]
    async fn empty_text_leaves_canvas_untouched() {
        let font = FontCache::new(test_font_dir())
            .load(NAME_FONT_FILE)
            .await
            .expect("load font");
        let mut canvas = white_canvas();
        draw_label(&mut canvas, &font, "", 500, 300, 16);
        assert!(canvas.pixels().all(|p| *p == WHITE));
    }

    #[tokio::test]
    async fn text_past_the_edges_is_clipped() {
        let font = FontCache::new(test_font_dir())
            .load(NAME_FONT_FILE)
            .await
            .expect("load font");
        let mut canvas = white_canvas();
        let long = "W".repeat(120);
        draw_label(&mut canvas, &font, &long, centered_x(&long, 16), 10, 16);
        draw_label(&mut canvas, &font, "clipped", 950, 420, 16);
        assert!(dark_pixels(&canvas, 0..1000, 0..11) > 0);
    }

    #[tokio::test]
    async fn card_labels_cover_all_three_lines() {
        let fonts = FontCache::new(test_font_dir())
            .card_fonts()
            .await
            .expect("card fonts");
        let mut canvas = white_canvas();
        draw_card_labels(&mut canvas, "Mona", &fonts);

        assert!(dark_pixels(&canvas, 400..700, 270..301) > 0);
        assert!(dark_pixels(&canvas, 200..800, 320..351) > 0);
        assert!(dark_pixels(&canvas, 10..600, 375..391) > 0);
    }
}
