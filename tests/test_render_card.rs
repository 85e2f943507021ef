use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use profilecard::card::{FontCache, decode_picture, encode_jpeg, render_card};
use profilecard::config::setup_logging;
use profilecard::constants::{DEFAULT_GITHUB_API_URL, DEFAULT_INSTAGRAM_URL};
use profilecard::fetch::sniff_content_type;
use profilecard::provider::{ProfileSource, ProviderRegistry};
use rand::SeedableRng;
use rand::rngs::StdRng;
use url::Url;

fn png_avatar() -> Vec<u8> {
    let mut output = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(120, 90, Rgba([30, 90, 200, 255])))
        .write_to(&mut output, ImageFormat::Png)
        .expect("encode avatar");
    output.into_inner()
}

#[tokio::test]
async fn test_render_card_from_github_profile() {
    let _ = setup_logging(true);

    let registry = ProviderRegistry::standard(
        Url::parse(DEFAULT_GITHUB_API_URL).expect("github url"),
        Url::parse(DEFAULT_INSTAGRAM_URL).expect("instagram url"),
    );
    let github = registry.get("github").expect("github source");
    assert_eq!(
        github.profile_url("octocat").expect("url").as_str(),
        "https://api.github.com/users/octocat"
    );
    let identity = github
        .parse_identity(br#"{"name":"Mona","avatar_url":"http://stub/avatar.png"}"#)
        .expect("identity");
    assert_eq!(identity.name, "Mona");

    let bytes = png_avatar();
    let picture = decode_picture(&bytes, sniff_content_type(&bytes)).expect("decode avatar");
    let fonts = FontCache::new(concat!(env!("CARGO_MANIFEST_DIR"), "/fonts"))
        .card_fonts()
        .await
        .expect("fonts");

    let mut rng = StdRng::seed_from_u64(2024);
    let canvas = render_card(&picture, &identity.name, &fonts, &mut rng);
    assert_eq!(canvas.dimensions(), (1000, 400));

    let jpeg = encode_jpeg(&canvas).expect("encode card");
    assert_eq!(sniff_content_type(&jpeg), "image/jpeg");
    let decoded = decode_picture(&jpeg, "image/jpeg").expect("decode card");
    assert_eq!((decoded.width(), decoded.height()), (1000, 400));
}
