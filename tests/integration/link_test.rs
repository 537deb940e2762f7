//! Full allocate → build → decode scenarios.

use spinhub::{
    LinksConfig, MemorySlugDirectory, ShareLinkBuilder, ShareTarget, Slug, SlugGenerator,
    TokenDecoder, TokenEncoder,
};

#[tokio::test]
async fn test_allocate_build_and_decode_loop() {
    let directory = MemorySlugDirectory::new();
    let slug = SlugGenerator::new()
        .allocate("Acme Motors", &directory)
        .await
        .expect("allocate");
    directory.insert(slug.as_str());

    let config = LinksConfig {
        base_url: "https://spin.example.com".to_string(),
        ..LinksConfig::default()
    };
    let builder = ShareLinkBuilder::new(TokenEncoder::from_parts("k1", "salt1"), config);

    let link = builder.build(ShareTarget::Play, &slug);
    assert!(link.is_signed);
    assert_eq!(
        link.url,
        format!("https://spin.example.com/game/play/{}/", link.segment)
    );

    let decoder = TokenDecoder::from_parts("k1", "salt1");
    assert_eq!(decoder.decode(&link.segment).expect("decode"), "acme-motors");
}

#[test]
fn test_every_target_builds_a_distinct_path() {
    let builder = ShareLinkBuilder::new(
        TokenEncoder::from_parts("k1", "salt1"),
        LinksConfig::default(),
    );
    let slug: Slug = "acme-motors".parse().expect("slug");

    let play = builder.build(ShareTarget::Play, &slug);
    let spin = builder.build(ShareTarget::Spin, &slug);
    let dashboard = builder.build(ShareTarget::Dashboard, &slug);
    let register = builder.build(ShareTarget::Register, &slug);

    assert!(play.url.starts_with("/game/play/"));
    assert!(spin.url.starts_with("/game/spin/"));
    assert!(dashboard.url.starts_with("/game/dashboard/"));
    assert!(register.url.starts_with("/influencers/register/"));
}
