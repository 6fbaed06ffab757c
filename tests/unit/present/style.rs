use super::*;
use crate::foundation::core::{ContainerSize, Seed};
use crate::generator::params::generate;

fn seed0_at_80() -> ImageParams {
    generate(Seed(0), ContainerSize::new(80.0).unwrap())
}

#[test]
fn frame_names_are_zero_padded() {
    assert_eq!(frame_file_name(0), "frame_00.png");
    assert_eq!(frame_file_name(7), "frame_07.png");
    assert_eq!(frame_file_name(14), "frame_14.png");
    let names: Vec<String> = SpriteSheet::frame_file_names().collect();
    assert_eq!(names.len(), 15);
    assert_eq!(names.last().map(String::as_str), Some("frame_14.png"));
}

#[test]
fn frame_url_and_path_use_sheet() {
    let sheet = SpriteSheet::default();
    assert_eq!(sheet.frame_url(3), "/dsanim-frames/frame_03.png");
    assert_eq!(
        sheet.frame_path(12),
        PathBuf::from("dsanim-frames").join("frame_12.png")
    );
}

#[test]
fn to_fixed_matches_js_rounding() {
    assert_eq!(to_fixed_2(384.0), "384.00");
    assert_eq!(to_fixed_2(-133.00212223595008), "-133.00");
    assert_eq!(to_fixed_2(-231.11253494594712), "-231.11");
    assert_eq!(to_fixed_2(0.125), "0.13");
    assert_eq!(to_fixed_2(-2.375), "-2.38");
    assert_eq!(to_fixed_2(1.005), "1.00");
    assert_eq!(to_fixed_2(-0.0), "0.00");
    assert_eq!(to_fixed_2(-0.001), "-0.00");
}

#[test]
fn css_style_for_seed_zero() {
    assert_eq!(
        css_style(&seed0_at_80()),
        "width:384.00px;height:512.00px;max-width:none;transform:translate(-133.00px, -231.11px) rotate(0deg);--hue-rotate:120deg;image-rendering:pixelated"
    );
}

#[test]
fn markup_escapes_and_appends_classes() {
    let sheet = SpriteSheet {
        img_class: "a\"b".to_string(),
        ..SpriteSheet::default()
    };
    let m = KeyImageMarkup::new(&seed0_at_80(), &sheet).with_class(" w-32 h-32 ");
    assert_eq!(m.container_class, "relative overflow-hidden w-32 h-32");
    let html = m.to_html();
    assert!(html.starts_with(r#"<div class="relative overflow-hidden w-32 h-32">"#));
    assert!(html.contains(r#"src="/dsanim-frames/frame_00.png""#));
    assert!(html.contains(r#"class="a&quot;b""#));
    assert!(html.ends_with("/></div>"));
}

#[test]
fn sheet_validation() {
    assert!(SpriteSheet::default().validate().is_ok());
    let bad = SpriteSheet {
        url_prefix: "/frames/".to_string(),
        ..SpriteSheet::default()
    };
    assert!(bad.validate().is_err());
    let bad = SpriteSheet {
        url_prefix: " ".to_string(),
        ..SpriteSheet::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn sheet_json_fills_defaults() {
    let sheet: SpriteSheet = serde_json::from_str(r#"{"url_prefix": "/cdn/frames"}"#).unwrap();
    assert_eq!(sheet.url_prefix, "/cdn/frames");
    assert_eq!(sheet.img_class, "light-mode-invert");
}
