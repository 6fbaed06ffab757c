use super::*;

fn c(px: f64) -> ContainerSize {
    ContainerSize::new(px).unwrap()
}

#[test]
fn frame_wraps_euclidean_for_negative_seeds() {
    assert_eq!(select_frame(Seed(0)), 0);
    assert_eq!(select_frame(Seed(14)), 14);
    assert_eq!(select_frame(Seed(15)), 0);
    assert_eq!(select_frame(Seed(-1)), 14);
    assert_eq!(select_frame(Seed(-15)), 0);
    assert_eq!(select_frame(Seed(i64::MIN)), i64::MIN.rem_euclid(15) as u8);
}

#[test]
fn rotation_matches_its_bucket() {
    for s in 0..2000i64 {
        let (kind, rot) = select_rotation(Seed(s));
        assert!(rot < 360);
        match kind {
            RotationKind::Cardinal => assert_eq!(rot % 90, 0),
            RotationKind::Diagonal => assert_eq!(rot % 90, 45),
            RotationKind::Free => {}
        }
    }
}

#[test]
fn scale_factors_are_fixed() {
    assert_eq!(ScaleBucket::Small.factor(), 1.5);
    assert_eq!(ScaleBucket::Medium.factor(), 2.0);
    assert_eq!(ScaleBucket::Large.factor(), 2.5);
}

#[test]
fn rotated_bounds_swap_at_quarter_turn() {
    let b = rotated_bounds(Size::new(192.0, 256.0), 90);
    assert!((b.width - 256.0).abs() < 1e-9);
    assert!((b.height - 192.0).abs() < 1e-9);

    let b = rotated_bounds(Size::new(192.0, 256.0), 0);
    assert_eq!(b, Size::new(192.0, 256.0));
}

#[test]
fn center_offset_is_signed() {
    let o = center_offset(Size::new(384.0, 512.0), 0, c(80.0));
    assert_eq!(o, Vec2::new(-152.0, -216.0));
    let o = center_offset(Size::new(40.0, 40.0), 0, c(80.0));
    assert_eq!(o, Vec2::new(20.0, 20.0));
}

#[test]
fn jitter_is_zero_off_axis_and_bounded_on_axis() {
    for s in 0..500i64 {
        assert_eq!(select_jitter(Seed(s), 45), Vec2::ZERO);
        assert_eq!(select_jitter(Seed(s), 17), Vec2::ZERO);
        let j = select_jitter(Seed(s), 180);
        assert!(j.x.abs() <= MAX_JITTER_PX && j.y.abs() <= MAX_JITTER_PX);
    }
}

#[test]
fn hue_is_whole_degree() {
    for s in -100..1000i64 {
        assert!(select_hue(Seed(s)) < 360);
    }
}

#[test]
fn raw_boundary_rejects_bad_inputs() {
    assert!(generate_image_params(f64::NAN, 80.0).unwrap_err().is_invalid_argument());
    assert!(generate_image_params(0.0, 0.0).unwrap_err().is_invalid_argument());
    assert!(generate_image_params(0.0, f64::INFINITY).unwrap_err().is_invalid_argument());
    assert!(generate_image_params(-3.0, 80.0).is_ok());
}

#[test]
fn params_accessors_agree_with_fields() {
    let p = generate(Seed(9999), c(80.0));
    assert_eq!(p.size(), Size::new(p.width, p.height));
    assert_eq!(p.offset(), Vec2::new(p.offset_x, p.offset_y));
    assert_eq!(p.rotation_deg, 90);
    assert!(p.is_cardinal());
    assert!((p.rotation_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}
