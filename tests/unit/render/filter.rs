use super::*;

fn close(a: [u8; 4], b: [u8; 4], tol: u8) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= tol)
}

#[test]
fn zero_degrees_is_identity() {
    let mut buf = vec![10, 200, 30, 255, 0, 0, 0, 0, 60, 20, 90, 128];
    let before = buf.clone();
    hue_rotate_in_place(&mut buf, 0).unwrap();
    assert_eq!(buf, before);
    hue_rotate_in_place(&mut buf, 360).unwrap();
    assert_eq!(buf, before);
}

#[test]
fn greys_are_invariant() {
    for deg in [30u16, 90, 120, 180, 270, 359] {
        let m = HueRotate::from_degrees(deg);
        for g in [0u8, 64, 128, 255] {
            assert!(close(m.apply([g, g, g, 255]), [g, g, g, 255], 1), "deg={deg} g={g}");
        }
    }
}

#[test]
fn alpha_is_preserved_and_colour_bounded_by_alpha() {
    let m = HueRotate::from_degrees(200);
    let out = m.apply([120, 0, 0, 120]);
    assert_eq!(out[3], 120);
    assert!(out[..3].iter().all(|&c| c <= 120));
    assert_eq!(m.apply([0, 0, 0, 0]), [0, 0, 0, 0]);
}

#[test]
fn red_moves_toward_green_at_120() {
    let out = HueRotate::from_degrees(120).apply([255, 0, 0, 255]);
    assert!(out[1] > out[0], "{out:?}");
}

#[test]
fn rejects_partial_pixels() {
    let mut buf = vec![1, 2, 3];
    assert!(hue_rotate_in_place(&mut buf, 90).is_err());
}
