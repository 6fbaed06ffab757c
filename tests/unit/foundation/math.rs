use super::*;

#[test]
fn fnv_split_writes_match_single_write() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"keyimage");
    let mut b = Fnv1a64::new_default();
    b.write_u8(b'k');
    b.write_bytes(b"eyimage");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_distinguishes_float_bit_patterns() {
    let mut a = Fnv1a64::new_default();
    a.write_f64(0.0);
    let mut b = Fnv1a64::new_default();
    b.write_f64(-0.0);
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn clamp_u8_saturates() {
    assert_eq!(clamp_u8(-4.0), 0);
    assert_eq!(clamp_u8(127.5), 128);
    assert_eq!(clamp_u8(300.0), 255);
}
