use super::*;

#[test]
fn empty_sweep_has_zero_shares() {
    let stats = sweep(5..5, ContainerSize::default());
    assert_eq!(stats.total, 0);
    assert_eq!(stats.share(RotationKind::Cardinal), 0.0);
    assert_eq!(stats.scale_share(ScaleBucket::Large), 0.0);
}

#[test]
fn buckets_partition_the_sweep() {
    let stats = sweep(0..3000, ContainerSize::default());
    assert_eq!(stats.total, 3000);
    assert_eq!(stats.cardinal + stats.diagonal + stats.free, 3000);
    assert_eq!(stats.small + stats.medium + stats.large, 3000);
    assert_eq!(stats.frames.iter().sum::<u64>(), 3000);
    assert_eq!(stats.hue_bins.iter().sum::<u64>(), 3000);
    assert!(stats.jittered >= stats.cardinal);
}

#[test]
fn frames_cycle_evenly_over_whole_periods() {
    let stats = sweep(0..1500, ContainerSize::default());
    assert!(stats.frames.iter().all(|&n| n == 100));
}

#[test]
fn scale_split_is_roughly_quarter_half_quarter() {
    let stats = sweep(0..10_000, ContainerSize::default());
    assert!((stats.scale_share(ScaleBucket::Medium) - 0.50).abs() < 0.05);
    assert!((stats.scale_share(ScaleBucket::Small) - 0.25).abs() < 0.05);
    assert!((stats.scale_share(ScaleBucket::Large) - 0.25).abs() < 0.05);
}
