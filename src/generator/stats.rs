use std::ops::Range;

use crate::{
    foundation::core::{ContainerSize, Seed},
    generator::params::{
        FRAME_COUNT, RotationKind, ScaleBucket, generate, select_rotation, select_scale,
    },
};

/// Width of one hue histogram bin, in degrees.
pub const HUE_BIN_DEG: u16 = 30;

/// Histogram of generator decisions over a range of seeds.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SweepStats {
    pub total: u64,
    pub cardinal: u64,
    pub diagonal: u64,
    pub free: u64,
    pub small: u64,
    pub medium: u64,
    pub large: u64,
    /// Entries that received positional jitter (any rotation that is a multiple of 90).
    pub jittered: u64,
    pub frames: [u64; FRAME_COUNT as usize],
    pub hue_bins: [u64; 12],
}

impl SweepStats {
    pub fn rotation_count(&self, kind: RotationKind) -> u64 {
        match kind {
            RotationKind::Cardinal => self.cardinal,
            RotationKind::Diagonal => self.diagonal,
            RotationKind::Free => self.free,
        }
    }

    pub fn scale_count(&self, bucket: ScaleBucket) -> u64 {
        match bucket {
            ScaleBucket::Small => self.small,
            ScaleBucket::Medium => self.medium,
            ScaleBucket::Large => self.large,
        }
    }

    /// Fraction of the sweep that fell into `kind`; `0.0` for an empty sweep.
    pub fn share(&self, kind: RotationKind) -> f64 {
        ratio(self.rotation_count(kind), self.total)
    }

    pub fn scale_share(&self, bucket: ScaleBucket) -> f64 {
        ratio(self.scale_count(bucket), self.total)
    }
}

/// Count rotation, scale, jitter, frame and hue outcomes for every seed in `seeds`.
#[tracing::instrument]
pub fn sweep(seeds: Range<i64>, container: ContainerSize) -> SweepStats {
    let mut stats = SweepStats::default();
    for s in seeds {
        let seed = Seed(s);
        let params = generate(seed, container);
        stats.total += 1;

        match select_rotation(seed).0 {
            RotationKind::Cardinal => stats.cardinal += 1,
            RotationKind::Diagonal => stats.diagonal += 1,
            RotationKind::Free => stats.free += 1,
        }
        match select_scale(seed) {
            ScaleBucket::Small => stats.small += 1,
            ScaleBucket::Medium => stats.medium += 1,
            ScaleBucket::Large => stats.large += 1,
        }
        if params.is_cardinal() {
            stats.jittered += 1;
        }
        stats.frames[usize::from(params.frame)] += 1;
        stats.hue_bins[usize::from(params.hue_deg / HUE_BIN_DEG)] += 1;
    }
    tracing::debug!(total = stats.total, "sweep finished");
    stats
}

fn ratio(n: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    n as f64 / total as f64
}

#[cfg(test)]
#[path = "../../tests/unit/generator/stats.rs"]
mod tests;
