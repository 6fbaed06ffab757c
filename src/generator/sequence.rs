//! Deterministic sub-random sequence keyed by `(seed, channel)`.
//!
//! This is the classic "hash via sine" trick: cheap, stable across runs and
//! visually acceptable, but neither cryptographic nor rigorously uniform. The
//! constants are part of the output contract; changing them changes every
//! published key image.

use crate::foundation::core::Seed;

const SEED_WEIGHT: f64 = 12.9898;
const INDEX_WEIGHT: f64 = 78.233;
const AMPLITUDE: f64 = 43758.5453;

/// Fixed assignment of draw indices to decisions.
///
/// Every decision owns exactly one index. Indices are never reused and never
/// renumbered, even when a branch skips its draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    /// Cardinal / diagonal / free split.
    RotationKind = 1,
    /// Which of 0/90/180/270.
    CardinalVariant = 2,
    /// Which of 45/135/225/315.
    DiagonalVariant = 3,
    /// Any whole degree in `[0, 359]`.
    FreeAngle = 4,
    /// Base scale bucket.
    Scale = 5,
    /// Horizontal jitter, cardinal rotations only.
    JitterX = 6,
    /// Vertical jitter, cardinal rotations only.
    JitterY = 7,
    /// Hue rotation.
    Hue = 8,
}

impl Channel {
    /// All channels in index order.
    pub const ALL: [Channel; 8] = [
        Channel::RotationKind,
        Channel::CardinalVariant,
        Channel::DiagonalVariant,
        Channel::FreeAngle,
        Channel::Scale,
        Channel::JitterX,
        Channel::JitterY,
        Channel::Hue,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Raw sequence value for an arbitrary `index`, in `[0, 1)`.
///
/// `x = sin(seed * 12.9898 + index * 78.233) * 43758.5453`, returns `x - floor(x)`.
pub fn pseudo_random(seed: Seed, index: u32) -> f64 {
    let x = (seed.as_f64() * SEED_WEIGHT + f64::from(index) * INDEX_WEIGHT).sin() * AMPLITUDE;
    let frac = x - x.floor();
    // `x - floor(x)` can round up to exactly 1.0 for tiny negative x.
    if frac >= 1.0 { 0.0 } else { frac }
}

/// Draw for a named decision.
pub fn draw(seed: Seed, channel: Channel) -> f64 {
    pseudo_random(seed, channel.index())
}

#[cfg(test)]
#[path = "../../tests/unit/generator/sequence.rs"]
mod tests;
