use crate::foundation::error::{KeyImageError, KeyImageResult};

pub use kurbo::{Affine, Point, Size, Vec2};

/// Integer seed driving every pseudo-random decision for one content entry.
///
/// Any `i64` is accepted by the generator. The authoring range is enforced
/// separately by [`Seed::authored`](crate::Seed::authored).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Seed(pub i64);

impl Seed {
    /// Accept a seed stored as a JSON/JS number.
    ///
    /// Rejects NaN, infinities, fractional values and values outside `i64`.
    pub fn from_f64(v: f64) -> KeyImageResult<Self> {
        if !v.is_finite() {
            return Err(KeyImageError::invalid_argument(format!(
                "seed must be finite, got {v}"
            )));
        }
        if v.fract() != 0.0 {
            return Err(KeyImageError::invalid_argument(format!(
                "seed must be an integer, got {v}"
            )));
        }
        // 2^63 is exactly representable; i64 covers [-2^63, 2^63).
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        if !(-LIMIT..LIMIT).contains(&v) {
            return Err(KeyImageError::invalid_argument(format!(
                "seed {v} does not fit in a 64-bit integer"
            )));
        }
        Ok(Self(v as i64))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl From<i64> for Seed {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

/// Side length in pixels of the square container the key image is placed in.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ContainerSize(f64);

impl ContainerSize {
    /// Container size used by the entry page.
    pub const DEFAULT_PX: f64 = 128.0;

    pub fn new(px: f64) -> KeyImageResult<Self> {
        if !px.is_finite() {
            return Err(KeyImageError::invalid_argument(format!(
                "container size must be finite, got {px}"
            )));
        }
        if px <= 0.0 {
            return Err(KeyImageError::invalid_argument(format!(
                "container size must be > 0, got {px}"
            )));
        }
        Ok(Self(px))
    }

    pub fn px(self) -> f64 {
        self.0
    }

    /// Whole pixels needed to hold the container (rounded up).
    pub fn pixel_extent(self) -> u32 {
        self.0.ceil().min(f64::from(u32::MAX)) as u32
    }
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self(Self::DEFAULT_PX)
    }
}

impl TryFrom<f64> for ContainerSize {
    type Error = KeyImageError;

    fn try_from(px: f64) -> KeyImageResult<Self> {
        Self::new(px)
    }
}

impl From<ContainerSize> for f64 {
    fn from(c: ContainerSize) -> Self {
        c.0
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
