use crate::{
    foundation::core::{ContainerSize, Seed, Size, Vec2},
    foundation::error::KeyImageResult,
    generator::sequence::{Channel, draw},
};

/// Number of sprite frames in the sheet.
pub const FRAME_COUNT: i64 = 15;
/// Native sprite frame size in pixels.
pub const BASE_SIZE: Size = Size::new(192.0, 256.0);
/// Container size the scale buckets were tuned against.
pub const BASELINE_CONTAINER_PX: f64 = 80.0;
/// Largest jitter applied to cardinal placements, per axis.
pub const MAX_JITTER_PX: f64 = 20.0;

/// Orientation bucket picked by [`Channel::RotationKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationKind {
    /// Multiple of 90 degrees (50%).
    Cardinal,
    /// 45 degrees off a multiple of 90 (25%).
    Diagonal,
    /// Any whole degree (25%).
    Free,
}

/// Base scale bucket picked by [`Channel::Scale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleBucket {
    /// 1.5x (25%).
    Small,
    /// 2.0x (50%).
    Medium,
    /// 2.5x (25%).
    Large,
}

impl ScaleBucket {
    pub fn factor(self) -> f64 {
        match self {
            ScaleBucket::Small => 1.5,
            ScaleBucket::Medium => 2.0,
            ScaleBucket::Large => 2.5,
        }
    }
}

/// How to place one sprite frame inside a square container.
///
/// All values are unrounded; presentation layers round for display only.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageParams {
    pub frame: u8,
    pub rotation_deg: u16,
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub hue_deg: u16,
}

impl ImageParams {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    pub fn rotation_rad(&self) -> f64 {
        degrees_to_radians(self.rotation_deg)
    }

    /// Whether this placement carries positional jitter.
    pub fn is_cardinal(&self) -> bool {
        self.rotation_deg % 90 == 0
    }
}

/// Compute the key-image parameters for `seed` in a `container`-sized box.
#[tracing::instrument(level = "trace")]
pub fn generate(seed: Seed, container: ContainerSize) -> ImageParams {
    let frame = select_frame(seed);
    let (kind, rotation_deg) = select_rotation(seed);
    let bucket = select_scale(seed);

    let zoom = container.px() / BASELINE_CONTAINER_PX;
    let scale = bucket.factor() * zoom;
    let size = Size::new(BASE_SIZE.width * scale, BASE_SIZE.height * scale);

    let center = center_offset(size, rotation_deg, container);
    let jitter = select_jitter(seed, rotation_deg);
    let hue_deg = select_hue(seed);

    tracing::trace!(?kind, ?bucket, rotation_deg, hue_deg, "key image branches");

    ImageParams {
        frame,
        rotation_deg,
        width: size.width,
        height: size.height,
        offset_x: center.x + jitter.x,
        offset_y: center.y + jitter.y,
        hue_deg,
    }
}

/// Same as [`generate`] for raw numbers, validating both at the boundary.
pub fn generate_image_params(seed: f64, container_px: f64) -> KeyImageResult<ImageParams> {
    let seed = Seed::from_f64(seed)?;
    let container = ContainerSize::new(container_px)?;
    Ok(generate(seed, container))
}

pub fn select_frame(seed: Seed) -> u8 {
    seed.0.rem_euclid(FRAME_COUNT) as u8
}

pub fn select_rotation(seed: Seed) -> (RotationKind, u16) {
    let r = draw(seed, Channel::RotationKind);
    if r < 0.5 {
        let variant = quantize(draw(seed, Channel::CardinalVariant), 4);
        (RotationKind::Cardinal, variant * 90)
    } else if r < 0.75 {
        let variant = quantize(draw(seed, Channel::DiagonalVariant), 4);
        (RotationKind::Diagonal, variant * 90 + 45)
    } else {
        (
            RotationKind::Free,
            quantize(draw(seed, Channel::FreeAngle), 360),
        )
    }
}

pub fn select_scale(seed: Seed) -> ScaleBucket {
    let r = draw(seed, Channel::Scale);
    if r < 0.5 {
        ScaleBucket::Medium
    } else if r < 0.75 {
        ScaleBucket::Small
    } else {
        ScaleBucket::Large
    }
}

/// Jitter for cardinal rotations; other rotations get zero and draw nothing.
pub fn select_jitter(seed: Seed, rotation_deg: u16) -> Vec2 {
    if rotation_deg % 90 != 0 {
        return Vec2::ZERO;
    }
    let jx = (draw(seed, Channel::JitterX) * 2.0 - 1.0) * MAX_JITTER_PX;
    let jy = (draw(seed, Channel::JitterY) * 2.0 - 1.0) * MAX_JITTER_PX;
    Vec2::new(jx, jy)
}

pub fn select_hue(seed: Seed) -> u16 {
    quantize(draw(seed, Channel::Hue), 360)
}

/// Axis-aligned bounds of a `size` rectangle rotated by `rotation_deg`.
pub fn rotated_bounds(size: Size, rotation_deg: u16) -> Size {
    let theta = degrees_to_radians(rotation_deg);
    let (sin, cos) = (theta.sin(), theta.cos());
    Size::new(
        (size.width * cos).abs() + (size.height * sin).abs(),
        (size.width * sin).abs() + (size.height * cos).abs(),
    )
}

/// Offset that centres the rotated bounds in the container. Negative when
/// the sprite overflows, which is expected.
pub fn center_offset(size: Size, rotation_deg: u16, container: ContainerSize) -> Vec2 {
    let bounds = rotated_bounds(size, rotation_deg);
    Vec2::new(
        (container.px() - bounds.width) / 2.0,
        (container.px() - bounds.height) / 2.0,
    )
}

fn degrees_to_radians(deg: u16) -> f64 {
    // `(deg * PI) / 180`, not `to_radians()`: the rounding must match stored previews.
    (f64::from(deg) * std::f64::consts::PI) / 180.0
}

fn quantize(r: f64, buckets: u16) -> u16 {
    ((r * f64::from(buckets)).floor() as u16).min(buckets - 1)
}

#[cfg(test)]
#[path = "../../tests/unit/generator/params.rs"]
mod tests;
