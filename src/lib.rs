//! keyimage turns a content entry's integer seed into a decorative key image.
//!
//! Every entry on the site carries a seed in `0..=9999`. From that seed and the
//! pixel size of the square container the image is shown in, the generator
//! derives which of 15 sprite frames to show, how to rotate, scale and offset
//! it, and how far to rotate its hue.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: `Seed + ContainerSize -> ImageParams` (pure, O(1))
//! 2. **Present**: `ImageParams -> frame URL + inline CSS` ([`css_style`], [`KeyImageMarkup`])
//! 3. **Preview** (optional): `ImageParams + SpriteFrame -> PreviewImage` on the CPU
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Reproducible**: the same `(seed, container)` always yields the same bits;
//!   nothing reads clocks, ambient randomness or global state.
//! - **Fixed draw protocol**: each decision owns one sequence index ([`Channel`]).
//! - **No IO in the generator**: file access is limited to [`load_frame`] and
//!   [`SpriteSheet::load`].
#![forbid(unsafe_code)]

mod foundation;
mod generator;
mod present;
mod render;

pub use foundation::core::{Affine, ContainerSize, Point, Rgba8Premul, Seed, Size, Vec2};
pub use foundation::error::{KeyImageError, KeyImageResult};
pub use generator::fingerprint::{fingerprint_params, fingerprint_sweep};
pub use generator::params::{
    BASE_SIZE, BASELINE_CONTAINER_PX, FRAME_COUNT, ImageParams, MAX_JITTER_PX, RotationKind,
    ScaleBucket, center_offset, generate, generate_image_params, rotated_bounds, select_frame,
    select_hue, select_jitter, select_rotation, select_scale,
};
pub use generator::seed::{SEED_MAX, SEED_MIN, parse_seed_input, random_seed, random_seed_thread};
pub use generator::sequence::{Channel, draw, pseudo_random};
pub use generator::stats::{HUE_BIN_DEG, SweepStats, sweep};
pub use present::style::{KeyImageMarkup, SpriteSheet, css_style, frame_file_name, to_fixed_2};
pub use render::composite::{PremulRgba8, over, premultiply_in_place, unpremultiply_in_place};
pub use render::filter::{HueRotate, hue_rotate_in_place};
pub use render::preview::{
    MAX_PREVIEW_PX, PreviewImage, PreviewSettings, SpriteFrame, decode_frame, load_frame,
    render_key_image, render_preview, sprite_transform,
};
