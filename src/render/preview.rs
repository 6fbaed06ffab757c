//! CPU raster preview of a key image.
//!
//! Reproduces what the browser shows: the sprite `<img>` sits at the
//! container's origin with the generated width and height, is moved and
//! rotated about its own centre, hue-rotated, sampled without smoothing and
//! clipped to the square container.

use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    foundation::core::{Affine, ContainerSize, Point, Rgba8Premul, Seed, Vec2},
    foundation::error::{KeyImageError, KeyImageResult},
    generator::params::{ImageParams, generate},
    present::style::SpriteSheet,
    render::{
        composite::{over, premultiply_in_place, unpremultiply_in_place},
        filter::hue_rotate_in_place,
    },
};

/// Largest preview edge we are willing to allocate.
pub const MAX_PREVIEW_PX: u32 = 8192;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Straight RGBA background; transparent when `None`.
    pub clear_rgba: Option<[u8; 4]>,
    pub apply_hue: bool,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            clear_rgba: None,
            apply_hue: true,
        }
    }
}

/// One decoded sprite frame, premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct SpriteFrame {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl SpriteFrame {
    pub fn from_premul(width: u32, height: u32, rgba8_premul: Vec<u8>) -> KeyImageResult<Self> {
        if width == 0 || height == 0 {
            return Err(KeyImageError::render("sprite frame must be non-empty"));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| KeyImageError::render("sprite frame size overflow"))?;
        if rgba8_premul.len() != expected {
            return Err(KeyImageError::render(
                "sprite frame buffer must be width*height*4 bytes",
            ));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let d = &self.rgba8_premul[i..i + 4];
        [d[0], d[1], d[2], d[3]]
    }
}

/// Decode encoded image bytes (PNG in practice) into a premultiplied frame.
pub fn decode_frame(bytes: &[u8]) -> KeyImageResult<SpriteFrame> {
    let dyn_img = image::load_from_memory(bytes).context("decode sprite frame")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    premultiply_in_place(&mut data);
    SpriteFrame::from_premul(width, height, data)
}

/// Read and decode `frame` from the sheet's frame directory.
#[tracing::instrument(skip(sheet), fields(dir = %sheet.frames_dir.display()))]
pub fn load_frame(sheet: &SpriteSheet, frame: u8) -> KeyImageResult<SpriteFrame> {
    let path = sheet.frame_path(frame);
    let bytes =
        std::fs::read(&path).with_context(|| format!("read sprite frame '{}'", path.display()))?;
    decode_frame(&bytes)
}

/// Rendered preview, premultiplied RGBA8, `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PreviewImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_in_place(&mut out);
        out
    }

    pub fn save_png(&self, path: &Path) -> KeyImageResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Transform from sprite element space (`[0,w] x [0,h]`) to container space.
pub fn sprite_transform(params: &ImageParams) -> Affine {
    let center = Vec2::new(params.width / 2.0, params.height / 2.0);
    // translate(offset) rotate(theta) with the origin at the element centre.
    Affine::translate(params.offset() + center)
        * Affine::rotate(params.rotation_rad())
        * Affine::translate(-center)
}

/// Rasterize `sprite` placed by `params` into a `container`-sized square.
#[tracing::instrument(skip(sprite), fields(frame = params.frame))]
pub fn render_preview(
    params: &ImageParams,
    container: ContainerSize,
    sprite: &SpriteFrame,
    settings: &PreviewSettings,
) -> KeyImageResult<PreviewImage> {
    let extent = container.pixel_extent();
    if extent > MAX_PREVIEW_PX {
        return Err(KeyImageError::render(format!(
            "preview size {extent}px exceeds {MAX_PREVIEW_PX}px"
        )));
    }

    let mut texels = sprite.rgba8_premul.as_ref().clone();
    if settings.apply_hue {
        hue_rotate_in_place(&mut texels, params.hue_deg)?;
    }
    let filtered = SpriteFrame::from_premul(sprite.width, sprite.height, texels)?;

    let clear = settings
        .clear_rgba
        .map(|[r, g, b, a]| Rgba8Premul::from_straight_rgba(r, g, b, a))
        .unwrap_or_else(Rgba8Premul::transparent)
        .to_array();

    let inverse = sprite_transform(params).inverse();
    let sx = f64::from(sprite.width) / params.width;
    let sy = f64::from(sprite.height) / params.height;

    let mut data = Vec::with_capacity((extent as usize) * (extent as usize) * 4);
    for y in 0..extent {
        for x in 0..extent {
            let local = inverse * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let px = match sample_nearest(&filtered, local, params, sx, sy) {
                Some(texel) => over(clear, texel),
                None => clear,
            };
            data.extend_from_slice(&px);
        }
    }

    tracing::debug!(extent, "preview rendered");
    Ok(PreviewImage {
        width: extent,
        height: extent,
        data,
    })
}

fn sample_nearest(
    sprite: &SpriteFrame,
    local: Point,
    params: &ImageParams,
    sx: f64,
    sy: f64,
) -> Option<[u8; 4]> {
    if local.x < 0.0 || local.y < 0.0 || local.x >= params.width || local.y >= params.height {
        return None;
    }
    let tx = ((local.x * sx).floor() as u32).min(sprite.width - 1);
    let ty = ((local.y * sy).floor() as u32).min(sprite.height - 1);
    Some(sprite.texel(tx, ty))
}

/// Generate, load and rasterize the key image for `seed`.
pub fn render_key_image(
    seed: Seed,
    container: ContainerSize,
    sheet: &SpriteSheet,
    settings: &PreviewSettings,
) -> KeyImageResult<PreviewImage> {
    let params = generate(seed, container);
    let sprite = load_frame(sheet, params.frame)?;
    render_preview(&params, container, &sprite, settings)
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
