use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    foundation::error::{KeyImageError, KeyImageResult},
    generator::params::{FRAME_COUNT, ImageParams},
};

/// Where the sprite frames live, on disk and on the site.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpriteSheet {
    /// URL path the frames are served under, without trailing slash.
    pub url_prefix: String,
    /// Local directory holding `frame_00.png` .. `frame_14.png`.
    pub frames_dir: PathBuf,
    /// Classes on the wrapping element.
    pub container_class: String,
    /// Classes on the `<img>` element.
    pub img_class: String,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            url_prefix: "/dsanim-frames".to_string(),
            frames_dir: PathBuf::from("dsanim-frames"),
            container_class: "relative overflow-hidden".to_string(),
            img_class: "light-mode-invert".to_string(),
        }
    }
}

impl SpriteSheet {
    pub fn validate(&self) -> KeyImageResult<()> {
        if self.url_prefix.trim().is_empty() {
            return Err(KeyImageError::validation(
                "sprite sheet url_prefix must be non-empty",
            ));
        }
        if self.url_prefix.ends_with('/') {
            return Err(KeyImageError::validation(
                "sprite sheet url_prefix must not end with '/'",
            ));
        }
        if self.frames_dir.as_os_str().is_empty() {
            return Err(KeyImageError::validation(
                "sprite sheet frames_dir must be non-empty",
            ));
        }
        Ok(())
    }

    /// Read a sheet description from JSON. Missing keys take their defaults;
    /// a relative `frames_dir` is resolved against the JSON file's directory.
    pub fn load(path: &Path) -> KeyImageResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open sprite sheet '{}'", path.display()))?;
        let mut sheet: SpriteSheet = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| KeyImageError::serde(format!("parse sprite sheet JSON: {e}")))?;
        if sheet.frames_dir.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            sheet.frames_dir = base.join(&sheet.frames_dir);
        }
        sheet.validate()?;
        Ok(sheet)
    }

    pub fn frame_url(&self, frame: u8) -> String {
        format!("{}/{}", self.url_prefix, frame_file_name(frame))
    }

    pub fn frame_path(&self, frame: u8) -> PathBuf {
        self.frames_dir.join(frame_file_name(frame))
    }

    /// Every frame file name the generator can select.
    pub fn frame_file_names() -> impl Iterator<Item = String> {
        (0..FRAME_COUNT as u8).map(frame_file_name)
    }
}

/// `frame_NN.png`, zero padded to two digits.
pub fn frame_file_name(frame: u8) -> String {
    format!("frame_{frame:02}.png")
}

/// Inline style for the sprite `<img>`, in the form React writes on the server.
///
/// Lengths are shown with two decimals; rotation and hue are whole degrees.
pub fn css_style(params: &ImageParams) -> String {
    format!(
        "width:{}px;height:{}px;max-width:none;transform:translate({}px, {}px) rotate({}deg);--hue-rotate:{}deg;image-rendering:pixelated",
        to_fixed_2(params.width),
        to_fixed_2(params.height),
        to_fixed_2(params.offset_x),
        to_fixed_2(params.offset_y),
        params.rotation_deg,
        params.hue_deg,
    )
}

/// Two-decimal formatting with ties rounded away from zero and no negative zero,
/// matching `Number.prototype.toFixed(2)`.
pub fn to_fixed_2(v: f64) -> String {
    if v == 0.0 {
        return "0.00".to_string();
    }
    let mag = v.abs();
    // A binary float sits exactly halfway between hundredths only when it is an odd multiple of 1/8.
    let eighths = mag * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    if !is_tie {
        return format!("{v:.2}");
    }
    let hundredths = (mag * 100.0).ceil() as u64;
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Ready-to-embed markup for one key image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct KeyImageMarkup {
    pub src: String,
    pub style: String,
    pub container_class: String,
    pub img_class: String,
}

impl KeyImageMarkup {
    pub fn new(params: &ImageParams, sheet: &SpriteSheet) -> Self {
        Self {
            src: sheet.frame_url(params.frame),
            style: css_style(params),
            container_class: sheet.container_class.clone(),
            img_class: sheet.img_class.clone(),
        }
    }

    /// Append caller classes (sizing, rounding) to the wrapper.
    pub fn with_class(mut self, class: &str) -> Self {
        let class = class.trim();
        if !class.is_empty() {
            if !self.container_class.is_empty() {
                self.container_class.push(' ');
            }
            self.container_class.push_str(class);
        }
        self
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="{}"><img src="{}" alt="" class="{}" style="{}"/></div>"#,
            escape_attr(&self.container_class),
            escape_attr(&self.src),
            escape_attr(&self.img_class),
            escape_attr(&self.style),
        )
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/present/style.rs"]
mod tests;
