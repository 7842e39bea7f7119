//! Logo probing: decide whether header image bytes can be embedded.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use super::markup::inches_to_emu;

/// Raster formats WordprocessingML consumers display natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl ImageKind {
    pub(crate) fn extension(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpeg",
            ImageKind::Gif => "gif",
            ImageKind::Bmp => "bmp",
        }
    }

    pub(crate) fn content_type(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Gif => "image/gif",
            ImageKind::Bmp => "image/bmp",
        }
    }

    fn from_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Png => Some(ImageKind::Png),
            ImageFormat::Jpeg => Some(ImageKind::Jpeg),
            ImageFormat::Gif => Some(ImageKind::Gif),
            ImageFormat::Bmp => Some(ImageKind::Bmp),
            _ => None,
        }
    }
}

/// A decoded logo ready to embed.
#[derive(Debug, Clone)]
pub(crate) struct LogoImage {
    pub(crate) bytes: Vec<u8>,
    pub(crate) kind: ImageKind,
    pub(crate) width_px: u32,
    pub(crate) height_px: u32,
}

impl LogoImage {
    /// Part name inside the package.
    pub(crate) fn part_name(&self) -> String {
        format!("media/logo.{}", self.kind.extension())
    }

    /// Display extent in EMU at the given width, keeping the aspect ratio.
    pub(crate) fn extent_emu(&self, width_in: f32) -> (u64, u64) {
        let width = inches_to_emu(width_in);
        let height = width * u64::from(self.height_px) / u64::from(self.width_px.max(1));
        (width, height.max(1))
    }
}

/// Check that the logo bytes can be embedded and read their pixel size.
///
/// # Errors
///
/// Returns a human-readable reason when the format is unknown, unsupported in
/// documents, or the data does not decode.
pub(crate) fn probe_logo(bytes: &[u8]) -> Result<LogoImage, String> {
    let reader = open(bytes)?;
    let format = reader
        .format()
        .ok_or_else(|| "unrecognized image format".to_string())?;
    let kind = ImageKind::from_format(format)
        .ok_or_else(|| format!("{:?} images cannot be embedded", format))?;

    // Header only, no pixel buffer.
    let (width_px, height_px) = reader
        .into_dimensions()
        .map_err(|e| format!("cannot read {:?} header: {}", format, e))?;
    if width_px == 0 || height_px == 0 {
        return Err("image has no pixels".to_string());
    }

    // A readable header does not mean intact pixel data; a truncated file would
    // embed as a broken picture, so the data is decoded once and dropped.
    open(bytes)?
        .decode()
        .map_err(|e| format!("cannot decode {:?} image: {}", format, e))?;

    Ok(LogoImage {
        bytes: bytes.to_vec(),
        kind,
        width_px,
        height_px,
    })
}

fn open(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, String> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| format!("cannot read image: {}", e))
}
