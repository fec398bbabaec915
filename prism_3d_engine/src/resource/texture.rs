/// Resource-level texture
///
/// Wraps one GPU 2D texture together with its source path and pixel format.
/// Files are decoded with the `image` crate, flipped to GL's bottom-up row
/// order, uploaded and mipmapped. A file that cannot be decoded yields a blank
/// 1x1 texture instead of an error, so one bad asset never takes down a pool.

use std::path::Path;
use crate::error::{Error, Result};
use crate::graphics_device::{self, GraphicsDevice, TextureDesc, TextureFormat, TextureHandle};
use crate::{engine_debug, engine_error};

/// Opaque white, used for textures whose file failed to decode
const BLANK_PIXEL: [u8; 4] = [255, 255, 255, 255];

/// Decoded, flipped pixel data ready for upload
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub pixels: Vec<u8>,
}

/// Decode an image file into tightly packed rows, bottom row first
///
/// The format follows the channel count of the file: 1 → R8, 2 → RG8,
/// 3 → RGB8, 4 → RGBA8. Deeper sample types are reduced to 8 bits.
pub fn decode_image(path: &Path) -> Result<DecodedImage> {
    let image = image::open(path)
        .map_err(|e| Error::AssetMissing(format!("{}: {}", path.display(), e)))?
        .flipv();

    let channels = image.color().channel_count();
    let format = TextureFormat::for_channels(channels).ok_or_else(|| {
        Error::InvalidResource(format!("{}: unsupported channel count {}", path.display(), channels))
    })?;

    let (width, height) = (image.width(), image.height());
    let pixels = match format {
        TextureFormat::R8 => image.into_luma8().into_raw(),
        TextureFormat::RG8 => image.into_luma_alpha8().into_raw(),
        TextureFormat::RGB8 => image.into_rgb8().into_raw(),
        _ => image.into_rgba8().into_raw(),
    };

    Ok(DecodedImage { width, height, format, pixels })
}

pub struct Texture {
    path: String,
    gpu: Box<dyn graphics_device::Texture>,
    blank: bool,
}

impl Texture {
    /// Load a texture from an image file
    ///
    /// Decode failures are logged and produce a blank texture; only a GPU-side
    /// creation failure is returned as an error.
    pub fn from_file(device: &dyn GraphicsDevice, path: &Path) -> Result<Self> {
        let label = path.to_string_lossy().into_owned();
        match decode_image(path) {
            Ok(decoded) => {
                let texture = Self::from_pixels(
                    device,
                    &label,
                    decoded.width,
                    decoded.height,
                    decoded.format,
                    &decoded.pixels,
                )?;
                engine_debug!(
                    "prism3d::Texture",
                    "Loaded '{}' ({}x{}, {:?})",
                    label, decoded.width, decoded.height, decoded.format
                );
                Ok(texture)
            }
            Err(e) => {
                engine_error!("prism3d::Texture", "Failed to load texture '{}': {}", label, e);
                Self::blank(device, &label)
            }
        }
    }

    /// Create a texture from decoded pixels (bottom row first), with mipmaps
    pub fn from_pixels(
        device: &dyn GraphicsDevice,
        label: &str,
        width: u32,
        height: u32,
        format: TextureFormat,
        pixels: &[u8],
    ) -> Result<Self> {
        let gpu = device.create_texture(&TextureDesc {
            width,
            height,
            format,
            data: Some(pixels),
            samples: 1,
            generate_mipmaps: true,
        })?;
        Ok(Self { path: label.to_string(), gpu, blank: false })
    }

    /// 1x1 white RGBA placeholder
    pub fn blank(device: &dyn GraphicsDevice, label: &str) -> Result<Self> {
        let mut texture = Self::from_pixels(device, label, 1, 1, TextureFormat::RGBA8, &BLANK_PIXEL)?;
        texture.blank = true;
        Ok(texture)
    }

    /// Source path (or label for in-memory textures)
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.gpu.width()
    }

    pub fn height(&self) -> u32 {
        self.gpu.height()
    }

    pub fn format(&self) -> TextureFormat {
        self.gpu.format()
    }

    /// True when the source failed to decode
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// GPU texture for binding
    pub fn gpu(&self) -> &dyn graphics_device::Texture {
        self.gpu.as_ref()
    }

    pub fn handle(&self) -> TextureHandle {
        self.gpu.handle()
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
