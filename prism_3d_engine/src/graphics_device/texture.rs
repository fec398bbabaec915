/// Texture trait, formats and descriptor

/// Pixel format of a 2D texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// 1 channel, 8 bits
    R8,
    /// 2 channels, 8 bits each
    RG8,
    /// 3 channels, 8 bits each
    RGB8,
    /// 4 channels, 8 bits each
    RGBA8,
    /// Packed depth + stencil
    Depth24Stencil8,
}

impl TextureFormat {
    /// Bytes per pixel
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::R8 => 1,
            TextureFormat::RG8 => 2,
            TextureFormat::RGB8 => 3,
            TextureFormat::RGBA8 => 4,
            TextureFormat::Depth24Stencil8 => 4,
        }
    }

    /// Color format for a decoded image with `channels` channels
    ///
    /// Returns `None` outside 1..=4.
    pub fn for_channels(channels: u8) -> Option<TextureFormat> {
        match channels {
            1 => Some(TextureFormat::R8),
            2 => Some(TextureFormat::RG8),
            3 => Some(TextureFormat::RGB8),
            4 => Some(TextureFormat::RGBA8),
            _ => None,
        }
    }
}

/// Opaque presentable texture name, handed to the editor viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Descriptor for creating a texture
#[derive(Debug, Clone)]
pub struct TextureDesc<'a> {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Tightly packed rows, bottom row first (GL origin)
    pub data: Option<&'a [u8]>,
    /// Sample count; greater than 1 creates a multisample texture without data
    pub samples: u32,
    /// Build the full mip chain after upload
    pub generate_mipmaps: bool,
}

impl<'a> TextureDesc<'a> {
    /// Expected byte length of `data`
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.format.bytes_per_pixel() as usize
    }
}

/// GPU 2D texture, released when dropped
pub trait Texture {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Pixel format
    fn format(&self) -> TextureFormat;

    /// Sample count (1 for regular textures)
    fn samples(&self) -> u32;

    /// Backend object name
    fn raw_id(&self) -> u32;

    /// Presentable handle
    fn handle(&self) -> TextureHandle {
        TextureHandle(self.raw_id())
    }
}
