//! Texture decoding and GPU-side texture records.

use std::path::Path;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, TextureDesc, TextureKey};

/// Decoded RGBA8 pixels, rows bottom-up
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decode an image file (PNG or JPEG) into bottom-up RGBA8
///
/// # Errors
///
/// `Error::ResourceLoad` naming the path when the file is missing or
/// cannot be decoded.
pub fn decode_image(path: &Path) -> Result<DecodedImage> {
    let image = image::open(path).map_err(|err| Error::ResourceLoad {
        resource: path.display().to_string(),
        reason: err.to_string(),
    })?;
    let rgba = image.flipv().into_rgba8();
    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

/// A texture living on the device
#[derive(Debug)]
pub struct Texture {
    name: String,
    key: TextureKey,
    width: u32,
    height: u32,
}

impl Texture {
    /// Upload decoded pixels
    pub fn upload(device: &mut dyn GraphicsDevice, name: &str, image: &DecodedImage) -> Result<Self> {
        let key = device.create_texture(&TextureDesc {
            name,
            width: image.width,
            height: image.height,
            rgba: &image.rgba,
        })?;
        Ok(Self {
            name: name.to_string(),
            key,
            width: image.width,
            height: image.height,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> TextureKey {
        self.key
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
