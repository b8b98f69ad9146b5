use crate::ass::Pixel;
use crate::error::ConvertError;

use std::io::{self, Read};

use image::RgbaImage;

/// A decoded image, normalised to 8-bit RGBA.
pub struct DecodedImage {
    buffer: RgbaImage,
}

impl DecodedImage {
    /// Decodes the image at `path`, or from standard input if `path` is `-`.
    pub fn open(path: &str) -> Result<Self, ConvertError> {
        if path == "-" {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            return Self::from_bytes(&data);
        }
        let img = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?;
        Ok(Self {
            buffer: img.to_rgba8(),
        })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, ConvertError> {
        let img = image::load_from_memory(data)?;
        Ok(Self {
            buffer: img.to_rgba8(),
        })
    }

    pub fn width(&self) -> usize {
        self.buffer.width() as usize
    }

    pub fn height(&self) -> usize {
        self.buffer.height() as usize
    }

    /// Yields one row of pixels at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Pixel>> + '_ {
        self.buffer
            .rows()
            .map(|row| row.map(|px| Pixel::from(*px)).collect())
    }
}
