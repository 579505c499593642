//! Decoded raster textures and tiled sampling.

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How texture coordinates outside `[0, size)` are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileMode {
    /// Repeat the edge texel.
    #[default]
    Clamp,
    /// Wrap around.
    Repeat,
    /// Wrap around, flipping every other tile.
    Mirror,
}

impl TileMode {
    /// Map an integer texel coordinate into `[0, len)`.
    ///
    /// `len` must be non-zero.
    #[must_use]
    pub fn resolve(self, coord: i64, len: u32) -> u32 {
        let len = i64::from(len);
        let idx = match self {
            Self::Clamp => coord.clamp(0, len - 1),
            Self::Repeat => coord.rem_euclid(len),
            Self::Mirror => {
                let m = coord.rem_euclid(2 * len);
                if m < len {
                    m
                } else {
                    2 * len - 1 - m
                }
            }
        };
        idx as u32
    }
}

/// An RGBA8 pixel buffer shared by every paint that samples it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    /// Asset name the texture was decoded from
    pub name: String,
    /// Width in texels
    pub width: u32,
    /// Height in texels
    pub height: u32,
    #[serde(skip)]
    pixels: Arc<Vec<u8>>,
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

impl Texture {
    /// Wrap an RGBA8 buffer.
    ///
    /// Returns `None` when the buffer length does not match
    /// `width * height * 4`.
    #[must_use]
    pub fn from_rgba8(
        name: impl Into<String>,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if pixels.len() != expected {
            return None;
        }
        Some(Self {
            name: name.into(),
            width,
            height,
            pixels: Arc::new(pixels),
        })
    }

    /// A texture filled with a single color.
    #[must_use]
    pub fn solid(name: impl Into<String>, width: u32, height: u32, color: Color) -> Self {
        let texel = color.to_rgba8();
        let count = width as usize * height as usize;
        let pixels = texel.iter().copied().cycle().take(count * 4).collect();
        Self {
            name: name.into(),
            width,
            height,
            pixels: Arc::new(pixels),
        }
    }

    /// Whether the texture has no texels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Raw RGBA8 bytes, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fetch one texel, or `None` if out of range.
    #[must_use]
    pub fn texel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let bytes = self.pixels.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Sample at a position in texel space with nearest filtering.
    ///
    /// Empty textures sample as transparent.
    #[must_use]
    pub fn sample(&self, x: f32, y: f32, tile_x: TileMode, tile_y: TileMode) -> Color {
        if self.is_empty() || !x.is_finite() || !y.is_finite() {
            return Color::TRANSPARENT;
        }
        let tx = tile_x.resolve(x.floor() as i64, self.width);
        let ty = tile_y.resolve(y.floor() as i64, self.height);
        self.texel(tx, ty)
            .map_or(Color::TRANSPARENT, Color::from_rgba8)
    }
}
