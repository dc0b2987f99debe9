//! Procedural point-sprite texture.
//!
//! Every particle samples the same soft disc: a white radial gradient whose
//! alpha falls from 1.0 at the center to 0.6 at 40 % of the radius and to 0.0
//! at the rim. It is generated once, uploaded once, and shared.
//!
//! ```ignore
//! use mote::textures::SpriteTexture;
//!
//! let sprite = SpriteTexture::soft_disc(64);
//! assert_eq!(sprite.data().len(), 64 * 64 * 4);
//! ```

use image::{Rgba, RgbaImage};

/// Default edge length of the sprite, in pixels.
pub const DEFAULT_SPRITE_SIZE: u32 = 64;

/// Gradient stops as `(fraction of radius, alpha)`.
const DISC_STOPS: [(f32, f32); 3] = [(0.0, 1.0), (0.4, 0.6), (1.0, 0.0)];

/// An RGBA8 sprite ready for upload.
///
/// The GPU samples it with linear filtering, clamped to the edge.
#[derive(Debug, Clone)]
pub struct SpriteTexture {
    image: RgbaImage,
}

impl SpriteTexture {
    /// Rasterize the soft disc at `size` x `size` pixels.
    ///
    /// Pixels are sampled at their centers, so the result is symmetric.
    pub fn soft_disc(size: u32) -> Self {
        let radius = size as f32 / 2.0;
        let image = RgbaImage::from_fn(size, size, |x, y| {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let t = (dx * dx + dy * dy).sqrt() / radius;
            let alpha = (disc_alpha(t) * 255.0).round() as u8;
            Rgba([255, 255, 255, alpha])
        });

        Self { image }
    }

    /// Texture width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Texture height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA pixel data, row-major, 4 bytes per pixel.
    pub fn data(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Alpha of the pixel at `(x, y)`.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y)[3]
    }
}

impl Default for SpriteTexture {
    fn default() -> Self {
        Self::soft_disc(DEFAULT_SPRITE_SIZE)
    }
}

/// Alpha of the disc gradient at `t` (distance / radius).
fn disc_alpha(t: f32) -> f32 {
    if t <= DISC_STOPS[0].0 {
        return DISC_STOPS[0].1;
    }
    for pair in DISC_STOPS.windows(2) {
        let (t0, a0) = pair[0];
        let (t1, a1) = pair[1];
        if t <= t1 {
            return a0 + (a1 - a0) * (t - t0) / (t1 - t0);
        }
    }
    DISC_STOPS[DISC_STOPS.len() - 1].1
}
