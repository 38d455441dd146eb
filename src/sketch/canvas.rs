use super::palette::Color;

/// Anything a line can be rasterized onto
pub(crate) trait Canvas {
    fn write_pixel(&mut self, x: i32, y: i32, color: Color);
}

/// CPU side pixel storage, 32 bits per pixel in RGBA byte order
///
/// Rows are tightly packed, so the pitch is always `width * 4` bytes.
/// Writes outside of the buffer are dropped.
pub(crate) struct Framebuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32
}

impl Framebuffer {
    pub(crate) const BITS_PER_PIXEL: u32 = 32;
    pub(crate) const BYTES_PER_PIXEL: usize = (Self::BITS_PER_PIXEL / 8) as usize;

    pub(crate) fn new(width: u32, height: u32, background: Color) -> Self {
        let mut framebuffer = Self {
            pixels: vec![0u8; width as usize * height as usize * Self::BYTES_PER_PIXEL],
            width,
            height
        };

        framebuffer.clear(background);
        framebuffer
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn pitch(&self) -> usize {
        self.width as usize * Self::BYTES_PER_PIXEL
    }

    pub(crate) fn pixels(&self) -> &[u8] {
        self.pixels.as_slice()
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let p = &self.pixels[offset..(offset + Self::BYTES_PER_PIXEL)];

        Some(Color::new(p[0], p[1], p[2]))
    }

    pub(crate) fn clear(&mut self, color: Color) {
        for p in self.pixels.chunks_exact_mut(Self::BYTES_PER_PIXEL) {
            p.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }

        Some(y as usize * self.pitch() + x as usize * Self::BYTES_PER_PIXEL)
    }
}

impl Canvas for Framebuffer {
    fn write_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(offset) = self.offset(x, y) {
            self.pixels[offset..(offset + Self::BYTES_PER_PIXEL)]
                .copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }
}
