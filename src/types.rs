// Screen-side buffer the window displays.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the window is (pixels)
    pub height: usize,     // how tall the window is (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer filled with one packed color.
    pub fn new(width: usize, height: usize, fill: u32) -> Self {
        Self { width, height, pixels: vec![fill; width * height] }
    }

    pub fn clear(&mut self, fill: u32) {
        self.pixels.fill(fill);
    }
}

/// Pack 8-bit channels as 0x00RRGGBB.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}
