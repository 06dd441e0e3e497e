// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window showing reference | drawing | result side by side.
// 2) Keyboard controls standing in for the color and tolerance sliders.
// 3) A tiny 5x7 bitmap font to render the HUD under the panels.

use crate::error::Error;
use crate::session::Channel;
use crate::types::{FrameBuffer, pack_rgb};
use image::RgbaImage;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

/// One control change requested from the keyboard this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    Model(Channel, i16),
    User(Channel, i16),
    Tolerance(f64),
    Reset,
}

// Key pairs (increase, decrease) per channel, like a slider nudged either way.
const MODEL_KEYS: [(Key, Key, Channel); 3] = [
    (Key::Q, Key::A, Channel::Red),
    (Key::W, Key::S, Channel::Green),
    (Key::E, Key::D, Channel::Blue),
];
const USER_KEYS: [(Key, Key, Channel); 3] = [
    (Key::U, Key::J, Channel::Red),
    (Key::I, Key::K, Channel::Green),
    (Key::O, Key::L, Channel::Blue),
];

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // Nothing blocks in our loop, so let minifb pace it.
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    fn shift_down(&self) -> bool {
        self.window.is_key_down(Key::LeftShift) || self.window.is_key_down(Key::RightShift)
    }

    /// Every control change pressed (or auto-repeated while held) since the last update.
    /// Holding Shift makes each step ten times larger.
    pub fn controls(&self) -> Vec<Control> {
        let step: i16 = if self.shift_down() { 10 } else { 1 };
        let pressed = |key| self.window.is_key_pressed(key, KeyRepeat::Yes);
        let mut out = Vec::new();

        for (up, down, channel) in MODEL_KEYS {
            if pressed(up) { out.push(Control::Model(channel, step)); }
            if pressed(down) { out.push(Control::Model(channel, -step)); }
        }
        for (up, down, channel) in USER_KEYS {
            if pressed(up) { out.push(Control::User(channel, step)); }
            if pressed(down) { out.push(Control::User(channel, -step)); }
        }
        if pressed(Key::Up) { out.push(Control::Tolerance(step as f64)); }
        if pressed(Key::Down) { out.push(Control::Tolerance(-(step as f64))); }
        if self.window.is_key_pressed(Key::Backspace, KeyRepeat::No) {
            out.push(Control::Reset);
        }
        out
    }
}

/* ---------- Software drawing: pixels, panels, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// One-pixel outline just outside a w x h panel placed at (x,y).
pub fn draw_outline(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    let (l, t, r, b) = (x - 1, y - 1, x + w, y + h);
    draw_line(fb, l, t, r, t, color);
    draw_line(fb, l, b, r, b, color);
    draw_line(fb, l, t, l, b, color);
    draw_line(fb, r, t, r, b, color);
}

/// Filled rectangle, clipped to the framebuffer.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for yy in y..y + h {
        for xx in x..x + w {
            put_pixel(fb, xx, yy, color);
        }
    }
}

/// Copy an RGBA image onto the framebuffer at (x,y), alpha-blended over `page`.
/// Visual: transparent canvas areas show the page color, opaque ones show the pixel.
pub fn blit_rgba(fb: &mut FrameBuffer, img: &RgbaImage, x: i32, y: i32, page: u32) {
    let pr = (page >> 16) & 0xFF;
    let pg = (page >> 8) & 0xFF;
    let pb = page & 0xFF;

    for (px, py, pixel) in img.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let (a, inv) = (a as u32, 255 - a as u32);
        let mix = |c: u8, p: u32| ((c as u32 * a + p * inv + 127) / 255) as u8;
        let color = pack_rgb(mix(r, pr), mix(g, pg), mix(b, pb));
        put_pixel(fb, x + px as i32, y + py as i32, color);
    }
}

/* ---------- 5x7 bitmap font (digits, A-Z and the punctuation the HUD uses) ---------- */

/// Return a 5x7 glyph bitmap; lowercase letters reuse the uppercase shapes.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '%' => g!(0b11000,0b11001,0b00010,0b00100,0b01000,0b10011,0b00011),
        '#' => g!(0b01010,0b01010,0b11111,0b01010,0b11111,0b01010,0b01010),
        '/' => g!(0b00000,0b00001,0b00010,0b00100,0b01000,0b10000,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '+' => g!(0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; unknown characters leave a gap.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn blit_composites_over_page() {
        let mut fb = FrameBuffer::new(4, 1, 0);
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 255, 255]));
        img.put_pixel(1, 0, Rgba([255, 0, 0, 0]));
        img.put_pixel(2, 0, Rgba([0, 0, 0, 128]));

        blit_rgba(&mut fb, &img, 1, 0, 0x00_FF_FF_FF);

        assert_eq!(fb.pixels, vec![0, 0x00_00_00_FF, 0x00_FF_FF_FF, 0x00_7F_7F_7F]);
    }

    #[test]
    fn blit_clips_at_edges() {
        let mut fb = FrameBuffer::new(2, 2, 0);
        let img = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
        blit_rgba(&mut fb, &img, -1, -1, 0);
        assert!(fb.pixels.iter().all(|&p| p == 0x00_FF_FF_FF));
    }

    #[test]
    fn hud_characters_have_glyphs() {
        for ch in "SIMILARITY: N/A 93.50% MODEL USER MATCH TOL #4a4a4a +-|".chars() {
            assert!(glyph5x7(ch).is_some(), "missing glyph for {ch:?}");
        }
    }

    #[test]
    fn outline_surrounds_panel() {
        let mut fb = FrameBuffer::new(5, 5, 0);
        draw_outline(&mut fb, 1, 1, 3, 3, 1);
        fill_rect(&mut fb, 1, 1, 3, 3, 2);
        assert_eq!(fb.pixels[0], 1);
        assert_eq!(fb.pixels[4 * 5 + 4], 1);
        assert_eq!(fb.pixels[2 * 5 + 2], 2);
        assert_eq!(fb.pixels.iter().filter(|&&p| p == 1).count(), 16);
    }
}
