// RGB colors, the Euclidean distance the comparator thresholds on,
// and the #rrggbb conversions the color pickers speak.

/// Largest possible Euclidean RGB distance: black to white.
pub const MAX_DISTANCE: f64 = 441.672_955_930_063_7; // sqrt(3 * 255^2)

/// Result pixel for a drawn pixel that matches the reference (opaque blue).
pub const MATCH_MARK: [u8; 4] = [0, 0, 255, 255];

/// Result pixel for a drawn pixel that misses the reference (opaque red).
pub const MISMATCH_MARK: [u8; 4] = [255, 0, 0, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read the RGB part of one RGBA pixel; alpha is ignored.
    #[inline]
    pub fn from_rgba(px: &[u8]) -> Self {
        Self { r: px[0], g: px[1], b: px[2] }
    }

    /// Euclidean distance in RGB space, in [0, MAX_DISTANCE].
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        ((dr * dr + dg * dg + db * db) as f64).sqrt()
    }

    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// `#rrggbb`, lowercase, two digits per channel.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parse `#rrggbb` or `rrggbb` (any case). Shorthand, alpha and anything
/// with surrounding noise yields `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    // from_str_radix alone would accept a leading '+'
    if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}
