// Canvas sources for the comparator.
// Visual expectation: a transparent 300x200 canvas with one solid rectangle,
// painted once in the model color (reference) and once in the user color
// (the simulated drawing).
use crate::color::Rgb;
use image::{Rgba, RgbaImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    /// The painted region, in canvas pixels.
    pub region: Rect,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: 300,
            height: 200,
            region: Rect { x: 60, y: 40, width: 190, height: 110 },
        }
    }
}

impl Scene {
    /// Transparent canvas with `region` filled opaque in `color`.
    /// Parts of the region outside the canvas are clipped.
    pub fn render_fill(&self, color: Rgb) -> RgbaImage {
        let mut canvas = RgbaImage::new(self.width, self.height);
        let x_end = self.region.x.saturating_add(self.region.width).min(self.width);
        let y_end = self.region.y.saturating_add(self.region.height).min(self.height);
        let paint = Rgba(color.to_rgba());

        for y in self.region.y..y_end {
            for x in self.region.x..x_end {
                canvas.put_pixel(x, y, paint);
            }
        }
        canvas
    }

    /// Number of pixels the region covers on the canvas.
    pub fn region_area(&self) -> usize {
        let w = self.region.x.saturating_add(self.region.width).min(self.width).saturating_sub(self.region.x);
        let h = self.region.y.saturating_add(self.region.height).min(self.height).saturating_sub(self.region.y);
        w as usize * h as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_only_the_region() {
        let scene = Scene::default();
        let img = scene.render_fill(Rgb::new(74, 74, 74));

        assert_eq!(img.dimensions(), (300, 200));
        assert_eq!(img.get_pixel(60, 40).0, [74, 74, 74, 255]);
        assert_eq!(img.get_pixel(249, 149).0, [74, 74, 74, 255]);
        assert_eq!(img.get_pixel(59, 40).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(250, 149).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(60, 150).0, [0, 0, 0, 0]);

        let opaque = img.pixels().filter(|p| p.0[3] == 255).count();
        assert_eq!(opaque, 190 * 110);
        assert_eq!(scene.region_area(), 190 * 110);
    }

    #[test]
    fn clips_region_to_canvas() {
        let scene = Scene {
            width: 10,
            height: 10,
            region: Rect { x: 8, y: 8, width: 5, height: 5 },
        };
        let img = scene.render_fill(Rgb::new(1, 2, 3));

        assert_eq!(img.pixels().filter(|p| p.0[3] == 255).count(), 4);
        assert_eq!(scene.region_area(), 4);
    }
}
