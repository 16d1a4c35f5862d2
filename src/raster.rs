use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::config::Color;
use crate::geometry::Point;

/// Software canvas over an RGBA8 frame buffer.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        let (r, g, b) = color.as_tuple();
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[r, g, b, 0xff]);
        }
    }

    /// Alpha-blends `color` onto the pixel at (x, y). Out-of-bounds
    /// coordinates are ignored, so callers can rasterize shapes that
    /// overhang the edge.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let src = [color.r as f32, color.g as f32, color.b as f32];
        let a = alpha.clamp(0.0, 1.0);
        let out = [
            (src[0] * a + self.frame[idx] as f32 * (1.0 - a)).round() as u8,
            (src[1] * a + self.frame[idx + 1] as f32 * (1.0 - a)).round() as u8,
            (src[2] * a + self.frame[idx + 2] as f32 * (1.0 - a)).round() as u8,
            0xff,
        ];
        self.frame[idx..idx + 4].copy_from_slice(&out);
    }

    /// Antialiased line of uniform thickness, drawn by scanning the
    /// bounding box and measuring each pixel's distance to the segment.
    pub fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        let pad = thickness.ceil() as i32 + 1;
        let min_x = from.x.min(to.x) - pad;
        let max_x = from.x.max(to.x) + pad;
        let min_y = from.y.min(to.y) - pad;
        let max_y = from.y.max(to.y) + pad;
        let dx = (to.x - from.x) as f32;
        let dy = (to.y - from.y) as f32;
        let len_sq = dx * dx + dy * dy;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = (x - from.x) as f32;
                let py = (y - from.y) as f32;
                let t = if len_sq > 0.0 {
                    ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let lx = from.x as f32 + t * dx;
                let ly = from.y as f32 + t * dy;
                let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
                let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.blend_pixel(x, y, color, aa);
                }
            }
        }
    }

    /// Like [`line`](Self::line) but narrowing toward `to`, for hands that
    /// should end in a point.
    pub fn tapered_line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        let pad = thickness.ceil() as i32 + 1;
        let min_x = from.x.min(to.x) - pad;
        let max_x = from.x.max(to.x) + pad;
        let min_y = from.y.min(to.y) - pad;
        let max_y = from.y.max(to.y) + pad;
        let dx = (to.x - from.x) as f32;
        let dy = (to.y - from.y) as f32;
        let len_sq = dx * dx + dy * dy;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = (x - from.x) as f32;
                let py = (y - from.y) as f32;
                let t = if len_sq > 0.0 {
                    ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let lx = from.x as f32 + t * dx;
                let ly = from.y as f32 + t * dy;
                let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
                let local_thickness = thickness * (1.0 - t * 0.95); // 0.05 to avoid vanishing too soon
                let aa = (1.0 - (dist - local_thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.blend_pixel(x, y, color, aa);
                }
            }
        }
    }

    /// Filled circle with a one pixel antialiased rim.
    pub fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        for y in -radius..=radius {
            for x in -radius..=radius {
                let dist = ((x * x + y * y) as f64).sqrt();
                let aa = if dist > radius as f64 {
                    1.0 - (dist - radius as f64).min(1.0)
                } else {
                    1.0
                };
                if dist <= radius as f64 + 1.0 && aa > 0.0 {
                    self.blend_pixel(center.x + x, center.y + y, color, aa as f32);
                }
            }
        }
    }

    /// Draws `text` centered on (x, y) by measuring the string's pixel
    /// bounding box first.
    pub fn text(&mut self, x: i32, y: i32, text: &str, font: &Font, size: f32, color: Color) {
        let scale = Scale::uniform(size);
        let v_metrics = font.v_metrics(scale);
        let glyphs: Vec<PositionedGlyph> =
            font.layout(text, scale, point(0.0, v_metrics.ascent)).collect();
        let (min_x, max_x, min_y, max_y) = glyphs
            .iter()
            .filter_map(|g| g.pixel_bounding_box())
            .fold(
                (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
                |(min_x, max_x, min_y, max_y), bb| {
                    (
                        min_x.min(bb.min.x),
                        max_x.max(bb.max.x),
                        min_y.min(bb.min.y),
                        max_y.max(bb.max.y),
                    )
                },
            );
        let width_px = if min_x < max_x { max_x - min_x } else { 0 };
        let height_px = if min_y < max_y { max_y - min_y } else { 0 };
        let offset_x = x - width_px / 2;
        let offset_y = y - height_px / 2;
        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = offset_x + gx as i32 + bb.min.x - min_x;
                    let py = offset_y + gy as i32 + bb.min.y - min_y;
                    self.blend_pixel(px, py, color, v);
                });
            }
        }
    }
}
