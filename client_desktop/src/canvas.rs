use game_core::{Aabb, Canvas, Color, TextAnchor};
use glam::Vec2;

use crate::font;

/// Software rasteriser over an RGBA8 frame buffer
pub struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), (width * height * 4) as usize);
        Self {
            frame,
            width,
            height,
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.frame[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Pixel span covered by a box, clipped to the frame
    fn span(&self, rect: &Aabb) -> (u32, u32, u32, u32) {
        let clip = |v: f32, max: u32| (v.max(0.0) as u32).min(max);
        (
            clip(rect.min.x.floor(), self.width),
            clip(rect.min.y.floor(), self.height),
            clip(rect.max.x.ceil(), self.width),
            clip(rect.max.y.ceil(), self.height),
        )
    }
}

impl Canvas for FrameCanvas<'_> {
    fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        let rgba = color.to_rgba();
        let (x0, y0, x1, y1) = self.span(&rect);
        for y in y0..y1 {
            let row = (y * self.width) as usize * 4;
            for pixel in self.frame[row + x0 as usize * 4..row + x1 as usize * 4].chunks_exact_mut(4) {
                pixel.copy_from_slice(&rgba);
            }
        }
    }

    fn fill_ellipse(&mut self, rect: Aabb, color: Color) {
        let rgba = color.to_rgba();
        let center = rect.center();
        let radii = rect.size() * 0.5;
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }

        let (x0, y0, x1, y1) = self.span(&rect);
        for y in y0..y1 {
            for x in x0..x1 {
                let d = (Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center) / radii;
                if d.length_squared() <= 1.0 {
                    self.set_pixel(x as i32, y as i32, rgba);
                }
            }
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let rgba = color.to_rgba();
        let (mut x, mut y) = (from.x.round() as i32, from.y.round() as i32);
        let (x1, y1) = (to.x.round() as i32, to.y.round() as i32);

        // Bresenham
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.set_pixel(x, y, rgba);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn text(&mut self, text: &str, pos: Vec2, anchor: TextAnchor, size: f32, color: Color) {
        let rgba = color.to_rgba();
        let scale = font::scale_for(size);
        let (w, h) = font::measure(text, scale);
        let origin = match anchor {
            TextAnchor::TopLeft => pos,
            TextAnchor::Center => pos - Vec2::new(w as f32, h as f32) * 0.5,
        };

        font::rasterize(
            text,
            origin.x.round() as i32,
            origin.y.round() as i32,
            scale,
            |x, y| self.set_pixel(x, y, rgba),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 40;
    const H: u32 = 20;

    fn lit(frame: &[u8], x: u32, y: u32) -> bool {
        frame[((y * W + x) * 4) as usize] == 0xff
    }

    fn count_lit(frame: &[u8]) -> usize {
        frame.chunks_exact(4).filter(|p| p[0] == 0xff).count()
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        FrameCanvas::new(&mut frame, W, H).clear(Color::WHITE);
        assert_eq!(count_lit(&frame), (W * H) as usize);
        assert!(frame.chunks_exact(4).all(|p| p[3] == 0xff), "opaque");
    }

    #[test]
    fn test_fill_rect_covers_exact_span() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        let rect = Aabb::from_pos_size(Vec2::new(2.0, 3.0), Vec2::new(4.0, 5.0));
        FrameCanvas::new(&mut frame, W, H).fill_rect(rect, Color::WHITE);
        assert_eq!(count_lit(&frame), 20);
        assert!(lit(&frame, 2, 3));
        assert!(lit(&frame, 5, 7));
        assert!(!lit(&frame, 6, 7));
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        let rect = Aabb::from_pos_size(Vec2::new(-5.0, 15.0), Vec2::new(10.0, 10.0));
        FrameCanvas::new(&mut frame, W, H).fill_rect(rect, Color::WHITE);
        assert_eq!(count_lit(&frame), 5 * 5);
    }

    #[test]
    fn test_ellipse_is_inside_its_box() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        let rect = Aabb::from_pos_size(Vec2::new(10.0, 5.0), Vec2::splat(7.0));
        FrameCanvas::new(&mut frame, W, H).fill_ellipse(rect, Color::WHITE);
        assert!(lit(&frame, 13, 8), "center");
        assert!(!lit(&frame, 10, 5), "corner stays empty");
        let n = count_lit(&frame);
        assert!(n > 25 && n < 49, "roughly pi/4 of the box, got {n}");
    }

    #[test]
    fn test_vertical_line() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        FrameCanvas::new(&mut frame, W, H).line(
            Vec2::new(20.0, 0.0),
            Vec2::new(20.0, H as f32),
            Color::WHITE,
        );
        assert_eq!(count_lit(&frame), H as usize, "one pixel per row, end clipped");
        assert!((0..H).all(|y| lit(&frame, 20, y)));
    }

    #[test]
    fn test_centered_text_straddles_anchor() {
        let mut frame = vec![0u8; (W * H * 4) as usize];
        FrameCanvas::new(&mut frame, W, H).text(
            "1",
            Vec2::new(20.0, 10.0),
            TextAnchor::Center,
            8.0,
            Color::WHITE,
        );
        // '1' at scale 1 is 5x7, so its origin lands at (18, 7)
        assert!(lit(&frame, 20, 7), "top of the stem");
        assert_eq!(count_lit(&frame), 10);
    }
}
