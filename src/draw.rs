// Drawing primitives. Clipping is left to `Canvas::set`; last write wins.
use itertools::iproduct;

use crate::{canvas::Canvas, common::PixelCoord};

pub fn point<P: Copy>(canvas: &mut Canvas<P>, x: PixelCoord, y: PixelCoord, color: P) {
    canvas.set(x, y, color);
}

// Fills [x, x+w) x [y, y+h)
pub fn rect<P: Copy>(
    canvas: &mut Canvas<P>,
    x: PixelCoord,
    y: PixelCoord,
    w: PixelCoord,
    h: PixelCoord,
    color: P,
) {
    for (yy, xx) in iproduct!(y..y + h, x..x + w) {
        canvas.set(xx, yy, color);
    }
}

pub fn circle<P: Copy>(
    canvas: &mut Canvas<P>,
    cx: PixelCoord,
    cy: PixelCoord,
    r: PixelCoord,
    color: P,
) {
    let inside: Vec<_> = canvas
        .coords()
        .filter(|&(x, y)| (x - cx) * (x - cx) + (y - cy) * (y - cy) <= r * r)
        .collect();
    for (x, y) in inside {
        canvas.set(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(canvas: &Canvas<u8>) -> Vec<(PixelCoord, PixelCoord)> {
        canvas
            .coords()
            .filter(|&(x, y)| canvas.get(x, y) != Some(0))
            .collect()
    }

    #[test]
    fn rect_clips_at_the_edge() {
        let mut canvas = Canvas::new(16, 16, 0u8);
        rect(&mut canvas, 14, 14, 4, 4, 5);
        assert_eq!(painted(&canvas), vec![(14, 14), (15, 14), (14, 15), (15, 15)]);
    }

    #[test]
    fn zero_area_rect_is_noop() {
        let mut canvas = Canvas::new(8, 8, 0u8);
        rect(&mut canvas, 2, 2, 0, 5, 3);
        rect(&mut canvas, 2, 2, 5, 0, 3);
        assert!(painted(&canvas).is_empty());
    }

    #[test]
    fn circle_includes_boundary() {
        let mut canvas = Canvas::new(16, 16, 0u8);
        circle(&mut canvas, 8, 8, 2, 1);
        assert_eq!(canvas.get(8, 6), Some(1));
        assert_eq!(canvas.get(10, 8), Some(1));
        assert_eq!(canvas.get(10, 10), Some(0));
        // 13 cells fall within distance 2 of the centre.
        assert_eq!(painted(&canvas).len(), 13);
    }

    #[test]
    fn circle_near_corner_is_clipped() {
        let mut canvas = Canvas::new(16, 16, 0u8);
        circle(&mut canvas, 0, 0, 1, 4);
        assert_eq!(painted(&canvas), vec![(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn last_write_wins() {
        let mut canvas = Canvas::new(8, 8, 0u8);
        rect(&mut canvas, 0, 0, 4, 4, 1);
        point(&mut canvas, 2, 2, 2);
        assert_eq!(canvas.get(2, 2), Some(2));
        assert_eq!(canvas.get(1, 1), Some(1));
    }
}
