// Pixel grid for sprites and the scene. Out-of-bounds writes are dropped.

use itertools::iproduct;

use crate::common::{ColorIdx, ColorRGB, PixelCoord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas<P> {
    width: usize,
    height: usize,
    pixels: Vec<P>, // row-major
}

pub type SpriteCanvas = Canvas<ColorIdx>;
pub type SceneCanvas = Canvas<ColorRGB>;

impl<P: Copy> Canvas<P> {
    pub fn new(width: usize, height: usize, fill: P) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: PixelCoord, y: PixelCoord) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn set(&mut self, x: PixelCoord, y: PixelCoord, value: P) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = value;
        }
    }

    pub fn get(&self, x: PixelCoord, y: PixelCoord) -> Option<P> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn coords(&self) -> impl Iterator<Item = (PixelCoord, PixelCoord)> {
        iproduct!(0..self.height as PixelCoord, 0..self.width as PixelCoord).map(|(y, x)| (x, y))
    }

    pub fn flatten(&self) -> Vec<P> {
        self.pixels.clone()
    }
}
