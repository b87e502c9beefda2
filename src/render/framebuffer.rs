//! In-memory 240×240 RGB565 frame.
//!
//! Every view draws into this buffer through `embedded-graphics`; the
//! display adapter then pushes the whole buffer to the panel in one go.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

pub const WIDTH: u32 = 240;
pub const HEIGHT: u32 = 240;

pub const CENTER: Point = Point::new(WIDTH as i32 / 2, HEIGHT as i32 / 2);

pub struct FrameBuffer {
    pixels: Vec<u16>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![0; (WIDTH * HEIGHT) as usize],
        }
    }

    /// Raw RGB565 words, row-major.
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        Self::index(point).map(|i| Rgb565::from(RawU16::new(self.pixels[i])))
    }

    /// Number of pixels of exactly `color`.
    pub fn count(&self, color: Rgb565) -> usize {
        let raw = color.into_storage();
        self.pixels.iter().filter(|&&p| p == raw).count()
    }

    fn index(point: Point) -> Option<usize> {
        let (x, y) = (point.x, point.y);
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        Some(y as usize * WIDTH as usize + x as usize)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = Self::index(point) {
                self.pixels[i] = color.into_storage();
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color.into_storage());
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}
