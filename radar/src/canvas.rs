use radar_data::{PixelPoint, Rgb};

/// Row-major grid of colors that a frame is painted onto.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Rgb,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb) -> Canvas {
        Canvas {
            width,
            height,
            background,
            pixels: vec![background; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Resets every pixel to the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    pub fn contains(&self, point: PixelPoint) -> bool {
        self.index(point).is_some()
    }

    /// Writes `color` at `point`. Points outside the canvas are dropped and
    /// `false` is returned.
    pub fn set_pixel(&mut self, point: PixelPoint, color: Rgb) -> bool {
        match self.index(point) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn pixel(&self, point: PixelPoint) -> Option<Rgb> {
        self.index(point).map(|i| self.pixels[i])
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixels that differ from the background, as `(x, y, color)`.
    pub fn lit_pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != self.background)
            .map(move |(i, c)| ((i as u32) % width, (i as u32) / width, *c))
    }

    fn index(&self, point: PixelPoint) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pixel_bounds() {
        let mut canvas = Canvas::new(4, 3, Rgb::BLACK);
        assert!(canvas.set_pixel(PixelPoint::new(0, 0), Rgb::WHITE));
        assert!(canvas.set_pixel(PixelPoint::new(3, 2), Rgb::WHITE));
        assert!(!canvas.set_pixel(PixelPoint::new(4, 0), Rgb::WHITE));
        assert!(!canvas.set_pixel(PixelPoint::new(0, 3), Rgb::WHITE));
        assert!(!canvas.set_pixel(PixelPoint::new(-1, 1), Rgb::WHITE));
        assert!(!canvas.set_pixel(PixelPoint::new(1, -1), Rgb::WHITE));

        assert_eq!(canvas.pixel(PixelPoint::new(3, 2)), Some(Rgb::WHITE));
        assert_eq!(canvas.pixel(PixelPoint::new(1, 1)), Some(Rgb::BLACK));
        assert_eq!(canvas.pixel(PixelPoint::new(4, 2)), None);

        let lit = canvas.lit_pixels().collect::<Vec<_>>();
        assert_eq!(lit, vec![(0, 0, Rgb::WHITE), (3, 2, Rgb::WHITE)]);
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(2, 2, Rgb::BLACK);
        canvas.set_pixel(PixelPoint::new(1, 1), Rgb::WHITE);
        canvas.clear();
        assert!(canvas.pixels().iter().all(|c| *c == Rgb::BLACK));
        assert_eq!(canvas.lit_pixels().count(), 0);
    }
}
