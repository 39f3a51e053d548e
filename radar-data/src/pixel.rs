#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer canvas coordinate produced by projecting one reading.
/// May lie outside the canvas; clipping is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> PixelPoint {
        PixelPoint { x, y }
    }
}

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Normalized `[r, g, b, a]` with full opacity, the layout graphics
    /// backends usually take.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.0 as f32 / 255.,
            self.1 as f32 / 255.,
            self.2 as f32 / 255.,
            1.0,
        ]
    }
}
