pub mod pixel;
pub mod sample;
pub mod scan;

pub use pixel::{PixelPoint, Rgb};
pub use sample::Sample;
pub use scan::{is_valid_distance, InvalidScanLength, Scan, SCAN_LEN};
