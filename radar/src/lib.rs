//! Radar-style display of 360 degree LiDAR scans.
//!
//! A [`ScanSource`] hands out one [`Scan`] per frame, the [`FrameRenderer`]
//! projects every valid reading onto its [`Canvas`], and the canvas is
//! flipped onto a [`DisplaySurface`]. [`RadarLoop`] ties the three together
//! and runs until its [`CancelToken`] is set.

mod canvas;
pub mod config;
mod constants;
mod display;
mod error;
mod numeric;
mod projection;
mod renderer;
mod run_loop;
pub mod source;
mod time;

pub use crate::canvas::Canvas;
pub use crate::config::RadarConfig;
pub use crate::display::{DisplaySurface, Presentation};
pub use crate::error::{RadarError, Result};
pub use crate::projection::{project, ProjectionParams};
pub use crate::renderer::{FrameRenderer, FrameStats, RenderState};
pub use crate::run_loop::{CancelToken, RadarLoop, RunSummary, Step};
pub use crate::source::{open_source, ScanSource, ThreadedScanSource};
pub use radar_data::{PixelPoint, Rgb, Sample, Scan, SCAN_LEN};
