//! Where scans come from.
//!
//! The display loop only sees [`ScanSource`]. Raw sweeps are produced on a
//! worker thread by a [`SweepProducer`] and folded into 360 degree scans by
//! [`SampleBinner`].

mod binner;
mod replay;
mod simulated;
mod threads;

pub use binner::SampleBinner;
pub use replay::ReplayProducer;
pub use simulated::SimulatedLidar;
pub use threads::ThreadedScanSource;

use crate::config::{SourceConfig, SourceKind};
use crate::error::Result;
use radar_data::{Sample, Scan};
use std::time::Duration;

/// Anything that hands out complete 360 degree scans.
pub trait ScanSource {
    /// Blocks for at most `timeout` waiting for the next scan.
    fn acquire_scan(&mut self, timeout: Duration) -> Result<Scan>;
}

impl<S: ScanSource + ?Sized> ScanSource for Box<S> {
    fn acquire_scan(&mut self, timeout: Duration) -> Result<Scan> {
        (**self).acquire_scan(timeout)
    }
}

/// Produces one sweep of raw samples per call. Runs on its own thread.
pub trait SweepProducer: Send + 'static {
    fn next_sweep(&mut self) -> Result<Vec<Sample>>;
}

/// Builds the source described by `config` and starts its producer thread.
pub fn open_source(config: &SourceConfig) -> Result<ThreadedScanSource> {
    let interval = Duration::from_millis(config.sweep_interval_ms);
    match config.kind {
        SourceKind::Simulated => {
            let lidar = SimulatedLidar::new(
                config.room_width_m,
                config.room_height_m,
                config.sensor_x_m,
                config.sensor_y_m,
                config.max_range_m,
            )?
            .with_miss_every(config.miss_every);
            log::info!(
                "Simulating a {} m x {} m room",
                config.room_width_m,
                config.room_height_m
            );
            ThreadedScanSource::spawn(lidar, interval)
        }
        SourceKind::Replay => {
            let replay = ReplayProducer::open(&config.replay_dir)?;
            log::info!(
                "Replaying {} sweeps from {}",
                replay.n_sweeps(),
                config.replay_dir.display()
            );
            ThreadedScanSource::spawn(replay, interval)
        }
    }
}
