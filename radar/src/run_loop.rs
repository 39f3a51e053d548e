use crate::config::RunConfig;
use crate::display::{DisplaySurface, Presentation};
use crate::error::Result;
use crate::renderer::{FrameRenderer, FrameStats};
use crate::source::ScanSource;
use crate::time::sleep_ms;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared flag that asks a running loop to stop.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// What one iteration of the loop did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Presented(FrameStats),
    /// No scan could be acquired; nothing was drawn.
    Skipped,
    /// The display is gone.
    Closed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames_presented: u64,
    pub frames_skipped: u64,
}

/// Acquire, render and present, over and over.
pub struct RadarLoop<S, D> {
    source: S,
    renderer: FrameRenderer,
    display: D,
    acquire_timeout: Duration,
    retry_backoff_ms: u64,
}

impl<S: ScanSource, D: DisplaySurface> RadarLoop<S, D> {
    pub fn new(source: S, renderer: FrameRenderer, display: D, run: &RunConfig) -> RadarLoop<S, D> {
        RadarLoop {
            source,
            renderer,
            display,
            acquire_timeout: run.acquire_timeout(),
            retry_backoff_ms: run.retry_backoff_ms,
        }
    }

    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Runs one iteration. Acquisition failures are logged and reported as
    /// [`Step::Skipped`]; other errors are returned.
    pub fn step(&mut self) -> Result<Step> {
        let scan = match self.source.acquire_scan(self.acquire_timeout) {
            Ok(scan) => scan,
            Err(e) if e.is_recoverable() => {
                log::warn!("Skipping frame: {e}");
                return Ok(Step::Skipped);
            }
            Err(e) => return Err(e),
        };

        let stats = self.renderer.render(&scan);
        log::debug!(
            "Frame: {} plotted, {} without reading, {} clipped",
            stats.plotted,
            stats.invalid,
            stats.clipped
        );

        match self.renderer.present(&mut self.display)? {
            Presentation::Shown => Ok(Step::Presented(stats)),
            Presentation::Closed => Ok(Step::Closed),
        }
    }

    /// Loops until `cancel` is set or the display closes.
    pub fn run(&mut self, cancel: &CancelToken) -> Result<RunSummary> {
        log::info!("Radar loop started");
        let mut summary = RunSummary::default();
        while !cancel.is_cancelled() {
            match self.step()? {
                Step::Presented(_) => summary.frames_presented += 1,
                Step::Skipped => {
                    summary.frames_skipped += 1;
                    sleep_ms(self.retry_backoff_ms);
                }
                Step::Closed => {
                    log::info!("Display closed");
                    break;
                }
            }
        }
        log::info!(
            "Radar loop stopped after {} frames ({} skipped)",
            summary.frames_presented,
            summary.frames_skipped
        );
        Ok(summary)
    }

    pub fn into_parts(self) -> (S, FrameRenderer, D) {
        (self.source, self.renderer, self.display)
    }
}
