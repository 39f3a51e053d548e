use crate::canvas::Canvas;
use crate::display::{DisplaySurface, Presentation};
use crate::error::Result;
use crate::projection::{project, ProjectionParams};
use radar_data::{is_valid_distance, Rgb, Scan};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// No frame in progress.
    Idle,
    /// Canvas cleared and being painted.
    Rendering,
}

/// Counters for one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Readings written to the canvas.
    pub plotted: usize,
    /// Angles skipped because they had no reading.
    pub invalid: usize,
    /// Readings projected outside the canvas and dropped.
    pub clipped: usize,
}

/// Owns the canvas and paints one scan per frame onto it.
pub struct FrameRenderer {
    canvas: Canvas,
    params: ProjectionParams,
    foreground: Rgb,
    state: RenderState,
}

impl FrameRenderer {
    pub fn new(canvas: Canvas, params: ProjectionParams, foreground: Rgb) -> FrameRenderer {
        FrameRenderer {
            canvas,
            params,
            foreground,
            state: RenderState::Idle,
        }
    }

    /// Square black canvas of `size` pixels with white points and the
    /// sensor at its center.
    pub fn square(size: u32, scale: f64, rotation_degrees: f64) -> FrameRenderer {
        FrameRenderer::new(
            Canvas::new(size, size, Rgb::BLACK),
            ProjectionParams::centered(size, size, scale, rotation_degrees),
            Rgb::WHITE,
        )
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Clears the canvas and starts a new frame.
    pub fn begin_frame(&mut self) {
        self.canvas.clear();
        self.state = RenderState::Rendering;
    }

    /// Paints every valid reading of `scan` onto the current frame.
    /// Starts a frame first if none is in progress.
    pub fn plot_scan(&mut self, scan: &Scan) -> FrameStats {
        if self.state == RenderState::Idle {
            self.begin_frame();
        }
        let mut stats = FrameStats::default();
        for (angle, &distance) in scan.distances().iter().enumerate() {
            if !is_valid_distance(distance) {
                stats.invalid += 1;
                continue;
            }
            let point = project(angle as u16, distance, &self.params);
            if self.canvas.set_pixel(point, self.foreground) {
                stats.plotted += 1;
            } else {
                stats.clipped += 1;
            }
        }
        stats
    }

    /// Starts a fresh frame and paints `scan` onto it.
    pub fn render(&mut self, scan: &Scan) -> FrameStats {
        self.begin_frame();
        self.plot_scan(scan)
    }

    /// Hands the finished canvas to `display` and ends the frame.
    pub fn present<D: DisplaySurface + ?Sized>(&mut self, display: &mut D) -> Result<Presentation> {
        let presentation = display.present(&self.canvas);
        self.state = RenderState::Idle;
        presentation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_data::{PixelPoint, SCAN_LEN};

    struct RecordingDisplay {
        frames: Vec<Canvas>,
    }

    impl DisplaySurface for RecordingDisplay {
        fn present(&mut self, canvas: &Canvas) -> Result<Presentation> {
            self.frames.push(canvas.clone());
            Ok(Presentation::Shown)
        }
    }

    fn single_reading(angle: usize, distance: f32) -> Scan {
        let mut scan = Scan::empty();
        scan.set_distance(angle, distance);
        scan
    }

    #[test]
    fn test_render_skips_zero_readings() {
        let mut renderer = FrameRenderer::square(800, 160., 0.);
        let stats = renderer.render(&Scan::empty());
        assert_eq!(
            stats,
            FrameStats {
                plotted: 0,
                invalid: SCAN_LEN,
                clipped: 0
            }
        );
        assert_eq!(renderer.canvas().lit_pixels().count(), 0);
    }

    #[test]
    fn test_render_single_reading() {
        let mut renderer = FrameRenderer::square(800, 160., 0.);
        let stats = renderer.render(&single_reading(0, 1.0));
        assert_eq!(stats.plotted, 1);
        assert_eq!(stats.invalid, SCAN_LEN - 1);
        assert_eq!(
            renderer.canvas().lit_pixels().collect::<Vec<_>>(),
            vec![(560, 400, Rgb::WHITE)]
        );
    }

    #[test]
    fn test_out_of_canvas_point_is_dropped() {
        let mut renderer = FrameRenderer::square(800, 80., 0.);
        let stats = renderer.render(&single_reading(0, 10.));
        assert_eq!(stats.plotted, 0);
        assert_eq!(stats.clipped, 1);
        assert_eq!(renderer.canvas().lit_pixels().count(), 0);
    }

    #[test]
    fn test_far_point_on_wide_canvas() {
        let canvas = Canvas::new(1201, 800, Rgb::BLACK);
        let params = ProjectionParams {
            scale: 80.,
            center: PixelPoint::new(400, 400),
            rotation_degrees: 0.,
        };
        let mut renderer = FrameRenderer::new(canvas, params, Rgb::WHITE);
        let stats = renderer.render(&single_reading(0, 10.));
        assert_eq!(stats.plotted, 1);
        assert_eq!(
            renderer.canvas().pixel(PixelPoint::new(1200, 400)),
            Some(Rgb::WHITE)
        );
    }

    #[test]
    fn test_no_stale_points_between_frames() {
        let mut renderer = FrameRenderer::square(800, 160., 0.);
        renderer.render(&single_reading(0, 1.0));
        renderer.render(&single_reading(90, 1.0));
        assert_eq!(
            renderer.canvas().lit_pixels().collect::<Vec<_>>(),
            vec![(400, 560, Rgb::WHITE)]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut distances = [0f32; SCAN_LEN];
        for (i, d) in distances.iter_mut().enumerate() {
            if i % 3 != 0 {
                *d = 0.5 + (i as f32) / 200.;
            }
        }
        let scan = Scan::from_distances(distances);

        let mut renderer = FrameRenderer::square(800, 160., -90.);
        renderer.render(&scan);
        let first = renderer.canvas().clone();
        renderer.render(&scan);
        assert_eq!(renderer.canvas(), &first);
    }

    #[test]
    fn test_state_transitions() {
        let mut renderer = FrameRenderer::square(100, 10., 0.);
        let mut display = RecordingDisplay { frames: Vec::new() };
        assert_eq!(renderer.state(), RenderState::Idle);

        renderer.begin_frame();
        assert_eq!(renderer.state(), RenderState::Rendering);
        renderer.plot_scan(&single_reading(0, 1.0));

        let presentation = renderer.present(&mut display).unwrap();
        assert_eq!(presentation, Presentation::Shown);
        assert_eq!(renderer.state(), RenderState::Idle);
        assert_eq!(display.frames.len(), 1);
        assert_eq!(
            display.frames[0].lit_pixels().collect::<Vec<_>>(),
            vec![(60, 50, Rgb::WHITE)]
        );
    }
}
