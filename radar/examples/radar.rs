use clap::Parser;
use piston_window::{
    clear, rectangle, AdvancedWindow, PistonWindow, RenderEvent, WindowSettings,
};
use radar::{
    open_source, Canvas, CancelToken, DisplaySurface, FrameRenderer, Presentation, RadarConfig,
    RadarError, RadarLoop,
};
use radar::config::SourceKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Shows LiDAR scans as a radar display.", disable_version_flag = true)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Side of the square window in pixels
    #[arg(long)]
    size: Option<u32>,
    /// Pixels per meter
    #[arg(long)]
    scale: Option<f64>,
    /// Rotation added to every beam angle, in degrees
    #[arg(long, allow_hyphen_values = true)]
    rotation: Option<f64>,
    /// Replay recorded sweeps from this directory instead of simulating
    #[arg(long)]
    replay: Option<PathBuf>,
}

struct PistonSurface {
    window: PistonWindow,
}

impl PistonSurface {
    fn open(title: &str, size: u32) -> Result<PistonSurface, RadarError> {
        let mut window: PistonWindow = WindowSettings::new(title, [size, size])
            .resizable(false)
            .exit_on_esc(true)
            .build()
            .map_err(|e| RadarError::Display(e.to_string()))?;
        // the pointer stays grabbed until Esc or Ctrl-C
        window.set_capture_cursor(true);
        Ok(PistonSurface { window })
    }
}

impl DisplaySurface for PistonSurface {
    fn present(&mut self, canvas: &Canvas) -> radar::Result<Presentation> {
        while let Some(event) = self.window.next() {
            if event.render_args().is_none() {
                continue;
            }
            self.window.draw_2d(&event, |c, g, _| {
                clear(canvas.background().to_rgba_f32(), g);
                for (x, y, color) in canvas.lit_pixels() {
                    rectangle(
                        color.to_rgba_f32(),
                        [x as f64, y as f64, 1.0, 1.0],
                        c.transform,
                        g,
                    );
                }
            });
            return Ok(Presentation::Shown);
        }
        Ok(Presentation::Closed)
    }
}

fn load_config(args: &Args) -> Result<RadarConfig, RadarError> {
    let mut config = match &args.config {
        Some(path) => RadarConfig::from_file(path)?,
        None => RadarConfig::default(),
    };
    if let Some(size) = args.size {
        config.display.size = size;
    }
    if let Some(scale) = args.scale {
        config.display.scale = scale;
    }
    if let Some(rotation) = args.rotation {
        config.display.rotation_degrees = rotation;
    }
    if let Some(dir) = &args.replay {
        config.source.kind = SourceKind::Replay;
        config.source.replay_dir = dir.clone();
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        handler_token.cancel();
    })?;

    let source = open_source(&config.source)?;
    let display = config.display.clone();
    let renderer = FrameRenderer::square(display.size, display.scale, display.rotation_degrees);
    let surface = PistonSurface::open(&display.title, display.size)?;

    let mut radar = RadarLoop::new(source, renderer, surface, &config.run);
    let summary = radar.run(&cancel)?;
    println!(
        "Presented {} frames, skipped {}.",
        summary.frames_presented, summary.frames_skipped
    );
    Ok(())
}
