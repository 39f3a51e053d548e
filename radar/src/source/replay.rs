use crate::error::{RadarError, Result};
use crate::numeric::radian_to_degree;
use crate::source::SweepProducer;
use radar_data::Sample;
use std::fs;
use std::path::{Path, PathBuf};

/// Plays back recorded sweeps, one text file per sweep.
///
/// Each line of a recording holds `angle_radian distance_mm` separated by
/// whitespace. Blank lines and lines starting with `#` are skipped. Files
/// are played in name order and the playback loops forever.
pub struct ReplayProducer {
    sweeps: Vec<Vec<Sample>>,
    next: usize,
}

impl ReplayProducer {
    /// Loads every regular file in `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<ReplayProducer> {
        let dir = dir.as_ref();
        let mut paths = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<PathBuf>>>()?;
        paths.retain(|p| p.is_file());
        paths.sort();

        let sweeps = paths
            .iter()
            .map(|path| {
                let contents = fs::read_to_string(path)?;
                parse_sweep(path, &contents)
            })
            .collect::<Result<Vec<_>>>()?;

        ReplayProducer::from_sweeps(sweeps).ok_or_else(|| RadarError::EmptyReplay(dir.into()))
    }

    /// `None` if there is nothing to play.
    pub fn from_sweeps(sweeps: Vec<Vec<Sample>>) -> Option<ReplayProducer> {
        if sweeps.is_empty() {
            return None;
        }
        Some(ReplayProducer { sweeps, next: 0 })
    }

    pub fn n_sweeps(&self) -> usize {
        self.sweeps.len()
    }
}

impl SweepProducer for ReplayProducer {
    fn next_sweep(&mut self) -> Result<Vec<Sample>> {
        let sweep = self.sweeps[self.next].clone();
        self.next = (self.next + 1) % self.sweeps.len();
        Ok(sweep)
    }
}

pub(crate) fn parse_sweep(path: &Path, contents: &str) -> Result<Vec<Sample>> {
    let parse_error = |line: usize, reason: String| RadarError::ReplayParse {
        path: path.into(),
        line,
        reason,
    };

    let mut sweep = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        let line_number = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (angle, distance) = match (fields.next(), fields.next(), fields.next()) {
            (Some(a), Some(d), None) => (a, d),
            _ => {
                return Err(parse_error(
                    line_number,
                    format!("expected `angle_radian distance_mm`, got `{line}`"),
                ))
            }
        };
        let angle_radian = angle
            .parse::<f64>()
            .map_err(|e| parse_error(line_number, format!("bad angle `{angle}`: {e}")))?;
        let distance_mm = distance
            .parse::<f32>()
            .map_err(|e| parse_error(line_number, format!("bad distance `{distance}`: {e}")))?;
        sweep.push(Sample::new(
            radian_to_degree(angle_radian) as f32,
            distance_mm / 1000.,
        ));
    }
    Ok(sweep)
}
