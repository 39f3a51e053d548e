use crate::numeric::angle_bin;
use radar_data::{Sample, Scan};

/// Folds raw samples into per-degree bins.
///
/// Each sample overwrites the bin of its rounded angle. Bins keep their last
/// value across sweeps until a new sample for that angle arrives; a zero
/// distance resets the bin to "no reading".
#[derive(Clone, Debug, Default)]
pub struct SampleBinner {
    scan: Scan,
}

impl SampleBinner {
    pub fn new() -> SampleBinner {
        SampleBinner { scan: Scan::empty() }
    }

    pub fn push(&mut self, sample: Sample) {
        if !sample.angle_degrees.is_finite() || !sample.distance.is_finite() {
            return;
        }
        if sample.distance < 0. {
            return;
        }
        let bin = angle_bin(sample.angle_degrees as f64);
        self.scan.set_distance(bin, sample.distance);
    }

    pub fn extend<'a, I: IntoIterator<Item = &'a Sample>>(&mut self, samples: I) {
        for sample in samples {
            self.push(*sample);
        }
    }

    /// Copy of the current bins.
    pub fn snapshot(&self) -> Scan {
        self.scan.clone()
    }

    pub fn clear(&mut self) {
        self.scan = Scan::empty();
    }
}
