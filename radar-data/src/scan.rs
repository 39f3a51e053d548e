#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of readings in one lap, one per integer degree.
pub const SCAN_LEN: usize = 360;

/// Returned when a distance sequence does not hold exactly [`SCAN_LEN`] readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("A scan must hold exactly {expected} readings. Actually {0} readings.", expected = SCAN_LEN)]
pub struct InvalidScanLength(pub usize);

/// Struct to hold one lap of lidar scan data.
///
/// Index `i` holds the distance observed at `i` degrees. A zero distance
/// means that no reading has been gathered for that angle yet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f32>", into = "Vec<f32>"))]
pub struct Scan {
    distances: Vec<f32>,
}

impl Scan {
    /// Scan with no reading at any angle.
    pub fn empty() -> Scan {
        Scan {
            distances: vec![0.; SCAN_LEN],
        }
    }

    pub fn from_distances(distances: [f32; SCAN_LEN]) -> Scan {
        Scan {
            distances: distances.to_vec(),
        }
    }

    /// Distance at `angle_degrees`, or `None` if the angle is out of `0..360`.
    pub fn distance(&self, angle_degrees: usize) -> Option<f32> {
        self.distances.get(angle_degrees).copied()
    }

    pub fn set_distance(&mut self, angle_degrees: usize, distance: f32) {
        if let Some(slot) = self.distances.get_mut(angle_degrees) {
            *slot = distance;
        }
    }

    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// Always [`SCAN_LEN`].
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid_readings().next().is_none()
    }

    /// `(angle, distance)` pairs of the readings that can be plotted.
    pub fn valid_readings(&self) -> impl Iterator<Item = (u16, f32)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(|(_, d)| is_valid_distance(**d))
            .map(|(angle, d)| (angle as u16, *d))
    }
}

impl Default for Scan {
    fn default() -> Scan {
        Scan::empty()
    }
}

/// Zero, negative and non-finite distances carry no return.
pub fn is_valid_distance(distance: f32) -> bool {
    distance.is_finite() && distance > 0.
}

impl TryFrom<Vec<f32>> for Scan {
    type Error = InvalidScanLength;

    fn try_from(distances: Vec<f32>) -> Result<Scan, InvalidScanLength> {
        if distances.len() != SCAN_LEN {
            return Err(InvalidScanLength(distances.len()));
        }
        Ok(Scan { distances })
    }
}

impl From<Scan> for Vec<f32> {
    fn from(scan: Scan) -> Vec<f32> {
        scan.distances
    }
}
