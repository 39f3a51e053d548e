#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One raw range reading as reported by the sensor, before it is binned
/// into a [`Scan`](crate::Scan).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Beam angle in degrees. Not necessarily normalized to `0..360`.
    pub angle_degrees: f32,
    /// Distance to the object in meters. Zero means no return.
    pub distance: f32,
}

impl Sample {
    pub fn new(angle_degrees: f32, distance: f32) -> Sample {
        Sample {
            angle_degrees,
            distance,
        }
    }
}
