use crate::error::{RadarError, Result};
use crate::numeric::degree_to_radian;
use crate::source::SweepProducer;
use radar_data::{Sample, SCAN_LEN};

// How far the first beam of a sweep moves from one sweep to the next.
const SPIN_STEP_DEGREES: f32 = 0.25;

/// Lidar standing inside an empty rectangular room.
///
/// Every sweep casts one ray per degree against the four walls. Rays that
/// hit nothing within `max_range` and every `miss_every`-th ray report a
/// zero distance, like a real sensor that got no return.
pub struct SimulatedLidar {
    room_width: f32,
    room_height: f32,
    sensor_x: f32,
    sensor_y: f32,
    max_range: f32,
    miss_every: usize,
    n_sweeps: u64,
}

impl SimulatedLidar {
    /// Room spans `[0, room_width] x [0, room_height]` meters; the sensor
    /// must stand strictly inside it.
    pub fn new(
        room_width: f32,
        room_height: f32,
        sensor_x: f32,
        sensor_y: f32,
        max_range: f32,
    ) -> Result<SimulatedLidar> {
        if !(room_width > 0. && room_height > 0.) {
            return Err(RadarError::InvalidConfig(format!(
                "room must have a positive size, got {room_width} x {room_height}"
            )));
        }
        if !(sensor_x > 0. && sensor_x < room_width && sensor_y > 0. && sensor_y < room_height) {
            return Err(RadarError::InvalidConfig(format!(
                "sensor at ({sensor_x}, {sensor_y}) is outside the room"
            )));
        }
        if !(max_range > 0.) {
            return Err(RadarError::InvalidConfig(format!(
                "max range must be positive, got {max_range}"
            )));
        }
        Ok(SimulatedLidar {
            room_width,
            room_height,
            sensor_x,
            sensor_y,
            max_range,
            miss_every: 0,
            n_sweeps: 0,
        })
    }

    /// Drops every `n`-th ray. `0` keeps all rays.
    pub fn with_miss_every(mut self, n: usize) -> SimulatedLidar {
        self.miss_every = n;
        self
    }

    /// Distance from the sensor to the nearest wall along `angle_degrees`.
    pub fn ray_cast(&self, angle_degrees: f32) -> f32 {
        let theta = degree_to_radian(angle_degrees as f64);
        let (dx, dy) = (theta.cos(), theta.sin());
        let (x, y) = (self.sensor_x as f64, self.sensor_y as f64);

        let mut nearest = f64::INFINITY;
        if dx > 1e-12 {
            nearest = nearest.min((self.room_width as f64 - x) / dx);
        } else if dx < -1e-12 {
            nearest = nearest.min(-x / dx);
        }
        if dy > 1e-12 {
            nearest = nearest.min((self.room_height as f64 - y) / dy);
        } else if dy < -1e-12 {
            nearest = nearest.min(-y / dy);
        }
        nearest as f32
    }
}

impl SweepProducer for SimulatedLidar {
    fn next_sweep(&mut self) -> Result<Vec<Sample>> {
        let phase = (self.n_sweeps as f32 * SPIN_STEP_DEGREES) % 1.;
        let sweep = (0..SCAN_LEN)
            .map(|i| {
                let angle = i as f32 + phase;
                let missed = self.miss_every > 0 && (i + self.n_sweeps as usize) % self.miss_every == 0;
                let distance = self.ray_cast(angle);
                if missed || distance > self.max_range {
                    Sample::new(angle, 0.)
                } else {
                    Sample::new(angle, distance)
                }
            })
            .collect();
        self.n_sweeps += 1;
        Ok(sweep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_rooms() {
        assert!(matches!(
            SimulatedLidar::new(0., 4., 1., 1., 8.),
            Err(RadarError::InvalidConfig(_))
        ));
        assert!(matches!(
            SimulatedLidar::new(4., 4., 5., 1., 8.),
            Err(RadarError::InvalidConfig(_))
        ));
        assert!(matches!(
            SimulatedLidar::new(4., 4., 2., 2., 0.),
            Err(RadarError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_ray_cast() {
        let lidar = SimulatedLidar::new(4., 2., 1., 1., 8.).unwrap();
        assert!(f32::abs(lidar.ray_cast(0.) - 3.) < 1e-5);
        assert!(f32::abs(lidar.ray_cast(90.) - 1.) < 1e-5);
        assert!(f32::abs(lidar.ray_cast(180.) - 1.) < 1e-5);
        assert!(f32::abs(lidar.ray_cast(270.) - 1.) < 1e-5);
        assert!(f32::abs(lidar.ray_cast(45.) - std::f32::consts::SQRT_2) < 1e-5);
    }

    #[test]
    fn test_sweep_covers_every_degree() {
        let mut lidar = SimulatedLidar::new(4., 4., 2., 2., 8.).unwrap();
        let sweep = lidar.next_sweep().unwrap();
        assert_eq!(sweep.len(), SCAN_LEN);
        assert!(sweep.iter().all(|s| s.distance >= 2. - 1e-4));
        assert!(sweep.iter().all(|s| s.distance <= 2. * std::f32::consts::SQRT_2 + 1e-4));

        // the next sweep starts a little further round
        let next = lidar.next_sweep().unwrap();
        assert_eq!(next[0].angle_degrees, SPIN_STEP_DEGREES);
    }

    #[test]
    fn test_out_of_range_and_missed_rays_are_zero() {
        let mut lidar = SimulatedLidar::new(4., 4., 2., 2., 1.).unwrap();
        assert!(lidar.next_sweep().unwrap().iter().all(|s| s.distance == 0.));

        let mut lidar = SimulatedLidar::new(4., 4., 2., 2., 8.)
            .unwrap()
            .with_miss_every(10);
        let sweep = lidar.next_sweep().unwrap();
        let n_missed = sweep.iter().filter(|s| s.distance == 0.).count();
        assert_eq!(n_missed, SCAN_LEN / 10);
    }
}
