use crate::numeric::degree_to_radian;
use radar_data::PixelPoint;

/// Parameters that map a polar reading onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionParams {
    /// Canvas pixels per distance unit.
    pub scale: f64,
    /// Pixel the sensor sits at.
    pub center: PixelPoint,
    /// Added to every angle before projecting. `-90` turns angle 0 towards
    /// the top of the screen instead of the right.
    pub rotation_degrees: f64,
}

impl ProjectionParams {
    /// Sensor at the middle of a `width` x `height` canvas.
    pub fn centered(width: u32, height: u32, scale: f64, rotation_degrees: f64) -> ProjectionParams {
        ProjectionParams {
            scale,
            center: PixelPoint::new((width / 2) as i32, (height / 2) as i32),
            rotation_degrees,
        }
    }
}

/// Projects one reading to a pixel.
///
/// The scaled offset from the center is rounded to the nearest pixel before
/// the center is added. The result is not clamped and may fall outside the
/// canvas. `distance` must be a valid (positive) reading; filter zero
/// readings before calling.
pub fn project(angle_degrees: u16, distance: f32, params: &ProjectionParams) -> PixelPoint {
    let theta = degree_to_radian(angle_degrees as f64 + params.rotation_degrees);
    let scaled = distance as f64 * params.scale;
    let x = scaled * f64::cos(theta);
    let y = scaled * f64::sin(theta);
    // `as` saturates on overflow
    PixelPoint::new(
        (x.round() as i32).saturating_add(params.center.x),
        (y.round() as i32).saturating_add(params.center.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(rotation_degrees: f64) -> ProjectionParams {
        ProjectionParams::centered(800, 800, 160., rotation_degrees)
    }

    #[test]
    fn test_centered() {
        let p = ProjectionParams::centered(1000, 1000, 200., -90.);
        assert_eq!(p.center, PixelPoint::new(500, 500));
        assert_eq!(p.scale, 200.);
        assert_eq!(p.rotation_degrees, -90.);
    }

    #[test]
    fn test_project_axes() {
        let p = params(0.);
        assert_eq!(project(0, 1.0, &p), PixelPoint::new(560, 400));
        assert_eq!(project(90, 1.0, &p), PixelPoint::new(400, 560));
        assert_eq!(project(180, 1.0, &p), PixelPoint::new(240, 400));
        assert_eq!(project(270, 1.0, &p), PixelPoint::new(400, 240));
    }

    #[test]
    fn test_project_all_angles() {
        let p = ProjectionParams {
            scale: 80.,
            center: PixelPoint::new(400, 300),
            rotation_degrees: 0.,
        };
        let d = 2.5f32;
        for angle in 0..360u16 {
            let radian = (angle as f64) * std::f64::consts::PI / 180.;
            let expected_x = ((d as f64) * 80. * radian.cos()).round() as i32 + 400;
            let expected_y = ((d as f64) * 80. * radian.sin()).round() as i32 + 300;
            assert_eq!(
                project(angle, d, &p),
                PixelPoint::new(expected_x, expected_y),
                "angle {angle}"
            );
        }
    }

    #[test]
    fn test_project_whole_offset_is_not_one_short() {
        let p = ProjectionParams {
            scale: 80.,
            center: PixelPoint::new(400, 300),
            rotation_degrees: 0.,
        };
        // 2.5 * 80 * sin(30) lands just below 100 in floating point
        assert_eq!(project(30, 2.5, &p), PixelPoint::new(573, 400));
    }

    #[test]
    fn test_project_rotated_points_up() {
        let p = params(-90.);
        // forward now points to the top of the screen
        assert_eq!(project(0, 1.0, &p), PixelPoint::new(400, 240));
        assert_eq!(project(90, 1.0, &p), PixelPoint::new(560, 400));
        assert_eq!(project(180, 1.0, &p), PixelPoint::new(400, 560));
    }

    #[test]
    fn test_project_rounds_to_nearest_pixel() {
        let p = ProjectionParams {
            scale: 1.,
            center: PixelPoint::new(10, 10),
            rotation_degrees: 0.,
        };
        assert_eq!(project(0, 2.9, &p), PixelPoint::new(13, 10));
        assert_eq!(project(180, 2.9, &p), PixelPoint::new(7, 10));
        assert_eq!(project(0, 2.2, &p), PixelPoint::new(12, 10));
        assert_eq!(project(180, 2.2, &p), PixelPoint::new(8, 10));
    }

    #[test]
    fn test_project_far_point_is_not_clamped() {
        let p = ProjectionParams {
            scale: 80.,
            center: PixelPoint::new(400, 400),
            rotation_degrees: 0.,
        };
        assert_eq!(project(0, 10., &p), PixelPoint::new(1200, 400));
        let huge = project(0, f32::MAX, &p);
        assert_eq!(huge.x, i32::MAX);
    }
}
